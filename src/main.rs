//! BoxNet CLI: generate box die-lines from the command line.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use boxnet::{init_logging, BoxDocument, Config, Dimensions, LengthUnit, Preset};
use boxnet_core::units::parse_length;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "boxnet")]
#[command(about = "Generate foldable box die-lines as SVG")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the die-line of a box to an SVG file
    Generate {
        #[command(flatten)]
        box_args: BoxArgs,

        /// Write the panel name on every panel
        #[arg(long)]
        labels: bool,

        /// Output file (defaults to export.file_name from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the generated pattern as JSON
    Info {
        #[command(flatten)]
        box_args: BoxArgs,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a configuration file (JSON or TOML, by extension)
    Init {
        /// Destination file
        file: PathBuf,

        /// Preset to start from
        #[arg(short, long, default_value = "outline")]
        preset: Preset,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the location of the default configuration file
    Path,
}

#[derive(Args)]
struct BoxArgs {
    /// Box width (fractions such as "6 1/2" are accepted for inches)
    #[arg(long)]
    width: String,

    /// Box height
    #[arg(long)]
    height: String,

    /// Box depth
    #[arg(long)]
    depth: String,

    /// Unit of the dimensions and of --tab-width (in, mm, pt)
    #[arg(short, long, default_value = "in")]
    unit: LengthUnit,

    /// Tab reach, overriding the configuration
    #[arg(long)]
    tab_width: Option<String>,

    /// Flank inset as a fraction of the tab reach, in (0, 1]
    #[arg(long)]
    taper: Option<f64>,

    /// Start from a preset instead of a configuration file
    #[arg(short, long, conflicts_with = "config")]
    preset: Option<Preset>,

    /// Configuration file (JSON or TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BoxArgs {
    fn config(&self) -> Result<Config> {
        let mut config = match (&self.config, self.preset) {
            (Some(path), _) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            (None, Some(preset)) => Config::for_preset(preset),
            (None, None) => match Config::default_path() {
                Ok(path) => Config::load_or_default(&path)?,
                Err(e) => {
                    warn!("{}", e);
                    Config::default()
                }
            },
        };

        if let Some(tab_width) = &self.tab_width {
            let internal = parse_length(tab_width, self.unit)?;
            config.layout.tab_width = config.layout.unit.from_internal(internal);
        }
        if let Some(taper) = self.taper {
            config.layout.taper = taper;
        }
        config.validate()?;
        Ok(config)
    }

    fn dimensions(&self) -> Result<Dimensions> {
        let width = parse_length(&self.width, self.unit).context("Invalid --width")?;
        let height = parse_length(&self.height, self.unit).context("Invalid --height")?;
        let depth = parse_length(&self.depth, self.unit).context("Invalid --depth")?;
        Ok(Dimensions::new(width, height, depth)?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    init_logging(level)?;

    match cli.command {
        Commands::Generate {
            box_args,
            labels,
            output,
        } => {
            let mut config = box_args.config()?;
            config.decoration.labels |= labels;
            let dims = box_args.dimensions()?;

            let doc = BoxDocument::build(&config, &dims)?;
            let warnings = doc.pattern.warnings();
            if !warnings.is_empty() {
                warn!("Pattern generated with {} warnings", warnings.len());
            }

            let path = output.unwrap_or_else(|| config.export.file_name.clone());
            doc.export_to_file(&path)?;
            println!(
                "Wrote {} ({} shapes, {} decorations)",
                path.display(),
                doc.pattern.len(),
                doc.overlays.len()
            );
        }

        Commands::Info { box_args } => {
            let config = box_args.config()?;
            let dims = box_args.dimensions()?;
            let doc = BoxDocument::build(&config, &dims)?;
            println!("{}", doc.pattern.to_json_pretty()?);
        }

        Commands::Config { command } => match command {
            ConfigCommands::Init {
                file,
                preset,
                force,
            } => {
                if file.exists() && !force {
                    bail!("{} already exists (use --force to overwrite)", file.display());
                }
                Config::for_preset(preset).save_to_file(&file)?;
                info!("Initialized {} preset", preset);
                println!("Wrote {}", file.display());
            }
            ConfigCommands::Path => {
                println!("{}", Config::default_path()?.display());
            }
        },
    }

    Ok(())
}
