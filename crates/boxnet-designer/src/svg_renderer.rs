//! SVG export of a pattern and its overlays.
//!
//! Features:
//! - One `<path>` per pattern entry, with the entry's role name as `id`
//! - View box cropped to the content or set to a fixed page
//! - Physical size in points, so one internal unit prints as 1/72 inch

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use boxnet_layout::{Pattern, Point, QuarterTurn, Rect};
use tracing::{debug, info};

use crate::context::{Overlay, RenderContext};
use crate::error::{ExportError, ExportResult};
use crate::style::RenderStyle;

/// Region of the world written to the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ExportBounds {
    /// Crop to the union of the pattern and every overlay with an extent.
    #[default]
    Content,
    /// Fixed page with its top-left corner at the world origin.
    Page { width: f64, height: f64 },
}

/// Serializes patterns to standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    style: RenderStyle,
    bounds: ExportBounds,
    padding: f64,
}

impl SvgExporter {
    pub fn new(style: RenderStyle) -> Self {
        Self {
            style,
            bounds: ExportBounds::Content,
            padding: 0.0,
        }
    }

    pub fn with_bounds(mut self, bounds: ExportBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Margin added on every side when cropping to content.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// World rectangle the document will show.
    pub fn view_box(&self, pattern: &Pattern, ctx: &RenderContext) -> ExportResult<Rect> {
        let content = pattern.bounds().ok_or(ExportError::EmptyPattern)?;
        match self.bounds {
            ExportBounds::Content => {
                let content = match ctx.bounds() {
                    Some(overlays) => content.union(&overlays),
                    None => content,
                };
                Ok(content.expanded(self.padding))
            }
            ExportBounds::Page { width, height } => {
                let valid = |v: f64| v.is_finite() && v > 0.0;
                if !valid(width) || !valid(height) {
                    return Err(ExportError::InvalidPage { width, height });
                }
                Ok(Rect::new(0.0, 0.0, width, height))
            }
        }
    }

    /// Renders the document to a string.
    pub fn render(&self, pattern: &Pattern, ctx: &RenderContext) -> ExportResult<String> {
        let view = self.view_box(pattern, ctx)?;
        let style = &self.style;
        let group_fill = style.fill.as_deref().unwrap_or("none");

        let mut svg = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" width="{w}pt" height="{h}pt" viewBox="{x} {y} {w} {h}">"#,
            x = num(view.x()),
            y = num(view.y()),
            w = num(view.width()),
            h = num(view.height()),
        );

        let _ = writeln!(
            svg,
            r#"  <g id="pattern" stroke="{}" stroke-width="{}" fill="{}">"#,
            escape(&style.stroke),
            num(style.stroke_width),
            escape(group_fill),
        );
        for entry in pattern.entries() {
            let fill = style.fill_for(entry).unwrap_or("none");
            let fill_attr = if fill == group_fill {
                String::new()
            } else {
                format!(r#" fill="{}""#, escape(fill))
            };
            let _ = writeln!(
                svg,
                r#"    <path id="{}"{} d="{}"/>"#,
                entry.name(),
                fill_attr,
                path_data(&entry.outline()),
            );
        }
        let _ = writeln!(svg, "  </g>");

        if !ctx.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <g id="decorations" fill="none" stroke="{}" stroke-width="{}">"#,
                escape(&style.stroke),
                num(style.stroke_width),
            );
            for overlay in ctx.overlays() {
                write_overlay(&mut svg, overlay);
            }
            let _ = writeln!(svg, "  </g>");
        }

        let _ = writeln!(svg, "</svg>");

        debug!(
            "Rendered {} shapes and {} overlays to SVG",
            pattern.len(),
            ctx.len()
        );
        Ok(svg)
    }

    pub fn write_to<W: Write>(
        &self,
        pattern: &Pattern,
        ctx: &RenderContext,
        writer: &mut W,
    ) -> ExportResult<()> {
        let svg = self.render(pattern, ctx)?;
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn export_to_file(
        &self,
        pattern: &Pattern,
        ctx: &RenderContext,
        path: &Path,
    ) -> ExportResult<()> {
        // Render first so a failed export leaves no file behind.
        let svg = self.render(pattern, ctx)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
        info!("Exported SVG to {}", path.display());
        Ok(())
    }
}

fn write_overlay(svg: &mut String, overlay: &Overlay) {
    match overlay {
        Overlay::Frame { panel, rect } => {
            let _ = writeln!(
                svg,
                r#"    <path class="frame {}" d="{}"/>"#,
                panel,
                path_data(&rect.corners()),
            );
        }
        Overlay::Text {
            panel,
            anchor,
            content,
            style,
        } => {
            let _ = writeln!(
                svg,
                r#"    <text class="label {}" x="{}" y="{}" font-family="{}" font-weight="{}" font-size="{}" fill="{}" stroke="none">{}</text>"#,
                panel,
                num(anchor.x),
                num(anchor.y),
                escape(&style.font_family),
                style.font_weight,
                num(style.font_size),
                escape(&style.fill),
                escape(content),
            );
        }
        Overlay::Image {
            panel,
            href,
            rect,
            rotation,
        } => {
            let transform = match rotation {
                QuarterTurn::None => String::new(),
                turn => {
                    let c = rect.center();
                    format!(
                        r#" transform="rotate({} {} {})""#,
                        turn.degrees(),
                        num(c.x),
                        num(c.y)
                    )
                }
            };
            let _ = writeln!(
                svg,
                r#"    <image class="artwork {}" href="{href}" xlink:href="{href}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="none"{}/>"#,
                panel,
                num(rect.x()),
                num(rect.y()),
                num(rect.width()),
                num(rect.height()),
                transform,
                href = escape(href),
            );
        }
    }
}

/// Closed path through `points`.
fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {} {} ", cmd, num(p.x), num(p.y));
    }
    d.push('Z');
    d
}

/// Shortest decimal form with at most four fractional digits.
fn num(value: f64) -> String {
    let rounded = (value * 1e4).round() / 1e4;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.4}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
