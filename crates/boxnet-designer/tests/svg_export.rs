use boxnet_core::Dimensions;
use boxnet_designer::{
    Decorations, Decorator, ExportBounds, ExportError, FramedPanels, PanelLabels, RenderContext,
    RenderStyle, SvgExporter, TextStyle,
};
use boxnet_layout::{Pattern, Rect, TabSettings};
use tempfile::TempDir;

fn reference(tab_width: f64) -> Pattern {
    let dims = Dimensions::new(432.0, 288.0, 216.0).unwrap();
    Pattern::generate(&dims, &TabSettings::new(tab_width, 1.0).unwrap()).unwrap()
}

#[test]
fn test_export_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.svg");

    let pattern = reference(36.0);
    SvgExporter::new(RenderStyle::outline())
        .export_to_file(&pattern, &RenderContext::new(), &path)
        .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"<path id="left_tab_3""#));
}

#[test]
fn test_double_frame_document() {
    let pattern = reference(144.0);
    let decorations = Decorations::new()
        .with(FramedPanels::new(vec![36.0, 72.0]))
        .with(PanelLabels::role_names(TextStyle::default(), 36.0));

    let mut ctx = RenderContext::new();
    decorations.decorate(&pattern, &mut ctx);

    let svg = SvgExporter::new(RenderStyle::framed())
        .render(&pattern, &ctx)
        .unwrap();

    assert!(svg.contains(r#"fill="rgb(7, 62, 32)""#));
    assert_eq!(svg.matches(r#"class="frame "#).count(), 18);
    assert_eq!(svg.matches("<text ").count(), 6);
    // Frames sit inside the panels, so the crop still matches the pattern.
    let bounds = pattern.bounds().unwrap();
    assert!(bounds.approx_eq(&Rect::new(-144.0, 0.0, 1296.0, 1152.0), 1e-9));
    assert!(svg.contains(r#"viewBox="-144 0 1296 1152""#));
}

#[test]
fn test_write_to_buffer() {
    let mut buffer = Vec::new();
    SvgExporter::default()
        .with_bounds(ExportBounds::Page {
            width: 1296.0,
            height: 1152.0,
        })
        .write_to(&reference(36.0), &RenderContext::new(), &mut buffer)
        .unwrap();
    let svg = String::from_utf8(buffer).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 1296 1152""#));
}

#[test]
fn test_failed_export_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.svg");
    let err = SvgExporter::default()
        .with_bounds(ExportBounds::Page {
            width: f64::NAN,
            height: 10.0,
        })
        .export_to_file(&reference(36.0), &RenderContext::new(), &path)
        .unwrap_err();
    assert!(matches!(err, ExportError::InvalidPage { .. }));
    assert!(!path.exists());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("box.svg");
    let err = SvgExporter::default()
        .export_to_file(&reference(36.0), &RenderContext::new(), &path)
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
