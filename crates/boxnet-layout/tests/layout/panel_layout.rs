use boxnet_layout::{layout_panels, PanelRole, Rect};

const EPS: f64 = 1e-9;

#[test]
fn test_reference_box_panels() {
    // 6 x 4 x 3 inches at 72 units per inch
    let panels = layout_panels(432.0, 288.0, 216.0).unwrap();

    let expected = [
        (PanelRole::Front, Rect::new(288.0, 0.0, 432.0, 288.0)),
        (PanelRole::Bottom, Rect::new(288.0, 288.0, 432.0, 216.0)),
        (PanelRole::Back, Rect::new(288.0, 504.0, 432.0, 288.0)),
        (PanelRole::Top, Rect::new(288.0, 792.0, 432.0, 216.0)),
        (PanelRole::Left, Rect::new(0.0, 288.0, 288.0, 216.0)),
        (PanelRole::Right, Rect::new(720.0, 288.0, 288.0, 216.0)),
    ];
    for (role, rect) in expected {
        assert_eq!(panels.rect(role), rect, "panel {}", role);
    }
}

#[test]
fn test_reference_box_area() {
    let panels = layout_panels(432.0, 288.0, 216.0).unwrap();
    let expected = 2.0 * (432.0 * 288.0 + 432.0 * 216.0 + 288.0 * 216.0);
    assert!((panels.total_area() - expected).abs() < EPS);
    assert_eq!(panels.bounds(), Rect::new(0.0, 0.0, 1008.0, 1008.0));
}

#[test]
fn test_flat_box() {
    let panels = layout_panels(100.0, 0.5, 50.0).unwrap();
    assert_eq!(panels.rect(PanelRole::Left).width(), 0.5);
    assert_eq!(panels.rect(PanelRole::Front).height(), 0.5);
}

#[test]
fn test_rejects_each_dimension() {
    for (w, h, d, name) in [
        (-1.0, 1.0, 1.0, "width"),
        (1.0, 0.0, 1.0, "height"),
        (1.0, 1.0, f64::INFINITY, "depth"),
    ] {
        let err = layout_panels(w, h, d).unwrap_err();
        assert_eq!(err.name(), name);
    }
}
