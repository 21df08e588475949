use boxnet_core::Dimensions;
use boxnet_layout::{layout_tabs, Edge, LayoutWarning, PanelSet, TabRole, TabSettings};

const EPS: f64 = 1e-9;

fn reference(settings: &TabSettings) -> (PanelSet, boxnet_layout::TabSet) {
    let dims = Dimensions::new(432.0, 288.0, 216.0).unwrap();
    let panels = PanelSet::for_dimensions(&dims);
    let tabs = layout_tabs(&panels, settings);
    (panels, tabs)
}

#[test]
fn test_tab_bases_lie_on_panel_edges() {
    let (panels, tabs) = reference(&TabSettings::default());
    for tab in tabs.iter() {
        let (panel, edge) = tab.attachment();
        let panel_edge = panels.rect(panel).edge(edge);
        assert!(
            tab.base().coincides_with(&panel_edge, EPS),
            "{} base {:?} vs {:?}",
            tab.role(),
            tab.base(),
            panel_edge
        );
        assert!((tab.base_length() - panel_edge.length()).abs() < EPS);
    }
}

#[test]
fn test_tabs_point_away_from_their_panel() {
    let (panels, tabs) = reference(&TabSettings::default());
    for tab in tabs.iter() {
        let (panel, edge) = tab.attachment();
        let rect = panels.rect(panel);
        let bounds = tab.bounds();
        match edge {
            Edge::Top => assert!(bounds.bottom() <= rect.top() + EPS),
            Edge::Bottom => assert!(bounds.top() >= rect.bottom() - EPS),
            Edge::Left => assert!(bounds.right() <= rect.left() + EPS),
            Edge::Right => assert!(bounds.left() >= rect.right() - EPS),
        }
        assert_eq!(rect.intersection_area(&bounds), 0.0, "{}", tab.role());
    }
}

#[test]
fn test_tip_length_formula() {
    let (_, tabs) = reference(&TabSettings::default());
    for tab in tabs.iter() {
        let expected = (tab.base_length() - 2.0 * 36.0).max(0.0);
        assert!((tab.tip_length() - expected).abs() < EPS);
        assert!((tab.outline().tip().length() - expected).abs() < EPS);
        assert_eq!(tab.reach(), 36.0);
    }
}

#[test]
fn test_half_taper_keeps_wide_tip() {
    let settings = TabSettings::new(144.0, 0.5).unwrap();
    let (_, tabs) = reference(&settings);
    let tab = tabs.get(TabRole::LeftTab1).unwrap();
    assert_eq!(tab.tip_length(), 144.0);
    assert!(!tab.is_degenerate());
}

#[test]
fn test_wide_tab_scenario() {
    let settings = TabSettings::new(144.0, 1.0).unwrap();
    let (_, tabs) = reference(&settings);

    let tab = tabs.get(TabRole::LeftTab1).unwrap();
    assert_eq!(tab.base_rect().width(), 288.0);
    assert_eq!(tab.base_rect().height(), 144.0);
    assert_eq!(tab.tip_length(), 0.0);

    let warning = tab.warning().unwrap();
    assert_eq!(
        *warning,
        LayoutWarning::DegenerateTab {
            role: TabRole::LeftTab1,
            base_length: 288.0,
            inset: 144.0,
        }
    );

    // Depth-length outer tabs collapse as well; the wide top tab does not.
    assert!(tabs.get(TabRole::LeftTab3).unwrap().is_degenerate());
    assert!(!tabs.get(TabRole::TopTab1).unwrap().is_degenerate());
    assert_eq!(tabs.warnings().count(), 6);
}

#[test]
fn test_outer_tab_centres() {
    let (_, tabs) = reference(&TabSettings::default());
    let left = tabs.get(TabRole::LeftTab3).unwrap().bounds().center();
    assert!((left.x - -18.0).abs() < EPS);
    assert!((left.y - 396.0).abs() < EPS);

    let right = tabs.get(TabRole::RightTab3).unwrap().bounds().center();
    assert!((right.x - 1026.0).abs() < EPS);
    assert!((right.y - 396.0).abs() < EPS);
}
