use boxnet_core::Dimensions;
use boxnet_layout::{
    assemble, layout_tabs, BoxParameters, BoxPatternMaker, PanelRole, PanelSet, Pattern,
    PatternEntry, Rect, TabRole, TabSettings,
};

#[test]
fn test_assemble_counts() {
    let dims = Dimensions::new(10.0, 20.0, 30.0).unwrap();
    let panels = PanelSet::for_dimensions(&dims);
    let tabs = layout_tabs(&panels, &TabSettings::new(2.0, 1.0).unwrap());
    let pattern = assemble(panels, tabs).unwrap();

    assert_eq!(pattern.len(), 13);
    assert_eq!(pattern.panels().count(), 6);
    assert_eq!(pattern.tabs().count(), 7);
    assert_eq!(pattern.dimensions(), &dims);
}

#[test]
fn test_entries_keep_role_order() {
    let dims = Dimensions::new(10.0, 20.0, 30.0).unwrap();
    let pattern = Pattern::generate(&dims, &TabSettings::default()).unwrap();

    let panel_roles: Vec<_> = pattern.panels().map(|p| p.role).collect();
    assert_eq!(panel_roles, PanelRole::ALL.to_vec());

    let tab_roles: Vec<_> = pattern.tabs().map(|t| t.role()).collect();
    assert_eq!(tab_roles, TabRole::ALL.to_vec());

    assert!(matches!(
        pattern.entries().next(),
        Some(PatternEntry::Panel(_))
    ));
}

#[test]
fn test_bounds_union_of_members() {
    let dims = Dimensions::new(432.0, 288.0, 216.0).unwrap();
    let pattern = Pattern::generate(&dims, &TabSettings::default()).unwrap();

    let bounds = pattern.bounds().unwrap();
    for entry in pattern.entries() {
        let b = entry.bounds();
        assert!(b.left() >= bounds.left() && b.right() <= bounds.right());
        assert!(b.top() >= bounds.top() && b.bottom() <= bounds.bottom());
    }
    assert!(bounds.approx_eq(&Rect::new(-36.0, 0.0, 1080.0, 1044.0), 1e-9));
}

#[test]
fn test_wide_tabs_still_produce_pattern() {
    let params = BoxParameters {
        tab_width: 2.0,
        ..Default::default()
    };
    let pattern = BoxPatternMaker::new(params).unwrap().generate().unwrap();
    assert_eq!(pattern.len(), 13);
    assert!(!pattern.warnings().is_empty());
    let left = pattern.tab(TabRole::LeftTab1).unwrap();
    assert_eq!(left.tip_length(), 0.0);
}

#[test]
fn test_outline_sizes() {
    let dims = Dimensions::new(432.0, 288.0, 216.0).unwrap();
    let pattern = Pattern::generate(&dims, &TabSettings::default()).unwrap();
    for entry in pattern.entries() {
        assert_eq!(entry.outline().len(), 4, "{}", entry.name());
    }
}
