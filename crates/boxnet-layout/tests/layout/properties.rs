use boxnet_core::constants::MAX_LENGTH;
use boxnet_core::Dimensions;
use boxnet_layout::{layout_panels, layout_tabs, PanelRole, Pattern, TabSettings};
use proptest::prelude::*;

const ADJACENT: [(PanelRole, PanelRole); 5] = [
    (PanelRole::Front, PanelRole::Bottom),
    (PanelRole::Bottom, PanelRole::Back),
    (PanelRole::Back, PanelRole::Top),
    (PanelRole::Left, PanelRole::Bottom),
    (PanelRole::Right, PanelRole::Bottom),
];

fn length() -> impl Strategy<Value = f64> {
    0.01f64..5000.0
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn panels_never_overlap(w in length(), h in length(), d in length()) {
        let panels = layout_panels(w, h, d).unwrap();
        let all: Vec<_> = panels.iter().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                let overlap = a.rect.intersection_area(&b.rect);
                prop_assert!(
                    overlap <= 1e-9 * a.rect.area().max(b.rect.area()),
                    "{} overlaps {} by {}", a.role, b.role, overlap
                );
            }
        }
    }

    #[test]
    fn panel_area_matches_surface(w in length(), h in length(), d in length()) {
        let panels = layout_panels(w, h, d).unwrap();
        let expected = 2.0 * (w * h + w * d + h * d);
        prop_assert!(relative_eq(panels.total_area(), expected));
    }

    #[test]
    fn adjacent_panels_share_full_edge(w in length(), h in length(), d in length()) {
        let panels = layout_panels(w, h, d).unwrap();
        for (a, b) in ADJACENT {
            let ra = panels.rect(a);
            let rb = panels.rect(b);
            let tolerance = 1e-9 * (w + h + d);
            let shared = ra.shared_edge(&rb, tolerance);
            prop_assert!(shared.is_some(), "{} and {} share no edge", a, b);
            let shared = shared.unwrap();
            let horizontal = shared.start.y == shared.end.y;
            let (len_a, len_b) = if horizontal {
                (ra.width(), rb.width())
            } else {
                (ra.height(), rb.height())
            };
            prop_assert!(relative_eq(shared.length(), len_a), "{} edge is partial", a);
            prop_assert!(relative_eq(shared.length(), len_b), "{} edge is partial", b);
        }
    }

    #[test]
    fn layout_is_deterministic(w in length(), h in length(), d in length(), t in 0.01f64..500.0) {
        let dims = Dimensions::new(w, h, d).unwrap();
        let settings = TabSettings::new(t, 1.0).unwrap();
        let first = Pattern::generate(&dims, &settings).unwrap();
        let second = Pattern::generate(&dims, &settings).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tip_length_is_clamped(
        w in length(),
        h in length(),
        d in length(),
        t in 0.01f64..500.0,
        taper in 0.01f64..=1.0,
    ) {
        let panels = layout_panels(w, h, d).unwrap();
        let settings = TabSettings::new(t, taper).unwrap();
        for tab in layout_tabs(&panels, &settings).iter() {
            let expected = (tab.base_rect().width() - 2.0 * settings.inset()).max(0.0);
            prop_assert_eq!(tab.tip_length(), expected);
            prop_assert_eq!(tab.is_degenerate(), expected == 0.0);
        }
    }

    #[test]
    fn pattern_bounds_are_member_union(
        w in length(),
        h in length(),
        d in length(),
        t in 0.01f64..500.0,
    ) {
        let dims = Dimensions::new(w, h, d).unwrap();
        let settings = TabSettings::new(t, 1.0).unwrap();
        let bounds = Pattern::generate(&dims, &settings).unwrap().bounds().unwrap();

        // Extremes of every panel corner and every raw tab vertex.
        let panels = layout_panels(w, h, d).unwrap();
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for panel in panels.iter() {
            xs.extend([panel.rect.left(), panel.rect.right()]);
            ys.extend([panel.rect.top(), panel.rect.bottom()]);
        }
        for tab in layout_tabs(&panels, &settings).iter() {
            for p in tab.outline().points() {
                xs.push(p.x);
                ys.push(p.y);
            }
        }
        let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
        let max = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let tolerance = 1e-9 * (w + h + d + t);
        prop_assert!((bounds.left() - min(&xs)).abs() <= tolerance);
        prop_assert!((bounds.right() - max(&xs)).abs() <= tolerance);
        prop_assert!((bounds.top() - min(&ys)).abs() <= tolerance);
        prop_assert!((bounds.bottom() - max(&ys)).abs() <= tolerance);

        // The outer side tabs always stick out beyond the side flaps.
        prop_assert!((bounds.left() + t).abs() <= tolerance);
        prop_assert!((bounds.right() - (2.0 * h + w + t)).abs() <= tolerance);
    }

    #[test]
    fn huge_dimensions_are_rejected_or_finite(
        w in 1.0f64..f64::MAX / 4.0,
        h in 1.0f64..f64::MAX / 4.0,
        d in 1.0f64..f64::MAX / 4.0,
    ) {
        match Dimensions::new(w, h, d) {
            Ok(dims) => {
                let pattern = Pattern::generate(&dims, &TabSettings::default()).unwrap();
                let bounds = pattern.bounds().unwrap();
                prop_assert!(bounds.width().is_finite() && bounds.height().is_finite());
            }
            Err(_) => prop_assert!(w.max(h).max(d) > MAX_LENGTH),
        }
    }

    #[test]
    fn large_boxes_have_finite_geometry(
        ew in 0.0f64..149.0,
        eh in 0.0f64..149.0,
        ed in 0.0f64..149.0,
        et in 0.0f64..149.0,
    ) {
        let dims = Dimensions::new(10f64.powf(ew), 10f64.powf(eh), 10f64.powf(ed)).unwrap();
        let settings = TabSettings::new(10f64.powf(et), 1.0).unwrap();
        let pattern = Pattern::generate(&dims, &settings).unwrap();

        for entry in pattern.entries() {
            for p in entry.outline() {
                prop_assert!(p.x.is_finite() && p.y.is_finite(), "{} is not finite", entry.name());
            }
        }
        let bounds = pattern.bounds().unwrap();
        prop_assert!(bounds.area().is_finite());
        prop_assert!(pattern.total_panel_area().is_finite());
    }
}
