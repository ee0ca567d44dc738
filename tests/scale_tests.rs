// Host-side tests for the attribute scales.

use triswap_core::{build_scale, DataItem, Layout, LinearScale, Scales, Session};

fn two_items() -> Vec<DataItem> {
    vec![
        DataItem {
            x: 0.0,
            y: 0.0,
            base: 10.0,
            height: 20.0,
            hue: 0.0,
        },
        DataItem {
            x: 10.0,
            y: 10.0,
            base: 50.0,
            height: 80.0,
            hue: 300.0,
        },
    ]
}

#[test]
fn scale_hits_range_ends_exactly() {
    let cases = [
        (0.0, 50.0, 10.0, 150.0),
        (-25.0, 35.0, 0.0, 1540.0),
        (-3.7, 12.1, 10.0, 150.0),
        (0.1, 0.3, 0.0, 360.0),
        (2.0, 1.0, 5.0, -5.0),
    ];
    for (d0, d1, r0, r1) in cases {
        let s = LinearScale::new(d0, d1, r0, r1);
        assert_eq!(s.apply(d0), r0, "domain min of {:?}", (d0, d1));
        assert_eq!(s.apply(d1), r1, "domain max of {:?}", (d0, d1));
    }
}

#[test]
fn scale_interpolates_linearly() {
    let s = LinearScale::new(0.0, 10.0, 0.0, 100.0);
    assert!((s.apply(5.0) - 50.0).abs() < 1e-9);
    assert!((s.apply(2.5) - 25.0).abs() < 1e-9);
    // values outside the domain extrapolate
    assert!((s.apply(20.0) - 200.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let s = LinearScale::new(4.0, 4.0, 10.0, 150.0);
    assert!(s.is_degenerate());
    for v in [0.0, 4.0, 100.0] {
        let out = s.apply(v);
        assert!(out.is_finite());
        assert_eq!(out, 10.0);
    }
}

#[test]
fn closure_form_matches_struct() {
    let f = build_scale(-1.0, 3.0, 0.0, 400.0);
    let s = LinearScale::new(-1.0, 3.0, 0.0, 400.0);
    for v in [-1.0, 0.0, 0.5, 2.0, 3.0] {
        assert_eq!(f(v), s.apply(v));
    }
}

#[test]
fn domains_follow_padding_rules() {
    let layout = Layout::default();
    let scales = Scales::from_data(&two_items(), &layout);

    // x padded by half the largest base on both sides
    assert_eq!(scales.x.domain(), (-25.0, 35.0));
    // y padded by the largest height on the upper end only
    assert_eq!(scales.y.domain(), (0.0, 90.0));
    assert_eq!(scales.base.domain(), (0.0, 50.0));
    assert_eq!(scales.height.domain(), (0.0, 80.0));
    assert_eq!(scales.hue.domain(), (0.0, 300.0));

    assert_eq!(scales.x.range(), (0.0, 1540.0));
    assert_eq!(scales.y.range(), (0.0, 550.0));
    assert_eq!(scales.base.range(), (10.0, 150.0));
    assert_eq!(scales.height.range(), (10.0, 150.0));
    assert_eq!(scales.hue.range(), (0.0, 360.0));
}

#[test]
fn empty_dataset_gives_degenerate_scales() {
    let scales = Scales::from_data(&[], &Layout::default());
    assert!(scales.base.is_degenerate());
    assert!(scales.hue.is_degenerate());
    assert_eq!(scales.base.apply(42.0), 10.0);
}

#[test]
fn scales_are_not_recomputed_after_swap() {
    let mut session = Session::new(two_items(), &Layout::default());
    let before = *session.scales();

    session.handle(triswap_core::Command::Select(0));
    session.handle(triswap_core::Command::Select(1));

    assert_eq!(session.items()[1].base, 10.0);
    assert_eq!(*session.scales(), before);
    assert_eq!(
        *session.scales(),
        Scales::from_data(session.items(), &Layout::default())
    );
}
