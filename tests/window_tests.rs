// Host-side tests for visibility windowing.

use plane_carousel::core::*;

#[test]
fn window_clamps_at_both_ends() {
    assert_eq!(visible_window(0, 3, 3), 0..2);
    assert_eq!(visible_window(1, 3, 3), 0..3);
    assert_eq!(visible_window(2, 3, 3), 1..3);
}

#[test]
fn window_is_symmetric_for_even_ranges() {
    // 4 / 2 = 2 either side, never 2 before / 1 after
    assert_eq!(visible_window(5, 4, 10), 3..8);
    assert_eq!(visible_window(5, 2, 10), 4..7);
}

#[test]
fn window_handles_tiny_carousels() {
    assert_eq!(visible_window(0, 3, 0), 0..0);
    assert_eq!(visible_window(0, 3, 1), 0..1);
    assert_eq!(visible_window(0, 1, 5), 0..1);
    assert_eq!(visible_window(0, 0, 5), 0..1);
}

#[test]
fn window_matches_distance_rule_for_all_indices() {
    for total in 1..8usize {
        for active in 0..total {
            let w = visible_window(active, 3, total);
            for i in 0..total {
                let expected = (i as isize - active as isize).abs() <= 1;
                assert_eq!(w.contains(&i), expected, "active={active} i={i} total={total}");
            }
        }
    }
}

#[test]
fn render_set_apply_reports_diff() {
    let mut rs = RenderSet::default();
    let d = rs.apply(0..2, 3);
    assert_eq!(d.added.as_slice(), &[0, 1]);
    assert!(d.removed.is_empty());

    let d = rs.apply(1..3, 3);
    assert_eq!(d.added.as_slice(), &[2]);
    assert_eq!(d.removed.as_slice(), &[0]);
    assert_eq!(rs.sorted().as_slice(), &[1, 2]);
}

#[test]
fn render_set_apply_is_idempotent() {
    let mut rs = RenderSet::default();
    rs.apply(2..5, 8);
    let snapshot = rs.clone();
    let d = rs.apply(2..5, 8);
    assert!(d.is_empty());
    assert_eq!(rs, snapshot);
}

#[test]
fn render_set_drops_indices_beyond_new_length() {
    let mut rs = RenderSet::default();
    rs.apply(3..6, 6);
    let d = rs.apply(0..2, 2);
    assert_eq!(d.added.as_slice(), &[0, 1]);
    assert_eq!(d.removed.as_slice(), &[3, 4, 5]);
    assert_eq!(rs.len(), 2);
}
