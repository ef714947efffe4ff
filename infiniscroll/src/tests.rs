use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Ten 100pt items, a 100pt wide viewport, default padding: the strip is 3000pt wide and its
/// center offset is 1450.
fn strip(count: usize) -> LoopingScroller {
    LoopingScroller::new(
        LoopOptions::with_item_size(count, Size::new(100.0, 50.0))
            .with_initial_viewport(Some(Size::new(100.0, 50.0))),
    )
}

fn centered_logical(s: &LoopingScroller) -> Option<usize> {
    s.centered_slot().map(|slot| s.logical_index_for_slot(slot))
}

#[test]
fn corrected_index_wraps_into_range() {
    let mut rng = Lcg::new(7);
    for n in 1..24usize {
        for _ in 0..200 {
            let i = rng.gen_range_i64(-10_000, 10_000);
            let c = corrected_index(i, n);
            assert!(c < n, "corrected_index({i}, {n}) = {c} out of range");
            assert_eq!(c, corrected_index(i + n as i64, n), "period for i={i}, n={n}");
            assert_eq!(c, corrected_index(i - n as i64, n), "period for i={i}, n={n}");
        }
        for i in 0..n {
            assert_eq!(corrected_index(i as i64, n), i);
        }
    }
}

#[test]
fn corrected_index_floor_modulo_for_negatives() {
    assert_eq!(corrected_index(-1, 10), 9);
    assert_eq!(corrected_index(-10, 10), 0);
    assert_eq!(corrected_index(-11, 10), 9);
    assert_eq!(corrected_index(25, 10), 5);
    assert_eq!(corrected_index(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
}

#[test]
fn corrected_index_with_zero_count_is_zero() {
    for i in [i64::MIN, -5, -1, 0, 1, 7, i64::MAX] {
        assert_eq!(corrected_index(i, 0), 0);
    }
    let s = strip(0);
    assert_eq!(s.corrected_index(42), 0);
    assert_eq!(s.logical_index_for_slot(3), 0);
}

#[test]
fn loop_index_maps_both_ways() {
    let mut idx = LoopIndex::with_offset(10, 3);
    assert_eq!(idx.logical_for_slot(5), 2);
    assert_eq!(idx.slot_for_logical(2), 5);
    for s in 0..30usize {
        assert_eq!(
            idx.slot_for_logical(idx.logical_for_slot(s)),
            idx.correct(s as i64)
        );
    }

    assert_eq!(idx.shift(-9), 1);
    assert_eq!(idx.offset(), 4);
    assert_eq!(idx.shift(23), 3);
    assert_eq!(idx.offset(), 7);
    assert_eq!(idx.shift(8), 8);
    assert_eq!(idx.offset(), 5);

    assert_eq!(LoopIndex::with_offset(10, 58).offset(), 8);
    assert_eq!(LoopIndex::with_offset(10, -3).offset(), 7);
    idx.set_count(4);
    assert_eq!(idx.offset(), 1);
}

#[test]
fn slot_count_is_padding_factor_times_count() {
    for n in [0usize, 1, 7, 10] {
        assert_eq!(strip(n).slot_count(), 3 * n);
    }

    let mut s = strip(10);
    s.update_options(|o| o.padding_factor = 5);
    assert_eq!(s.slot_count(), 50);
    s.update_options(|o| o.padding_factor = 0);
    assert_eq!(s.slot_count(), 10);

    s.set_enabled(false);
    assert_eq!(s.slot_count(), 0);
}

#[test]
fn item_width_includes_both_spacings() {
    let flow = FlowLayout::new(Size::new(80.0, 40.0)).with_spacing(6.0, 4.0);
    assert_eq!(flow.item_width(), 90.0);
    assert_eq!(Layout::Flow(flow).item_width(), 90.0);
    assert_eq!(Layout::Custom.item_width(), 0.0);

    let s = strip(10);
    assert_eq!(s.item_width(), 100.0);
    assert_eq!(s.content_size(), Size::new(3000.0, 50.0));
    assert_eq!(s.total_content_width(), 1000.0);
    assert_eq!(s.center_offset_x(), 1450.0);
}

#[test]
fn first_layout_centers_exactly_once() {
    let mut s = strip(10);
    assert!(!s.is_initialized());

    let update = s.on_layout().expect("first layout should center");
    let r = update.recentered.expect("offset 0 is far from center");
    assert_eq!(r.shift, 14);
    assert_eq!(r.corrected_shift, 4);
    assert!(approx_eq(s.content_offset().x, 1400.0));
    assert_eq!(s.index_offset(), 4);
    assert_eq!(update.page_index, Some(0));
    assert!(update.needs_reload());
    assert!(s.is_initialized());

    assert_eq!(s.on_layout(), None);
    assert_eq!(s.index_offset(), 4);
}

#[test]
fn first_layout_waits_for_items() {
    let mut s = strip(0);
    assert_eq!(s.on_layout(), None);
    assert!(!s.is_initialized());

    s.set_count(10);
    assert!(s.on_layout().is_some());
    assert!(s.is_initialized());
}

#[test]
fn recentering_keeps_the_centered_page() {
    let mut s = strip(10);
    s.set_content_offset(Point::new(2450.0, 0.0));
    assert_eq!(s.centered_slot(), Some(25));
    assert_eq!(centered_logical(&s), Some(5));

    let update = s.on_scroll(Point::new(2450.0, 0.0));
    let r = update.recentered.expect("1000pt from center");
    assert_eq!(r.shift, -10);
    assert_eq!(r.corrected_shift, 0);
    assert!(approx_eq(s.content_offset().x, 1450.0));
    assert_eq!(s.centered_slot(), Some(15));
    assert_eq!(update.page_index, Some(5));
    assert_eq!(s.page_index(), 5);
}

#[test]
fn recentering_preserves_sub_item_position() {
    let mut s = strip(10);
    // Center point 2480: slot 24, logical 4, 80pt into the item.
    let update = s.on_scroll(Point::new(2430.0, 7.0));
    let r = update.recentered.expect("980pt from center");
    assert_eq!(r.shift, -9);
    assert_eq!(r.corrected_shift, 1);
    assert!(approx_eq(s.content_offset().x, 1530.0));
    assert_eq!(s.content_offset().y, 7.0);
    assert!(approx_eq(r.delta(), -900.0));
    assert_eq!(s.index_offset(), 1);
    assert_eq!(s.centered_slot(), Some(15));
    assert_eq!(update.page_index, Some(4));
}

#[test]
fn recentering_forward_from_the_leading_edge() {
    let mut s = strip(10);
    let update = s.on_scroll(Point::new(300.0, 0.0));
    let r = update.recentered.expect("1150pt from center");
    assert_eq!(r.shift, 11);
    assert_eq!(r.corrected_shift, 1);
    assert!(approx_eq(s.content_offset().x, 1400.0));
    assert_eq!(update.page_index, Some(3));
}

#[test]
fn small_scrolls_do_not_recenter() {
    let mut s = strip(10);
    let update = s.on_scroll(Point::new(1500.0, 0.0));
    assert_eq!(update.recentered, None);
    assert!(!update.needs_reload());
    assert_eq!(update.new_offset(), None);
    assert_eq!(update.page_index, Some(5));

    // Exactly at the threshold is still inside.
    let update = s.on_scroll(Point::new(1200.0, 0.0));
    assert_eq!(update.recentered, None);
    assert_eq!(update.page_index, Some(2));
}

#[test]
fn random_scrolls_never_change_the_centered_page() {
    let mut s = strip(10);
    s.on_layout();
    let mut rng = Lcg::new(42);
    for _ in 0..500 {
        let k = rng.gen_range_i64(0, 29);
        // Keep the center point 87pt into an item, away from float-sensitive boundaries.
        let x = (k * 100 + 37) as f64;
        let before = {
            s.set_content_offset(Point::new(x, 0.0));
            centered_logical(&s)
        };
        let update = s.on_scroll(Point::new(x, 0.0));
        assert_eq!(update.page_index, before, "x={x}");
        assert!((0..10).contains(&s.index_offset()));
        assert!((s.center_offset_x() - s.content_offset().x).abs() <= 250.0 + 1e-6);
        if let Some(r) = update.recentered {
            assert!(approx_eq(r.delta(), r.shift as f64 * 100.0));
        }
    }
}

#[test]
fn padding_factor_and_threshold_are_configurable() {
    let mut s = LoopingScroller::new(
        LoopOptions::with_item_size(10, Size::new(100.0, 50.0))
            .with_initial_viewport(Some(Size::new(100.0, 50.0)))
            .with_padding_factor(5)
            .with_recenter_threshold(0.1),
    );
    assert_eq!(s.center_offset_x(), 2450.0);
    let update = s.on_scroll(Point::new(2300.0, 0.0));
    let r = update.recentered.expect("150pt exceeds a 100pt threshold");
    assert_eq!(r.shift, 1);
    assert!(approx_eq(s.content_offset().x, 2400.0));
    assert_eq!(s.index_offset(), 1);
    assert_eq!(update.page_index, Some(3));
}

#[test]
fn zero_item_width_never_shifts() {
    let mut s = LoopingScroller::new(
        LoopOptions::new(10, Layout::Custom).with_initial_viewport(Some(Size::new(100.0, 50.0))),
    );
    assert_eq!(s.slot_count(), 30);
    assert_eq!(s.item_width(), 0.0);

    let update = s.on_scroll(Point::new(500.0, 0.0));
    assert_eq!(update, ScrollUpdate::default());
    assert_eq!(s.index_offset(), 0);
    assert!(s.visible_slots().is_empty());
    assert_eq!(s.select_item(3), None);
    assert_eq!(s.offset_for_page(3), None);
}

#[test]
fn slot_hit_testing_skips_spacing() {
    let s = LoopingScroller::new(
        LoopOptions::new(
            10,
            Layout::Flow(FlowLayout::new(Size::new(80.0, 50.0)).with_spacing(10.0, 10.0)),
        )
        .with_initial_viewport(Some(Size::new(100.0, 50.0))),
    );
    assert_eq!(s.slot_at_point(Point::new(250.0, 0.0)), Some(2));
    assert_eq!(s.slot_at_point(Point::new(290.0, 0.0)), None);
    assert_eq!(s.slot_at_point(Point::new(-1.0, 0.0)), None);
    assert_eq!(s.slot_at_point(Point::new(3000.0, 0.0)), None);
    assert_eq!(s.slot_at_point(Point::new(f64::NAN, 0.0)), None);
}

#[test]
fn no_page_notification_without_a_centered_slot() {
    let mut s = LoopingScroller::new(
        LoopOptions::new(
            10,
            Layout::Flow(FlowLayout::new(Size::new(80.0, 50.0)).with_spacing(10.0, 10.0)),
        )
        .with_initial_viewport(Some(Size::new(100.0, 50.0))),
    );
    // Center point 1490 lands in the spacing after slot 14.
    let update = s.on_scroll(Point::new(1440.0, 0.0));
    assert_eq!(update.recentered, None);
    assert_eq!(update.page_index, None);
    assert_eq!(s.page_index(), 0);
}

#[test]
fn visible_slots_cover_the_viewport() {
    let mut s = strip(10);
    s.set_viewport_size(Size::new(250.0, 50.0));
    s.set_content_offset(Point::new(1400.0, 0.0));
    let slots: Vec<(usize, usize)> = s
        .visible_slots()
        .iter()
        .map(|v| (v.slot, v.logical))
        .collect();
    assert_eq!(slots, [(14, 4), (15, 5), (16, 6)]);

    let spaced = LoopingScroller::new(
        LoopOptions::new(
            10,
            Layout::Flow(FlowLayout::new(Size::new(80.0, 50.0)).with_spacing(10.0, 10.0)),
        )
        .with_initial_viewport(Some(Size::new(250.0, 50.0)))
        .with_initial_offset(Point::new(1385.0, 0.0)),
    );
    let visible = spaced.visible_slots();
    let slots: Vec<usize> = visible.iter().map(|v| v.slot).collect();
    assert_eq!(slots, [14, 15, 16]);
    assert_eq!(visible[0].start, 1400.0);
    assert_eq!(visible[0].end(), 1480.0);
}

#[test]
fn orientation_change_realigns_to_the_page() {
    let mut s = strip(10);
    s.on_scroll(Point::new(2430.0, 7.0));
    assert_eq!(s.page_index(), 4);
    assert_eq!(s.index_offset(), 1);

    let offset = s.on_orientation_change();
    assert_eq!(offset, Point::new(500.0, 7.0));
    assert_eq!(s.content_offset(), offset);
}

#[test]
fn orientation_change_after_many_recenters_stays_in_the_strip() {
    let mut s = strip(10);
    s.on_layout();
    for _ in 0..6 {
        let x = s.content_offset().x - 900.0;
        let update = s.on_scroll(Point::new(x, 0.0));
        assert!(update.recentered.is_some());
    }
    assert_eq!(s.page_index(), 6);
    assert_eq!(s.index_offset(), 8);

    let page = s.page_index();
    let offset = s.on_orientation_change();
    let max_x = s.content_size().width - s.viewport_size().width;
    assert!(offset.x >= 0.0 && offset.x <= max_x, "x={}", offset.x);
    assert_eq!(offset, Point::new(1400.0, 0.0));
    assert_eq!(centered_logical(&s), Some(page));

    // Forward swipes wrap the offset the other way.
    for _ in 0..7 {
        let x = s.content_offset().x + 900.0;
        s.on_scroll(Point::new(x, 0.0));
        assert!((0..10).contains(&s.index_offset()));
    }
    let page = s.page_index();
    let offset = s.on_orientation_change();
    assert!(offset.x >= 0.0 && offset.x <= max_x, "x={}", offset.x);
    assert_eq!(centered_logical(&s), Some(page));
}

#[test]
fn tap_maps_slot_to_logical() {
    let mut s = strip(10);
    s.on_layout();
    assert_eq!(s.on_tap(14), Selection { logical: 0, slot: 14 });
    assert_eq!(s.on_tap(0), Selection { logical: 6, slot: 0 });
    assert_eq!(s.on_tap(29), Selection { logical: 5, slot: 29 });
}

#[test]
fn selecting_the_centered_item_is_a_no_op() {
    let mut s = strip(10);
    s.on_layout();
    assert_eq!(s.centered_slot(), Some(14));
    assert_eq!(s.select_item(0), None);
    assert_eq!(s.select_item(10), None);
    assert_eq!(s.select_item(3), Some(7));

    assert_eq!(strip(0).select_item(0), None);
}

#[test]
fn offset_for_page_picks_the_nearest_copy() {
    let mut s = strip(10);
    s.on_layout();
    assert_eq!(s.offset_for_page(3), Some(Point::new(1700.0, 0.0)));
    assert_eq!(s.offset_for_page(8), Some(Point::new(1200.0, 0.0)));
    assert_eq!(s.offset_for_page(0), Some(Point::new(1400.0, 0.0)));

    let update = s.on_scroll(Point::new(1200.0, 0.0));
    assert_eq!(update.recentered, None);
    assert_eq!(update.page_index, Some(8));
}

#[test]
fn count_changes_keep_page_in_range() {
    let mut s = strip(10);
    s.on_scroll(Point::new(2430.0, 0.0));
    assert_eq!(s.page_index(), 4);
    s.set_count(3);
    assert_eq!(s.page_index(), 1);
    assert_eq!(s.slot_count(), 9);
}

#[test]
fn disabled_engine_ignores_events() {
    let mut s = strip(10);
    s.set_enabled(false);
    assert_eq!(s.on_layout(), None);
    assert_eq!(s.on_scroll(Point::new(0.0, 0.0)), ScrollUpdate::default());
    assert_eq!(s.select_item(2), None);
    assert!(s.visible_slots().is_empty());
}

#[test]
fn non_finite_offsets_are_ignored() {
    let mut s = strip(10);
    s.set_content_offset(Point::new(1450.0, 0.0));
    assert_eq!(s.on_scroll(Point::new(f64::INFINITY, 0.0)), ScrollUpdate::default());
    s.set_content_offset(Point::new(f64::NAN, 0.0));
    assert_eq!(s.content_offset(), Point::new(1450.0, 0.0));
}

#[test]
fn state_snapshot_recreates_the_same_mapping() {
    let mut s = strip(10);
    s.on_layout();
    s.on_scroll(Point::new(2430.0, 0.0));
    let state = s.state();

    let restored = LoopingScroller::from_state(s.options().clone(), state);
    assert_eq!(restored.state(), state);
    for slot in 0..30usize {
        assert_eq!(
            restored.logical_index_for_slot(slot),
            s.logical_index_for_slot(slot)
        );
    }
    assert_eq!(restored.page_index(), s.page_index());
}
