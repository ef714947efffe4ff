use alloc::vec::Vec;

use crate::{
    Layout, LoopIndex, LoopOptions, LoopState, Point, Recenter, ScrollUpdate, Selection, Size,
    VisibleSlot,
};

/// A headless engine for an infinitely looping, paged strip.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport geometry and scroll offsets.
/// - Results (new offsets, reload requests, page indexes) are returned as plain values.
///
/// The strip renders `padding_factor * count` slots. Slot `s` shows logical item
/// `corrected_index(s - index_offset)`. Whenever the scroll offset drifts too far from the
/// strip's center, the offset jumps back by a whole number of cells and the index offset absorbs
/// the jump, so the same logical item stays under the viewport.
///
/// For data source / delegate plumbing, see the `infiniscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct LoopingScroller {
    options: LoopOptions,
    viewport: Size,
    content_offset: Point,
    index: LoopIndex,
    page_index: usize,
    initialized: bool,
}

impl LoopingScroller {
    pub fn new(options: LoopOptions) -> Self {
        vdebug!(
            count = options.count,
            padding_factor = options.padding_factor,
            enabled = options.enabled,
            "LoopingScroller::new"
        );
        Self {
            viewport: options.initial_viewport.unwrap_or_default(),
            content_offset: options.initial_offset,
            index: LoopIndex::new(options.count),
            page_index: 0,
            initialized: false,
            options,
        }
    }

    /// Recreates an engine from a snapshot taken with [`Self::state`].
    pub fn from_state(options: LoopOptions, state: LoopState) -> Self {
        let mut s = Self::new(options);
        s.index = LoopIndex::with_offset(s.options.count, state.index_offset);
        s.page_index = s.index.correct(state.page_index as i64);
        s.initialized = state.initialized;
        if state.content_offset.is_finite() {
            s.content_offset = state.content_offset;
        }
        s
    }

    pub fn state(&self) -> LoopState {
        LoopState {
            index_offset: self.index.offset(),
            page_index: self.page_index,
            initialized: self.initialized,
            content_offset: self.content_offset,
        }
    }

    pub fn options(&self) -> &LoopOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LoopOptions) {
        self.options = options;
        self.index.set_count(self.options.count);
        self.page_index = self.index.correct(self.page_index as i64);
        vtrace!(
            count = self.options.count,
            enabled = self.options.enabled,
            "LoopingScroller::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut LoopOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.update_options(|o| o.count = count);
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.options.layout = layout;
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    fn active_count(&self) -> usize {
        if self.options.enabled {
            self.options.count
        } else {
            0
        }
    }

    /// Number of rendered slots: `padding_factor * count`.
    pub fn slot_count(&self) -> usize {
        self.active_count()
            .saturating_mul(self.options.effective_padding_factor())
    }

    /// The slot stride on the scroll axis, or `0` for non-flow layouts.
    pub fn item_width(&self) -> f64 {
        self.options.layout.item_width()
    }

    /// Width of one copy of the collection.
    pub fn total_content_width(&self) -> f64 {
        self.active_count() as f64 * self.item_width()
    }

    /// Size of the padded strip.
    pub fn content_size(&self) -> Size {
        Size {
            width: self.slot_count() as f64 * self.item_width(),
            height: self.viewport.height,
        }
    }

    /// The scroll offset that centers the padded strip in the viewport.
    pub fn center_offset_x(&self) -> f64 {
        (self.content_size().width - self.viewport.width) / 2.0
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn set_content_offset(&mut self, offset: Point) {
        if !offset.is_finite() {
            vwarn!(x = offset.x, y = offset.y, "ignoring non-finite content offset");
            return;
        }
        self.content_offset = offset;
    }

    pub fn index_offset(&self) -> i64 {
        self.index.offset()
    }

    pub fn loop_index(&self) -> LoopIndex {
        self.index
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn corrected_index(&self, index: i64) -> usize {
        self.index.correct(index)
    }

    /// The logical item drawn at `slot`.
    pub fn logical_index_for_slot(&self, slot: usize) -> usize {
        self.index.logical_for_slot(slot)
    }

    /// Returns the slot whose item frame contains `point` on the scroll axis.
    ///
    /// Points in the spacing between two items hit nothing.
    pub fn slot_at_point(&self, point: Point) -> Option<usize> {
        let w = self.item_width();
        if w <= 0.0 || !point.x.is_finite() || point.x < 0.0 {
            return None;
        }
        let slot = (point.x / w) as usize;
        if slot >= self.slot_count() {
            return None;
        }
        let local = point.x - slot as f64 * w;
        if local >= self.options.layout.item_extent() {
            return None;
        }
        Some(slot)
    }

    /// The slot under the center of the viewport.
    pub fn centered_slot(&self) -> Option<usize> {
        self.slot_at_point(Point {
            x: self.viewport.width / 2.0 + self.content_offset.x,
            y: self.viewport.height / 2.0 + self.content_offset.y,
        })
    }

    pub fn for_each_visible_slot(&self, mut f: impl FnMut(VisibleSlot)) {
        let w = self.item_width();
        let slots = self.slot_count();
        if w <= 0.0 || slots == 0 || self.viewport.width <= 0.0 {
            return;
        }
        let extent = self.options.layout.item_extent();
        let view_start = self.content_offset.x.max(0.0);
        let view_end = (self.content_offset.x + self.viewport.width).min(self.content_size().width);
        if view_end <= view_start {
            return;
        }

        let mut slot = (view_start / w) as usize;
        while slot < slots {
            let start = slot as f64 * w;
            if start >= view_end {
                break;
            }
            if start + extent > view_start {
                f(VisibleSlot {
                    slot,
                    logical: self.index.logical_for_slot(slot),
                    start,
                    size: extent,
                });
            }
            slot += 1;
        }
    }

    pub fn visible_slots(&self) -> Vec<VisibleSlot> {
        let mut out = Vec::new();
        self.for_each_visible_slot(|s| out.push(s));
        out
    }

    /// Applies a scroll offset reported by the UI layer, then re-centers if needed.
    pub fn on_scroll(&mut self, offset: Point) -> ScrollUpdate {
        vtrace!(x = offset.x, y = offset.y, "on_scroll");
        if !offset.is_finite() {
            vwarn!(x = offset.x, y = offset.y, "ignoring non-finite scroll offset");
            return ScrollUpdate::default();
        }
        self.content_offset = offset;
        self.recenter_if_needed()
    }

    /// Runs the initial centering once, on the first layout pass that sees a non-empty strip.
    pub fn on_layout(&mut self) -> Option<ScrollUpdate> {
        if self.initialized || self.active_count() == 0 {
            return None;
        }
        self.initialized = true;
        vdebug!(count = self.active_count(), "initial centering");
        Some(self.recenter_if_needed())
    }

    /// Realigns the offset to the current page after a layout size change.
    ///
    /// Returns the new (non-animated) content offset.
    pub fn on_orientation_change(&mut self) -> Point {
        let slot = (self.page_index as i64).wrapping_add(self.index.offset());
        self.content_offset = self.content_offset.with_x(slot as f64 * self.item_width());
        vtrace!(slot, x = self.content_offset.x, "on_orientation_change");
        self.content_offset
    }

    pub fn on_tap(&self, slot: usize) -> Selection {
        Selection {
            logical: self.index.logical_for_slot(slot),
            slot,
        }
    }

    /// Resolves a programmatic selection of logical item `logical`.
    ///
    /// Returns the slot to select, or `None` when nothing is on screen or the item is already the
    /// selected (centered) one.
    pub fn select_item(&self, logical: usize) -> Option<usize> {
        if self.active_count() == 0 {
            return None;
        }
        let target = self.index.slot_for_logical(logical);
        let current = self
            .centered_slot()
            .or_else(|| self.visible_slots().first().map(|s| s.slot))?;
        if self.index.correct(current as i64) == target {
            vtrace!(logical, target, "select_item: already selected");
            return None;
        }
        Some(target)
    }

    /// Jumps the offset back toward the center of the strip once it drifted past the threshold,
    /// then recomputes the centered page.
    pub fn recenter_if_needed(&mut self) -> ScrollUpdate {
        if self.active_count() == 0 {
            return ScrollUpdate::default();
        }

        let w = self.item_width();
        let current = self.content_offset;
        let center_x = self.center_offset_x();
        let dist_from_center = center_x - current.x;
        let threshold = self.total_content_width() * self.options.recenter_threshold;

        let mut recentered = None;
        if dist_from_center.abs() > threshold {
            if w > 0.0 {
                let cells = dist_from_center / w;
                // Truncation is floor for positive and ceil for negative cell counts.
                let shift = cells as i64;
                let remainder = (cells - shift as f64).abs() * w;
                let x = if center_x > current.x {
                    center_x - remainder
                } else {
                    center_x + remainder
                };
                self.content_offset = current.with_x(x);
                let corrected_shift = self.index.shift(shift);
                vdebug!(
                    shift,
                    corrected_shift,
                    index_offset = self.index.offset(),
                    from = current.x,
                    to = x,
                    "recentered"
                );
                recentered = Some(Recenter {
                    shift,
                    corrected_shift,
                    from: current,
                    to: self.content_offset,
                });
            } else {
                vwarn!(layout = ?self.options.layout, "zero item width, skipping re-center");
            }
        }

        let page_index = self.centered_slot().map(|slot| {
            self.page_index = self.index.logical_for_slot(slot);
            self.page_index
        });

        ScrollUpdate {
            recentered,
            page_index,
        }
    }

    /// The offset that centers logical item `page` in the copy nearest to the current position.
    pub fn offset_for_page(&self, page: usize) -> Option<Point> {
        let count = self.active_count();
        let w = self.item_width();
        let slots = self.slot_count();
        if count == 0 || w <= 0.0 {
            return None;
        }

        let mid = self.content_offset.x + self.viewport.width / 2.0;
        let base = if mid > 0.0 {
            ((mid / w) as usize).min(slots - 1)
        } else {
            0
        };
        let current = self.index.logical_for_slot(base) as i64;
        let n = count as i64;
        let mut delta = self.index.correct(page as i64 - current) as i64;
        if delta * 2 > n {
            delta -= n;
        }

        let mut target = base as i64 + delta;
        while target < 0 {
            target += n;
        }
        while target >= slots as i64 {
            target -= n;
        }

        let extent = self.options.layout.item_extent();
        let x = target as f64 * w + (extent - self.viewport.width) / 2.0;
        Some(self.content_offset.with_x(x))
    }
}
