use alloc::vec::Vec;

use infiniscroll::{LoopOptions, LoopingScroller, Point, ScrollUpdate, VisibleSlot};

use crate::{
    DataSource, Delegate, Easing, OrientationCenter, OrientationSubscription, ScrollView, Tween,
};

/// A framework-neutral controller that wraps an `infiniscroll::LoopingScroller` and speaks the
/// data source / delegate protocol of a looping collection view.
///
/// This type does not hold any UI objects. Adapters drive it by forwarding toolkit callbacks:
/// - `layout_subviews` after each layout pass
/// - `did_scroll` on every scroll offset change
/// - `did_end_dragging` / `did_end_decelerating` when scrolling stops
/// - `did_select_item_at` for taps, `select_item` for programmatic selection
/// - `poll_notifications` / `tick` from the run loop
///
/// The item count is pulled from the data source before every event.
#[derive(Debug)]
pub struct Controller<D, G = ()> {
    scroller: LoopingScroller,
    data_source: D,
    delegate: G,
    tween: Option<Tween>,
    orientation: Option<OrientationSubscription>,
}

impl<D: DataSource, G: Delegate> Controller<D, G> {
    /// Creates a controller. `options.count` is replaced by the data source's item count.
    pub fn new(options: LoopOptions, data_source: D, delegate: G) -> Self {
        let count = data_source.item_count();
        Self {
            scroller: LoopingScroller::new(LoopOptions { count, ..options }),
            data_source,
            delegate,
            tween: None,
            orientation: None,
        }
    }

    /// Registers for rotation notifications. The registration ends when the controller drops.
    pub fn with_orientation(mut self, center: &OrientationCenter) -> Self {
        self.orientation = Some(center.subscribe());
        self
    }

    pub fn scroller(&self) -> &LoopingScroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut LoopingScroller {
        &mut self.scroller
    }

    pub fn data_source(&self) -> &D {
        &self.data_source
    }

    pub fn data_source_mut(&mut self) -> &mut D {
        &mut self.data_source
    }

    pub fn delegate(&self) -> &G {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut G {
        &mut self.delegate
    }

    pub fn page_index(&self) -> usize {
        self.scroller.page_index()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    fn sync(&mut self, view: &impl ScrollView) {
        self.scroller.set_count(self.data_source.item_count());
        self.scroller.set_viewport_size(view.bounds_size());
    }

    fn apply(&mut self, view: &mut impl ScrollView, update: ScrollUpdate) {
        if let Some(r) = update.recentered {
            view.set_content_offset(r.to, false);
            view.reload_data();
            if let Some(tween) = &mut self.tween {
                tween.translate(r.delta());
            }
        }
        if let Some(page) = update.page_index {
            self.delegate.did_scroll_to_page(page);
        }
    }

    /// Number of padded slots the collection view should lay out.
    pub fn number_of_slots(&mut self) -> usize {
        self.scroller.set_count(self.data_source.item_count());
        self.scroller.slot_count()
    }

    /// Builds the cell for a padded slot, falling back to an empty cell.
    pub fn cell_for_slot(&mut self, slot: usize) -> D::Cell {
        self.scroller.set_count(self.data_source.item_count());
        let logical = self.scroller.logical_index_for_slot(slot);
        self.data_source.cell(logical, slot).unwrap_or_default()
    }

    /// Builds a cell for every slot that intersects the viewport.
    pub fn visible_cells(&mut self) -> Vec<(VisibleSlot, D::Cell)> {
        self.scroller.set_count(self.data_source.item_count());
        let slots = self.scroller.visible_slots();
        slots
            .into_iter()
            .map(|s| {
                let cell = self.data_source.cell(s.logical, s.slot).unwrap_or_default();
                (s, cell)
            })
            .collect()
    }

    /// Runs the one-shot initial centering once the data source has items.
    pub fn layout_subviews(&mut self, view: &mut impl ScrollView) {
        self.sync(view);
        self.scroller.set_content_offset(view.content_offset());
        if let Some(update) = self.scroller.on_layout() {
            self.apply(view, update);
        }
    }

    pub fn did_scroll(&mut self, view: &mut impl ScrollView) {
        self.sync(view);
        let update = self.scroller.on_scroll(view.content_offset());
        self.apply(view, update);
    }

    /// A user drag is starting; any page tween yields to it.
    pub fn will_begin_dragging(&mut self) {
        self.cancel_animation();
    }

    pub fn did_end_dragging(&mut self, will_decelerate: bool) {
        if will_decelerate {
            return;
        }
        self.delegate.did_end_drag(self.scroller.page_index());
    }

    pub fn did_end_decelerating(&mut self) {
        self.delegate.did_settle(self.scroller.page_index());
    }

    pub fn did_select_item_at(&mut self, slot: usize) {
        self.scroller.set_count(self.data_source.item_count());
        let selection = self.scroller.on_tap(slot);
        vtrace!(logical = selection.logical, slot, "did_select_item_at");
        self.delegate.did_select(selection.logical, selection.slot);
    }

    /// Selects logical item `logical` in the view unless it is already the selected item.
    ///
    /// Returns `true` when a selection was issued.
    pub fn select_item(
        &mut self,
        view: &mut impl ScrollView,
        logical: usize,
        animated: bool,
    ) -> bool {
        self.sync(view);
        self.scroller.set_content_offset(view.content_offset());
        let Some(slot) = self.scroller.select_item(logical) else {
            return false;
        };
        view.select_slot(slot, animated);
        true
    }

    /// Keeps the current page in place after a rotation.
    pub fn rotate(&mut self, view: &mut impl ScrollView) {
        self.sync(view);
        let offset = self.scroller.on_orientation_change();
        view.set_content_offset(offset, false);
    }

    /// Delivers pending rotation notifications. Returns `true` if a rotation was handled.
    pub fn poll_notifications(&mut self, view: &mut impl ScrollView) -> bool {
        let rotated = self
            .orientation
            .as_ref()
            .is_some_and(OrientationSubscription::take_pending);
        if rotated {
            self.rotate(view);
        }
        rotated
    }

    /// Starts a tween that brings logical item `page` to the center via the nearest copy.
    ///
    /// Returns the target offset, or `None` if the strip has no slot geometry.
    pub fn start_tween_to_page(
        &mut self,
        page: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<Point> {
        self.scroller.set_count(self.data_source.item_count());
        let to = self.scroller.offset_for_page(page)?;
        let from = self.scroller.content_offset().x;
        self.tween = Some(Tween::new(from, to.x, now_ms, duration_ms, easing));
        vdebug!(page, from, to = to.x, "start_tween_to_page");
        Some(to)
    }

    /// Advances an active tween, re-centering along the way.
    ///
    /// Returns the applied offset, or `None` when no tween is active.
    pub fn tick(&mut self, view: &mut impl ScrollView, now_ms: u64) -> Option<Point> {
        let tween = self.tween?;
        self.sync(view);

        let offset = view.content_offset().with_x(tween.sample(now_ms));
        view.set_content_offset(offset, false);
        let update = self.scroller.on_scroll(offset);
        self.apply(view, update);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.delegate.did_settle(self.scroller.page_index());
        }
        Some(self.scroller.content_offset())
    }
}
