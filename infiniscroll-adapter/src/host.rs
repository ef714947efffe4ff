use infiniscroll::{Point, Size};

/// Supplies the logical collection on demand.
pub trait DataSource {
    /// The rendered cell type. `Default` is the empty fallback cell.
    type Cell: Default;

    fn item_count(&self) -> usize;

    /// Builds the cell for logical item `logical`, drawn at padded slot `slot`.
    ///
    /// Returning `None` renders an empty (`Default`) cell.
    fn cell(&mut self, logical: usize, slot: usize) -> Option<Self::Cell>;
}

/// Receives controller notifications. Every method is optional.
pub trait Delegate {
    /// A cell was tapped.
    fn did_select(&mut self, _logical: usize, _slot: usize) {}

    /// Fired on every scroll tick that has a centered item.
    fn did_scroll_to_page(&mut self, _page_index: usize) {}

    /// Scrolling came to rest after deceleration (or a page tween finished).
    fn did_settle(&mut self, _page_index: usize) {}

    /// A drag ended without any further deceleration.
    fn did_end_drag(&mut self, _page_index: usize) {}
}

impl Delegate for () {}

/// The scroll view primitives a toolkit binding provides.
pub trait ScrollView {
    fn bounds_size(&self) -> Size;

    fn content_offset(&self) -> Point;

    fn set_content_offset(&mut self, offset: Point, animated: bool);

    /// Drops every visible cell and requests them again.
    fn reload_data(&mut self);

    fn select_slot(&mut self, slot: usize, animated: bool);
}
