use crate::Point;

/// A lightweight, serializable snapshot of a [`crate::LoopingScroller`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Pass it to
/// `LoopingScroller::from_state` to recreate an engine that shows the same logical page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopState {
    pub index_offset: i64,
    pub page_index: usize,
    pub initialized: bool,
    pub content_offset: Point,
}
