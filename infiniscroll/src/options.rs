use crate::{Point, Size};

/// Number of copies of the collection laid out in the padded strip.
pub const DEFAULT_PADDING_FACTOR: usize = 3;

/// Fraction of the logical strip width the offset may drift from center before re-centering.
pub const DEFAULT_RECENTER_THRESHOLD: f64 = 0.25;

/// A flow layout laid out on a single horizontal line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayout {
    pub item_size: Size,
    pub minimum_interitem_spacing: f64,
    pub minimum_line_spacing: f64,
}

impl FlowLayout {
    pub fn new(item_size: Size) -> Self {
        Self {
            item_size,
            minimum_interitem_spacing: 0.0,
            minimum_line_spacing: 0.0,
        }
    }

    pub fn with_spacing(mut self, interitem: f64, line: f64) -> Self {
        self.minimum_interitem_spacing = interitem;
        self.minimum_line_spacing = line;
        self
    }

    /// The stride between two consecutive slots: item width plus both spacings.
    pub fn item_width(&self) -> f64 {
        self.item_size.width + self.minimum_interitem_spacing + self.minimum_line_spacing
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    Flow(FlowLayout),
    /// Any non-flow layout. Slot geometry is unknown, so the item width is `0` and the engine
    /// never re-centers.
    Custom,
}

impl Layout {
    pub fn item_width(&self) -> f64 {
        match self {
            Self::Flow(flow) => flow.item_width(),
            Self::Custom => 0.0,
        }
    }

    /// The drawn item extent on the scroll axis (no spacing).
    pub fn item_extent(&self) -> f64 {
        match self {
            Self::Flow(flow) => flow.item_size.width,
            Self::Custom => 0.0,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::Flow(FlowLayout::default())
    }
}

/// Configuration for [`crate::LoopingScroller`].
#[derive(Clone, Debug, PartialEq)]
pub struct LoopOptions {
    /// Logical item count (`N`).
    pub count: usize,
    pub layout: Layout,
    /// Rendered slots per logical item. Values below `1` are treated as `1`.
    pub padding_factor: usize,
    /// Re-center once `|center - offset|` exceeds this fraction of `count * item_width`.
    pub recenter_threshold: f64,
    pub initial_viewport: Option<Size>,
    pub initial_offset: Point,
    /// When disabled, the strip has no slots and every event is a no-op.
    pub enabled: bool,
}

impl LoopOptions {
    pub fn new(count: usize, layout: Layout) -> Self {
        Self {
            count,
            layout,
            padding_factor: DEFAULT_PADDING_FACTOR,
            recenter_threshold: DEFAULT_RECENTER_THRESHOLD,
            initial_viewport: None,
            initial_offset: Point::ZERO,
            enabled: true,
        }
    }

    /// Shorthand for a flow layout of fixed-size items without spacing.
    pub fn with_item_size(count: usize, item_size: Size) -> Self {
        Self::new(count, Layout::Flow(FlowLayout::new(item_size)))
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_padding_factor(mut self, padding_factor: usize) -> Self {
        self.padding_factor = padding_factor;
        self
    }

    pub fn with_recenter_threshold(mut self, recenter_threshold: f64) -> Self {
        self.recenter_threshold = recenter_threshold;
        self
    }

    pub fn with_initial_viewport(mut self, viewport: Option<Size>) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_initial_offset(mut self, offset: Point) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub(crate) fn effective_padding_factor(&self) -> usize {
        self.padding_factor.max(1)
    }
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self::new(0, Layout::default())
    }
}
