#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns a copy with `x` replaced, keeping the cross axis.
    pub fn with_x(self, x: f64) -> Self {
        Self { x, y: self.y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rendered slot that intersects the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleSlot {
    /// Index in the padded strip (`0..slot_count`).
    pub slot: usize,
    /// Index in the host's collection (`0..count`).
    pub logical: usize,
    /// Start offset of the item frame on the scroll axis.
    pub start: f64,
    /// Item extent on the scroll axis (excludes spacing).
    pub size: f64,
}

impl VisibleSlot {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// A tap resolved to both index spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub logical: usize,
    pub slot: usize,
}

/// Describes a silent re-centering jump.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recenter {
    /// Whole cells jumped, truncated toward zero (positive = content moved forward).
    pub shift: i64,
    /// The shift actually added to the index offset (`corrected_index(shift)`).
    pub corrected_shift: usize,
    pub from: Point,
    pub to: Point,
}

impl Recenter {
    /// Distance the scroll offset jumped on the main axis.
    pub fn delta(&self) -> f64 {
        self.to.x - self.from.x
    }
}

/// The outcome of a scroll tick.
///
/// `reload` is set whenever every slot's logical mapping changed and all visible cells must be
/// requested again.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    pub recentered: Option<Recenter>,
    /// The centered logical index, when a slot sits under the viewport center.
    pub page_index: Option<usize>,
}

impl ScrollUpdate {
    pub fn needs_reload(&self) -> bool {
        self.recentered.is_some()
    }

    /// The offset the host scroll view must adopt (non-animated), if it changed.
    pub fn new_offset(&self) -> Option<Point> {
        self.recentered.map(|r| r.to)
    }
}
