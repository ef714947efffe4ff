//! A headless engine for infinitely looping, paged item strips.
//!
//! For host-facing plumbing (data source, delegate, orientation notifications, tweens), see the
//! `infiniscroll-adapter` crate.
//!
//! The engine lays out `padding_factor` copies of a logical collection as one padded strip of
//! *slots*, maps slot indexes back to logical indexes through a floor-modulo wrapper, and
//! silently re-centers the scroll offset whenever it drifts toward an edge, so the strip appears
//! to wrap forever in both directions.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size
//! - scroll offset
//! - the item count and a flow layout (item size and spacing)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod index;
mod options;
mod scroller;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use index::{LoopIndex, corrected_index};
pub use options::{
    DEFAULT_PADDING_FACTOR, DEFAULT_RECENTER_THRESHOLD, FlowLayout, Layout, LoopOptions,
};
pub use scroller::LoopingScroller;
pub use state::LoopState;
pub use types::{Point, Recenter, ScrollUpdate, Selection, Size, VisibleSlot};
