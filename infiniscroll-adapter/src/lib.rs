//! Adapter utilities for the `infiniscroll` crate.
//!
//! The `infiniscroll` crate is UI-agnostic and focuses on the index math and re-centering state.
//! This crate provides the framework-neutral pieces a toolkit binding needs around it:
//!
//! - Capability traits for the host (`DataSource`, `Delegate`, `ScrollView`)
//! - A `Controller` that translates toolkit callbacks into engine calls
//! - Orientation change notifications with automatic deregistration
//! - Tween-based page scrolling helpers (optional; adapter-driven)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod notify;
mod tween;


pub use controller::Controller;
pub use host::{DataSource, Delegate, ScrollView};
pub use notify::{OrientationCenter, OrientationSubscription};
pub use tween::{Easing, Tween};
