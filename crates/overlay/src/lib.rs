//! Overlay controller for MediaBox
//!
//! The stateful half of the lightbox: a host-document abstraction, the
//! shared overlay slot, the cancellable teardown timer, and the
//! click-to-overlay state machine that ties them together.
//!
//! # Modules
//!
//! - [`document`] - The [`HostDocument`] trait and the DOM contract
//! - [`slot`] - The shared single-overlay ownership slot
//! - [`teardown`] - The deferred, cancellable teardown timer
//! - [`controller`] - The [`Lightbox`] state machine
//! - [`test_utils`] - An in-memory host document for tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod document;
pub mod slot;
pub mod teardown;
pub mod test_utils;

pub use controller::{Lightbox, LightboxError, Phase, TargetSpec};
pub use document::{classes, overlay_template, DismissRole, HostDocument, Key, NodeId};
pub use slot::OverlaySlot;
pub use teardown::{TeardownTimer, HIDE_DELAY};
