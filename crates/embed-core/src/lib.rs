//! Core embed logic for MediaBox
//!
//! This crate contains the pure, host-independent half of the lightbox:
//! recognizing which video service a link points at, building the
//! iframe-loadable player URL for it, serializing overlay options into a
//! query string, and filling markup templates.
//!
//! Everything here is synchronous and deterministic. Nothing in this crate
//! touches the host document; the stateful overlay lifecycle lives in the
//! `overlay` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod provider;
pub mod query;
pub mod template;

pub use embed::{embed_url, EmbedError};
pub use provider::{resolve, Provider, VideoRef};
pub use query::{query_string, OverlayConfig, DEFAULT_AUTOPLAY};
pub use template::render;
