//! MediaBox - a video lightbox engine
//!
//! Intercepts clicks on designated links, recognizes YouTube and Vimeo
//! URLs, and drives an embeddable player overlay through its
//! `Closed → Open → Hiding → Closed` lifecycle against an abstract host
//! document.
//!
//! The workspace splits along that line:
//!
//! - `embed-core` - pure logic: provider resolution, embed URL building,
//!   query serialization, template rendering
//! - `overlay` - the stateful controller: host-document abstraction,
//!   shared overlay slot, cancellable teardown timer, state machine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mediabox::{Lightbox, OverlayConfig};
//! use mediabox::test_utils::FakeDocument;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doc = Arc::new(FakeDocument::new());
//! let link = doc.add_link("video-link", "https://youtu.be/dQw4w9WgXcQ");
//!
//! let lightbox = Lightbox::bind(Arc::clone(&doc), ".video-link", OverlayConfig::new()).unwrap();
//! lightbox.handle_click(link).unwrap();
//! assert!(doc.overlay().is_some());
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embed_core::{
    embed_url, query_string, render, resolve, EmbedError, OverlayConfig, Provider, VideoRef,
    DEFAULT_AUTOPLAY,
};
pub use overlay::{
    classes, overlay_template, DismissRole, HostDocument, Key, Lightbox, LightboxError, NodeId,
    OverlaySlot, Phase, TargetSpec, TeardownTimer, HIDE_DELAY,
};

pub use overlay::test_utils;
