//! Embeddable player URL construction
//!
//! Turns a resolved [`VideoRef`] into the iframe-loadable URL that plays the
//! video without the provider's full page chrome.

use crate::provider::{Provider, VideoRef};
use thiserror::Error;

/// Errors that can occur when building an embed URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The reference does not belong to a supported provider
    #[error("unsupported provider: no embed URL for an unrecognized link")]
    UnsupportedProvider,
}

/// Result type for embed URL construction
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Build the embed URL for a resolved video reference
///
/// The resolver never hands this function an [`Provider::Unknown`] reference
/// in normal flow; receiving one is a contract violation answered with a
/// loud [`EmbedError::UnsupportedProvider`] rather than a silently broken
/// link.
pub fn embed_url(video: &VideoRef) -> Result<String> {
    match video.provider {
        Provider::YouTube => Ok(format!("https://www.youtube.com/embed/{}", video.id)),
        Provider::Vimeo => Ok(format!("https://player.vimeo.com/video/{}", video.id)),
        Provider::Unknown => Err(EmbedError::UnsupportedProvider),
    }
}
