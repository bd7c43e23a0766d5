//! Provider URL recognition
//!
//! Maps a raw link URL to the video service it belongs to and the video id
//! captured from it. Recognition is first-match-wins: the YouTube pattern is
//! tried before the Vimeo pattern, and a URL matching neither is a normal
//! [`Provider::Unknown`] result rather than an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Video hosting service a URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// YouTube video
    YouTube,
    /// Vimeo video
    Vimeo,
    /// Neither recognized pattern matched
    Unknown,
}

impl Provider {
    /// Get the provider as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Unknown => "unknown",
        }
    }
}

/// A resolved link: the provider it belongs to and the captured video id
///
/// Produced once per click and discarded after the overlay is built.
/// Invariant: `id` is empty exactly when `provider` is [`Provider::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Provider the URL was recognized as
    pub provider: Provider,
    /// Captured video id (empty for unrecognized URLs)
    pub id: String,
}

impl VideoRef {
    /// Create a reference for a recognized provider
    pub fn new(provider: Provider, id: impl Into<String>) -> Self {
        Self { provider, id: id.into() }
    }

    /// The reference for an unrecognized URL
    pub fn unknown() -> Self {
        Self { provider: Provider::Unknown, id: String::new() }
    }

    /// Whether the URL was recognized at all
    pub fn is_known(&self) -> bool {
        self.provider != Provider::Unknown
    }
}

/// Resolve a raw URL into a [`VideoRef`]
///
/// Pure and deterministic; safe to call repeatedly and from tests without
/// any environment setup. The caller decides how to react to an
/// [`Provider::Unknown`] result.
pub fn resolve(url: &str) -> VideoRef {
    if let Some(id) = match_youtube(url) {
        return VideoRef::new(Provider::YouTube, id);
    }
    if let Some(id) = match_vimeo(url) {
        return VideoRef::new(Provider::Vimeo, id);
    }
    VideoRef::unknown()
}

/// Match the YouTube URL forms: `youtu.be/`, `v/`, `u/<char>/`, `embed/`
/// and `watch?v=`. The id is the run of characters up to the next `#`, `&`
/// or `?`.
fn match_youtube(url: &str) -> Option<String> {
    static YOUTUBE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = YOUTUBE_REGEX.get_or_init(|| {
        // The leading .* keeps the last occurrence of the path marker, so a
        // short link that also embeds a marker in its path resolves the same
        // way the reference implementation did.
        Regex::new(r".*(?:youtu\.be/|v/|u/\w/|embed/|watch\?v=)([^#&?]*)").unwrap()
    });
    re.captures(url).map(|cap| cap[1].to_string())
}

/// Match the Vimeo URL forms: plain video, channel, group, and album paths.
/// Only the numeric video id is captured.
fn match_vimeo(url: &str) -> Option<String> {
    static VIMEO_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VIMEO_REGEX.get_or_init(|| {
        Regex::new(
            r"https?://(?:www\.)?vimeo\.com/(?:channels/|groups/[^/]*/videos/|album/\d+/video/|)(\d+)(?:$|/|\?)",
        )
        .unwrap()
    });
    re.captures(url).map(|cap| cap[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_youtube_short_url() {
        let video = resolve("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_watch_url() {
        let video = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_watch_url_with_extra_params() {
        let video = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_embed_url() {
        let video = resolve("https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_v_url() {
        let video = resolve("https://www.youtube.com/v/dQw4w9WgXcQ?version=3");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_user_url() {
        let video = resolve("https://www.youtube.com/u/a/dQw4w9WgXcQ");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_youtube_id_stops_at_fragment() {
        let video = resolve("https://youtu.be/dQw4w9WgXcQ#comments");
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_vimeo_plain_url() {
        let video = resolve("https://vimeo.com/76979871");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_vimeo_with_www_and_trailing_slash() {
        let video = resolve("http://www.vimeo.com/76979871/");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_vimeo_channel_url() {
        let video = resolve("https://vimeo.com/channels/76979871");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_vimeo_group_url() {
        let video = resolve("https://vimeo.com/groups/shortfilms/videos/76979871");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_vimeo_album_url() {
        let video = resolve("https://vimeo.com/album/2222222/video/76979871");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_vimeo_query_suffix() {
        let video = resolve("https://vimeo.com/76979871?autoplay=1");
        assert_eq!(video.provider, Provider::Vimeo);
        assert_eq!(video.id, "76979871");
    }

    #[test]
    fn test_resolve_unrecognized_url() {
        let video = resolve("https://example.com/video");
        assert_eq!(video.provider, Provider::Unknown);
        assert_eq!(video.id, "");
    }

    #[test]
    fn test_resolve_empty_string() {
        let video = resolve("");
        assert_eq!(video, VideoRef::unknown());
    }

    #[test]
    fn test_unknown_id_invariant() {
        // id is empty iff the provider is Unknown
        for url in [
            "https://youtu.be/abc",
            "https://vimeo.com/123",
            "https://example.com/video",
            "not a url at all",
        ] {
            let video = resolve(url);
            assert_eq!(video.id.is_empty(), !video.is_known(), "url: {url}");
        }
    }

    #[test]
    fn test_youtube_tried_before_vimeo() {
        // A URL carrying both a YouTube path marker and a Vimeo-shaped path
        // resolves as YouTube.
        let video = resolve("https://vimeo.com/embed/999");
        assert_eq!(video.provider, Provider::YouTube);
        assert_eq!(video.id, "999");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let a = resolve("https://youtu.be/dQw4w9WgXcQ");
        let b = resolve("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_provider_as_str() {
        assert_eq!(Provider::YouTube.as_str(), "youtube");
        assert_eq!(Provider::Vimeo.as_str(), "vimeo");
        assert_eq!(Provider::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_video_ref_serialization() {
        let video = VideoRef::new(Provider::YouTube, "dQw4w9WgXcQ");
        let json = serde_json::to_string(&video).unwrap();
        assert!(json.contains("youtube"));
        assert!(json.contains("dQw4w9WgXcQ"));

        let deserialized: VideoRef = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, video);
    }
}
