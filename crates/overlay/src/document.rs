//! Host document abstraction
//!
//! The controller touches the page only through the [`HostDocument`] trait:
//! an injection point at the end of `<body>`, a focus target, and a handful
//! of class toggles shared with the stylesheet. A real DOM adapter and the
//! in-memory test double in [`crate::test_utils`] both implement it.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Class and structure names shared with the accompanying stylesheet
///
/// These are a binding contract: renaming any of them breaks the visual
/// behavior of the overlay.
pub mod classes {
    /// Root overlay wrapper element
    pub const WRAP: &str = "mediabox-wrap";
    /// Content container inside the wrapper
    pub const CONTENT: &str = "mediabox-content";
    /// Close affordance in the content corner
    pub const CLOSE: &str = "mediabox-close";
    /// Body-level scroll suppression flag
    pub const STOP_SCROLL: &str = "stop-scroll";
    /// Exit-transition class applied while the overlay is hiding
    pub const HIDE: &str = "mediabox-hide";
}

/// Markup skeleton rendered once per open cycle
///
/// Built from the [`classes`] constants so the stylesheet contract and the
/// markup cannot drift apart. `{embed}` and `{params}` are filled in by the
/// template renderer before injection.
pub fn overlay_template() -> &'static str {
    static TEMPLATE: OnceLock<String> = OnceLock::new();
    TEMPLATE.get_or_init(|| {
        format!(
            concat!(
                r#"<div class="{wrap}" role="dialog" aria-hidden="false">"#,
                r#"<div class="{content}" role="document" tabindex="0">"#,
                r#"<span id="mediabox-esc" class="{close}" aria-label="close" tabindex="1"></span>"#,
                r#"<iframe src="{{embed}}{{params}}" frameborder="0" allowfullscreen></iframe>"#,
                r#"</div></div>"#
            ),
            wrap = classes::WRAP,
            content = classes::CONTENT,
            close = classes::CLOSE,
        )
    })
}

/// Opaque handle to an element in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Dismissal trigger roles on the overlay
///
/// A closed set of tagged roles instead of string comparisons on class or
/// tag names. Clicks on the iframe itself are not delivered as any role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissRole {
    /// The close affordance
    CloseButton,
    /// The backdrop around the content
    Backdrop,
    /// The content area outside the iframe
    ContentArea,
}

/// Keyboard inputs the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Page-global dismissal while an overlay is open
    Escape,
    /// Dismissal when focus is inside the overlay content
    Enter,
}

/// The controller's only window onto the host page
///
/// All operations are synchronous and complete within the calling event
/// handler. Stale references are reported through return values, never as
/// failures: the page may mutate underneath the controller at any time.
pub trait HostDocument: Send + Sync + 'static {
    /// Resolve a CSS selector to the matching elements
    fn select(&self, selector: &str) -> Vec<NodeId>;

    /// Read an element's `href` attribute
    fn href(&self, target: NodeId) -> Option<String>;

    /// The currently focused element, if any
    fn active_element(&self) -> Option<NodeId>;

    /// Append overlay markup at the end of `<body>`
    fn inject_overlay(&self, markup: &str);

    /// Whether an overlay node is currently in the document
    fn overlay_present(&self) -> bool;

    /// Apply the hide-transition class to the overlay
    fn mark_overlay_hiding(&self);

    /// Remove the overlay node; returns `false` if it was already gone
    fn remove_overlay(&self) -> bool;

    /// Toggle the body-level scroll suppression class
    fn set_scroll_lock(&self, locked: bool);

    /// Focus an element; returns `false` if the reference is stale
    fn focus(&self, node: NodeId) -> bool;

    /// Whether a node sits inside the overlay content
    fn overlay_contains(&self, node: NodeId) -> bool;

    /// Move focus into the overlay content (focus-trap redirect)
    fn focus_overlay_content(&self);
}
