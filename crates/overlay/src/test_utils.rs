//! Test utilities: an in-memory host document
//!
//! A minimal body model good enough to exercise the controller end to end:
//! a flat list of link elements, at most one overlay node, a focused
//! element, and the scroll-lock flag. Counters record injections, removals,
//! and focus-trap redirects so tests can assert idempotence.

use crate::document::{classes, HostDocument, NodeId};
use parking_lot::Mutex;

/// Snapshot of the overlay node currently in the fake document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayNode {
    /// Raw markup the controller injected
    pub markup: String,
    /// Whether the hide-transition class has been applied
    pub hiding: bool,
}

#[derive(Debug)]
struct FakeLink {
    id: NodeId,
    class: String,
    href: String,
    attached: bool,
}

#[derive(Debug, Default)]
struct FakeDomState {
    links: Vec<FakeLink>,
    overlay: Option<OverlayNode>,
    content_node: Option<NodeId>,
    scroll_locked: bool,
    focused: Option<NodeId>,
    next_id: u64,
    injections: u32,
    removals: u32,
    focus_redirects: u32,
}

impl FakeDomState {
    fn alloc_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }
}

/// In-memory [`HostDocument`] implementation
///
/// Selectors are interpreted as a single class selector (`".video-link"`).
#[derive(Debug, Default)]
pub struct FakeDocument {
    state: Mutex<FakeDomState>,
}

impl FakeDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link element with a class and an `href`; returns its handle
    pub fn add_link(&self, class: &str, href: &str) -> NodeId {
        let mut state = self.state.lock();
        let id = state.alloc_id();
        state.links.push(FakeLink {
            id,
            class: class.to_string(),
            href: href.to_string(),
            attached: true,
        });
        id
    }

    /// Detach a node, simulating the page mutating underneath the controller
    pub fn detach(&self, node: NodeId) {
        let mut state = self.state.lock();
        if let Some(link) = state.links.iter_mut().find(|link| link.id == node) {
            link.attached = false;
        }
        if state.focused == Some(node) {
            state.focused = None;
        }
    }

    /// Move focus to a node, as the browser would on click or tab
    pub fn set_focus(&self, node: NodeId) {
        self.state.lock().focused = Some(node);
    }

    /// The currently focused node
    pub fn focused(&self) -> Option<NodeId> {
        self.state.lock().focused
    }

    /// The overlay node, if one is in the document
    pub fn overlay(&self) -> Option<OverlayNode> {
        self.state.lock().overlay.clone()
    }

    /// Handle of the overlay content container, if an overlay is present
    pub fn overlay_content_node(&self) -> Option<NodeId> {
        self.state.lock().content_node
    }

    /// Whether the body carries the scroll suppression class
    pub fn scroll_locked(&self) -> bool {
        self.state.lock().scroll_locked
    }

    /// How many overlays have been injected so far
    pub fn injection_count(&self) -> u32 {
        self.state.lock().injections
    }

    /// How many overlay nodes have actually been removed
    pub fn removal_count(&self) -> u32 {
        self.state.lock().removals
    }

    /// How many times focus was redirected into the overlay content
    pub fn focus_redirect_count(&self) -> u32 {
        self.state.lock().focus_redirects
    }
}

impl HostDocument for FakeDocument {
    fn select(&self, selector: &str) -> Vec<NodeId> {
        let class = selector.trim_start_matches('.');
        self.state
            .lock()
            .links
            .iter()
            .filter(|link| link.attached && link.class == class)
            .map(|link| link.id)
            .collect()
    }

    fn href(&self, target: NodeId) -> Option<String> {
        self.state
            .lock()
            .links
            .iter()
            .find(|link| link.attached && link.id == target)
            .map(|link| link.href.clone())
    }

    fn active_element(&self) -> Option<NodeId> {
        self.state.lock().focused
    }

    fn inject_overlay(&self, markup: &str) {
        let mut state = self.state.lock();
        debug_assert!(markup.contains(classes::WRAP));
        state.overlay = Some(OverlayNode { markup: markup.to_string(), hiding: false });
        let content = state.alloc_id();
        state.content_node = Some(content);
        state.injections += 1;
    }

    fn overlay_present(&self) -> bool {
        self.state.lock().overlay.is_some()
    }

    fn mark_overlay_hiding(&self) {
        if let Some(overlay) = self.state.lock().overlay.as_mut() {
            overlay.hiding = true;
        }
    }

    fn remove_overlay(&self) -> bool {
        let mut state = self.state.lock();
        if state.overlay.take().is_some() {
            state.content_node = None;
            state.removals += 1;
            true
        } else {
            false
        }
    }

    fn set_scroll_lock(&self, locked: bool) {
        self.state.lock().scroll_locked = locked;
    }

    fn focus(&self, node: NodeId) -> bool {
        let mut state = self.state.lock();
        let present = state.links.iter().any(|link| link.attached && link.id == node)
            || state.content_node == Some(node);
        if present {
            state.focused = Some(node);
        }
        present
    }

    fn overlay_contains(&self, node: NodeId) -> bool {
        self.state.lock().content_node == Some(node)
    }

    fn focus_overlay_content(&self) {
        let mut state = self.state.lock();
        if let Some(content) = state.content_node {
            state.focused = Some(content);
            state.focus_redirects += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_matches_class_selector() {
        let doc = FakeDocument::new();
        let a = doc.add_link("video-link", "https://youtu.be/a");
        let _other = doc.add_link("plain-link", "https://example.com");

        assert_eq!(doc.select(".video-link"), vec![a]);
        assert!(doc.select(".missing").is_empty());
    }

    #[test]
    fn test_detach_makes_references_stale() {
        let doc = FakeDocument::new();
        let a = doc.add_link("video-link", "https://youtu.be/a");

        assert!(doc.focus(a));
        doc.detach(a);
        assert!(!doc.focus(a));
        assert_eq!(doc.href(a), None);
    }

    #[test]
    fn test_remove_overlay_is_idempotent() {
        let doc = FakeDocument::new();
        doc.inject_overlay(r#"<div class="mediabox-wrap"></div>"#);

        assert!(doc.remove_overlay());
        assert!(!doc.remove_overlay());
        assert_eq!(doc.removal_count(), 1);
    }
}
