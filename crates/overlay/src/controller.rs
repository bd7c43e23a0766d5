//! Click-to-overlay state machine
//!
//! [`Lightbox`] binds to a set of link elements and drives the overlay
//! through `Closed → Open → Hiding → Closed`. One cycle: a click resolves
//! the link, builds the embed URL and query string, renders the markup
//! skeleton, captures the focused element, acquires the overlay slot, and
//! injects the overlay. Dismissal marks the overlay hiding synchronously
//! and schedules removal after [`HIDE_DELAY`]; the deferred teardown
//! restores focus and releases the slot.
//!
//! The host adapter is expected to suppress the click's default navigation
//! before delivering it, and to forward overlay clicks as tagged
//! [`DismissRole`]s rather than raw class names.

use crate::document::{overlay_template, DismissRole, HostDocument, Key, NodeId};
use crate::slot::OverlaySlot;
use crate::teardown::{TeardownTimer, HIDE_DELAY};
use embed_core::{embed_url, query_string, render, resolve, OverlayConfig};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the overlay controller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LightboxError {
    /// No target elements were supplied or matched at construction
    #[error("no target elements to bind")]
    NoTargets,

    /// A bound link's URL matched neither provider pattern
    #[error("unrecognized video URL: {0}")]
    UnrecognizedUrl(String),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, LightboxError>;

/// Targets to bind at construction
#[derive(Debug, Clone)]
pub enum TargetSpec {
    /// Resolve a CSS selector against the document at bind time
    Selector(String),
    /// Bind an explicit set of elements
    Nodes(Vec<NodeId>),
}

impl From<&str> for TargetSpec {
    fn from(selector: &str) -> Self {
        TargetSpec::Selector(selector.to_string())
    }
}

impl From<String> for TargetSpec {
    fn from(selector: String) -> Self {
        TargetSpec::Selector(selector)
    }
}

impl From<Vec<NodeId>> for TargetSpec {
    fn from(nodes: Vec<NodeId>) -> Self {
        TargetSpec::Nodes(nodes)
    }
}

/// Overlay lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No overlay in the document
    #[default]
    Closed,
    /// Overlay injected and interactive
    Open,
    /// Hide transition playing, teardown pending
    Hiding,
}

#[derive(Debug, Default)]
struct ControllerState {
    phase: Phase,
    /// Element focused at open time, restored when teardown completes
    last_focus: Option<NodeId>,
    teardown: TeardownTimer,
}

#[derive(Debug)]
struct Inner<D: HostDocument> {
    doc: Arc<D>,
    targets: Vec<NodeId>,
    config: OverlayConfig,
    slot: Arc<OverlaySlot>,
    state: Mutex<ControllerState>,
}

impl<D: HostDocument> Inner<D> {
    /// Hiding → Closed: runs when the teardown timer fires. The overlay may
    /// already be gone if the page mutated independently; that is a silent
    /// local no-op, not a failure.
    fn finish_teardown(&self) {
        let mut state = self.state.lock();
        if self.doc.remove_overlay() {
            self.doc.set_scroll_lock(false);
            if let Some(node) = state.last_focus.take() {
                if !self.doc.focus(node) {
                    tracing::debug!(?node, "focus restore target no longer in document");
                }
            }
        } else {
            tracing::debug!("overlay already gone before teardown ran");
            state.last_focus = None;
        }
        self.slot.release();
        state.phase = Phase::Closed;
    }
}

/// The overlay controller
///
/// Bound once to a set of link elements; each click on a bound target runs
/// one open cycle. At most one overlay is live per [`OverlaySlot`], and the
/// controller retains nothing between cycles: every open starts from a
/// fresh click. Cloning shares the same controller state; dropping the last
/// clone aborts any pending teardown.
#[derive(Debug)]
pub struct Lightbox<D: HostDocument> {
    inner: Arc<Inner<D>>,
}

impl<D: HostDocument> Clone for Lightbox<D> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<D: HostDocument> Lightbox<D> {
    /// Bind a controller to target elements with its own overlay slot
    ///
    /// `targets` is a CSS selector or an explicit element list. Fails with
    /// [`LightboxError::NoTargets`] when nothing matches: a controller with
    /// no targets would never open and is declined outright.
    pub fn bind(
        doc: Arc<D>,
        targets: impl Into<TargetSpec>,
        config: OverlayConfig,
    ) -> Result<Self> {
        Self::bind_shared(doc, targets, config, Arc::new(OverlaySlot::new()))
    }

    /// Bind a controller that shares an overlay slot with other controllers
    ///
    /// Controllers bound to different selectors on the same document should
    /// share one slot so the single-overlay guarantee holds across all of
    /// them.
    pub fn bind_shared(
        doc: Arc<D>,
        targets: impl Into<TargetSpec>,
        config: OverlayConfig,
        slot: Arc<OverlaySlot>,
    ) -> Result<Self> {
        let targets = match targets.into() {
            TargetSpec::Selector(selector) => doc.select(&selector),
            TargetSpec::Nodes(nodes) => nodes,
        };
        if targets.is_empty() {
            return Err(LightboxError::NoTargets);
        }

        Ok(Self {
            inner: Arc::new(Inner {
                doc,
                targets,
                config,
                slot,
                state: Mutex::new(ControllerState::default()),
            }),
        })
    }

    /// Elements whose clicks this controller intercepts
    pub fn targets(&self) -> &[NodeId] {
        &self.inner.targets
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.inner.state.lock().phase
    }

    /// Closed → Open: handle a click on a bound target
    ///
    /// The host adapter has already suppressed the click's default
    /// navigation. On an unrecognized URL this fails loudly and the state
    /// stays `Closed`: no overlay opens and no navigation happens.
    pub fn handle_click(&self, target: NodeId) -> Result<()> {
        if !self.inner.targets.contains(&target) {
            tracing::debug!(?target, "click on unbound element ignored");
            return Ok(());
        }

        let url = self.inner.doc.href(target).unwrap_or_default();
        let video = resolve(&url);
        let embed = match embed_url(&video) {
            Ok(embed) => embed,
            Err(err) => {
                tracing::error!(url = %url, %err, "refusing to open overlay");
                return Err(LightboxError::UnrecognizedUrl(url));
            }
        };

        let params = query_string(&self.inner.config);
        let substitutions =
            HashMap::from([("embed", embed.as_str()), ("params", params.as_str())]);
        let markup = render(overlay_template(), &substitutions);

        let mut state = self.inner.state.lock();
        // A fresh open supersedes anything this controller still has in
        // flight, including a pending teardown.
        state.teardown.cancel();
        if self.inner.slot.acquire() {
            // Evict the incumbent overlay (last-writer-wins).
            self.inner.doc.remove_overlay();
        }

        state.last_focus = self.inner.doc.active_element();
        self.inner.doc.inject_overlay(&markup);
        self.inner.doc.set_scroll_lock(true);
        // Dismissal handlers consult the phase, so marking the overlay open
        // only after injection makes "dismissed before it exists"
        // structurally impossible.
        state.phase = Phase::Open;

        tracing::debug!(provider = video.provider.as_str(), id = %video.id, "overlay opened");
        Ok(())
    }

    /// Open → Hiding: dismissal via one of the overlay click roles
    pub fn dismiss(&self, role: DismissRole) {
        tracing::debug!(?role, "overlay dismissal requested");
        self.begin_teardown();
    }

    /// Keyboard dismissal
    ///
    /// `Escape` works page-globally while an overlay is up; `Enter` only
    /// when focus is inside the overlay content.
    pub fn handle_key(&self, key: Key) {
        match key {
            Key::Escape => self.begin_teardown(),
            Key::Enter => {
                let in_content = self
                    .inner
                    .doc
                    .active_element()
                    .is_some_and(|node| self.inner.doc.overlay_contains(node));
                if in_content {
                    self.begin_teardown();
                }
            }
        }
    }

    /// Focus trap: while an overlay is up, focus landing outside the
    /// overlay content is redirected back into it
    pub fn handle_focus(&self, node: NodeId) {
        let trapped = self.inner.state.lock().phase != Phase::Closed;
        if trapped && !self.inner.doc.overlay_contains(node) {
            self.inner.doc.focus_overlay_content();
        }
    }

    /// Apply the hiding class synchronously and schedule the deferred
    /// removal. A dismissal while already `Hiding` supersedes the pending
    /// timer, so a double dismissal never produces a double teardown.
    fn begin_teardown(&self) {
        let mut state = self.inner.state.lock();
        if state.phase == Phase::Closed {
            return;
        }

        self.inner.doc.mark_overlay_hiding();
        state.phase = Phase::Hiding;

        let inner = Arc::downgrade(&self.inner);
        state.teardown.schedule(HIDE_DELAY, async move {
            if let Some(inner) = inner.upgrade() {
                inner.finish_teardown();
            }
        });
    }
}
