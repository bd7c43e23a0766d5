//! Shared overlay slot
//!
//! At most one overlay lives in the document at a time, even when several
//! controllers are bound to different selectors. The slot turns that
//! implicit assumption into an explicit resource: a controller acquires it
//! when opening and releases it when teardown completes. Acquiring an
//! occupied slot evicts the incumbent overlay (last-writer-wins, a
//! documented limitation rather than a guaranteed semantic).

use parking_lot::Mutex;

/// Ownership token for the single live overlay
#[derive(Debug, Default)]
pub struct OverlaySlot {
    occupied: Mutex<bool>,
}

impl OverlaySlot {
    /// Create a free slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of the slot
    ///
    /// Returns `true` if an incumbent overlay held the slot and must be
    /// evicted from the document by the new owner.
    pub fn acquire(&self) -> bool {
        let mut occupied = self.occupied.lock();
        let evicted = *occupied;
        *occupied = true;
        evicted
    }

    /// Release ownership once the overlay has left the document
    pub fn release(&self) {
        *self.occupied.lock() = false;
    }

    /// Whether an overlay currently owns the slot
    pub fn is_occupied(&self) -> bool {
        *self.occupied.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_slot_is_free() {
        let slot = OverlaySlot::new();
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_acquire_and_release() {
        let slot = OverlaySlot::new();
        assert!(!slot.acquire());
        assert!(slot.is_occupied());

        slot.release();
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_acquire_while_occupied_reports_eviction() {
        let slot = OverlaySlot::new();
        assert!(!slot.acquire());
        assert!(slot.acquire());
        assert!(slot.is_occupied());
    }
}
