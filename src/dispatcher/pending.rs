//=========================================================================
// Pending Transition
//=========================================================================
//
// One-slot buffer for deferred state transitions.
//
// Tick actions request transitions here during a frame. The dispatcher
// drains the slot at tick boundaries, so a transition never mutates
// dispatcher state from inside the tick action that requested it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::StateId;

//=== Pending Transition ==================================================

/// One-slot buffer for a deferred state transition.
///
/// Holds at most one target. A request made while an earlier one is
/// still waiting supersedes it; the dispatcher has a single active
/// state, so only the latest requested target can take effect.
#[derive(Debug)]
pub struct PendingTransition {
    slot: Option<StateId>,
}

impl PendingTransition {
    /// Creates a new empty slot.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Stores `target` to be applied at the next tick boundary.
    ///
    /// Returns the target it superseded, if one was already waiting.
    pub fn request(&mut self, target: StateId) -> Option<StateId> {
        self.slot.replace(target)
    }

    /// Takes the pending target, leaving the slot empty.
    pub fn take(&mut self) -> Option<StateId> {
        self.slot.take()
    }

    /// Returns the pending target without draining it.
    pub fn get(&self) -> Option<StateId> {
        self.slot
    }

    /// Returns true if no transition is pending.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Discards any pending target.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl Default for PendingTransition {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a new slot holds nothing.
    #[test]
    fn new_slot_is_empty() {
        let pending = PendingTransition::new();

        assert!(pending.is_empty());
        assert_eq!(pending.get(), None);
    }

    /// Tests the request → take round trip.
    #[test]
    fn request_then_take_drains_the_slot() {
        let mut pending = PendingTransition::new();

        assert_eq!(pending.request(StateId(1)), None);
        assert!(!pending.is_empty());
        assert_eq!(pending.get(), Some(StateId(1)));

        assert_eq!(pending.take(), Some(StateId(1)));
        assert!(pending.is_empty());
        assert_eq!(pending.take(), None);
    }

    /// Tests that a later request supersedes an undrained one.
    #[test]
    fn later_request_supersedes_earlier() {
        let mut pending = PendingTransition::new();

        pending.request(StateId(1));
        let superseded = pending.request(StateId(2));

        assert_eq!(superseded, Some(StateId(1)));
        assert_eq!(pending.take(), Some(StateId(2)));
    }

    /// Tests that clear discards the pending target.
    #[test]
    fn clear_discards_pending_target() {
        let mut pending = PendingTransition::new();

        pending.request(StateId(3));
        pending.clear();

        assert!(pending.is_empty());
        assert_eq!(pending.take(), None);
    }

    /// Tests the Default impl matches new().
    #[test]
    fn default_is_empty() {
        let pending = PendingTransition::default();

        assert!(pending.is_empty());
    }
}
