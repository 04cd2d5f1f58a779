//=========================================================================
// State Dispatcher
//=========================================================================
//
// Manages state registration, the active/previous pointers, and the
// transition protocol.
//
// States are stored in a HashMap keyed by minted StateId handles. A
// secondary map keeps display names for diagnostics, so a name can be
// resolved even for a state that is no longer active.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::pending::PendingTransition;
use super::{StateFlow, StateId};

//=== Constants ===========================================================

/// Sentinel returned by [`StateDispatcher::current_state_name`] when no
/// name can be resolved.
pub const UNKNOWN_STATE: &str = "unknown state";

//=== State Dispatcher ====================================================

/// Drives per-frame state dispatch for one game entity.
///
/// States are registered once and referenced by [`StateId`] handles. The
/// host calls [`tick`](Self::tick) once per frame; the active state's
/// tick action may request a transition by returning another state's
/// handle, and the transition protocol (leave old, update previous,
/// switch, enter new) runs at the next tick boundary rather than inside
/// the requesting action.
///
/// Invalid inputs never fail: an unregistered handle, a missing active
/// state, or a dangling registry entry all degrade to a no-op, reported
/// through the `log` facade.
///
/// # Example
///
/// ```rust
/// use stateflow::{StateDispatcher, StateFlow};
///
/// let mut dispatcher = StateDispatcher::new();
/// let idle = dispatcher.register(StateFlow::new("idle", |_dt| None));
/// dispatcher.set_initial_state(idle);
///
/// // Each frame:
/// dispatcher.tick(0.016);
/// assert_eq!(dispatcher.current_state_name(), "idle");
/// ```
pub struct StateDispatcher {
    states: HashMap<StateId, StateFlow>,
    names: HashMap<StateId, String>,
    current: Option<StateId>,
    previous: Option<StateId>,
    pending: PendingTransition,
    next_id: u32,
    time_in_state: f32,
}

impl StateDispatcher {
    //--- Construction -----------------------------------------------------

    /// Creates a dispatcher with no registered states and no active state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            names: HashMap::new(),
            current: None,
            previous: None,
            pending: PendingTransition::new(),
            next_id: 0,
            time_in_state: 0.0,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state and mints a fresh handle for it.
    ///
    /// The handle never collides with a previously minted one. Pass it to
    /// [`set_initial_state`](Self::set_initial_state), return it from
    /// another state's tick action, or hand it to
    /// [`request_transition`](Self::request_transition).
    pub fn register(&mut self, flow: StateFlow) -> StateId {
        let id = StateId(self.next_id);
        self.next_id += 1;

        debug!("Registered state {:?} ({:?})", id, flow.name);
        self.names.insert(id, flow.name.clone());
        self.states.insert(id, flow);
        id
    }

    /// Rebinds an already-minted handle to a new flow.
    ///
    /// The previous flow and name are discarded. This is also how
    /// mutually referential states are wired: handles are minted in
    /// registration order, so register a placeholder first and rebind it
    /// once the handles its tick action needs exist.
    pub fn rebind(&mut self, id: StateId, flow: StateFlow) {
        if !self.states.contains_key(&id) {
            warn!("Attempted to rebind unregistered state {:?}", id);
            return;
        }

        warn!("State {:?} was already bound and has been replaced", id);
        self.names.insert(id, flow.name.clone());
        self.states.insert(id, flow);
    }

    /// Removes a state's flow and name from the registry.
    ///
    /// Fires no hooks. Returns true when something was removed. The
    /// active handle may dangle afterwards: ticking becomes a no-op and
    /// the name resolves to the sentinel until the next transition.
    pub fn unregister(&mut self, id: StateId) -> bool {
        self.names.remove(&id);
        let removed = self.states.remove(&id).is_some();

        if !removed {
            debug!("State {:?} not registered, nothing to unregister", id);
        } else if self.current == Some(id) {
            warn!("Unregistered the active state {:?}", id);
        }

        removed
    }

    //--- Activation -------------------------------------------------------

    /// Activates `id` by running the full transition protocol for it.
    ///
    /// Intended to be called once after all registrations, but a later
    /// call is honored the same way: the active state's leave hook fires,
    /// then the target's enter hook. Ignored when `id` is unregistered.
    pub fn set_initial_state(&mut self, id: StateId) {
        if !self.states.contains_key(&id) {
            warn!("Attempted to activate unregistered state {:?}", id);
            return;
        }

        debug!("Activating initial state {:?}", id);
        self.run_transition(id);
    }

    /// Schedules a deferred transition to `id`.
    ///
    /// The transition protocol does not run inline; it runs at the next
    /// flush point — the start of the next [`tick`](Self::tick), or an
    /// explicit [`flush_transitions`](Self::flush_transitions) call.
    /// Requesting again before the flush supersedes the earlier target.
    /// Ignored when `id` is unregistered.
    pub fn request_transition(&mut self, id: StateId) {
        if !self.states.contains_key(&id) {
            warn!("Requested transition to unregistered state {:?}", id);
            return;
        }

        if let Some(superseded) = self.pending.request(id) {
            debug!(
                "Pending transition to {:?} superseded by {:?}",
                superseded, id
            );
        }
    }

    //--- Frame Update -----------------------------------------------------

    /// Advances the active state by one frame.
    ///
    /// Flushes any pending transition first, so a transition requested
    /// last frame is applied before this frame's logic runs. Then invokes
    /// the active state's tick action with `elapsed`; if the action
    /// returns a registered handle other than the active one, a
    /// transition to it is scheduled. No-op when no state is active.
    pub fn tick(&mut self, elapsed: f32) {
        self.flush_transitions();

        let Some(current) = self.current else {
            return;
        };
        let Some(flow) = self.states.get_mut(&current) else {
            // Registry entry removed after activation
            return;
        };

        self.time_in_state += elapsed;

        match (flow.tick)(elapsed) {
            Some(next) if next == current => {
                debug!("State {:?} requested itself, ignoring", current);
            }
            Some(next) => self.request_transition(next),
            None => {}
        }
    }

    /// Drains the pending slot and runs the transition protocol.
    ///
    /// Runs automatically at the start of every [`tick`](Self::tick);
    /// hosts that want a requested transition applied at frame end can
    /// call it directly instead.
    pub fn flush_transitions(&mut self) {
        let Some(target) = self.pending.take() else {
            return;
        };

        // The target may have been unregistered since the request.
        if !self.states.contains_key(&target) {
            warn!(
                "Dropping pending transition to unregistered state {:?}",
                target
            );
            return;
        }

        // A transition to the active state is a no-op: no hooks fire and
        // the previous-state pointer is untouched.
        if self.current == Some(target) {
            debug!("Pending transition to active state {:?}, skipping", target);
            return;
        }

        self.run_transition(target);
    }

    //--- Accessors --------------------------------------------------------

    /// Handle of the active state, if any.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Handle of the state that was active before the last transition.
    ///
    /// Unset until the first transition away from a state, never cleared
    /// afterwards.
    pub fn previous_state(&self) -> Option<StateId> {
        self.previous
    }

    /// Display name of the active state.
    ///
    /// Returns [`UNKNOWN_STATE`] when no state is active or its registry
    /// entry is gone.
    pub fn current_state_name(&self) -> &str {
        self.current
            .and_then(|id| self.names.get(&id))
            .map_or(UNKNOWN_STATE, String::as_str)
    }

    /// Display name bound to `id`, if it is registered.
    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Returns true if `id` is currently registered.
    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Returns true if a deferred transition is waiting to be flushed.
    pub fn transition_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Seconds accumulated by [`tick`](Self::tick) since the last
    /// transition.
    pub fn time_in_state(&self) -> f32 {
        self.time_in_state
    }

    //--- Internal Helpers -------------------------------------------------

    /// Runs the transition protocol: leave the active state, update the
    /// previous pointer, switch, enter the target.
    fn run_transition(&mut self, target: StateId) {
        debug!("Transitioning {:?} -> {:?}", self.current, target);

        if let Some(current) = self.current {
            // Leave the state we are moving away from, if its registry
            // entry still exists.
            if let Some(flow) = self.states.get_mut(&current) {
                if let Some(hook) = flow.on_leave.as_mut() {
                    hook();
                }
            }

            // The previous pointer captures whatever was active going
            // into the transition, whether or not the lookup succeeded.
            self.previous = Some(current);
        }

        self.current = Some(target);
        self.time_in_state = 0.0;

        if let Some(flow) = self.states.get_mut(&target) {
            if let Some(hook) = flow.on_enter.as_mut() {
                hook();
            }
        }
    }
}

impl Default for StateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
