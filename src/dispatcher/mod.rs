//=========================================================================
// State Dispatch System
//=========================================================================
//
// Per-frame finite-state dispatch for game entities.
//
// Architecture:
//   StateDispatcher
//     ├─ states: HashMap<StateId, StateFlow>
//     ├─ names: HashMap<StateId, String>
//     └─ pending: PendingTransition
//
// Flow:
//   tick() → flush pending transition → StateFlow tick action → request
//
//=========================================================================

//=== Module Declarations =================================================

mod pending;
mod state_dispatcher;

//=== Public API ==========================================================

pub use pending::PendingTransition;
pub use state_dispatcher::{StateDispatcher, UNKNOWN_STATE};

//=== State Identity ======================================================

/// Opaque handle identifying a registered state.
///
/// Handles are minted by [`StateDispatcher::register`] and are the only
/// way to reference a state afterwards: callers hold onto them, and tick
/// actions return them to request a transition. Handles are plain `Copy`
/// values, so closures capture them by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) u32);

//=== Action Types ========================================================

/// Per-frame behavior of a state.
///
/// Receives the frame's elapsed seconds. Returning `Some(id)` requests a
/// deferred transition to that state; `None` stays put.
pub type TickAction = Box<dyn FnMut(f32) -> Option<StateId>>;

/// Enter or leave hook of a state. Fires exactly once per transition.
pub type HookAction = Box<dyn FnMut()>;

//=== State Flow ==========================================================

/// Bundle of the actions and display name for one state.
///
/// A flow is built once, handed to [`StateDispatcher::register`], and
/// never mutated afterwards. The tick action is required; enter/leave
/// hooks are attached with the consuming builder methods.
///
/// # Example
///
/// ```rust
/// # use stateflow::StateFlow;
/// let flow = StateFlow::new("idle", |_dt| None)
///     .on_enter(|| println!("settling down"))
///     .on_leave(|| println!("waking up"));
/// assert_eq!(flow.name(), "idle");
/// ```
pub struct StateFlow {
    pub(crate) name: String,
    pub(crate) tick: TickAction,
    pub(crate) on_enter: Option<HookAction>,
    pub(crate) on_leave: Option<HookAction>,
}

impl StateFlow {
    /// Creates a flow with the given display name and tick action.
    ///
    /// The name need not be unique; it is used only for diagnostics.
    pub fn new<F>(name: impl Into<String>, tick: F) -> Self
    where
        F: FnMut(f32) -> Option<StateId> + 'static,
    {
        Self {
            name: name.into(),
            tick: Box::new(tick),
            on_enter: None,
            on_leave: None,
        }
    }

    /// Attaches a hook that fires when the state becomes active.
    pub fn on_enter<H>(mut self, hook: H) -> Self
    where
        H: FnMut() + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attaches a hook that fires when the state is left.
    pub fn on_leave<H>(mut self, hook: H) -> Self
    where
        H: FnMut() + 'static,
    {
        self.on_leave = Some(Box::new(hook));
        self
    }

    /// Display name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }
}

//=== Tests ===============================================================
