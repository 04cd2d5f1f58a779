//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use stateflow::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Dispatcher core
pub use crate::dispatcher::{StateDispatcher, StateFlow, StateId};

// Deferral buffer and name sentinel
pub use crate::dispatcher::{PendingTransition, UNKNOWN_STATE};

// Action signatures
pub use crate::dispatcher::{HookAction, TickAction};
