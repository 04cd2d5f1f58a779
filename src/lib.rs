//=========================================================================
// Stateflow — Library Root
//
// This crate defines the public API surface of the stateflow dispatcher.
//
// Responsibilities:
// - Expose the per-frame state dispatcher (`StateDispatcher`)
// - Keep the transition protocol and deferral machinery in one module
// - Provide a prelude for glob imports
//
// Typical usage:
// ```no_run
// use stateflow::{StateDispatcher, StateFlow};
//
// let mut dispatcher = StateDispatcher::new();
// let idle = dispatcher.register(StateFlow::new("idle", |_dt| None));
// dispatcher.set_initial_state(idle);
//
// // each frame:
// dispatcher.tick(0.016);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `dispatcher` contains the state registry, the transition protocol, and
// the pending-transition buffer. It is exposed publicly so hosts can name
// every type, but most application code only needs the re-exports below.
//
pub mod dispatcher;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the types most hosts use, so application code can simply
// `use stateflow::StateDispatcher;` without knowing the internal module
// structure.
//
pub use dispatcher::{StateDispatcher, StateFlow, StateId};
