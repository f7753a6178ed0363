//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to execute.
//! The reducer only mutates state; everything with a side effect beyond the
//! model goes through an effect.

/// Effects returned by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Tear down the dashboard and return to the shell.
    Quit,
}
