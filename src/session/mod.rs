//! Session layer - central state management and command processing
//!
//! The session actor receives UI events and scheduler ticks, updates the
//! session, navigation, and operation state, and emits render snapshots.

pub mod actor;
pub mod commands;
pub mod nav;
pub mod state;

pub use actor::SessionActor;
pub use state::{AppState, SessionState};
