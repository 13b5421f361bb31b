//! Message types for inter-layer communication in the actor-based
//! architecture.
//!
//! `UiEvent` intents flow from the UI layer to the session actor;
//! `RenderState` snapshots flow back for rendering.

pub mod render;
pub mod ui_events;

pub use render::RenderState;
pub use ui_events::UiEvent;
