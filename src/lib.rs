//! # Stable Travel TUI
//!
//! A terminal-based stablecoin travel wallet demo: top up, stake, and pay
//! abroad, all against in-memory mock data.
//!
//! ## Features
//! - Balance card with KRW/USDT display modes
//! - Simulated top-up, staking, and foreign-payment flows
//! - Face ID / Touch ID style simulated authentication
//! - Append-only transaction and staking ledgers
//! - Profile settings with snackbar confirmations
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - Session Layer (state machine over session + navigation state)
//! - Engine Layer (logical clock, cancellable timers, progress-driven ops)

pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod ledger;
pub mod messages;
pub mod models;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use engine::{Clock, ManualClock, OpEffect, OpEngine, OpKind, Scheduler, SystemClock, TimerId};
pub use error::WalletError;
pub use ledger::Ledger;
pub use messages::{RenderState, UiEvent};
pub use models::{CurrencyMode, Direction, Settings, StakingRecord, Transaction, UserProfile};
pub use session::nav::{NavState, Overlay, Page};
pub use session::{AppState, SessionActor, SessionState};
