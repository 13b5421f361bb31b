//! Application constants
//!
//! Centralized location for magic numbers, timings, and mock-data defaults.

use std::time::Duration;

/// Fixed KRW per USDT used for the display-mode conversion (mock rate)
pub const KRW_PER_USDT: f64 = 1350.0;

/// KRW per USDC quote shown on the top-up preview (mock rate)
pub const TOPUP_CONVERSION_RATE: f64 = 1.35;

/// Annual staking yield
pub const STAKING_APY: f64 = 0.085;

/// Share of the balance eligible for staking
pub const STAKING_CEILING_RATIO: f64 = 0.3;

/// Progress added per operation tick
pub const PROGRESS_STEP: u8 = 10;

/// Interval between operation progress ticks
pub const PROGRESS_TICK: Duration = Duration::from_millis(200);

/// Total splash display time before switching to the login page
pub const SPLASH_DURATION: Duration = Duration::from_millis(3500);

/// Overlay fade-out time before the overlay is actually dismissed
pub const OVERLAY_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Snackbar auto-dismiss delay
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// UI tick driving the scheduler poll
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Top-up amount selection bounds and step (KRW)
pub const TOPUP_MIN: i64 = 10_000;
pub const TOPUP_MAX: i64 = 1_000_000;
pub const TOPUP_STEP: i64 = 10_000;
pub const TOPUP_DEFAULT: i64 = 100_000;

/// Staking amount selection step (KRW)
pub const STAKING_STEP: i64 = 10_000;

/// Fixed demo payment: 50 EUR at 1,480 KRW per EUR
pub const PAYMENT_AMOUNT_EUR: f64 = 50.0;
pub const PAYMENT_RATE_KRW_PER_EUR: f64 = 1480.0;

/// Opening balance (KRW)
pub const INITIAL_BALANCE: i64 = 1_250_000;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Stable Travel TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
