//! Session state - the single source of truth for wallet data, plus the
//! central `AppState` that couples it with navigation and the operation
//! engine.

use std::time::Instant;

use crate::constants::{
    INITIAL_BALANCE, SPLASH_DURATION, STAKING_APY, STAKING_CEILING_RATIO, TOPUP_DEFAULT,
};
use crate::engine::{Clock, OpEngine, OpKind, Scheduler, SystemClock, TimerId};
use crate::error::{Result, WalletError};
use crate::format;
use crate::ledger::Ledger;
use crate::messages::ui_events::{AuthField, InputMode};
use crate::messages::RenderState;
use crate::models::{
    self, CurrencyMode, Direction, PricePoint, SettingKey, Settings, StakingRecord, Transaction,
    UserProfile,
};
use crate::session::nav::NavState;

/// Wallet session data. Owned exclusively by the session actor; all
/// mutation happens through the operations below, never by direct field
/// writes from presentation code.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub balance: i64,
    pub currency_mode: CurrencyMode,
    pub is_authenticated: bool,
    pub settings: Settings,
    pub transactions: Ledger<Transaction>,
    pub staking_history: Ledger<StakingRecord>,
    pub profile: UserProfile,
    pub price_series: Vec<PricePoint>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            balance: INITIAL_BALANCE,
            currency_mode: CurrencyMode::Krw,
            is_authenticated: false,
            settings: Settings::default(),
            transactions: Ledger::seeded(models::seed_transactions()),
            staking_history: Ledger::seeded(models::seed_staking_history()),
            profile: UserProfile::default(),
            price_series: models::price_series(),
        }
    }

    /// Maximum stakeable amount (30% of the current balance)
    pub fn staking_ceiling(&self) -> i64 {
        (self.balance as f64 * STAKING_CEILING_RATIO) as i64
    }

    /// Credit the balance and prepend a positive ledger entry
    pub fn apply_topup(&mut self, amount: i64, today: &str) -> Result<()> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount(amount));
        }
        self.balance += amount;
        self.transactions.prepend(Transaction::new(
            "충전",
            format::krw(amount),
            Direction::Positive,
            today,
        ));
        Ok(())
    }

    /// Record a staking deposit. The balance is intentionally not reduced:
    /// staking is tracked as a side ledger, not a transfer.
    pub fn apply_staking(&mut self, amount: i64, today: &str) -> Result<i64> {
        let ceiling = self.staking_ceiling();
        if amount < 0 || amount > ceiling {
            return Err(WalletError::StakingCeiling { amount, ceiling });
        }
        let earned = (amount as f64 * STAKING_APY / 365.0).round() as i64;
        self.staking_history.prepend(StakingRecord {
            date: today.to_string(),
            amount: format::krw(amount),
            apy: format!("{:.1}%", STAKING_APY * 100.0),
            earned: format::krw(earned),
        });
        Ok(earned)
    }

    /// Debit the converted amount and prepend a negative ledger entry with
    /// the foreign-currency label. There is no insufficient-funds check;
    /// a payment may overdraw the demo balance.
    pub fn apply_payment(&mut self, amount_eur: f64, rate: f64, today: &str) -> Result<i64> {
        if amount_eur <= 0.0 || rate <= 0.0 {
            return Err(WalletError::InvalidAmount(amount_eur as i64));
        }
        let amount_krw = (amount_eur * rate).round() as i64;
        self.balance -= amount_krw;
        self.transactions.prepend(Transaction::new(
            "해외 결제",
            format::eur(amount_eur),
            Direction::Negative,
            today,
        ));
        Ok(amount_krw)
    }

    pub fn update_setting(&mut self, key: SettingKey, value: bool) {
        self.settings.set(key, value);
    }

    /// Display-mode switch only; the underlying balance and ledgers are
    /// untouched
    pub fn set_currency_mode(&mut self, mode: CurrencyMode) {
        self.currency_mode = mode;
    }
}

/// Central application state: session data, navigation, the operation
/// engine, and transient view-model fields, driven by UI events and
/// scheduler ticks.
pub struct AppState {
    pub session: SessionState,
    pub nav: NavState,
    pub engine: OpEngine,
    pub scheduler: Scheduler,
    clock: Box<dyn Clock>,

    // Amount selections
    pub topup_amount: i64,
    pub staking_amount: i64,

    // Login/signup form
    pub input_mode: InputMode,
    pub auth_field: AuthField,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,

    // Snackbar
    pub notice: Option<String>,
    pub(crate) notice_timer: Option<TimerId>,

    // Navigation timers
    pub(crate) splash_timer: Option<TimerId>,
    pub(crate) close_timer: Option<TimerId>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let session = SessionState::new();
        let staking_amount = session.staking_ceiling();
        let mut scheduler = Scheduler::new();
        let splash_timer = scheduler.schedule(clock.now(), SPLASH_DURATION);
        AppState {
            session,
            nav: NavState::new(),
            engine: OpEngine::new(),
            scheduler,
            clock,
            topup_amount: TOPUP_DEFAULT,
            staking_amount,
            input_mode: InputMode::Normal,
            auth_field: AuthField::Email,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            notice: None,
            notice_timer: None,
            splash_timer: Some(splash_timer),
            close_timer: None,
        }
    }

    pub(crate) fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Ledger date for entries created "today"
    pub(crate) fn today_string(&self) -> String {
        self.clock.today().format("%Y.%m.%d").to_string()
    }

    /// Convert state to an immutable snapshot for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            page: self.nav.page,
            topup_sheet: self.nav.topup_sheet(),
            profile_popup: self.nav.profile_popup(),
            face_modal: self.nav.face_modal(),
            overlay_closing: self.nav.closing(),
            bottom_nav_visible: self.nav.bottom_nav_visible(self.session.is_authenticated),
            is_authenticated: self.session.is_authenticated,
            balance: self.session.balance,
            currency_mode: self.session.currency_mode,
            settings: self.session.settings,
            profile: self.session.profile.clone(),
            transactions: self.session.transactions.to_vec(),
            staking_history: self.session.staking_history.to_vec(),
            price_series: self.session.price_series.clone(),
            topup_amount: self.topup_amount,
            staking_amount: self.staking_amount,
            staking_ceiling: self.session.staking_ceiling(),
            topup_progress: self.engine.progress(OpKind::Topup),
            staking_progress: self.engine.progress(OpKind::Staking),
            payment_progress: self.engine.progress(OpKind::Payment),
            face_progress: self.engine.progress(OpKind::FaceScan),
            fingerprint_pending: self.engine.in_flight(OpKind::Fingerprint),
            input_mode: self.input_mode,
            auth_field: self.auth_field,
            name_input: self.name_input.clone(),
            email_input: self.email_input.clone(),
            password_input: self.password_input.clone(),
            notice: self.notice.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topup_credits_and_prepends() {
        let mut session = SessionState::new();
        let before = session.balance;
        session.apply_topup(100_000, "2024.01.20").unwrap();
        assert_eq!(session.balance, before + 100_000);
        let head = session.transactions.get(0).unwrap();
        assert_eq!(head.description, "충전");
        assert_eq!(head.amount, "₩100,000");
        assert_eq!(head.direction, Direction::Positive);
    }

    #[test]
    fn test_topup_rejects_non_positive_amounts() {
        let mut session = SessionState::new();
        let before = session.balance;
        assert!(session.apply_topup(0, "2024.01.20").is_err());
        assert!(session.apply_topup(-5_000, "2024.01.20").is_err());
        assert_eq!(session.balance, before);
        assert_eq!(session.transactions.len(), 2);
    }

    #[test]
    fn test_staking_leaves_balance_untouched() {
        let mut session = SessionState::new();
        let before = session.balance;
        let earned = session.apply_staking(200_000, "2024.01.20").unwrap();
        // round(200000 * 0.085 / 365)
        assert_eq!(earned, 47);
        assert_eq!(session.balance, before);
        let head = session.staking_history.get(0).unwrap();
        assert_eq!(head.amount, "₩200,000");
        assert_eq!(head.apy, "8.5%");
        assert_eq!(head.earned, "₩47");
    }

    #[test]
    fn test_staking_rejects_above_ceiling() {
        let mut session = SessionState::new();
        // ceiling = 1,250,000 * 0.3 = 375,000
        assert_eq!(session.staking_ceiling(), 375_000);
        let err = session.apply_staking(400_000, "2024.01.20").unwrap_err();
        assert_eq!(
            err,
            WalletError::StakingCeiling {
                amount: 400_000,
                ceiling: 375_000
            }
        );
        assert_eq!(session.staking_history.len(), 2);
    }

    #[test]
    fn test_payment_debits_converted_amount() {
        let mut session = SessionState::new();
        let before = session.balance;
        let debited = session.apply_payment(50.0, 1480.0, "2024.01.20").unwrap();
        assert_eq!(debited, 74_000);
        assert_eq!(session.balance, before - 74_000);
        let head = session.transactions.get(0).unwrap();
        assert_eq!(head.description, "해외 결제");
        assert_eq!(head.amount, "€50");
        assert_eq!(head.direction, Direction::Negative);
    }

    #[test]
    fn test_payment_may_drive_balance_negative() {
        let mut session = SessionState::new();
        session.balance = 10_000;
        session.apply_payment(50.0, 1480.0, "2024.01.20").unwrap();
        assert_eq!(session.balance, 10_000 - 74_000);
    }

    #[test]
    fn test_currency_mode_round_trip_is_pure_display() {
        let mut session = SessionState::new();
        let balance = session.balance;
        let ledger = session.transactions.to_vec();
        session.set_currency_mode(CurrencyMode::Usdt);
        session.set_currency_mode(CurrencyMode::Krw);
        assert_eq!(session.balance, balance);
        assert_eq!(session.transactions.len(), ledger.len());
        assert_eq!(session.transactions.get(0).unwrap().amount, ledger[0].amount);
    }
}
