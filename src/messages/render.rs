//! Render state - snapshot sent from the session actor to the UI

use crate::constants::{INITIAL_BALANCE, STAKING_CEILING_RATIO, TOPUP_DEFAULT};
use crate::messages::ui_events::{AuthField, InputMode};
use crate::models::{
    self, CurrencyMode, PricePoint, Settings, StakingRecord, Transaction, UserProfile,
};
use crate::session::nav::{Overlay, Page};

/// Complete state needed by the UI to render one frame
#[derive(Debug, Clone)]
pub struct RenderState {
    // Navigation
    pub page: Page,
    pub topup_sheet: bool,
    pub profile_popup: bool,
    pub face_modal: bool,
    pub overlay_closing: Option<Overlay>,
    pub bottom_nav_visible: bool,

    // Session
    pub is_authenticated: bool,
    pub balance: i64,
    pub currency_mode: CurrencyMode,
    pub settings: Settings,
    pub profile: UserProfile,
    pub transactions: Vec<Transaction>,
    pub staking_history: Vec<StakingRecord>,
    pub price_series: Vec<PricePoint>,

    // Amount selections
    pub topup_amount: i64,
    pub staking_amount: i64,
    pub staking_ceiling: i64,

    // In-flight operations
    pub topup_progress: Option<u8>,
    pub staking_progress: Option<u8>,
    pub payment_progress: Option<u8>,
    pub face_progress: Option<u8>,
    pub fingerprint_pending: bool,

    // Login/signup form
    pub input_mode: InputMode,
    pub auth_field: AuthField,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,

    // Snackbar
    pub notice: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            page: Page::Splash,
            topup_sheet: false,
            profile_popup: false,
            face_modal: false,
            overlay_closing: None,
            bottom_nav_visible: false,
            is_authenticated: false,
            balance: INITIAL_BALANCE,
            currency_mode: CurrencyMode::Krw,
            settings: Settings::default(),
            profile: UserProfile::default(),
            transactions: models::seed_transactions(),
            staking_history: models::seed_staking_history(),
            price_series: models::price_series(),
            topup_amount: TOPUP_DEFAULT,
            staking_amount: (INITIAL_BALANCE as f64 * STAKING_CEILING_RATIO) as i64,
            staking_ceiling: (INITIAL_BALANCE as f64 * STAKING_CEILING_RATIO) as i64,
            topup_progress: None,
            staking_progress: None,
            payment_progress: None,
            face_progress: None,
            fingerprint_pending: false,
            input_mode: InputMode::Normal,
            auth_field: AuthField::Email,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            notice: None,
        }
    }
}
