//! UI events - intents from the presentation layer to the session actor

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::render::RenderState;
use crate::models::{CurrencyMode, SettingKey};
use crate::session::nav::Page;

/// Social providers on the login and signup views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Kakao,
    Line,
    Google,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "kakao",
            SocialProvider::Line => "line",
            SocialProvider::Google => "google",
        }
    }
}

/// Fields editable on the login/signup forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
}

/// Input mode (normal keys navigate; editing keys type into the focused field)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Navigation
    Navigate(Page),
    SwitchToSignup,
    SwitchToLogin,
    ShowTopupSheet,
    ShowProfilePopup,
    ShowFaceAuth,
    CloseOverlay,
    /// Close the profile popup and open the staking page in one step
    ManageStaking,

    // Authentication
    SubmitCredentials,
    SocialLogin(SocialProvider),
    QuickFingerprint,
    StartFaceScan,
    Logout,

    // Form editing
    StartEditing,
    StopEditing,
    NextField,
    CharInput(char),
    Backspace,

    // Wallet operations
    TopupAmountUp,
    TopupAmountDown,
    StartTopup,
    StakeAmountUp,
    StakeAmountDown,
    StartStaking,
    StartPayment,

    // Display + settings
    SetCurrency(CurrencyMode),
    SettingChange(SettingKey, bool),

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on the currently rendered state
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Overlays take precedence over the base page
    if state.face_modal {
        return face_modal_keys(key);
    }
    if state.topup_sheet {
        return topup_keys(key, state, true);
    }
    if state.profile_popup {
        return profile_keys(key, state, true);
    }

    match state.page {
        Page::Splash => None, // no input during splash
        Page::Login | Page::Signup => auth_keys(key, state),
        Page::Home => home_keys(key, state),
        Page::Topup => topup_keys(key, state, false),
        Page::Staking => staking_keys(key, state),
        Page::Payment => payment_keys(key, state),
        Page::Profile => profile_keys(key, state, false),
        Page::Transactions => base_page_keys(key, state),
    }
}

/// Keys shared by every authenticated base page: bottom navigation,
/// currency toggle, profile popup, quit
fn base_page_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('1') => Some(UiEvent::Navigate(Page::Home)),
        KeyCode::Char('2') => Some(UiEvent::Navigate(Page::Staking)),
        KeyCode::Char('3') => Some(UiEvent::Navigate(Page::Payment)),
        KeyCode::Char('4') => Some(UiEvent::Navigate(Page::Transactions)),
        KeyCode::Char('m') => Some(UiEvent::SetCurrency(state.currency_mode.toggled())),
        KeyCode::Char('p') => Some(UiEvent::ShowProfilePopup),
        _ => None,
    }
}

/// Handle keys for the login and signup pages
fn auth_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match state.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('e') => Some(UiEvent::StartEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Enter => Some(UiEvent::SubmitCredentials),
            KeyCode::Char('f') => Some(UiEvent::ShowFaceAuth),
            KeyCode::Char('t') => Some(UiEvent::QuickFingerprint),
            KeyCode::Char('1') => Some(UiEvent::SocialLogin(SocialProvider::Kakao)),
            KeyCode::Char('2') => Some(UiEvent::SocialLogin(SocialProvider::Line)),
            KeyCode::Char('3') => Some(UiEvent::SocialLogin(SocialProvider::Google)),
            KeyCode::Char('s') if state.page == Page::Login => Some(UiEvent::SwitchToSignup),
            KeyCode::Char('l') if state.page == Page::Signup => Some(UiEvent::SwitchToLogin),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Enter => Some(UiEvent::SubmitCredentials),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

/// Handle keys for the home dashboard
fn home_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('c') => Some(UiEvent::ShowTopupSheet),
        _ => base_page_keys(key, state),
    }
}

/// Handle keys for the top-up view (base page or sheet overlay)
fn topup_keys(key: KeyEvent, state: &RenderState, overlay: bool) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Right => Some(UiEvent::TopupAmountUp),
        KeyCode::Down | KeyCode::Left => Some(UiEvent::TopupAmountDown),
        KeyCode::Char('s') | KeyCode::Enter => Some(UiEvent::StartTopup),
        KeyCode::Char('m') => Some(UiEvent::SetCurrency(state.currency_mode.toggled())),
        KeyCode::Esc if overlay => Some(UiEvent::CloseOverlay),
        KeyCode::Esc => Some(UiEvent::Navigate(Page::Home)),
        KeyCode::Char('q') if !overlay => Some(UiEvent::Quit),
        _ => None,
    }
}

/// Handle keys for the staking page
fn staking_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Right => Some(UiEvent::StakeAmountUp),
        KeyCode::Down | KeyCode::Left => Some(UiEvent::StakeAmountDown),
        KeyCode::Char('s') | KeyCode::Enter => Some(UiEvent::StartStaking),
        _ => base_page_keys(key, state),
    }
}

/// Handle keys for the payment page
fn payment_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Enter => Some(UiEvent::StartPayment),
        _ => base_page_keys(key, state),
    }
}

/// Handle keys for the profile page or popup
fn profile_keys(key: KeyEvent, state: &RenderState, popup: bool) -> Option<UiEvent> {
    let settings = state.settings;
    match key.code {
        KeyCode::Char('n') => Some(UiEvent::SettingChange(
            SettingKey::PaymentNotifications,
            !settings.payment_notifications,
        )),
        KeyCode::Char('x') => Some(UiEvent::SettingChange(
            SettingKey::ExchangeRateNotifications,
            !settings.exchange_rate_notifications,
        )),
        KeyCode::Char('g') => Some(UiEvent::SettingChange(
            SettingKey::FingerprintAuth,
            !settings.fingerprint_auth,
        )),
        KeyCode::Char('a') => Some(UiEvent::ShowFaceAuth),
        KeyCode::Char('s') if popup => Some(UiEvent::ManageStaking),
        KeyCode::Char('m') if popup => Some(UiEvent::SetCurrency(state.currency_mode.toggled())),
        KeyCode::Esc if popup => Some(UiEvent::CloseOverlay),
        KeyCode::Char('o') if !popup => Some(UiEvent::Logout),
        _ if !popup => base_page_keys(key, state),
        _ => None,
    }
}

/// Handle keys inside the face-auth modal
fn face_modal_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Enter => Some(UiEvent::StartFaceScan),
        KeyCode::Esc => Some(UiEvent::CloseOverlay),
        _ => None,
    }
}
