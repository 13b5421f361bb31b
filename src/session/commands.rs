//! Command handlers - business logic for processing UI events and timer
//! dispatch

use crate::constants::{
    NOTICE_DURATION, OVERLAY_CLOSE_DELAY, PAYMENT_AMOUNT_EUR, PAYMENT_RATE_KRW_PER_EUR,
    STAKING_STEP, TOPUP_MAX, TOPUP_MIN, TOPUP_STEP,
};
use crate::engine::{OpEffect, OpKind, TimerId};
use crate::messages::ui_events::{AuthField, InputMode, SocialProvider};
use crate::messages::UiEvent;
use crate::models::{CurrencyMode, SettingKey};
use crate::session::nav::{Overlay, Page};
use crate::session::state::AppState;

impl AppState {
    /// Handle one UI intent. Returns true when quit was requested.
    pub fn handle_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::Navigate(page) => self.navigate(page),
            UiEvent::SwitchToSignup => self.switch_auth_page(Page::Signup),
            UiEvent::SwitchToLogin => self.switch_auth_page(Page::Login),
            UiEvent::ShowTopupSheet => self.show_topup_sheet(),
            UiEvent::ShowProfilePopup => self.show_profile_popup(),
            UiEvent::ShowFaceAuth => self.nav.open_face_modal(),
            UiEvent::CloseOverlay => self.close_overlay(),
            UiEvent::ManageStaking => self.manage_staking(),

            // Authentication
            UiEvent::SubmitCredentials => self.submit_credentials(),
            UiEvent::SocialLogin(provider) => self.social_login(provider),
            UiEvent::QuickFingerprint => self.quick_fingerprint(),
            UiEvent::StartFaceScan => self.start_face_scan(),
            UiEvent::Logout => self.logout(),

            // Form editing
            UiEvent::StartEditing => self.input_mode = InputMode::Editing,
            UiEvent::StopEditing => self.input_mode = InputMode::Normal,
            UiEvent::NextField => self.next_field(),
            UiEvent::CharInput(c) => self.current_input_mut().push(c),
            UiEvent::Backspace => {
                self.current_input_mut().pop();
            }

            // Wallet operations
            UiEvent::TopupAmountUp => self.adjust_topup(TOPUP_STEP),
            UiEvent::TopupAmountDown => self.adjust_topup(-TOPUP_STEP),
            UiEvent::StartTopup => self.start_topup(),
            UiEvent::StakeAmountUp => self.adjust_stake(STAKING_STEP),
            UiEvent::StakeAmountDown => self.adjust_stake(-STAKING_STEP),
            UiEvent::StartStaking => self.start_staking(),
            UiEvent::StartPayment => self.start_payment(),

            // Display + settings
            UiEvent::SetCurrency(mode) => self.set_currency(mode),
            UiEvent::SettingChange(key, value) => self.change_setting(key, value),

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    // ========================
    // Navigation
    // ========================

    fn navigate(&mut self, page: Page) {
        if page.requires_auth() && !self.session.is_authenticated {
            tracing::warn!(?page, "navigation to authenticated page while logged out");
            return;
        }
        self.nav.goto(page);
        self.cancel_orphaned_ops();
    }

    fn switch_auth_page(&mut self, page: Page) {
        if self.session.is_authenticated || self.nav.page == page {
            return;
        }
        self.nav.goto(page);
        self.input_mode = InputMode::Normal;
        self.auth_field = if page == Page::Signup {
            AuthField::Name
        } else {
            AuthField::Email
        };
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
    }

    fn show_topup_sheet(&mut self) {
        if self.nav.page != Page::Home || !self.nav.open_topup_sheet() {
            tracing::warn!("topup sheet request ignored");
        }
    }

    fn show_profile_popup(&mut self) {
        if !self.session.is_authenticated || !self.nav.open_profile_popup() {
            tracing::warn!("profile popup request ignored");
        }
    }

    fn close_overlay(&mut self) {
        if self.nav.face_modal() {
            // cancelling the modal abandons any scan in flight
            self.engine.cancel(&mut self.scheduler, OpKind::FaceScan);
            self.nav.close_face_modal();
            return;
        }
        if self.nav.closing().is_some() {
            return;
        }
        if let Some(overlay) = self.nav.active_overlay() {
            if overlay == Overlay::TopupSheet {
                // the sheet hosts the top-up operation; it dies with the view
                self.engine.cancel(&mut self.scheduler, OpKind::Topup);
            }
            self.begin_overlay_close(overlay);
        }
    }

    fn begin_overlay_close(&mut self, overlay: Overlay) {
        self.nav.begin_close(overlay);
        let now = self.now();
        self.close_timer = Some(self.scheduler.schedule(now, OVERLAY_CLOSE_DELAY));
    }

    fn manage_staking(&mut self) {
        if self.nav.profile_popup() {
            self.nav.close_profile_popup();
            self.navigate(Page::Staking);
        }
    }

    /// Cancel in-flight operations whose hosting view is no longer visible
    fn cancel_orphaned_ops(&mut self) {
        if !self.nav.topup_sheet() && self.nav.page != Page::Topup {
            self.engine.cancel(&mut self.scheduler, OpKind::Topup);
        }
        if self.nav.page != Page::Staking {
            self.engine.cancel(&mut self.scheduler, OpKind::Staking);
        }
        if self.nav.page != Page::Payment {
            self.engine.cancel(&mut self.scheduler, OpKind::Payment);
        }
        if !self.nav.face_modal() {
            self.engine.cancel(&mut self.scheduler, OpKind::FaceScan);
        }
        if self.nav.page != Page::Login {
            self.engine.cancel(&mut self.scheduler, OpKind::Fingerprint);
        }
    }

    // ========================
    // Authentication
    // ========================

    fn submit_credentials(&mut self) {
        let valid = match self.nav.page {
            Page::Login => !self.email_input.is_empty() && !self.password_input.is_empty(),
            Page::Signup => {
                !self.name_input.is_empty()
                    && !self.email_input.is_empty()
                    && !self.password_input.is_empty()
            }
            _ => return,
        };
        if !valid {
            tracing::warn!(page = ?self.nav.page, "credential submission with empty field");
            return;
        }
        self.complete_login();
    }

    fn social_login(&mut self, provider: SocialProvider) {
        if self.session.is_authenticated {
            return;
        }
        tracing::info!(provider = provider.as_str(), "social login");
        self.complete_login();
    }

    fn quick_fingerprint(&mut self) {
        if self.nav.page != Page::Login {
            return;
        }
        self.start_operation(OpKind::Fingerprint, OpEffect::Login);
    }

    fn start_face_scan(&mut self) {
        if !self.nav.face_modal() {
            return;
        }
        let effect = if self.session.is_authenticated {
            OpEffect::EnableFaceAuth
        } else {
            OpEffect::Login
        };
        self.start_operation(OpKind::FaceScan, effect);
    }

    fn complete_login(&mut self) {
        self.session.is_authenticated = true;
        self.input_mode = InputMode::Normal;
        self.password_input.clear();
        self.nav.clear_overlays();
        self.nav.goto(Page::Home);
        self.cancel_orphaned_ops();
        tracing::info!("authenticated, navigating home");
    }

    fn logout(&mut self) {
        if !self.session.is_authenticated {
            return;
        }
        self.session.is_authenticated = false;
        self.nav.clear_overlays();
        self.nav.goto(Page::Login);
        self.cancel_orphaned_ops();
        self.auth_field = AuthField::Email;
        tracing::info!("logged out");
    }

    // ========================
    // Form editing
    // ========================

    fn next_field(&mut self) {
        self.auth_field = match (self.nav.page, self.auth_field) {
            (Page::Signup, AuthField::Name) => AuthField::Email,
            (Page::Signup, AuthField::Password) => AuthField::Name,
            (_, AuthField::Email) => AuthField::Password,
            (_, AuthField::Password) => AuthField::Email,
            (_, AuthField::Name) => AuthField::Email,
        };
    }

    fn current_input_mut(&mut self) -> &mut String {
        match self.auth_field {
            AuthField::Name => &mut self.name_input,
            AuthField::Email => &mut self.email_input,
            AuthField::Password => &mut self.password_input,
        }
    }

    // ========================
    // Wallet operations
    // ========================

    fn adjust_topup(&mut self, delta: i64) {
        self.topup_amount = (self.topup_amount + delta).clamp(TOPUP_MIN, TOPUP_MAX);
    }

    fn adjust_stake(&mut self, delta: i64) {
        let ceiling = self.session.staking_ceiling();
        self.staking_amount = (self.staking_amount + delta).clamp(0, ceiling);
    }

    fn start_topup(&mut self) {
        let amount = self.topup_amount;
        if amount <= 0 {
            tracing::warn!(amount, "top-up amount rejected");
            return;
        }
        self.start_operation(OpKind::Topup, OpEffect::Topup { amount });
    }

    fn start_staking(&mut self) {
        let amount = self.staking_amount;
        let ceiling = self.session.staking_ceiling();
        // the start control is disabled at zero; out-of-range is ignored
        if amount <= 0 || amount > ceiling {
            tracing::warn!(amount, ceiling, "staking amount rejected");
            return;
        }
        self.start_operation(OpKind::Staking, OpEffect::Stake { amount });
    }

    fn start_payment(&mut self) {
        self.start_operation(
            OpKind::Payment,
            OpEffect::Pay {
                amount_eur: PAYMENT_AMOUNT_EUR,
                rate: PAYMENT_RATE_KRW_PER_EUR,
            },
        );
    }

    fn start_operation(&mut self, kind: OpKind, effect: OpEffect) {
        let now = self.now();
        if let Err(err) = self.engine.start(&mut self.scheduler, now, kind, effect) {
            tracing::warn!(%err, "operation not started");
        }
    }

    // ========================
    // Display + settings
    // ========================

    fn set_currency(&mut self, mode: CurrencyMode) {
        self.session.set_currency_mode(mode);
    }

    fn change_setting(&mut self, key: SettingKey, value: bool) {
        self.session.update_setting(key, value);
        tracing::info!(key = key.as_str(), value, "setting updated");
        self.show_notice("설정이 저장되었습니다.");
    }

    // ========================
    // Snackbar
    // ========================

    /// Show a notice; a newer notice replaces the current one and restarts
    /// the auto-dismiss timer
    fn show_notice(&mut self, message: impl Into<String>) {
        if let Some(timer) = self.notice_timer.take() {
            self.scheduler.cancel(timer);
        }
        self.notice = Some(message.into());
        let now = self.now();
        self.notice_timer = Some(self.scheduler.schedule(now, NOTICE_DURATION));
    }

    // ========================
    // Scheduler dispatch
    // ========================

    /// Poll due timers and advance in-flight operations. Called on every
    /// UI tick.
    pub fn tick(&mut self) {
        let now = self.now();
        for timer in self.scheduler.poll(now) {
            self.dispatch_timer(timer);
        }
    }

    fn dispatch_timer(&mut self, timer: TimerId) {
        if self.splash_timer == Some(timer) {
            self.splash_timer = None;
            if self.nav.page == Page::Splash {
                self.nav.goto(Page::Login);
            }
            return;
        }
        if self.notice_timer == Some(timer) {
            self.notice_timer = None;
            self.notice = None;
            return;
        }
        if self.close_timer == Some(timer) {
            self.close_timer = None;
            self.nav.finish_close();
            return;
        }
        let now = self.now();
        if let Some((kind, effect)) = self.engine.on_timer(&mut self.scheduler, now, timer) {
            self.apply_effect(kind, effect);
        }
    }

    // ========================
    // Operation effects
    // ========================

    /// Apply a completed operation's terminal effect to the session and
    /// resolve the navigation it owes (dismiss overlay, go home)
    fn apply_effect(&mut self, kind: OpKind, effect: OpEffect) {
        match effect {
            OpEffect::Topup { amount } => {
                let today = self.today_string();
                match self.session.apply_topup(amount, &today) {
                    Ok(()) => {
                        self.show_notice("충전 완료!");
                        if self.nav.topup_sheet() {
                            self.begin_overlay_close(Overlay::TopupSheet);
                        } else if self.nav.page == Page::Topup {
                            self.navigate(Page::Home);
                        }
                    }
                    Err(err) => tracing::warn!(%err, "top-up effect dropped"),
                }
            }
            OpEffect::Stake { amount } => {
                let today = self.today_string();
                match self.session.apply_staking(amount, &today) {
                    Ok(earned) => {
                        tracing::info!(amount, earned, "staking recorded");
                        self.show_notice("스테이킹 완료!");
                        self.navigate(Page::Home);
                    }
                    Err(err) => tracing::warn!(%err, "staking effect dropped"),
                }
            }
            OpEffect::Pay { amount_eur, rate } => {
                let today = self.today_string();
                match self.session.apply_payment(amount_eur, rate, &today) {
                    Ok(amount_krw) => {
                        tracing::info!(amount_krw, "payment settled");
                        self.show_notice(format!(
                            "{} EUR 결제 완료 (환율: {}원/EUR)",
                            amount_eur, rate
                        ));
                        self.navigate(Page::Home);
                    }
                    Err(err) => tracing::warn!(%err, "payment effect dropped"),
                }
            }
            OpEffect::Login => {
                debug_assert!(matches!(kind, OpKind::FaceScan | OpKind::Fingerprint));
                self.complete_login();
            }
            OpEffect::EnableFaceAuth => {
                self.nav.close_face_modal();
                self.change_setting(SettingKey::FaceAuth, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        NOTICE_DURATION, OVERLAY_CLOSE_DELAY, PROGRESS_TICK, SPLASH_DURATION, TOPUP_DEFAULT,
    };
    use crate::engine::ManualClock;
    use crate::models::Direction;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn fresh() -> (AppState, ManualClock) {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        let state = AppState::with_clock(Box::new(clock.clone()));
        (state, clock)
    }

    fn step(state: &mut AppState, clock: &ManualClock, by: Duration) {
        clock.advance(by);
        state.tick();
    }

    /// Drive an in-flight operation through its ten progress ticks
    fn run_operation(state: &mut AppState, clock: &ManualClock) {
        for _ in 0..10 {
            step(state, clock, PROGRESS_TICK);
        }
    }

    fn login(state: &mut AppState, clock: &ManualClock) {
        step(state, clock, SPLASH_DURATION);
        assert_eq!(state.nav.page, Page::Login);
        state.email_input = String::from("stable@example.com");
        state.password_input = String::from("secret");
        state.handle_event(UiEvent::SubmitCredentials);
        assert!(state.session.is_authenticated);
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_splash_reaches_login_after_fixed_duration() {
        let (mut state, clock) = fresh();
        assert_eq!(state.nav.page, Page::Splash);

        step(&mut state, &clock, SPLASH_DURATION - Duration::from_millis(1));
        assert_eq!(state.nav.page, Page::Splash);

        step(&mut state, &clock, Duration::from_millis(1));
        assert_eq!(state.nav.page, Page::Login);
    }

    #[test]
    fn test_login_requires_non_empty_fields() {
        let (mut state, clock) = fresh();
        step(&mut state, &clock, SPLASH_DURATION);

        state.handle_event(UiEvent::SubmitCredentials);
        assert!(!state.session.is_authenticated);
        assert_eq!(state.nav.page, Page::Login);

        state.email_input = String::from("stable@example.com");
        state.password_input = String::from("secret");
        state.handle_event(UiEvent::SubmitCredentials);
        assert!(state.session.is_authenticated);
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_topup_scenario_credits_and_closes_sheet() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let before = state.session.balance;

        state.handle_event(UiEvent::ShowTopupSheet);
        assert!(state.nav.topup_sheet());
        assert_eq!(state.topup_amount, TOPUP_DEFAULT);

        state.handle_event(UiEvent::StartTopup);
        run_operation(&mut state, &clock);

        assert_eq!(state.session.balance, before + 100_000);
        let head = state.session.transactions.get(0).unwrap();
        assert_eq!(head.description, "충전");
        assert_eq!(head.amount, "₩100,000");
        assert_eq!(head.direction, Direction::Positive);
        assert_eq!(head.date, "2024.01.20");
        assert_eq!(state.notice.as_deref(), Some("충전 완료!"));

        // the sheet plays its fade-out, then home is back on top
        assert!(state.nav.topup_sheet());
        assert!(state.nav.closing().is_some());
        step(&mut state, &clock, OVERLAY_CLOSE_DELAY);
        assert!(!state.nav.topup_sheet());
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_staking_scenario_records_daily_accrual() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let before = state.session.balance;
        assert_eq!(state.session.staking_ceiling(), 375_000);

        state.handle_event(UiEvent::Navigate(Page::Staking));
        state.staking_amount = 200_000;
        state.handle_event(UiEvent::StartStaking);
        run_operation(&mut state, &clock);

        let head = state.session.staking_history.get(0).unwrap();
        assert_eq!(head.amount, "₩200,000");
        assert_eq!(head.earned, "₩47");
        assert_eq!(state.session.balance, before);
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_staking_above_ceiling_never_starts() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::Navigate(Page::Staking));
        state.staking_amount = 400_000;
        state.handle_event(UiEvent::StartStaking);

        assert!(!state.engine.in_flight(OpKind::Topup));
        assert!(!state.engine.in_flight(OpKind::Staking));
        run_operation(&mut state, &clock);
        assert_eq!(state.session.staking_history.len(), 2);
    }

    #[test]
    fn test_payment_scenario_debits_and_returns_home() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let before = state.session.balance;

        state.handle_event(UiEvent::Navigate(Page::Payment));
        state.handle_event(UiEvent::StartPayment);
        run_operation(&mut state, &clock);

        assert_eq!(state.session.balance, before - 74_000);
        let head = state.session.transactions.get(0).unwrap();
        assert_eq!(head.description, "해외 결제");
        assert_eq!(head.amount, "€50");
        assert_eq!(head.direction, Direction::Negative);
        assert_eq!(state.nav.page, Page::Home);
        assert_eq!(
            state.notice.as_deref(),
            Some("50 EUR 결제 완료 (환율: 1480원/EUR)")
        );
    }

    #[test]
    fn test_same_kind_operation_does_not_overlap() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let tx_before = state.session.transactions.len();

        state.handle_event(UiEvent::ShowTopupSheet);
        state.handle_event(UiEvent::StartTopup);
        step(&mut state, &clock, PROGRESS_TICK);
        state.handle_event(UiEvent::StartTopup); // ignored: already in flight
        run_operation(&mut state, &clock);
        step(&mut state, &clock, OVERLAY_CLOSE_DELAY);

        assert_eq!(state.session.transactions.len(), tx_before + 1);
        // drain any stray timers; nothing further may settle
        for _ in 0..15 {
            step(&mut state, &clock, PROGRESS_TICK);
        }
        assert_eq!(state.session.transactions.len(), tx_before + 1);
    }

    #[test]
    fn test_navigating_away_cancels_in_flight_operation() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::Navigate(Page::Staking));
        state.staking_amount = 100_000;
        state.handle_event(UiEvent::StartStaking);
        step(&mut state, &clock, PROGRESS_TICK);
        assert!(state.engine.in_flight(OpKind::Staking));

        state.handle_event(UiEvent::Navigate(Page::Home));
        assert!(!state.engine.in_flight(OpKind::Staking));
        run_operation(&mut state, &clock);
        assert_eq!(state.session.staking_history.len(), 2);
    }

    #[test]
    fn test_closing_topup_sheet_abandons_operation() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let before = state.session.balance;

        state.handle_event(UiEvent::ShowTopupSheet);
        state.handle_event(UiEvent::StartTopup);
        step(&mut state, &clock, PROGRESS_TICK);
        state.handle_event(UiEvent::CloseOverlay);
        step(&mut state, &clock, OVERLAY_CLOSE_DELAY);

        assert_eq!(state.nav.page, Page::Home);
        assert!(!state.nav.topup_sheet());
        run_operation(&mut state, &clock);
        assert_eq!(state.session.balance, before);
    }

    #[test]
    fn test_overlay_exclusion_from_home() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::ShowTopupSheet);
        state.handle_event(UiEvent::ShowProfilePopup);
        assert!(state.nav.topup_sheet());
        assert!(!state.nav.profile_popup());
    }

    #[test]
    fn test_manage_staking_closes_popup_and_navigates() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::ShowProfilePopup);
        assert!(state.nav.profile_popup());
        state.handle_event(UiEvent::ManageStaking);
        assert!(!state.nav.profile_popup());
        assert_eq!(state.nav.page, Page::Staking);
    }

    #[test]
    fn test_face_scan_from_login_authenticates() {
        let (mut state, clock) = fresh();
        step(&mut state, &clock, SPLASH_DURATION);

        state.handle_event(UiEvent::ShowFaceAuth);
        assert!(state.nav.face_modal());
        state.handle_event(UiEvent::StartFaceScan);
        run_operation(&mut state, &clock);

        assert!(state.session.is_authenticated);
        assert!(!state.nav.face_modal());
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_face_setup_from_profile_enables_setting() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::Navigate(Page::Profile));
        state.handle_event(UiEvent::ShowFaceAuth);
        state.handle_event(UiEvent::StartFaceScan);
        run_operation(&mut state, &clock);

        assert!(state.session.settings.face_auth);
        assert!(!state.nav.face_modal());
        assert_eq!(state.nav.page, Page::Profile);
        assert_eq!(state.notice.as_deref(), Some("설정이 저장되었습니다."));
    }

    #[test]
    fn test_fingerprint_quick_login() {
        let (mut state, clock) = fresh();
        step(&mut state, &clock, SPLASH_DURATION);

        state.handle_event(UiEvent::QuickFingerprint);
        assert!(state.engine.in_flight(OpKind::Fingerprint));
        run_operation(&mut state, &clock);

        assert!(state.session.is_authenticated);
        assert_eq!(state.nav.page, Page::Home);
    }

    #[test]
    fn test_notice_auto_dismisses() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::SettingChange(SettingKey::FaceAuth, true));
        assert!(state.notice.is_some());
        step(&mut state, &clock, NOTICE_DURATION);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::SettingChange(SettingKey::FaceAuth, true));
        step(&mut state, &clock, Duration::from_millis(1000));
        state.handle_event(UiEvent::SettingChange(SettingKey::FaceAuth, false));
        assert_eq!(state.notice.as_deref(), Some("설정이 저장되었습니다."));

        // the first notice's timer must not clear the replacement early
        step(&mut state, &clock, Duration::from_millis(2500));
        assert!(state.notice.is_some());
        step(&mut state, &clock, Duration::from_millis(500));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_logout_returns_to_login() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        state.handle_event(UiEvent::Navigate(Page::Profile));
        state.handle_event(UiEvent::Logout);
        assert!(!state.session.is_authenticated);
        assert_eq!(state.nav.page, Page::Login);
    }

    #[test]
    fn test_currency_toggle_round_trip_keeps_ledger() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);
        let balance = state.session.balance;
        let head_amount = state.session.transactions.get(0).unwrap().amount.clone();

        state.handle_event(UiEvent::SetCurrency(CurrencyMode::Usdt));
        state.handle_event(UiEvent::SetCurrency(CurrencyMode::Krw));
        assert_eq!(state.session.balance, balance);
        assert_eq!(state.session.transactions.get(0).unwrap().amount, head_amount);
    }

    #[test]
    fn test_topup_amount_clamped_to_bounds() {
        let (mut state, clock) = fresh();
        login(&mut state, &clock);

        for _ in 0..200 {
            state.handle_event(UiEvent::TopupAmountUp);
        }
        assert_eq!(state.topup_amount, crate::constants::TOPUP_MAX);
        for _ in 0..200 {
            state.handle_event(UiEvent::TopupAmountDown);
        }
        assert_eq!(state.topup_amount, crate::constants::TOPUP_MIN);
    }
}
