//! Navigation controller - base page plus stacked overlays
//!
//! Exactly one base page is visible at all times; overlays layer above it.
//! The topup sheet and profile popup are mutually exclusive; the face-auth
//! modal stacks independently over any page.

/// Primary full-screen views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Splash,
    Login,
    Signup,
    Home,
    Topup,
    Payment,
    Staking,
    Profile,
    Transactions,
}

impl Page {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Splash | Page::Login | Page::Signup)
    }

    /// App-bar title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Splash => "Stable Travel Card",
            Page::Login => "로그인",
            Page::Signup => "새 계정 만들기",
            Page::Home => "홈",
            Page::Topup => "충전하기",
            Page::Payment => "결제",
            Page::Staking => "스테이킹",
            Page::Profile => "프로필",
            Page::Transactions => "내역",
        }
    }
}

/// Modal layers above a base page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    TopupSheet,
    ProfilePopup,
    FaceAuth,
}

#[derive(Clone, Debug)]
pub struct NavState {
    pub page: Page,
    topup_sheet: bool,
    profile_popup: bool,
    face_modal: bool,
    /// Overlay playing its fade-out; cleared by `finish_close`
    closing: Option<Overlay>,
}

impl Default for NavState {
    fn default() -> Self {
        NavState::new()
    }
}

impl NavState {
    pub fn new() -> Self {
        NavState {
            page: Page::Splash,
            topup_sheet: false,
            profile_popup: false,
            face_modal: false,
            closing: None,
        }
    }

    /// Replace the visible base page (peer navigation, no back-stack)
    pub fn goto(&mut self, page: Page) {
        self.page = page;
        self.topup_sheet = false;
        self.profile_popup = false;
        self.closing = None;
    }

    /// Open the topup sheet over home. Refused while the profile popup is
    /// active (single-overlay invariant).
    pub fn open_topup_sheet(&mut self) -> bool {
        if self.profile_popup || self.topup_sheet {
            return false;
        }
        self.topup_sheet = true;
        true
    }

    /// Open the profile popup over the current base page. Refused while the
    /// topup sheet is active.
    pub fn open_profile_popup(&mut self) -> bool {
        if self.topup_sheet || self.profile_popup {
            return false;
        }
        self.profile_popup = true;
        true
    }

    pub fn open_face_modal(&mut self) {
        self.face_modal = true;
    }

    /// The face modal dismisses without a fade
    pub fn close_face_modal(&mut self) {
        self.face_modal = false;
    }

    /// Dismiss the profile popup immediately (used by "manage staking",
    /// which closes the popup and navigates in one step)
    pub fn close_profile_popup(&mut self) {
        self.profile_popup = false;
        if self.closing == Some(Overlay::ProfilePopup) {
            self.closing = None;
        }
    }

    /// Overlay an explicit close intent applies to, topmost first
    pub fn active_overlay(&self) -> Option<Overlay> {
        if self.face_modal {
            Some(Overlay::FaceAuth)
        } else if self.topup_sheet {
            Some(Overlay::TopupSheet)
        } else if self.profile_popup {
            Some(Overlay::ProfilePopup)
        } else {
            None
        }
    }

    /// Start the fade-out of `overlay`; the flag stays set so the UI can
    /// render the fade until `finish_close`
    pub fn begin_close(&mut self, overlay: Overlay) {
        self.closing = Some(overlay);
    }

    /// Clear the overlay whose fade-out just finished
    pub fn finish_close(&mut self) {
        match self.closing.take() {
            Some(Overlay::TopupSheet) => self.topup_sheet = false,
            Some(Overlay::ProfilePopup) => self.profile_popup = false,
            Some(Overlay::FaceAuth) => self.face_modal = false,
            None => {}
        }
    }

    pub fn clear_overlays(&mut self) {
        self.topup_sheet = false;
        self.profile_popup = false;
        self.face_modal = false;
        self.closing = None;
    }

    pub fn topup_sheet(&self) -> bool {
        self.topup_sheet
    }

    pub fn profile_popup(&self) -> bool {
        self.profile_popup
    }

    pub fn face_modal(&self) -> bool {
        self.face_modal
    }

    pub fn closing(&self) -> Option<Overlay> {
        self.closing
    }

    /// Bottom navigation shows only on authenticated base pages with
    /// neither the topup sheet nor the profile popup active
    pub fn bottom_nav_visible(&self, authenticated: bool) -> bool {
        authenticated
            && self.page.requires_auth()
            && !self.topup_sheet
            && !self.profile_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_are_mutually_exclusive() {
        let mut nav = NavState::new();
        nav.goto(Page::Home);
        assert!(nav.open_topup_sheet());
        assert!(!nav.open_profile_popup());
        assert!(nav.topup_sheet());
        assert!(!nav.profile_popup());
    }

    #[test]
    fn test_face_modal_stacks_independently() {
        let mut nav = NavState::new();
        nav.goto(Page::Home);
        assert!(nav.open_profile_popup());
        nav.open_face_modal();
        assert_eq!(nav.active_overlay(), Some(Overlay::FaceAuth));
        nav.close_face_modal();
        assert_eq!(nav.active_overlay(), Some(Overlay::ProfilePopup));
    }

    #[test]
    fn test_close_returns_to_same_base_page() {
        let mut nav = NavState::new();
        nav.goto(Page::Home);
        nav.open_topup_sheet();
        nav.begin_close(Overlay::TopupSheet);
        nav.finish_close();
        assert_eq!(nav.page, Page::Home);
        assert_eq!(nav.active_overlay(), None);
    }

    #[test]
    fn test_bottom_nav_visibility() {
        let mut nav = NavState::new();
        assert!(!nav.bottom_nav_visible(false));
        nav.goto(Page::Home);
        assert!(nav.bottom_nav_visible(true));
        nav.open_topup_sheet();
        assert!(!nav.bottom_nav_visible(true));
        nav.clear_overlays();
        nav.open_face_modal();
        // face modal alone does not hide the bottom nav
        assert!(nav.bottom_nav_visible(true));
    }
}
