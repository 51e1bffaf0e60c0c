#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page chrome state: mobile menu, navbar background, splash overlay.
///
/// Provided as `RwSignal<UiState>` from the app root. The splash starts
/// hidden; the app shows it only when the loaded content asks for one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub splash_visible: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record the navbar scroll state. Returns `true` when it changed.
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.scrolled != scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn show_splash(&mut self) {
        self.splash_visible = true;
    }

    pub fn dismiss_splash(&mut self) {
        self.splash_visible = false;
    }
}
