//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the payment and admin models so the
//! theme control can evolve independently of network state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state provided as `RwSignal<UiState>` context from `App`.
///
/// `theme` is written only by `ThemeToggle`, which also owns the persisted
/// preference and the `<html>` class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Glyph for the toggle button: the mode a click switches to.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.is_dark() { "☀" } else { "☾" }
    }

    pub fn toggle_title(&self) -> &'static str {
        if self.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
    }
}
