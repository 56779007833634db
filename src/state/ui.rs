//! UI-related application state

use crate::ui::theme::Theme;

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Run button and orchestration result
    #[default]
    Launch,
    /// Backend URL, package id and theme
    Settings,
}

/// UI-related state
pub struct UiState {
    pub current_theme: Theme,
    pub active_tab: Tab,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    pub show_about_dialog: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            active_tab: Tab::default(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
        }
    }
}
