//! UI modules for the VEMU launcher, organized by tab.

pub mod components;
mod launch_tab;
mod settings_tab;
pub mod theme;

pub use launch_tab::render_launch_tab;
pub use settings_tab::render_settings_tab;
