//! Application state modules
//!
//! State structs own their fields and poll methods; results flow back to
//! `LauncherApp` as `StateEvent`s instead of direct mutation.

mod launch;
mod settings;
mod ui;

pub use launch::{ErrorPanel, LaunchState, ResultPanel, SimulationLauncher};
pub use settings::SettingsDraft;
pub use ui::{Tab, UiState};

/// Events that state poll methods can return.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
