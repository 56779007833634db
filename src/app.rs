use eframe::egui;

use crate::config::Config;
use crate::orchestrator::{LaunchError, OrchestratorClient, SimulationRequest};
use crate::state::{SettingsDraft, SimulationLauncher, StateEvent, Tab, UiState};
use crate::ui::components::{render_about_dialog, render_tab};

/// Main application state
pub struct LauncherApp {
    pub config: Config,
    /// HTTP client, rebuilt when the base URL changes
    client: Option<OrchestratorClient>,
    pub launcher: SimulationLauncher,
    pub settings: SettingsDraft,
    pub ui: UiState,
    /// Status message for the status bar
    pub status_message: String,
}

impl LauncherApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        });

        Self {
            settings: SettingsDraft::from_config(&config),
            ui: UiState::new(config.launcher.theme.theme()),
            client: None,
            launcher: SimulationLauncher::default(),
            status_message: "Ready".to_string(),
            config,
        }
    }

    /// Get a client for the configured backend, building it if needed
    fn client(&mut self) -> Result<OrchestratorClient, LaunchError> {
        if let Some(client) = &self.client {
            if client.base_url() == self.config.backend.base_url.trim_end_matches('/') {
                return Ok(client.clone());
            }
        }

        let client = OrchestratorClient::new(&self.config.backend.base_url)?;
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Run button handler
    pub fn launch(&mut self) {
        let request = SimulationRequest::new(self.config.simulation.app_package_id.clone());

        let events = match self.client() {
            Ok(client) => self.launcher.run_simulation(&client, request),
            Err(e) => self.launcher.fail_to_start(e),
        };
        self.handle_events(events);
    }

    /// Commit the Settings tab's backend fields
    pub fn apply_settings(&mut self) {
        match self.settings.apply_to(&mut self.config) {
            Ok(()) => {
                self.settings.reset_from(&self.config);
                self.save_config();
                self.status_message = "Settings saved".to_string();
            }
            Err(e) => {
                self.settings.error = Some(e.to_string());
            }
        }
    }

    /// Save configuration to disk
    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
            }
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        let events = self.launcher.poll(ctx);
        self.handle_events(events);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .color(self.ui.current_theme.text_secondary),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_tab(self, ui, Tab::Launch, "Launch");
                render_tab(self, ui, Tab::Settings, "Settings");
            });

            ui.separator();
            ui.add_space(8.0);

            match self.ui.active_tab {
                Tab::Launch => {
                    egui::ScrollArea::vertical()
                        .id_salt("launch_scroll")
                        .show(ui, |ui| crate::ui::render_launch_tab(self, ui));
                }
                Tab::Settings => crate::ui::render_settings_tab(self, ui),
            }
        });

        render_about_dialog(self, ctx);
    }
}
