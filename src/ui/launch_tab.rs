//! Launch tab UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::LauncherApp;
use crate::state::{ErrorPanel, ResultPanel};
use crate::ui::components::render_section;
use crate::ui::theme::Theme;

/// Render the launch tab content
pub fn render_launch_tab(app: &mut LauncherApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let view = app.launcher.view();

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("VEMU Orchestrator UI")
                .color(theme.text_primary)
                .size(22.0)
                .strong(),
        );
        ui.label(
            RichText::new("A unified interface to orchestrate the VEMU simulation workflow.")
                .color(theme.text_secondary),
        );
    });

    ui.add_space(12.0);

    render_section(ui, &theme, "Simulation", |ui| {
        egui::Grid::new("launch_target")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Package:").color(theme.text_muted));
                ui.label(
                    RichText::new(&app.config.simulation.app_package_id)
                        .color(theme.text_primary)
                        .monospace(),
                );
                ui.end_row();

                ui.label(RichText::new("Backend:").color(theme.text_muted));
                ui.label(RichText::new(&app.config.backend.base_url).color(theme.text_primary));
                ui.end_row();
            });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new(view.button_label).size(15.0).strong())
                .min_size(Vec2::new(260.0, 36.0));
            if ui.add_enabled(view.button_enabled, button).clicked() {
                app.launch();
            }

            if let Some(text) = view.loading_text {
                ui.add_space(8.0);
                ui.spinner();
                ui.label(RichText::new(text).color(theme.text_secondary));
            } else if let Some(at) = app.launcher.last_finished {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Last run {}", at.format("%H:%M:%S")))
                        .color(theme.text_muted)
                        .size(11.0),
                );
            }
        });
    });

    if let Some(panel) = &view.error_panel {
        ui.add_space(12.0);
        render_error_panel(ui, &theme, panel);
    }

    if let Some(panel) = &view.result_panel {
        ui.add_space(12.0);
        render_result_panel(ui, &theme, panel);
    }
}

fn render_error_panel(ui: &mut egui::Ui, theme: &Theme, panel: &ErrorPanel) {
    egui::Frame::new()
        .fill(theme.error.gamma_multiply(0.12))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .stroke(egui::Stroke::new(1.0, theme.error))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(panel.title).color(theme.error).size(15.0).strong());
            ui.add_space(6.0);
            ui.add(
                egui::Label::new(RichText::new(&panel.message).monospace().color(theme.text_primary))
                    .selectable(true)
                    .wrap(),
            );
        });
}

fn render_result_panel(ui: &mut egui::Ui, theme: &Theme, panel: &ResultPanel) {
    egui::Frame::new()
        .fill(theme.success.gamma_multiply(0.08))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
        .stroke(egui::Stroke::new(1.0, theme.success))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(panel.title).color(theme.success).size(15.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Copy JSON").clicked() {
                        ui.ctx().copy_text(panel.dump.clone());
                    }
                });
            });
            ui.add_space(6.0);

            match &panel.message {
                Some(message) => {
                    ui.label(RichText::new(message).color(theme.text_primary));
                }
                None => {
                    ui.label(RichText::new("(no message)").color(theme.text_muted).italics());
                }
            }

            if !panel.highlights.is_empty() {
                ui.add_space(6.0);
                egui::Grid::new("result_highlights")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        for (label, value) in &panel.highlights {
                            ui.label(RichText::new(*label).color(theme.text_muted));
                            ui.label(RichText::new(value).color(theme.text_primary));
                            ui.end_row();
                        }
                    });
            }

            ui.add_space(8.0);
            egui::Frame::new()
                .fill(theme.bg_darkest)
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    egui::ScrollArea::both()
                        .id_salt("result_dump")
                        .max_height(320.0)
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&panel.dump)
                                        .monospace()
                                        .color(theme.text_secondary),
                                )
                                .selectable(true)
                                .extend(),
                            );
                        });
                });
        });
}
