//! Settings tab UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::LauncherApp;
use crate::ui::components::render_section;
use crate::ui::theme::ThemePreset;

/// Render the settings tab
pub fn render_settings_tab(app: &mut LauncherApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            ui.label(
                RichText::new("Settings")
                    .color(theme.text_primary)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(16.0);

            render_section(ui, &theme, "Orchestrator", |ui| {
                egui::Grid::new("backend_settings")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Base URL:").color(theme.text_muted));
                        ui.add(
                            egui::TextEdit::singleline(&mut app.settings.base_url)
                                .desired_width(320.0),
                        );
                        ui.end_row();

                        ui.label(RichText::new("App package:").color(theme.text_muted));
                        ui.add(
                            egui::TextEdit::singleline(&mut app.settings.app_package_id)
                                .desired_width(320.0),
                        );
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.label(
                    RichText::new("Launches POST <base URL>/api/v1/simulations")
                        .color(theme.text_muted)
                        .size(11.0),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let dirty = app.settings.is_dirty(&app.config);
                    if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
                        app.apply_settings();
                    }
                    if ui.add_enabled(dirty, egui::Button::new("Revert")).clicked() {
                        app.settings.reset_from(&app.config);
                    }
                    if let Some(ref err) = app.settings.error {
                        ui.colored_label(theme.error, err);
                    }
                });
            });

            ui.add_space(12.0);

            render_section(ui, &theme, "Appearance", |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Theme:").color(theme.text_muted));

                    egui::ComboBox::from_id_salt("theme_select")
                        .selected_text(app.config.launcher.theme.name())
                        .show_ui(ui, |ui| {
                            for preset in ThemePreset::all() {
                                if ui
                                    .selectable_label(
                                        app.config.launcher.theme == *preset,
                                        preset.name(),
                                    )
                                    .clicked()
                                {
                                    app.config.launcher.theme = *preset;
                                    app.ui.current_theme = preset.theme();
                                    app.ui.theme_dirty = true;
                                    app.save_config();
                                }
                            }
                        });
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Preview:").color(theme.text_muted));
                    ui.add_space(8.0);

                    let swatch_size = Vec2::new(24.0, 24.0);
                    for color in [theme.bg_dark, theme.accent, theme.success, theme.error] {
                        let (rect, _) = ui.allocate_exact_size(swatch_size, egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, egui::CornerRadius::same(4), color);
                    }
                });
            });
        });
}
