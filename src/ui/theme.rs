use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Cyan,
    Amber,
    Catppuccin,
}

impl ThemePreset {
    pub fn all() -> &'static [ThemePreset] {
        &[ThemePreset::Cyan, ThemePreset::Amber, ThemePreset::Catppuccin]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Cyan => "Cyan",
            ThemePreset::Amber => "Amber",
            ThemePreset::Catppuccin => "Catppuccin Mocha",
        }
    }

    /// Key used in the config file
    pub fn key(&self) -> &'static str {
        match self {
            ThemePreset::Cyan => "cyan",
            ThemePreset::Amber => "amber",
            ThemePreset::Catppuccin => "catppuccin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.key().eq_ignore_ascii_case(key))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Cyan => Theme::cyan(),
            ThemePreset::Amber => Theme::amber(),
            ThemePreset::Catppuccin => Theme::catppuccin(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    /// Cyan theme - lab instrument look
    pub fn cyan() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(12, 20, 30),
            bg_dark: Color32::from_rgb(15, 23, 42),
            bg_medium: Color32::from_rgb(22, 33, 54),
            bg_light: Color32::from_rgb(35, 48, 70),

            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(200, 210, 220),
            text_muted: Color32::from_rgb(130, 145, 160),

            accent: Color32::from_rgb(6, 182, 212),        // Cyan-500
            accent_hover: Color32::from_rgb(34, 211, 238), // Cyan-400
            accent_muted: Color32::from_rgb(8, 140, 165),

            success: Color32::from_rgb(52, 211, 153), // Emerald-400
            error: Color32::from_rgb(251, 113, 133),  // Rose-400

            border: Color32::from_rgb(51, 65, 85),
            selection: Color32::from_rgb(6, 182, 212).gamma_multiply(0.3),
        }
    }

    pub fn amber() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(16, 16, 18),
            bg_dark: Color32::from_rgb(24, 24, 27),
            bg_medium: Color32::from_rgb(32, 32, 36),
            bg_light: Color32::from_rgb(48, 48, 54),

            text_primary: Color32::from_rgb(250, 250, 250),
            text_secondary: Color32::from_rgb(200, 200, 200),
            text_muted: Color32::from_rgb(140, 140, 140),

            accent: Color32::from_rgb(245, 158, 11),
            accent_hover: Color32::from_rgb(251, 191, 36),
            accent_muted: Color32::from_rgb(180, 116, 8),

            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(63, 63, 70),
            selection: Color32::from_rgb(245, 158, 11).gamma_multiply(0.3),
        }
    }

    /// Catppuccin Mocha palette
    pub fn catppuccin() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(17, 17, 27), // Crust
            bg_dark: Color32::from_rgb(24, 24, 37),    // Mantle
            bg_medium: Color32::from_rgb(30, 30, 46),  // Base
            bg_light: Color32::from_rgb(49, 50, 68),   // Surface0

            text_primary: Color32::from_rgb(205, 214, 244),
            text_secondary: Color32::from_rgb(186, 194, 222),
            text_muted: Color32::from_rgb(147, 153, 178),

            accent: Color32::from_rgb(137, 180, 250),       // Blue
            accent_hover: Color32::from_rgb(180, 190, 254), // Lavender
            accent_muted: Color32::from_rgb(116, 148, 204),

            success: Color32::from_rgb(166, 227, 161),
            error: Color32::from_rgb(243, 139, 168),

            border: Color32::from_rgb(69, 71, 90),
            selection: Color32::from_rgb(137, 180, 250).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        let widgets = [
            (&mut visuals.widgets.noninteractive, self.bg_medium, self.border, self.text_secondary),
            (&mut visuals.widgets.inactive, self.bg_medium, self.border, self.text_primary),
            (&mut visuals.widgets.hovered, self.bg_light, self.accent, self.text_primary),
            (&mut visuals.widgets.open, self.bg_light, self.accent, self.text_primary),
        ];
        for (widget, fill, stroke, text) in widgets {
            widget.bg_fill = fill;
            widget.weak_bg_fill = self.bg_light;
            widget.bg_stroke = Stroke::new(1.0, stroke);
            widget.fg_stroke = Stroke::new(1.0, text);
        }

        // Pressed buttons
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_key(preset.key()), Some(*preset));
        }
        assert_eq!(ThemePreset::from_key("CYAN"), Some(ThemePreset::Cyan));
        assert_eq!(ThemePreset::from_key("purple"), None);
    }
}
