use eframe::egui::{self, Color32};

use crate::storage::{Store, KEY_THEME};

/// Accent used for selected nav entries, progress bars and completed days.
pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const PRIMARY_SOFT: Color32 = Color32::from_rgba_premultiplied(9, 23, 55, 60);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Nothing stored (or an empty string) is dark, as is `"dark"`. Any other
    /// stored value is light.
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            None | Some("") | Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        let mut visuals = match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        visuals.selection.bg_fill = PRIMARY;
        visuals.hyperlink_color = PRIMARY;
        if self == Theme::Dark {
            visuals.panel_fill = Color32::from_rgb(11, 18, 32);
            visuals.window_fill = Color32::from_rgb(17, 24, 39);
        }
        visuals
    }
}

/// Current theme, persisted on every toggle.
#[derive(Debug)]
pub struct ThemeState {
    store: Store,
    theme: Theme,
}

impl ThemeState {
    pub fn load(store: Store) -> Self {
        let theme = Theme::parse(store.get_raw(KEY_THEME).as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set_raw(KEY_THEME, self.theme.as_str());
        tracing::debug!(theme = self.theme.as_str(), "theme changed");
        self.theme
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.theme.visuals());
    }
}
