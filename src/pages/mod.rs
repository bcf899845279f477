pub mod bookshelf;
pub mod home;
pub mod projects;
pub mod todos;
pub mod workout;

use eframe::egui::{self, RichText, Ui};

pub use bookshelf::BookshelfPage;
pub use projects::ProjectsPage;
pub use todos::TodosPage;
pub use workout::WorkoutPage;

/// Case-insensitive substring search over `fields`. A blank query matches
/// everything.
pub fn query_matches(query: &str, fields: &[&str]) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Row of toggle buttons selecting one of `options`. Returns true on change.
pub(crate) fn filter_bar<T: Copy + PartialEq>(
    ui: &mut Ui,
    current: &mut T,
    options: &[(T, &str)],
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for (value, label) in options {
            if ui.selectable_label(*current == *value, *label).clicked() && *current != *value {
                *current = *value;
                changed = true;
            }
        }
    });
    changed
}

/// Titled frame used for every block of page content.
pub(crate) fn card<R>(ui: &mut Ui, title: Option<&str>, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .corner_radius(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(title) = title {
                ui.label(RichText::new(title).size(18.0).strong());
                ui.add_space(6.0);
            }
            add_contents(ui)
        })
        .inner
}

pub(crate) fn page_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).heading().size(28.0).strong());
    ui.add_space(12.0);
}
