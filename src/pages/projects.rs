use eframe::egui::{self, RichText, Ui};

use super::{card, filter_bar, page_title, query_matches};
use crate::collection::Collection;
use crate::models::{new_id, non_empty, Project, ProjectStatus};
use crate::storage::Store;

#[derive(Debug, Default)]
struct ProjectDraft {
    name: String,
    description: String,
    status: ProjectStatus,
    tags: String,
    github: String,
    live: String,
}

enum CardAction {
    SetStatus(String, ProjectStatus),
    Delete(String),
}

pub struct ProjectsPage {
    projects: Collection<Project>,
    draft: ProjectDraft,
    filter: Option<ProjectStatus>,
    query: String,
}

/// Split a comma-separated tag list, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').filter_map(non_empty).collect()
}

impl ProjectsPage {
    pub const ADD_INPUT: &'static str = "projects.add_name";

    pub fn load(store: Store) -> Self {
        Self {
            projects: Collection::load(store),
            draft: ProjectDraft::default(),
            filter: None,
            query: String::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.items()
    }

    pub fn add(&mut self) -> bool {
        let Some(name) = non_empty(&self.draft.name) else {
            return false;
        };
        let draft = std::mem::take(&mut self.draft);
        self.projects.prepend(Project {
            id: new_id(),
            name,
            description: non_empty(&draft.description),
            status: draft.status,
            tags: parse_tags(&draft.tags),
            github: non_empty(&draft.github),
            live: non_empty(&draft.live),
        });
        true
    }

    pub fn set_status(&mut self, id: &str, status: ProjectStatus) {
        self.projects.update(id, |p| p.status = status);
    }

    pub fn delete(&mut self, id: &str) {
        self.projects.remove(id);
    }

    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .items()
            .iter()
            .filter(|p| self.filter.map_or(true, |s| p.status == s))
            .filter(|p| {
                let tags = p.tags.join(" ");
                query_matches(&self.query, &[p.name.as_str(), p.description.as_deref().unwrap_or(""), tags.as_str()])
            })
            .collect()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        page_title(ui, "Projects");

        card(ui, Some("Add Project"), |ui| {
            egui::Grid::new("projects.form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.name)
                        .id(egui::Id::new(Self::ADD_INPUT))
                        .hint_text("Name"),
                );
                egui::ComboBox::from_id_salt("projects.status")
                    .selected_text(self.draft.status.label())
                    .show_ui(ui, |ui| {
                        for s in ProjectStatus::ALL {
                            ui.selectable_value(&mut self.draft.status, s, s.label());
                        }
                    });
                ui.end_row();

                ui.add(egui::TextEdit::singleline(&mut self.draft.github).hint_text("GitHub URL (optional)"));
                ui.add(egui::TextEdit::singleline(&mut self.draft.live).hint_text("Live URL (optional)"));
                ui.end_row();
            });
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.tags)
                    .hint_text("Tags (comma separated)")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut self.draft.description)
                    .hint_text("Description (optional)")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            if ui.button("Add").clicked() {
                self.add();
            }
        });

        ui.add_space(8.0);
        card(ui, None, |ui| {
            ui.horizontal(|ui| {
                let mut options = vec![(None, "all")];
                options.extend(ProjectStatus::ALL.map(|s| (Some(s), s.label())));
                filter_bar(ui, &mut self.filter, &options);
                ui.add_space(16.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .hint_text("Search projects...")
                        .desired_width(240.0),
                );
            });
        });

        ui.add_space(8.0);
        let mut action = None;
        ui.horizontal_wrapped(|ui| {
            for project in self.visible() {
                project_card(ui, project, &mut action);
            }
        });

        match action {
            Some(CardAction::SetStatus(id, status)) => self.set_status(&id, status),
            Some(CardAction::Delete(id)) => self.delete(&id),
            None => {}
        }
    }
}

fn project_card(ui: &mut Ui, project: &Project, action: &mut Option<CardAction>) {
    egui::Frame::group(ui.style()).corner_radius(12.0).show(ui, |ui| {
        ui.set_width(280.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&project.name).size(18.0).strong());
                let mut status = project.status;
                egui::ComboBox::from_id_salt(("projects.card_status", &project.id))
                    .selected_text(status.label())
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        for s in ProjectStatus::ALL {
                            ui.selectable_value(&mut status, s, s.label());
                        }
                    });
                if status != project.status {
                    *action = Some(CardAction::SetStatus(project.id.clone(), status));
                }
            });
            if let Some(description) = &project.description {
                ui.label(RichText::new(description).weak());
            }
            if !project.tags.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tags {
                        ui.label(RichText::new(tag).small().code());
                    }
                });
            }
            ui.horizontal(|ui| {
                if let Some(github) = &project.github {
                    ui.hyperlink_to("GitHub", github);
                }
                if let Some(live) = &project.live {
                    ui.hyperlink_to("Live", live);
                }
                if ui.small_button("Delete").clicked() {
                    *action = Some(CardAction::Delete(project.id.clone()));
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(page: &mut ProjectsPage, name: &str, description: &str, tags: &str, status: ProjectStatus) {
        page.draft.name = name.into();
        page.draft.description = description.into();
        page.draft.tags = tags.into();
        page.draft.status = status;
        assert!(page.add());
    }

    fn names(page: &ProjectsPage) -> Vec<&str> {
        page.visible().iter().map(|p| p.name.as_str()).collect()
    }

    #[yare::parameterized(
        empty        = { "",                   &[] },
        single       = { "rust",               &["rust"] },
        spaced       = { " rust , egui ",      &["rust", "egui"] },
        blanks       = { "a,, ,b,",            &["a", "b"] },
        inner_space  = { "machine learning",   &["machine learning"] },
    )]
    fn tag_parsing(input: &str, expected: &[&str]) {
        assert_eq!(parse_tags(input), expected);
    }

    #[test]
    fn add_builds_record_and_resets_form() {
        let mut page = ProjectsPage::load(Store::memory());
        page.draft = ProjectDraft {
            name: "  Dashboard ".into(),
            description: " ".into(),
            status: ProjectStatus::Pending,
            tags: "rust, egui".into(),
            github: " https://github.com/example/dash ".into(),
            live: String::new(),
        };
        assert!(page.add());

        let p = &page.projects()[0];
        assert_eq!(p.name, "Dashboard");
        assert_eq!(p.description, None);
        assert_eq!(p.status, ProjectStatus::Pending);
        assert_eq!(p.tags, ["rust", "egui"]);
        assert_eq!(p.github.as_deref(), Some("https://github.com/example/dash"));
        assert_eq!(p.live, None);

        assert_eq!(page.draft.name, "");
        assert_eq!(page.draft.tags, "");
        assert_eq!(page.draft.status, ProjectStatus::Active);
    }

    #[test]
    fn blank_name_keeps_draft() {
        let mut page = ProjectsPage::load(Store::memory());
        page.draft.name = "  ".into();
        page.draft.tags = "x".into();
        assert!(!page.add());
        assert!(page.projects().is_empty());
        assert_eq!(page.draft.tags, "x");
    }

    #[test]
    fn search_covers_name_description_and_tags() {
        let mut page = ProjectsPage::load(Store::memory());
        add(&mut page, "Compiler", "toy language", "rust, parsing", ProjectStatus::Active);
        add(&mut page, "Blog", "static site", "web", ProjectStatus::Completed);
        add(&mut page, "Tracker", "", "rust web", ProjectStatus::Pending);

        page.query = "PARSING".into();
        assert_eq!(names(&page), ["Compiler"]);
        page.query = "static".into();
        assert_eq!(names(&page), ["Blog"]);
        page.query = "rust".into();
        assert_eq!(names(&page), ["Tracker", "Compiler"]);
        // Tags are searched joined by spaces.
        page.query = "rust parsing".into();
        assert_eq!(names(&page), ["Compiler"]);
    }

    #[test]
    fn status_filter() {
        let mut page = ProjectsPage::load(Store::memory());
        add(&mut page, "One", "", "", ProjectStatus::Active);
        add(&mut page, "Two", "", "", ProjectStatus::Completed);
        page.filter = Some(ProjectStatus::Completed);
        assert_eq!(names(&page), ["Two"]);
        page.filter = None;
        assert_eq!(names(&page), ["Two", "One"]);
    }

    #[test]
    fn status_change_and_delete_persist() {
        let store = Store::memory();
        let mut page = ProjectsPage::load(store.clone());
        add(&mut page, "One", "", "", ProjectStatus::Active);
        let id = page.projects()[0].id.clone();

        page.set_status(&id, ProjectStatus::Completed);
        assert_eq!(ProjectsPage::load(store.clone()).projects()[0].status, ProjectStatus::Completed);

        page.delete(&id);
        assert!(ProjectsPage::load(store).projects().is_empty());
    }
}
