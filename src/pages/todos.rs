use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::{filter_bar, page_title, query_matches};
use crate::collection::Collection;
use crate::models::{new_id, non_empty, Priority, Todo};
use crate::storage::Store;
use crate::theme::{DANGER, PRIMARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Done,
}

impl TodoFilter {
    fn admits(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.done,
            TodoFilter::Done => todo.done,
        }
    }
}

enum RowAction {
    Toggle(String),
    Delete(String),
}

pub struct TodosPage {
    todos: Collection<Todo>,
    title: String,
    priority: Priority,
    filter: TodoFilter,
    query: String,
}

impl TodosPage {
    pub const ADD_INPUT: &'static str = "todos.add_title";

    pub fn load(store: Store) -> Self {
        Self {
            todos: Collection::load(store),
            title: String::new(),
            priority: Priority::default(),
            filter: TodoFilter::default(),
            query: String::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        self.todos.items()
    }

    pub fn open_count(&self) -> usize {
        self.todos.items().iter().filter(|t| !t.done).count()
    }

    /// Add the drafted todo. Blank titles are ignored.
    pub fn add(&mut self) -> bool {
        let Some(title) = non_empty(&self.title) else {
            return false;
        };
        self.todos.prepend(Todo { id: new_id(), title, done: false, priority: self.priority });
        self.title.clear();
        true
    }

    pub fn toggle(&mut self, id: &str) {
        self.todos.update(id, |t| t.done = !t.done);
    }

    pub fn delete(&mut self, id: &str) {
        self.todos.remove(id);
    }

    /// Todos passing the status filter and search query, in list order.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .items()
            .iter()
            .filter(|t| self.filter.admits(t))
            .filter(|t| query_matches(&self.query, &[t.title.as_str()]))
            .collect()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        page_title(ui, "Todos");

        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.title)
                    .id(egui::Id::new(Self::ADD_INPUT))
                    .hint_text("Add a task...")
                    .desired_width(320.0),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            egui::ComboBox::from_id_salt("todos.priority")
                .selected_text(self.priority.label())
                .show_ui(ui, |ui| {
                    for p in Priority::ALL {
                        ui.selectable_value(&mut self.priority, p, p.label());
                    }
                });

            if (ui.button("Add").clicked() || submitted) && self.add() {
                input.request_focus();
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.query).hint_text("Search...").desired_width(240.0));
            filter_bar(
                ui,
                &mut self.filter,
                &[(TodoFilter::All, "All"), (TodoFilter::Active, "Active"), (TodoFilter::Done, "Done")],
            );
        });
        ui.add_space(10.0);

        let mut action = None;
        let visible: Vec<Todo> = self.visible().into_iter().cloned().collect();
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .body(|mut body| {
                for todo in &visible {
                    body.row(28.0, |mut row| {
                        row.col(|ui| {
                            let mut done = todo.done;
                            if ui.checkbox(&mut done, "").changed() {
                                action = Some(RowAction::Toggle(todo.id.clone()));
                            }
                        });
                        row.col(|ui| {
                            let mut text = RichText::new(&todo.title).size(16.0);
                            if todo.done {
                                text = text.strikethrough().weak();
                            }
                            if ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked() {
                                action = Some(RowAction::Toggle(todo.id.clone()));
                            }
                        });
                        row.col(|ui| {
                            ui.label(priority_badge(todo.priority));
                        });
                        row.col(|ui| {
                            if ui.small_button("Delete").clicked() {
                                action = Some(RowAction::Delete(todo.id.clone()));
                            }
                        });
                    });
                }
            });

        match action {
            Some(RowAction::Toggle(id)) => self.toggle(&id),
            Some(RowAction::Delete(id)) => self.delete(&id),
            None => {}
        }
    }
}

fn priority_badge(priority: Priority) -> RichText {
    let bg = match priority {
        Priority::Low => Color32::from_gray(70),
        Priority::Medium => PRIMARY,
        Priority::High => DANGER,
    };
    RichText::new(format!(" {} ", priority.label()))
        .small()
        .color(Color32::WHITE)
        .background_color(bg)
}
