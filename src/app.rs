use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};
use eframe::{App, CreationContext, Frame};

use crate::models::BookStatus;
use crate::pages::{home, BookshelfPage, ProjectsPage, TodosPage, WorkoutPage};
use crate::storage::Store;
use crate::theme::{ThemeState, PRIMARY};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    Home,
    Todos,
    Workout,
    Bookshelf,
    Projects,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Todos, Page::Workout, Page::Bookshelf, Page::Projects];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Todos => "Todos",
            Page::Workout => "Workout",
            Page::Bookshelf => "Bookshelf",
            Page::Projects => "Projects",
        }
    }

    /// Where the floating "Add" button sends the user: the page to show and
    /// the input to focus there.
    pub fn add_target(self) -> (Page, &'static str) {
        match self {
            Page::Home | Page::Todos => (Page::Todos, TodosPage::ADD_INPUT),
            Page::Workout => (Page::Workout, WorkoutPage::ADD_INPUT),
            Page::Bookshelf => (Page::Bookshelf, BookshelfPage::ADD_INPUT),
            Page::Projects => (Page::Projects, ProjectsPage::ADD_INPUT),
        }
    }
}

pub struct DashboardApp {
    owner: String,
    page: Page,
    theme: ThemeState,
    todos: TodosPage,
    workout: WorkoutPage,
    books: BookshelfPage,
    projects: ProjectsPage,
    greeting_message: String,
    last_greeting_update_time: Option<DateTime<Local>>,
}

impl DashboardApp {
    pub fn new(cc: &CreationContext, store: Store, owner: String) -> Self {
        let app = Self::with_store(store, owner, Local::now().date_naive());
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Build every page from `store`. Pages load their records here, once.
    pub fn with_store(store: Store, owner: String, today: NaiveDate) -> Self {
        Self {
            page: Page::Home,
            theme: ThemeState::load(store.clone()),
            todos: TodosPage::load(store.clone()),
            workout: WorkoutPage::load(store.clone(), today),
            books: BookshelfPage::load(store.clone()),
            projects: ProjectsPage::load(store),
            greeting_message: home::greeting(Local::now().hour(), &owner),
            last_greeting_update_time: None,
            owner,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn navigate(&mut self, page: Page, today: NaiveDate) {
        if page == Page::Workout {
            self.workout.enter(today);
        }
        if page != self.page {
            tracing::debug!(from = self.page.label(), to = page.label(), "navigate");
        }
        self.page = page;
    }

    pub fn summary(&self) -> home::Summary {
        home::Summary {
            open_todos: self.todos.open_count(),
            workout_title: self.workout.plan().map(|p| p.title),
            workout_percent: self.workout.progress().map(|p| p.percent()),
            reading: self.books.count_with_status(BookStatus::Reading),
        }
    }

    fn update_greeting_message(&mut self, now: DateTime<Local>) {
        self.greeting_message = home::greeting(now.hour(), &self.owner);
        self.last_greeting_update_time = Some(now);
    }

    fn show_sidebar(&mut self, ctx: &egui::Context, today: NaiveDate) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&self.owner).size(22.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(self.theme.theme().label()).clicked() {
                            self.theme.toggle();
                            self.theme.apply(ui.ctx());
                        }
                    });
                });
                ui.add_space(12.0);
                ui.with_layout(Layout::top_down_justified(Align::Min), |ui| {
                    for page in Page::ALL {
                        let text = RichText::new(page.label()).size(18.0);
                        if ui.selectable_label(self.page == page, text).clicked() {
                            self.navigate(page, today);
                        }
                    }
                });
            });
    }

    fn show_player(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("player").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("▶ Pinned Video").strong().color(PRIMARY));
                let url = self.workout.video_url().to_string();
                ui.label(RichText::new(&url).weak());
                if ui.button("Open").clicked() && !url.is_empty() {
                    ctx.open_url(egui::OpenUrl::new_tab(url));
                }
            });
        });
    }

    fn show_fab(&mut self, ctx: &egui::Context, today: NaiveDate) {
        egui::Area::new(egui::Id::new("fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -48.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(RichText::new("Add").size(18.0).color(egui::Color32::WHITE))
                    .fill(PRIMARY)
                    .corner_radius(24.0)
                    .min_size(egui::vec2(72.0, 44.0));
                if ui.add(button).clicked() {
                    let (page, input) = self.page.add_target();
                    self.navigate(page, today);
                    ctx.memory_mut(|m| m.request_focus(egui::Id::new(input)));
                }
            });
    }
}

impl App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Local::now();
        let today = now.date_naive();

        let shortcuts = [
            (egui::Key::Num1, Page::Home),
            (egui::Key::Num2, Page::Todos),
            (egui::Key::Num3, Page::Workout),
            (egui::Key::Num4, Page::Bookshelf),
            (egui::Key::Num5, Page::Projects),
        ];
        if !ctx.wants_keyboard_input() {
            for (key, page) in shortcuts {
                if ctx.input(|i| i.modifiers.command && i.key_pressed(key)) {
                    self.navigate(page, today);
                }
            }
        }

        if self
            .last_greeting_update_time
            .map_or(true, |last| now - last >= Duration::minutes(1))
        {
            self.update_greeting_message(now);
        }

        self.show_sidebar(ctx, today);
        self.show_player(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("page").show(ui, |ui| match self.page {
                Page::Home => {
                    let clock = now.format("%A, %B %-d · %H:%M").to_string();
                    home::show(ui, &self.greeting_message, &clock, &self.summary());
                }
                Page::Todos => self.todos.show(ui),
                Page::Workout => self.workout.show(ui),
                Page::Bookshelf => self.books.show(ui),
                Page::Projects => self.projects.show(ui),
            });
        });

        self.show_fab(ctx, today);
        ctx.request_repaint_after(std::time::Duration::from_secs(30));
    }
}
