use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, RichText, Stroke, Ui};

use super::{card, page_title};
use crate::calendar::{month_matrix, Cell, DateKey, WEEKDAY_LABELS};
use crate::routines::{plan_for, Plan};
use crate::storage::Store;
use crate::theme::{PRIMARY, PRIMARY_SOFT};
use crate::workout::{CompletionTracker, PinnedVideo, Progress};

/// Today's plan, its checklist and the month calendar.
///
/// `today` is captured when the page is entered and stays fixed while it is
/// shown; a new day's plan appears the next time the page is opened.
pub struct WorkoutPage {
    today: NaiveDate,
    cells: Vec<Cell>,
    tracker: CompletionTracker,
    video: PinnedVideo,
}

impl WorkoutPage {
    pub const ADD_INPUT: &'static str = "workout.video_url";

    pub fn load(store: Store, today: NaiveDate) -> Self {
        Self {
            today,
            cells: month_matrix(today),
            tracker: CompletionTracker::load(store.clone()),
            video: PinnedVideo::load(store),
        }
    }

    /// Re-anchor on `today` when the page is opened.
    pub fn enter(&mut self, today: NaiveDate) {
        if self.today != today {
            tracing::debug!(%today, "workout page moved to a new day");
            self.today = today;
            self.cells = month_matrix(today);
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn today_key(&self) -> DateKey {
        DateKey::for_date(self.today)
    }

    pub fn plan(&self) -> Option<Plan> {
        plan_for(self.today)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn tracker(&self) -> &CompletionTracker {
        &self.tracker
    }

    pub fn video_url(&self) -> &str {
        self.video.url()
    }

    /// Progress on today's plan; `None` on a rest day.
    pub fn progress(&self) -> Option<Progress> {
        let plan = self.plan()?;
        self.tracker.progress(&plan, &self.today_key())
    }

    pub fn toggle_exercise(&mut self, exercise: &str) -> bool {
        let key = self.today_key();
        self.tracker.toggle_exercise(&key, exercise)
    }

    /// Flip the session flag for a day of the displayed month.
    pub fn toggle_day(&mut self, day: u32) -> bool {
        let key = DateKey::from_ymd(self.today.year(), self.today.month(), day);
        self.tracker.toggle_day(&key)
    }

    pub fn set_video_url(&mut self, url: String) {
        self.video.set_url(url);
    }

    pub fn show(&mut self, ui: &mut Ui) {
        page_title(ui, "Workout");

        card(ui, Some("Pinned Video"), |ui| {
            ui.horizontal(|ui| {
                let mut url = self.video.url().to_string();
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut url)
                        .id(egui::Id::new(Self::ADD_INPUT))
                        .hint_text("https://www.youtube.com/embed/...")
                        .desired_width(420.0),
                );
                if edit.changed() {
                    self.set_video_url(url);
                }
                if ui.button("Open").clicked() && !self.video.url().is_empty() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(self.video.url()));
                }
            });
        });
        ui.add_space(8.0);

        match self.plan() {
            Some(plan) => self.show_plan(ui, &plan),
            None => {
                card(ui, Some("Rest / Mobility"), |ui| {
                    ui.label("Easy cardio, stretching, or a walk.");
                });
            }
        }
        ui.add_space(8.0);

        self.show_calendar(ui);
    }

    fn show_plan(&mut self, ui: &mut Ui, plan: &Plan) {
        let key = self.today_key();
        let title = format!("Today's Plan — {}", plan.title);
        card(ui, Some(&title), |ui| {
            if let Some(progress) = self.tracker.progress(plan, &key) {
                ui.add(
                    egui::ProgressBar::new(progress.fraction())
                        .fill(PRIMARY)
                        .text(format!("{}%", progress.percent())),
                );
            }
            ui.add_space(6.0);
            for item in plan.items {
                let done = self.tracker.is_exercise_done(&key, item);
                let mut checked = done;
                let mut text = RichText::new(*item).size(16.0);
                if done {
                    text = text.strikethrough().weak();
                }
                if ui.checkbox(&mut checked, text).changed() {
                    self.toggle_exercise(item);
                }
            }
        });
    }

    fn show_calendar(&mut self, ui: &mut Ui) {
        let heading = self.today.format("%B %Y").to_string();
        let today = self.today.day();
        let mut clicked = None;

        card(ui, Some(&heading), |ui| {
            egui::Grid::new("workout.calendar")
                .num_columns(7)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for label in WEEKDAY_LABELS {
                        ui.label(RichText::new(label.to_uppercase()).small().weak());
                    }
                    ui.end_row();

                    for (i, cell) in self.cells.iter().enumerate() {
                        match cell.day {
                            Some(day) => {
                                let key = DateKey::from_ymd(self.today.year(), self.today.month(), day);
                                let mut button = egui::Button::new(day.to_string()).min_size(egui::vec2(40.0, 40.0));
                                if self.tracker.is_completed(&key) {
                                    button = button.fill(PRIMARY_SOFT).stroke(Stroke::new(1.0, PRIMARY));
                                }
                                if day == today {
                                    button = button.stroke(Stroke::new(2.0, PRIMARY));
                                }
                                if ui.add(button).clicked() {
                                    clicked = Some(day);
                                }
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        if i % 7 == 6 {
                            ui.end_row();
                        }
                    }
                });
        });

        if let Some(day) = clicked {
            self.toggle_day(day);
        }
    }
}
