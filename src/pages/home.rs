use eframe::egui::{RichText, Ui};

use super::card;

/// Figures the home tiles show, gathered from the other pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub open_todos: usize,
    pub workout_title: Option<&'static str>,
    pub workout_percent: Option<u32>,
    pub reading: usize,
}

pub fn greeting(hour: u32, owner: &str) -> String {
    if (5..12).contains(&hour) {
        format!("Good morning, {}", owner)
    } else if (12..19).contains(&hour) {
        format!("Hi, {}", owner)
    } else {
        format!("Good night, {}", owner)
    }
}

pub fn show(ui: &mut Ui, greeting: &str, clock: &str, summary: &Summary) {
    ui.label(RichText::new(greeting).heading().size(30.0).strong());
    ui.label(RichText::new(clock).size(18.0).weak());
    ui.add_space(16.0);

    ui.columns(3, |cols| {
        card(&mut cols[0], Some("Today's Todos"), |ui| {
            ui.label(RichText::new(summary.open_todos.to_string()).size(32.0).strong());
            ui.label("open");
        });
        card(&mut cols[1], Some("Workout"), |ui| match summary.workout_title {
            Some(title) => {
                ui.label(RichText::new(title).strong());
                if let Some(percent) = summary.workout_percent {
                    ui.label(format!("{}% done", percent));
                }
            }
            None => {
                ui.label("Rest day");
            }
        });
        card(&mut cols[2], Some("Reading"), |ui| {
            ui.label(RichText::new(summary.reading.to_string()).size(32.0).strong());
            ui.label("in progress");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[yare::parameterized(
        dawn      = { 5,  "Good morning, Dhruv" },
        late_am   = { 11, "Good morning, Dhruv" },
        noon      = { 12, "Hi, Dhruv" },
        evening   = { 18, "Hi, Dhruv" },
        night     = { 19, "Good night, Dhruv" },
        small_hrs = { 2,  "Good night, Dhruv" },
    )]
    fn greeting_by_hour(hour: u32, expected: &str) {
        assert_eq!(greeting(hour, "Dhruv"), expected);
    }
}
