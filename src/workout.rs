//! Workout completion state: which sessions and exercises are done, and the
//! pinned video.

use std::collections::BTreeMap;

use crate::calendar::DateKey;
use crate::routines::{plan_for, Plan};
use crate::storage::{Store, KEY_WORKOUT_COMPLETED, KEY_WORKOUT_EXERCISE_DONE, KEY_WORKOUT_VIDEO};

pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/embed/LVPA5y-WOME";

pub type CompletionRecord = BTreeMap<DateKey, bool>;
pub type ExerciseDoneRecord = BTreeMap<DateKey, BTreeMap<String, bool>>;

/// Per-day session flags and per-exercise flags, written through to storage
/// after every change.
///
/// Ticking off exercises can mark a session complete but never un-marks it.
/// Only [`CompletionTracker::toggle_day`] clears a session, and it leaves the
/// exercise flags alone, so the two records may disagree.
#[derive(Debug)]
pub struct CompletionTracker {
    store: Store,
    completed: CompletionRecord,
    exercise_done: ExerciseDoneRecord,
}

impl CompletionTracker {
    pub fn load(store: Store) -> Self {
        let completed = store.load(KEY_WORKOUT_COMPLETED);
        let exercise_done = store.load(KEY_WORKOUT_EXERCISE_DONE);
        Self { store, completed, exercise_done }
    }

    pub fn is_completed(&self, key: &DateKey) -> bool {
        self.completed.get(key).copied().unwrap_or(false)
    }

    pub fn is_exercise_done(&self, key: &DateKey, exercise: &str) -> bool {
        self.exercise_done
            .get(key)
            .and_then(|day| day.get(exercise))
            .copied()
            .unwrap_or(false)
    }

    pub fn completed(&self) -> &CompletionRecord {
        &self.completed
    }

    pub fn exercise_done(&self) -> &ExerciseDoneRecord {
        &self.exercise_done
    }

    /// Flip one exercise for the day. Returns the exercise's new state.
    pub fn toggle_exercise(&mut self, key: &DateKey, exercise: &str) -> bool {
        let day = self.exercise_done.entry(key.clone()).or_default();
        let flag = day.entry(exercise.to_string()).or_insert(false);
        *flag = !*flag;
        let now_done = *flag;
        self.store.save(KEY_WORKOUT_EXERCISE_DONE, &self.exercise_done);

        let plan = key.to_date().and_then(plan_for);
        if let Some(plan) = plan {
            if plan.items.iter().all(|item| self.is_exercise_done(key, item)) {
                self.completed.insert(key.clone(), true);
                self.store.save(KEY_WORKOUT_COMPLETED, &self.completed);
                tracing::info!(day = %key, plan = plan.title, "session completed");
            }
        }
        now_done
    }

    /// Flip the session flag for the day. Returns the new state.
    pub fn toggle_day(&mut self, key: &DateKey) -> bool {
        let flag = self.completed.entry(key.clone()).or_insert(false);
        *flag = !*flag;
        let now_done = *flag;
        self.store.save(KEY_WORKOUT_COMPLETED, &self.completed);
        now_done
    }

    /// Progress through `plan` on the given day. `None` for an empty plan.
    pub fn progress(&self, plan: &Plan, key: &DateKey) -> Option<Progress> {
        let done = plan
            .items
            .iter()
            .filter(|item| self.is_exercise_done(key, item))
            .count();
        Progress::new(done, plan.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(done: usize, total: usize) -> Option<Self> {
        (total > 0).then_some(Self { done, total })
    }

    /// Whole percent, rounded half up.
    pub fn percent(&self) -> u32 {
        (100.0 * self.done as f64 / self.total as f64).round() as u32
    }

    pub fn fraction(&self) -> f32 {
        self.done as f32 / self.total as f32
    }
}

/// URL of the video pinned on the workout page.
#[derive(Debug)]
pub struct PinnedVideo {
    store: Store,
    url: String,
}

impl PinnedVideo {
    pub fn load(store: Store) -> Self {
        let url = store
            .get_raw(KEY_WORKOUT_VIDEO)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_VIDEO_URL.to_string());
        Self { store, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.store.set_raw(KEY_WORKOUT_VIDEO, &self.url);
    }
}
