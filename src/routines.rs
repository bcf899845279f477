use chrono::{Datelike, NaiveDate, Weekday};

/// A day's training session: a title and the exercises in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const PUSH: Plan = Plan {
    title: "Push — Chest, Shoulders, Triceps",
    items: &[
        "Incline Dumbbell Press",
        "Flat Dumbbell Press",
        "Dumbbell Shoulder Press (Seated/Standing)",
        "Bench Dips",
        "Dumbbell Lateral Raises",
        "Dumbbell Tricep Kickback",
    ],
};

pub const PULL: Plan = Plan {
    title: "Pull — Back, Biceps",
    items: &[
        "Dumbbell Romanian Deadlift",
        "Dumbbell Bent Over Rows",
        "Single Arm Dumbbell Row",
        "Dumbbell Hammer Curls",
        "Concentration Curl",
    ],
};

pub const LEGS: Plan = Plan {
    title: "Legs",
    items: &[
        "Dumbbell Goblet Squats",
        "Dumbbell Walking Lunges / Split Squats",
        "Dumbbell Romanian Deadlift",
        "Seated Dumbbell Calf Raise",
        "Standing Dumbbell Calf Raise",
    ],
};

/// Weekly split. `None` is a rest day.
pub fn plan_for_weekday(weekday: Weekday) -> Option<Plan> {
    match weekday {
        Weekday::Mon | Weekday::Thu => Some(PUSH),
        Weekday::Tue | Weekday::Fri => Some(PULL),
        Weekday::Wed | Weekday::Sat => Some(LEGS),
        Weekday::Sun => None,
    }
}

pub fn plan_for(date: NaiveDate) -> Option<Plan> {
    plan_for_weekday(date.weekday())
}

impl Plan {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[yare::parameterized(
        monday    = { Weekday::Mon, Some(PUSH) },
        tuesday   = { Weekday::Tue, Some(PULL) },
        wednesday = { Weekday::Wed, Some(LEGS) },
        thursday  = { Weekday::Thu, Some(PUSH) },
        friday    = { Weekday::Fri, Some(PULL) },
        saturday  = { Weekday::Sat, Some(LEGS) },
        sunday    = { Weekday::Sun, None },
    )]
    fn weekly_split(weekday: Weekday, expected: Option<Plan>) {
        assert_eq!(plan_for_weekday(weekday), expected);
    }

    #[test]
    fn first_monday_of_2024_is_push() {
        let plan = plan_for(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
        assert_eq!(plan.title, "Push — Chest, Shoulders, Triceps");
        assert_eq!(
            plan.items,
            &[
                "Incline Dumbbell Press",
                "Flat Dumbbell Press",
                "Dumbbell Shoulder Press (Seated/Standing)",
                "Bench Dips",
                "Dumbbell Lateral Raises",
                "Dumbbell Tricep Kickback",
            ]
        );
        assert_eq!(plan.len(), 6);
    }

    #[test]
    fn sunday_is_rest() {
        assert_eq!(plan_for(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), None);
    }

    #[test]
    fn plans_are_never_empty() {
        for plan in [PUSH, PULL, LEGS] {
            assert!(!plan.is_empty());
        }
        assert_eq!(PULL.len(), 5);
        assert_eq!(LEGS.len(), 5);
    }
}
