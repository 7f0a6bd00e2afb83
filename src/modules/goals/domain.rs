use chrono::NaiveDate;

pub use crate::modules::store::records::{Goal, GoalPatch};
use crate::shared::validation::{Form, Rule, ValidationErrors, Value};

/// A goal entry as submitted from the tracker form, before it is
/// accepted. Numeric fields are wide on purpose: range checks happen
/// here, not at parse time.
#[derive(Debug, Clone, Copy)]
pub struct GoalDraft {
    pub date: NaiveDate,
    pub steps: i64,
    pub water_intake: i64,
    pub sleep_hours: f64,
}

impl GoalDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Form::new()
            .field(
                "date",
                "Date",
                Value::Date(self.date),
                vec![
                    Rule::Required,
                    Rule::NotFutureDate("Cannot log goals for future dates"),
                ],
            )
            .field(
                "steps",
                "Steps",
                Value::Number(self.steps as f64),
                vec![
                    Rule::Required,
                    Rule::Min(0.0, "Steps cannot be negative"),
                    Rule::Max(100_000.0, "Steps must be less than 100,000"),
                ],
            )
            .field(
                "waterIntake",
                "Water intake",
                Value::Number(self.water_intake as f64),
                vec![
                    Rule::Required,
                    Rule::Min(0.0, "Water intake cannot be negative"),
                    Rule::Max(30.0, "Water intake must be less than 30 glasses"),
                ],
            )
            .field(
                "sleepHours",
                "Sleep hours",
                Value::Number(self.sleep_hours),
                vec![
                    Rule::Required,
                    Rule::Min(0.0, "Sleep hours cannot be negative"),
                    Rule::Max(24.0, "Sleep hours cannot exceed 24"),
                ],
            )
            .validate()
    }

    pub fn as_patch(&self) -> GoalPatch {
        GoalPatch {
            date: self.date,
            steps: self.steps as u32,
            water_intake: self.water_intake as u32,
            sleep_hours: self.sleep_hours,
        }
    }
}

/// Tracker ordering: most recent entry first. The store lists in
/// insertion order, so the list is reversed and then stable-sorted by
/// date descending; entries sharing a date keep latest-written-first.
pub fn newest_first(mut goals: Vec<Goal>) -> Vec<Goal> {
    goals.reverse();
    goals.sort_by(|a, b| b.date.cmp(&a.date));
    goals
}
