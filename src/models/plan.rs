use serde::{Deserialize, Serialize};

/// A single entry in the user's daily plan. Plan tasks live entirely in
/// the plan store; ids are assigned locally by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub label: String,
    /// Free-form clock value, e.g. "7:00" or "8 AM".
    pub time: String,
    pub completed: bool,
}

/// Input for a task about to be added to a plan.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub label: String,
    pub time: String,
}

impl NewTask {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTemplate {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEntry {
    pub id: i64,
    pub user_id: i64,
    pub activity_id: i64,
    pub value: f64,
    pub date: String,
}
