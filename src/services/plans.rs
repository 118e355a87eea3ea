use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{ActivityCategory, Goal, GoalTemplate, Habit, TrackingEntry};

/// Typed endpoints for goals, habits and activity catalogues.
pub struct PlanService<G> {
    gateway: G,
}

impl<G: Gateway> PlanService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn goals(&self) -> Result<Vec<Goal>> {
        self.gateway.load("goals").await
    }

    pub async fn goal_templates(&self) -> Result<Vec<GoalTemplate>> {
        self.gateway.load("goal-templates").await
    }

    pub async fn habits(&self) -> Result<Vec<Habit>> {
        self.gateway.load("habits").await
    }

    pub async fn activity_categories(&self) -> Result<Vec<ActivityCategory>> {
        self.gateway.load("activity-categories").await
    }

    pub async fn tracking_entries(&self) -> Result<Vec<TrackingEntry>> {
        self.gateway.load("tracking-entries").await
    }
}
