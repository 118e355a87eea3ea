use futures::try_join;

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{CommunityGroup, FeedItem, Goal, Habit};
use crate::services::{CommunityService, PlanService, PostService};

/// Headline numbers for the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub goals: usize,
    pub habits: usize,
    pub communities: usize,
    pub posts_today: usize,
}

/// Read-only aggregate backing the home screen: goals, habits, the
/// community directory and the raw feed, loaded in one concurrent pass.
pub struct DashboardStore<G> {
    pub goals: Vec<Goal>,
    pub habits: Vec<Habit>,
    pub community_groups: Vec<CommunityGroup>,
    pub feed_items: Vec<FeedItem>,
    pub loading: bool,
    pub load_error: Option<String>,
    plans: PlanService<G>,
    community: CommunityService<G>,
    posts: PostService<G>,
}

impl<G: Gateway + Clone> DashboardStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            goals: Vec::new(),
            habits: Vec::new(),
            community_groups: Vec::new(),
            feed_items: Vec::new(),
            loading: false,
            load_error: None,
            plans: PlanService::new(gateway.clone()),
            community: CommunityService::new(gateway.clone()),
            posts: PostService::new(gateway),
        }
    }
}

impl<G: Gateway> DashboardStore<G> {
    /// Load all four collections concurrently. On failure the prior
    /// state is retained and the error recorded for inline display.
    pub async fn load(&mut self) -> Result<()> {
        self.loading = true;

        let loaded = try_join!(
            self.plans.goals(),
            self.plans.habits(),
            self.community.community_groups(),
            self.posts.feed_items(),
        );
        self.loading = false;

        match loaded {
            Ok((goals, habits, community_groups, feed_items)) => {
                self.goals = goals;
                self.habits = habits;
                self.community_groups = community_groups;
                self.feed_items = feed_items;
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("dashboard load failed: {}", e);
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            goals: self.goals.len(),
            habits: self.habits.len(),
            communities: self.community_groups.len(),
            posts_today: self.feed_items.len(),
        }
    }
}
