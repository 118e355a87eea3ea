mod dashboard;
mod feed;
mod plan;

pub use dashboard::{DashboardStore, QuickStats};
pub use feed::FeedStore;
pub use plan::PlanStore;
