mod community;
mod plan;
mod post;
mod user;

pub use community::{CommunityGroup, UserRelationship};
pub use plan::{ActivityCategory, Goal, GoalTemplate, Habit, NewTask, Task, TrackingEntry};
pub use post::{Comment, FeedItem, NewComment, NewFeedItem, Post, SyncState, UserReaction};
pub use user::{User, UserHabit};
