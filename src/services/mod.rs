mod community;
mod plans;
mod posts;
mod users;

pub use community::CommunityService;
pub use plans::PlanService;
pub use posts::PostService;
pub use users::UserService;
