use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{User, UserHabit};

/// Typed endpoints for user profiles and per-user habit links.
pub struct UserService<G> {
    gateway: G,
}

impl<G: Gateway> UserService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.gateway.load("users").await
    }

    pub async fn user(&self, id: i64) -> Result<User> {
        self.gateway.load(&format!("users/{id}")).await
    }

    pub async fn user_habits(&self, user_id: i64) -> Result<Vec<UserHabit>> {
        self.gateway.load(&format!("user-habits/user/{user_id}")).await
    }
}
