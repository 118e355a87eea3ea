use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{CommunityGroup, UserRelationship};

/// Typed endpoints for the community directory.
pub struct CommunityService<G> {
    gateway: G,
}

impl<G: Gateway> CommunityService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn community_groups(&self) -> Result<Vec<CommunityGroup>> {
        self.gateway.load("community-groups").await
    }

    pub async fn community_group(&self, id: i64) -> Result<CommunityGroup> {
        self.gateway.load(&format!("community-groups/{id}")).await
    }

    /// Membership edges, used to check whether the user joined a group.
    pub async fn user_relationships(&self) -> Result<Vec<UserRelationship>> {
        self.gateway.load("user-relationships").await
    }
}
