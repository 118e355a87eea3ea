use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityGroup {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub member_count: Option<u32>,
    pub image_url: Option<String>,
}

/// Membership edge between a user and a community group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRelationship {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub relationship_type: Option<String>,
}
