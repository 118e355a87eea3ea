use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of a post as the backend serves it from `feed-items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author_id: i64,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub likes_count: Option<u32>,
    pub comments_count: Option<u32>,
    pub image_url: Option<String>,
}

/// Body of a `POST feed-items` create call.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeedItem {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author_id: i64,
    pub author_name: Option<String>,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of a `POST comments` create call.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReaction {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub target_type: String,
    pub reaction_type: String,
}

/// Whether an optimistically-created entity has settled with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Create call in flight; the entity must not be resubmitted.
    Pending,
    #[default]
    Confirmed,
    /// Create call failed; the local entity is retained, not rolled back.
    Failed,
}

/// A post as the feed store owns it: wire fields resolved, plus like
/// state and the comment sequence nested under their parent.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub image_url: Option<String>,
    pub like_count: u32,
    pub liked: bool,
    pub comments: Vec<Comment>,
    pub sync: SyncState,
}

impl Post {
    /// Build a store post from the wire shape, nesting the comments that
    /// belong to it.
    pub fn from_wire(item: FeedItem, liked: bool, comments: Vec<Comment>) -> Self {
        let author_name = item
            .author_name
            .unwrap_or_else(|| format!("User {}", item.author_id));
        Self {
            id: item.id,
            author_name,
            created_at: item.created_at,
            content: item.content,
            image_url: item.image_url,
            like_count: item.likes_count.unwrap_or(0),
            liked,
            comments,
            sync: SyncState::Confirmed,
        }
    }

    /// Project back into the gateway's JSON shape.
    pub fn to_wire(&self) -> FeedItem {
        FeedItem {
            id: self.id,
            content: self.content.clone(),
            author_id: 0,
            author_name: Some(self.author_name.clone()),
            created_at: self.created_at,
            likes_count: Some(self.like_count),
            comments_count: Some(self.comments.len() as u32),
            image_url: self.image_url.clone(),
        }
    }
}
