use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{Comment, FeedItem, NewComment, NewFeedItem, UserReaction};

/// Typed endpoints for the social feed: posts, comments and reactions.
pub struct PostService<G> {
    gateway: G,
}

impl<G: Gateway> PostService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn feed_items(&self) -> Result<Vec<FeedItem>> {
        self.gateway.load("feed-items").await
    }

    pub async fn feed_item(&self, id: i64) -> Result<FeedItem> {
        self.gateway.load(&format!("feed-items/{id}")).await
    }

    pub async fn comments(&self) -> Result<Vec<Comment>> {
        self.gateway.load("comments").await
    }

    /// Comments attached to a single post.
    pub async fn comments_for(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.gateway
            .load(&format!("comments/{post_id}/for_reaction"))
            .await
    }

    pub async fn user_reactions(&self) -> Result<Vec<UserReaction>> {
        self.gateway.load("user-reactions").await
    }

    pub async fn create_post(&self, post: &NewFeedItem) -> Result<FeedItem> {
        self.gateway.create("feed-items", post).await
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        self.gateway.create("comments", comment).await
    }
}
