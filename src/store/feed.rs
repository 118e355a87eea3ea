use std::collections::HashMap;

use chrono::Utc;
use futures::try_join;

use crate::draft::PostDraft;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{Comment, NewComment, NewFeedItem, Post, SyncState};
use crate::services::PostService;

/// Reaction rows that mark a post as liked by the current user.
const REACTION_TARGET_POST: &str = "post";
const REACTION_LIKE: &str = "like";

/// Owned, in-memory state of the social feed: the post list and, nested
/// under each post, its comments and like state. Mutations are applied
/// optimistically; the gateway round-trip reconciles identities without
/// reordering.
pub struct FeedStore<G> {
    posts: Vec<Post>,
    service: PostService<G>,
    author_name: String,
    pub loading: bool,
    pub load_error: Option<String>,
    next_comment_id: i64,
    next_provisional_id: i64,
}

impl<G: Gateway> FeedStore<G> {
    pub fn new(gateway: G, author_name: impl Into<String>) -> Self {
        Self {
            posts: Vec::new(),
            service: PostService::new(gateway),
            author_name: author_name.into(),
            loading: false,
            load_error: None,
            next_comment_id: 1,
            next_provisional_id: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    fn post_mut(&mut self, post_id: i64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    /// Fetch the current remote snapshot and replace local state
    /// wholesale. On failure the prior in-memory state is retained and
    /// the error is surfaced for display.
    pub async fn load_feed(&mut self) -> Result<()> {
        self.loading = true;

        let loaded = try_join!(
            self.service.feed_items(),
            self.service.comments(),
            self.service.user_reactions(),
        );
        self.loading = false;

        let (items, comments, reactions) = match loaded {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!("feed load failed: {}", e);
                self.load_error = Some(e.to_string());
                return Err(e);
            }
        };

        let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
        let mut max_comment_id = 0;
        for comment in comments {
            max_comment_id = max_comment_id.max(comment.id);
            by_post.entry(comment.post_id).or_default().push(comment);
        }

        let liked: Vec<i64> = reactions
            .iter()
            .filter(|r| r.target_type == REACTION_TARGET_POST && r.reaction_type == REACTION_LIKE)
            .map(|r| r.target_id)
            .collect();

        self.posts = items
            .into_iter()
            .map(|item| {
                let comments = by_post.remove(&item.id).unwrap_or_default();
                let is_liked = liked.contains(&item.id);
                Post::from_wire(item, is_liked, comments)
            })
            .collect();

        // Locally-minted comment ids must stay above everything loaded.
        self.next_comment_id = self.next_comment_id.max(max_comment_id + 1);
        self.load_error = None;
        Ok(())
    }

    /// Submit the draft as a new post: prepend it optimistically
    /// (newest-first), then round-trip the create call and reconcile the
    /// backend identity in place. Returns `Ok(None)` without touching
    /// the feed when the draft has neither text nor an image. On gateway
    /// failure the local entity is retained, flagged `Failed`, and the
    /// error is returned; creates are at-least-once, never rolled back.
    pub async fn submit_post(&mut self, draft: &PostDraft) -> Result<Option<i64>> {
        if !draft.can_submit() {
            return Ok(None);
        }

        let content = draft.text().trim().to_string();
        let image_url = draft.image().map(|img| img.source.clone());

        self.next_provisional_id -= 1;
        let provisional_id = self.next_provisional_id;

        self.posts.insert(
            0,
            Post {
                id: provisional_id,
                author_name: self.author_name.clone(),
                created_at: Utc::now(),
                content: content.clone(),
                image_url: image_url.clone(),
                like_count: 0,
                liked: false,
                comments: Vec::new(),
                sync: SyncState::Pending,
            },
        );

        let body = NewFeedItem { content, image_url };
        match self.service.create_post(&body).await {
            Ok(created) => {
                // Look the entity up again: the list may have shifted
                // while the create was in flight.
                if let Some(post) = self.post_mut(provisional_id) {
                    post.id = created.id;
                    post.created_at = created.created_at;
                    post.sync = SyncState::Confirmed;
                    for comment in &mut post.comments {
                        comment.post_id = created.id;
                    }
                }
                tracing::debug!("post confirmed as feed item {}", created.id);
                Ok(Some(created.id))
            }
            Err(e) => {
                if let Some(post) = self.post_mut(provisional_id) {
                    post.sync = SyncState::Failed;
                }
                tracing::warn!("post create failed, keeping local entity: {}", e);
                Err(e)
            }
        }
    }

    /// Flip the like state of a post, moving its count by exactly one in
    /// the matching direction. Optimistic only; no network call. Unknown
    /// ids are a silent no-op.
    pub fn toggle_like(&mut self, post_id: i64) {
        if let Some(post) = self.post_mut(post_id) {
            post.liked = !post.liked;
            if post.liked {
                post.like_count += 1;
            } else {
                post.like_count = post.like_count.saturating_sub(1);
            }
        }
    }

    /// Append a comment to a post, newest-last, with a locally-minted
    /// id. No-op (returns `None`) on blank text or an unknown post.
    pub fn submit_comment(&mut self, post_id: i64, text: &str) -> Option<i64> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        let author_name = self.author_name.clone();
        let next_id = self.next_comment_id;
        let post = self.post_mut(post_id)?;

        let comment = Comment {
            id: next_id,
            content: content.to_string(),
            author_id: 0,
            author_name: Some(author_name),
            post_id,
            created_at: Utc::now(),
        };
        post.comments.push(comment);
        self.next_comment_id += 1;
        Some(next_id)
    }

    /// Like [`FeedStore::submit_comment`], but also round-trips the
    /// create call and adopts the backend id in place.
    pub async fn submit_comment_synced(&mut self, post_id: i64, text: &str) -> Result<Option<i64>> {
        let Some(local_id) = self.submit_comment(post_id, text) else {
            return Ok(None);
        };

        let body = NewComment {
            content: text.trim().to_string(),
            post_id,
        };
        match self.service.create_comment(&body).await {
            Ok(created) => {
                if let Some(post) = self.post_mut(post_id) {
                    if let Some(comment) = post.comments.iter_mut().find(|c| c.id == local_id) {
                        comment.id = created.id;
                    }
                }
                Ok(Some(created.id))
            }
            Err(e) => {
                tracing::warn!("comment create failed, keeping local entity: {}", e);
                Err(e)
            }
        }
    }

    /// Re-fetch one post's comment list from the backend, replacing the
    /// local sequence. Unknown ids are a no-op.
    pub async fn refresh_comments(&mut self, post_id: i64) -> Result<()> {
        if self.post(post_id).is_none() {
            return Ok(());
        }
        let comments = self.service.comments_for(post_id).await?;
        let max_id = comments.iter().map(|c| c.id).max().unwrap_or(0);
        if let Some(post) = self.post_mut(post_id) {
            post.comments = comments;
        }
        self.next_comment_id = self.next_comment_id.max(max_id + 1);
        Ok(())
    }

    /// Comment count for a post, always the length of its comment
    /// sequence. Unknown posts count as zero.
    pub fn comment_count_for(&self, post_id: i64) -> usize {
        self.post(post_id).map(|p| p.comments.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryGateway;
    use serde_json::json;

    fn seeded_gateway() -> MemoryGateway {
        let gateway = MemoryGateway::new();
        gateway.seed(
            "feed-items",
            json!([
                { "id": 1, "content": "Morning yoga done", "author_id": 2,
                  "author_name": "Sarah Johnson", "created_at": "2024-06-01T08:00:00Z",
                  "likes_count": 42, "comments_count": 1, "image_url": null },
                { "id": 2, "content": "Meal prep Sunday", "author_id": 3,
                  "author_name": "Mike Chen", "created_at": "2024-06-01T06:00:00Z",
                  "likes_count": 28, "comments_count": 0, "image_url": null }
            ]),
        );
        gateway.seed(
            "comments",
            json!([
                { "id": 10, "content": "Inspiring!", "author_id": 3,
                  "author_name": "Mike Chen", "post_id": 1,
                  "created_at": "2024-06-01T09:00:00Z" }
            ]),
        );
        gateway.seed(
            "user-reactions",
            json!([
                { "id": 1, "user_id": 1, "target_id": 2,
                  "target_type": "post", "reaction_type": "like" }
            ]),
        );
        gateway
    }

    async fn loaded_store() -> FeedStore<MemoryGateway> {
        let mut store = FeedStore::new(seeded_gateway(), "You");
        store.load_feed().await.unwrap();
        store
    }

    #[tokio::test]
    async fn load_feed_nests_comments_and_like_state() {
        let mut store = FeedStore::new(seeded_gateway(), "You");
        store.load_feed().await.unwrap();

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.comment_count_for(1), 1);
        assert_eq!(store.comment_count_for(2), 0);
        assert!(!store.post(1).unwrap().liked);
        assert!(store.post(2).unwrap().liked);
        assert!(!store.loading);
        assert!(store.load_error.is_none());
    }

    #[tokio::test]
    async fn failed_load_retains_prior_state() {
        let gateway = seeded_gateway();
        let mut store = FeedStore::new(gateway.clone(), "You");
        store.load_feed().await.unwrap();

        // Simulate the comments collection going away.
        gateway.seed("comments", json!("not a list"));
        let err = store.load_feed().await.unwrap_err();

        assert_eq!(store.posts().len(), 2, "prior posts are kept");
        assert!(store.load_error.is_some());
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn whitespace_only_draft_does_not_change_the_feed() {
        let mut store = loaded_store().await;
        let mut draft = PostDraft::new();
        draft.update_field(crate::draft::DraftField::Text, "   ");

        let result = store.submit_post(&draft).await.unwrap();
        assert!(result.is_none());
        assert_eq!(store.posts().len(), 2);
    }

    #[tokio::test]
    async fn submitted_post_is_prepended_and_reconciled() {
        let mut store = loaded_store().await;
        let mut draft = PostDraft::new();
        draft.update_field(crate::draft::DraftField::Text, "Finally hit 10,000 steps!");

        let id = store.submit_post(&draft).await.unwrap().unwrap();

        let first = &store.posts()[0];
        assert_eq!(first.id, id, "backend id adopted in place");
        assert!(first.id > 0, "provisional id replaced");
        assert_eq!(first.sync, SyncState::Confirmed);
        assert_eq!(first.author_name, "You");
        assert_eq!(first.like_count, 0);
        assert!(!first.liked);
        assert_eq!(store.posts().len(), 3);
    }

    #[tokio::test]
    async fn image_only_draft_is_submittable() {
        let mut store = loaded_store().await;
        let mut draft = PostDraft::new();
        draft.attach_image("walk.png");

        let id = store.submit_post(&draft).await.unwrap().unwrap();
        let post = store.post(id).unwrap();
        assert_eq!(post.image_url.as_deref(), Some("walk.png"));
        assert_eq!(post.content, "");
    }

    #[test]
    fn toggle_like_parity_holds_over_repeated_toggles() {
        let mut store = tokio_test::block_on(loaded_store());

        for round in 1..=5 {
            store.toggle_like(1);
            let post = store.post(1).unwrap();
            if round % 2 == 1 {
                assert!(post.liked);
                assert_eq!(post.like_count, 43);
            } else {
                assert!(!post.liked);
                assert_eq!(post.like_count, 42);
            }
        }
    }

    #[test]
    fn toggle_like_on_unknown_post_is_a_no_op() {
        let mut store = tokio_test::block_on(loaded_store());
        store.toggle_like(999);
        assert_eq!(store.post(1).unwrap().like_count, 42);
        assert_eq!(store.post(2).unwrap().like_count, 28);
    }

    #[test]
    fn comment_lands_on_exactly_one_post() {
        let mut store = tokio_test::block_on(loaded_store());

        let id = store.submit_comment(2, "Nice!").unwrap();
        assert!(id > 10, "local ids continue above loaded comment ids");
        assert_eq!(store.comment_count_for(2), 1);
        assert_eq!(store.comment_count_for(1), 1, "other posts untouched");

        let comment = store.post(2).unwrap().comments.last().unwrap();
        assert_eq!(comment.content, "Nice!");
        assert_eq!(comment.post_id, 2);
    }

    #[test]
    fn blank_comment_or_unknown_post_is_rejected() {
        let mut store = tokio_test::block_on(loaded_store());
        assert!(store.submit_comment(1, "   ").is_none());
        assert!(store.submit_comment(999, "Hello").is_none());
        assert_eq!(store.comment_count_for(1), 1);
    }

    #[tokio::test]
    async fn synced_comment_adopts_backend_id() {
        let mut store = loaded_store().await;

        let id = store.submit_comment_synced(1, "Keep it up!").await.unwrap().unwrap();
        let comment = store.post(1).unwrap().comments.last().unwrap();
        assert_eq!(comment.id, id);
        assert_eq!(store.comment_count_for(1), 2);
    }

    #[tokio::test]
    async fn refresh_comments_replaces_one_post_sequence() {
        let gateway = seeded_gateway();
        gateway.seed(
            "comments/1/for_reaction",
            json!([
                { "id": 10, "content": "Inspiring!", "author_id": 3,
                  "author_name": "Mike Chen", "post_id": 1,
                  "created_at": "2024-06-01T09:00:00Z" },
                { "id": 11, "content": "Same here", "author_id": 4,
                  "author_name": "Emma Wilson", "post_id": 1,
                  "created_at": "2024-06-01T09:30:00Z" }
            ]),
        );

        let mut store = FeedStore::new(gateway, "You");
        store.load_feed().await.unwrap();
        store.refresh_comments(1).await.unwrap();

        assert_eq!(store.comment_count_for(1), 2);
        assert_eq!(store.comment_count_for(2), 0, "other posts untouched");

        // Unknown posts are a no-op, not an error.
        store.refresh_comments(999).await.unwrap();

        // Freshly minted ids stay above the refreshed ones.
        let id = store.submit_comment(1, "Count me in").unwrap();
        assert!(id > 11);
    }

    #[tokio::test]
    async fn failed_create_keeps_entity_flagged() {
        // A gateway that rejects every call.
        struct FailingGateway;

        impl Gateway for FailingGateway {
            async fn load<T: serde::de::DeserializeOwned>(
                &self,
                _endpoint: &str,
            ) -> crate::error::Result<T> {
                Err(crate::error::AppError::Api { status: 500 })
            }
            async fn create<B: serde::Serialize + Sync, T: serde::de::DeserializeOwned>(
                &self,
                _endpoint: &str,
                _body: &B,
            ) -> crate::error::Result<T> {
                Err(crate::error::AppError::Api { status: 500 })
            }
        }

        let mut store = FeedStore::new(FailingGateway, "You");
        let mut draft = PostDraft::new();
        draft.update_field(crate::draft::DraftField::Text, "Still counts");

        let err = store.submit_post(&draft).await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        let post = &store.posts()[0];
        assert_eq!(post.sync, SyncState::Failed);
        assert_eq!(post.content, "Still counts");
        assert!(post.id < 0, "provisional id kept until a create lands");
    }
}
