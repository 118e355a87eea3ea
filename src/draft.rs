use std::collections::HashMap;

/// Field names a post composer edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Text,
    Image,
}

/// A locally-attached image and the preview reference derived for it.
/// The preview is available synchronously, before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub source: String,
    pub preview: String,
}

/// Transient input state for a post that has not been submitted yet.
/// Cleared after every successful submit and on explicit cancel.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    text: String,
    image: Option<ImageAttachment>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one field change into the draft. Does not touch any store.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Text => self.text = value.to_string(),
            DraftField::Image => {
                if value.is_empty() {
                    self.remove_image();
                } else {
                    self.attach_image(value);
                }
            }
        }
    }

    /// Attach a local image reference and return the preview reference
    /// for immediate display. Replaces any previous attachment.
    pub fn attach_image(&mut self, source: impl Into<String>) -> &str {
        let source = source.into();
        let preview = format!("preview://{source}");
        &self.image.insert(ImageAttachment { source, preview }).preview
    }

    pub fn remove_image(&mut self) {
        self.image = None;
    }

    /// A draft is submittable with trimmed text, an image, or both.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() || self.image.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }
}

/// Comment input state, one draft per target post.
#[derive(Debug, Clone, Default)]
pub struct CommentDrafts {
    drafts: HashMap<i64, String>,
}

impl CommentDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, post_id: i64, text: &str) {
        if text.is_empty() {
            self.drafts.remove(&post_id);
        } else {
            self.drafts.insert(post_id, text.to_string());
        }
    }

    pub fn text(&self, post_id: i64) -> &str {
        self.drafts.get(&post_id).map(String::as_str).unwrap_or("")
    }

    pub fn can_submit(&self, post_id: i64) -> bool {
        !self.text(post_id).trim().is_empty()
    }

    /// Remove and return the draft for a post, clearing it on submit.
    pub fn take(&mut self, post_id: i64) -> Option<String> {
        self.drafts.remove(&post_id)
    }

    pub fn clear(&mut self, post_id: i64) {
        self.drafts.remove(&post_id);
    }
}
