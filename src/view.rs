//! Pure render projections. Everything here is referentially
//! transparent: identical inputs always give identical outputs, so the
//! presentation layer may memoize freely.

use crate::models::{CommunityGroup, FeedItem, Goal};

/// Progress towards a target as a percentage clamped to `[0, 100]`.
/// A target of zero (or less) reads as no progress.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (100.0 * current / target).min(100.0)
}

pub fn goal_progress(goal: &Goal) -> f64 {
    progress_percent(
        goal.current_value.unwrap_or(0.0),
        goal.target_value.unwrap_or(0.0),
    )
}

/// `"{completed} of {total} today"`, the daily plan headline.
pub fn plan_summary_label(completed: usize, total: usize) -> String {
    format!("{completed} of {total} today")
}

/// Deterministic stand-in for a count the backend did not provide:
/// FNV-1a over the entity id, reduced modulo `cap`. Stable across runs,
/// so rendering stays reproducible.
pub fn fallback_count(id: i64, cap: u32) -> u32 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in id.to_le_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    if cap == 0 {
        return 0;
    }
    (hash % u64::from(cap)) as u32
}

/// Like count to display for a raw feed item.
pub fn like_display(item: &FeedItem) -> u32 {
    item.likes_count.unwrap_or_else(|| fallback_count(item.id, 50))
}

/// Comment count to display for a raw feed item.
pub fn comment_display(item: &FeedItem) -> u32 {
    item.comments_count
        .unwrap_or_else(|| fallback_count(item.id, 20))
}

/// Member count to display for a community group; the fallback lands in
/// the 100..1100 band the directory has always shown.
pub fn member_display(group: &CommunityGroup) -> u32 {
    group
        .member_count
        .unwrap_or_else(|| fallback_count(group.id, 1000) + 100)
}
