//! Post feed splitting and validation
//!
//! The feed contract: the first post of an ordered feed is the featured
//! (hero) post, the rest fill the recent-posts grid. The split is a pure,
//! borrow-only transform; an empty feed is valid and yields neither.
//!
//! Validation enforces the data-model constraints (non-empty titles,
//! unique ids and urls) at the point where content enters the system.
//! The splitter itself never fails.

use std::collections::HashSet;

use crate::domain::entities::Post;
use crate::error::ContentError;

/// Result of splitting a feed into hero and grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSplit<'a> {
    /// The first post, if the feed is non-empty
    pub featured: Option<&'a Post>,
    /// All posts from index 1 onward, in feed order
    pub remaining: &'a [Post],
}

/// Split an ordered feed into a featured post and the remaining grid.
///
/// Input order is display order; posts are never re-ordered or cloned.
pub fn split_feed(posts: &[Post]) -> FeedSplit<'_> {
    match posts.split_first() {
        Some((first, rest)) => FeedSplit {
            featured: Some(first),
            remaining: rest,
        },
        None => FeedSplit {
            featured: None,
            remaining: &[],
        },
    }
}

/// Check the feed against the data-model constraints.
///
/// An empty feed is valid. Titles must be non-empty; ids and urls must be
/// unique within the feed.
pub fn validate_feed(posts: &[Post]) -> Result<(), ContentError> {
    let mut ids = HashSet::new();
    let mut urls = HashSet::new();

    for post in posts {
        if post.title.trim().is_empty() {
            return Err(ContentError::Validation(format!(
                "post {} has an empty title",
                post.id
            )));
        }
        if !ids.insert(post.id) {
            return Err(ContentError::Validation(format!(
                "duplicate post id: {}",
                post.id
            )));
        }
        if !urls.insert(post.url.as_str()) {
            return Err(ContentError::Validation(format!(
                "duplicate post url: {}",
                post.url
            )));
        }
    }

    Ok(())
}
