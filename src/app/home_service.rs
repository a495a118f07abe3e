//! Home page service
//!
//! Fetches the content snapshot through the `ContentSource` port, applies
//! the feed split, and assembles the view model the renderer (or the JSON
//! response) consumes. One request, one snapshot.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Post, Profile};
use crate::domain::feed::split_feed;
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

/// The assembled home page - everything a single render needs
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub profile: Profile,
    /// The hero post, if the feed is non-empty
    pub featured: Option<Post>,
    /// The grid posts, in feed order
    pub remaining: Vec<Post>,
}

/// Service assembling the home page from a content source
pub struct HomeService<C>
where
    C: ContentSource,
{
    content: Arc<C>,
}

impl<C> HomeService<C>
where
    C: ContentSource,
{
    pub fn new(content: Arc<C>) -> Self {
        Self { content }
    }

    /// Build the home page view model for one request.
    ///
    /// Only content-source failures can fail this; an empty feed yields
    /// `featured: None` and an empty `remaining`.
    pub async fn home_page(&self) -> Result<HomePage, ContentError> {
        let posts = self.content.posts().await?;
        let profile = self.content.profile().await?;

        let split = split_feed(&posts);

        Ok(HomePage {
            profile,
            featured: split.featured.cloned(),
            remaining: split.remaining.to_vec(),
        })
    }
}
