//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

use async_trait::async_trait;

use crate::domain::entities::{Post, Profile};
use crate::error::ContentError;

/// Provider of the page's content snapshot
///
/// Implementations hand back a fresh, ordered snapshot per call; the feed
/// order they return is the display order. Nothing downstream mutates or
/// re-sorts what a source produces.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The ordered post feed
    async fn posts(&self) -> Result<Vec<Post>, ContentError>;

    /// The profile and static page sections
    async fn profile(&self) -> Result<Profile, ContentError>;
}
