//! Mock implementations of port traits
//!
//! In-memory content source that can be configured for testing.

use async_trait::async_trait;

use crate::domain::entities::{Post, Profile};
use crate::domain::ports::ContentSource;
use crate::error::ContentError;
use crate::test_utils::test_profile;

/// In-memory content source for tests
///
/// Starts with an empty feed and a default profile; use the builder
/// methods to configure, or `failing()` to simulate a broken source.
pub struct InMemoryContentSource {
    posts: Vec<Post>,
    profile: Profile,
    should_fail: bool,
}

impl InMemoryContentSource {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            profile: test_profile(),
            should_fail: false,
        }
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// A source whose every call fails
    pub fn failing() -> Self {
        Self {
            posts: Vec::new(),
            profile: test_profile(),
            should_fail: true,
        }
    }

    fn failure() -> ContentError {
        ContentError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "mock content failure",
        ))
    }
}

impl Default for InMemoryContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for InMemoryContentSource {
    async fn posts(&self) -> Result<Vec<Post>, ContentError> {
        if self.should_fail {
            return Err(Self::failure());
        }
        Ok(self.posts.clone())
    }

    async fn profile(&self) -> Result<Profile, ContentError> {
        if self.should_fail {
            return Err(Self::failure());
        }
        Ok(self.profile.clone())
    }
}
