//! JSON content directory source
//!
//! Reads the site content from a directory of JSON files:
//! `posts.json` (an array of posts, in display order) and `profile.json`.
//! The feed is validated after load; render order is file order.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::domain::entities::{Post, Profile};
use crate::domain::feed::validate_feed;
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

const POSTS_FILE: &str = "posts.json";
const PROFILE_FILE: &str = "profile.json";

/// Content source backed by a directory of JSON files
pub struct JsonContentSource {
    dir: PathBuf,
}

impl JsonContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, ContentError> {
        let path = self.dir.join(file);
        let raw = read_file(&path).await?;

        serde_json::from_str(&raw).map_err(|e| ContentError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
    }
}

async fn read_file(path: &Path) -> Result<String, ContentError> {
    match fs::read_to_string(path).await {
        Ok(raw) => Ok(raw),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ContentError::NotFound(path.display().to_string()))
        }
        Err(e) => Err(ContentError::Io(e)),
    }
}

#[async_trait]
impl ContentSource for JsonContentSource {
    async fn posts(&self) -> Result<Vec<Post>, ContentError> {
        let posts: Vec<Post> = self.load(POSTS_FILE).await?;
        validate_feed(&posts)?;
        Ok(posts)
    }

    async fn profile(&self) -> Result<Profile, ContentError> {
        self.load(PROFILE_FILE).await
    }
}
