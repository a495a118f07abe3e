//! Post domain entity
//!
//! A post is one content record in the feed: a blog or portfolio entry
//! with a title, summary, image, link, date, category, and tags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a post within a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content record in the feed
///
/// Posts are constructed wholesale by a content source before rendering
/// and never mutated afterwards. The feed order is the display order;
/// the date is used for display only, never for sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub description: String,
    /// Path or URL of the post's image asset
    pub image: String,
    /// Target link, unique per post within a feed
    pub url: String,
    pub date: NaiveDate,
    /// Free-form category label
    pub category: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Long date form used by the hero section, e.g. "January 15, 2024"
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Short date form used by grid cards, e.g. "Jan 15, 2024"
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}
