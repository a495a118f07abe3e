//! Profile domain entity
//!
//! The non-feed content of the homepage: who the site belongs to, the
//! biography timeline, social links, external project links, and the
//! newsletter call-to-action.

use serde::{Deserialize, Serialize};

/// The page owner's profile and the static sections of the homepage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Short greeting line shown in the info box
    pub greeting: String,
    pub name: String,
    /// One-line role description under the name
    pub tagline: String,
    /// Path or URL of the avatar image
    pub avatar: String,
    /// The "Work" paragraph
    pub work: String,
    pub portfolio_url: String,
    /// Biography timeline, in display order
    pub bio: Vec<BioEntry>,
    /// The interests line ("I ♥ ...")
    pub interests: String,
    pub social: Vec<SocialLink>,
    /// External project links shown as a small grid
    pub links: Vec<WebLink>,
    pub newsletter: Option<Newsletter>,
}

/// One row of the biography timeline
///
/// The year is free text so entries like "Present" work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioEntry {
    pub year: String,
    pub entry: String,
}

/// Social platforms the page links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    GitHub,
    Twitter,
    Instagram,
    YouTube,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::GitHub => write!(f, "github"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::YouTube => write!(f, "youtube"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(Platform::GitHub),
            "twitter" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            "youtube" => Ok(Platform::YouTube),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// A social account link ("On the web" list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    /// Display text, e.g. "@craftzdog"
    pub handle: String,
    pub url: String,
}

/// An external project link with a thumbnail (the link grid)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebLink {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub description: String,
}

/// Newsletter call-to-action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    pub blurb: String,
    pub signup_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn platform_display_from_str_roundtrip() {
        for platform in [
            Platform::GitHub,
            Platform::Twitter,
            Platform::Instagram,
            Platform::YouTube,
        ] {
            let parsed = Platform::from_str(&platform.to_string()).unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn platform_from_str_is_case_insensitive() {
        assert_eq!(Platform::from_str("GitHub").unwrap(), Platform::GitHub);
        assert_eq!(Platform::from_str("YOUTUBE").unwrap(), Platform::YouTube);
    }

    #[test]
    fn platform_from_str_rejects_unknown() {
        assert!(Platform::from_str("myspace").is_err());
    }

    #[test]
    fn platform_serializes_lowercase() {
        let link = SocialLink {
            platform: Platform::GitHub,
            handle: "@craftzdog".to_string(),
            url: "https://github.com/craftzdog".to_string(),
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["platform"], "github");
    }
}
