//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{
    BioEntry, Newsletter, Platform, Post, PostId, Profile, SocialLink, WebLink,
};

/// Create a test post with the given id
pub fn test_post(id: i64) -> Post {
    Post {
        id: PostId(id),
        title: format!("Post {}", id),
        description: format!("Description of post {}", id),
        image: format!("/images/works/post-{}.png", id),
        url: format!("/posts/post-{}", id),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        category: "Research".to_string(),
        tags: vec!["Testing".to_string()],
    }
}

/// The four sample-shaped posts the scenarios use, ids 1 through 4
pub fn test_feed() -> Vec<Post> {
    vec![
        Post {
            id: PostId(1),
            title: "AI and Virtual Reality in Education".to_string(),
            description: "Exploring emerging technologies in the classroom.".to_string(),
            image: "/images/works/styly_eyecatch.png".to_string(),
            url: "/posts/ai-vr-education".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category: "Research".to_string(),
            tags: vec!["AI".to_string(), "VR".to_string()],
        },
        Post {
            id: PostId(2),
            title: "Experiential Learning in Business".to_string(),
            description: "Connecting theory with practice.".to_string(),
            image: "/images/works/inkdrop_eyecatch.png".to_string(),
            url: "/posts/experiential-learning".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
            category: "Teaching".to_string(),
            tags: vec!["Pedagogy".to_string()],
        },
        Post {
            id: PostId(3),
            title: "Decision Making and Technology".to_string(),
            description: "Cognitive science meets digital tools.".to_string(),
            image: "/images/works/walknote_eyecatch.png".to_string(),
            url: "/posts/decision-making-tech".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 10).unwrap(),
            category: "Research".to_string(),
            tags: vec!["Psychology".to_string()],
        },
        Post {
            id: PostId(4),
            title: "Student Engagement Strategies".to_string(),
            description: "Fostering active participation.".to_string(),
            image: "/images/works/modetokyo_eyecatch.png".to_string(),
            url: "/posts/student-engagement".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            category: "Teaching".to_string(),
            tags: vec!["Engagement".to_string()],
        },
    ]
}

/// Create a test profile with default values
pub fn test_profile() -> Profile {
    Profile {
        greeting: "Hello, I'm a test fixture!".to_string(),
        name: "Test Person".to_string(),
        tagline: "Tester / Fixture".to_string(),
        avatar: "/images/profile.jpg".to_string(),
        work: "I write fixtures.".to_string(),
        portfolio_url: "/works".to_string(),
        bio: vec![
            BioEntry {
                year: "Present".to_string(),
                entry: "Test fixture".to_string(),
            },
            BioEntry {
                year: "2020".to_string(),
                entry: "Earlier fixture".to_string(),
            },
        ],
        interests: "Testing, Fixtures".to_string(),
        social: vec![SocialLink {
            platform: Platform::GitHub,
            handle: "@test".to_string(),
            url: "https://github.com/test".to_string(),
        }],
        links: vec![WebLink {
            title: "Test Link".to_string(),
            url: "https://example.com/".to_string(),
            thumbnail: "/images/links/test.png".to_string(),
            description: "A test link".to_string(),
        }],
        newsletter: Some(Newsletter {
            blurb: "Test updates".to_string(),
            signup_url: "https://example.com/newsletter".to_string(),
        }),
    }
}
