//! Built-in sample content source
//!
//! Serves the site with no configuration: four sample posts and the page
//! owner's profile, constructed in code. This is the default adapter when
//! no content directory is configured; a real deployment points
//! CONTENT_DIR at a directory of JSON files instead.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{
    BioEntry, Newsletter, Platform, Post, PostId, Profile, SocialLink, WebLink,
};
use crate::domain::ports::ContentSource;
use crate::error::ContentError;

/// In-code content source with the default site content
pub struct SampleContentSource {
    posts: Vec<Post>,
    profile: Profile,
}

impl SampleContentSource {
    pub fn new() -> Self {
        Self {
            posts: sample_posts(),
            profile: sample_profile(),
        }
    }
}

impl Default for SampleContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for SampleContentSource {
    async fn posts(&self) -> Result<Vec<Post>, ContentError> {
        Ok(self.posts.clone())
    }

    async fn profile(&self) -> Result<Profile, ContentError> {
        Ok(self.profile.clone())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(1),
            title: "AI and Virtual Reality in Education".to_string(),
            description: "Exploring how emerging technologies are transforming classroom \
                          learning experiences and student engagement."
                .to_string(),
            image: "/images/works/styly_eyecatch.png".to_string(),
            url: "/posts/ai-vr-education".to_string(),
            date: date(2024, 1, 15),
            category: "Research".to_string(),
            tags: vec!["AI".to_string(), "VR".to_string(), "Education".to_string()],
        },
        Post {
            id: PostId(2),
            title: "Experiential Learning in Business".to_string(),
            description: "Connecting theoretical knowledge with practical industry \
                          applications through innovative teaching methods."
                .to_string(),
            image: "/images/works/inkdrop_eyecatch.png".to_string(),
            url: "/posts/experiential-learning".to_string(),
            date: date(2023, 12, 20),
            category: "Teaching".to_string(),
            tags: vec![
                "Business".to_string(),
                "Pedagogy".to_string(),
                "Innovation".to_string(),
            ],
        },
        Post {
            id: PostId(3),
            title: "Decision Making and Technology".to_string(),
            description: "Investigating the intersection of cognitive science and digital \
                          tools in modern decision-making processes."
                .to_string(),
            image: "/images/works/walknote_eyecatch.png".to_string(),
            url: "/posts/decision-making-tech".to_string(),
            date: date(2023, 11, 10),
            category: "Research".to_string(),
            tags: vec![
                "Cognitive Science".to_string(),
                "Technology".to_string(),
                "Psychology".to_string(),
            ],
        },
        Post {
            id: PostId(4),
            title: "Student Engagement Strategies".to_string(),
            description: "Practical approaches to foster active participation and \
                          meaningful learning in higher education."
                .to_string(),
            image: "/images/works/modetokyo_eyecatch.png".to_string(),
            url: "/posts/student-engagement".to_string(),
            date: date(2023, 10, 5),
            category: "Teaching".to_string(),
            tags: vec![
                "Education".to_string(),
                "Engagement".to_string(),
                "Best Practices".to_string(),
            ],
        },
    ]
}

fn sample_profile() -> Profile {
    Profile {
        greeting: "Hello, I'm a researcher & teacher in the U.S.!".to_string(),
        name: "Hongxiao Yu".to_string(),
        tagline: "Researcher / Teacher / Traveler".to_string(),
        avatar: "/images/profile.jpg".to_string(),
        work: "I'm a professor and scholar who loves connecting classroom learning with \
               real-world business. With experience in AI, VR, and industry projects, I am \
               passionate about creating experiential learning for students and exploring \
               how technology shapes the way people think, decide, and act."
            .to_string(),
        portfolio_url: "/works".to_string(),
        bio: vec![
            BioEntry {
                year: "Present".to_string(),
                entry: "Assistant Professor, Luther College, Decorah IA, U.S.A.".to_string(),
            },
            BioEntry {
                year: "2020".to_string(),
                entry: "Instructor, University of South Carolina, Columbia SC, U.S.A."
                    .to_string(),
            },
            BioEntry {
                year: "2016".to_string(),
                entry: "NBA Reporter, Golden State Warriors, Tencent Inc., Oakland CA, U.S.A."
                    .to_string(),
            },
            BioEntry {
                year: "2015".to_string(),
                entry: "Business Development Manager, Tencent Inc., Beijing, China".to_string(),
            },
            BioEntry {
                year: "2012".to_string(),
                entry: "Assistant Director of Media, Total Sports Asia Inc., Beijing, China"
                    .to_string(),
            },
            BioEntry {
                year: "2009".to_string(),
                entry: "Activity Coordinator, Tuopu Inc., Wuhan, China".to_string(),
            },
        ],
        interests: "Art, Music, Travel, Cook, Photography, Dance".to_string(),
        social: vec![
            SocialLink {
                platform: Platform::GitHub,
                handle: "@craftzdog".to_string(),
                url: "https://github.com/craftzdog".to_string(),
            },
            SocialLink {
                platform: Platform::Twitter,
                handle: "@inkdrop_app (English)".to_string(),
                url: "https://twitter.com/inkdrop_app".to_string(),
            },
            SocialLink {
                platform: Platform::Twitter,
                handle: "@craftzdog (日本語)".to_string(),
                url: "https://twitter.com/craftzdog".to_string(),
            },
            SocialLink {
                platform: Platform::Instagram,
                handle: "@craftzdog".to_string(),
                url: "https://instagram.com/craftzdog".to_string(),
            },
        ],
        links: vec![
            WebLink {
                title: "Dev as Life".to_string(),
                url: "https://www.youtube.com/devaslife".to_string(),
                thumbnail: "/images/links/youtube.png".to_string(),
                description: "My YouTube channel (>200k subs)".to_string(),
            },
            WebLink {
                title: "Inkdrop".to_string(),
                url: "https://www.inkdrop.app/".to_string(),
                thumbnail: "/images/works/inkdrop_eyecatch.png".to_string(),
                description: "A Markdown note-taking app".to_string(),
            },
        ],
        newsletter: Some(Newsletter {
            blurb: "Join me on a behind-the-scenes coding journey. Weekly updates on \
                    projects, tutorials, and videos"
                .to_string(),
            signup_url: "https://www.devas.life/".to_string(),
        }),
    }
}
