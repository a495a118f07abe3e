//! Domain entities
//!
//! Pure content models for the homepage. These are what the content
//! providers produce and what the rendering layer consumes.

pub mod post;
pub mod profile;

pub use post::{Post, PostId};
pub use profile::{BioEntry, Newsletter, Platform, Profile, SocialLink, WebLink};
