//! Domain layer
//!
//! Contains pure content logic with no external dependencies.
//! - `entities`: Domain models representing the page's content
//! - `feed`: The post feed splitting and validation logic
//! - `ports`: Trait definitions for content providers

pub mod entities;
pub mod feed;
pub mod ports;
