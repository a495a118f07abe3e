//! HTTP handlers
//!
//! Axum request handlers for the site's endpoints.

pub mod home;

pub use home::get_home;
