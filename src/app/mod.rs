//! Application layer
//!
//! Services coordinate between the domain logic and the content ports.

pub mod home_service;

pub use home_service::{HomePage, HomeService};
