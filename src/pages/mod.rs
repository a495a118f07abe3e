//! Pages module
//!
//! HTML rendering of the assembled view models.

pub mod home;

pub use home::render_home;
