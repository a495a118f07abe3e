//! Adapters layer
//!
//! Implementations of the `ContentSource` port.

pub mod file;
pub mod sample;

pub use file::JsonContentSource;
pub use sample::SampleContentSource;
