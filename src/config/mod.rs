//! Configuration module
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SmootherPaths;
pub use settings::Settings;
