pub mod config;
pub mod error;
pub mod manifest;
pub mod propagate;
pub mod ui;
pub mod version;

pub use error::{ReleaseBumpError, Result};
