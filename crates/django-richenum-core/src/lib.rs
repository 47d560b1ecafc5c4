//! # django-richenum-core
//!
//! Error types, settings, and logging shared by the django-richenum crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Settings and the global [`SETTINGS`] instance
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{DjangoError, DjangoResult, ValidationError};
pub use settings::{Settings, SETTINGS};
