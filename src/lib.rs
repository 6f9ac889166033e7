//! botadmin
//!
//! An administrative dashboard for managing chatbot configurations,
//! viewing their subscription records, and displaying aggregate usage
//! analytics. All data lives behind a set of remote automation-workflow
//! webhook endpoints; this crate issues JSON requests and renders the
//! responses, with no persistence layer of its own.

pub mod analytics;
pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use services::ServiceFactory;
pub use utils::errors::{BotAdminError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
