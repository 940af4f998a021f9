//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (content types, drafts, settings, messages)
//! - `controllers/` - Orchestration (selection, submission)
//! - `services/` - Business operations (mode loading, backend, preferences, syntax)
//! - `infrastructure/` - External integrations (clock, navigator, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient external access
pub use controllers::selection::SelectionController;
pub use controllers::submission::SubmissionController;
pub use domain::{AppSettings, ContentType, ExpirationChoice, Message, ThemePreference};
pub use infrastructure::error::{AppError, Result};
pub use services::mode_loader::ModeLoader;
