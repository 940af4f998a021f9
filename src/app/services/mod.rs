//! Services layer - business operations and external systems.
//!
//! This module contains business logic and operations:
//! - Syntax module loading
//! - Paste submission backend
//! - Durable preferences (theme)
//! - Syntax highlighting

pub mod backend;
pub mod mode_loader;
pub mod preferences;
pub mod syntax;
