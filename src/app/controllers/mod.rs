//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Language / expiration / theme selection
//! - Paste submission

pub mod selection;
pub mod submission;
