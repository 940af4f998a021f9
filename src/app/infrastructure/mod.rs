//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Wall clock
//! - System browser navigation
//! - Log subscriber setup

pub mod clock;
pub mod error;
pub mod logging;
pub mod navigator;
