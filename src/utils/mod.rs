//! Utils module - Shared utilities and helpers

/// Verbose logging and stderr diagnostics
pub mod logging;

/// Text splitting and truncation helpers
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
