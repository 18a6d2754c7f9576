//! Core error type.
//!
//! Sub-crates define their own error enums; `ft-pipeline` wraps them all via
//! `From` impls.

use thiserror::Error;

/// Errors produced by `ft-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ft-core`.
pub type CoreResult<T> = Result<T, CoreError>;
