//! # Error Types
//!
//! This module defines the error type shared by the genetic algorithm engine,
//! the rule engine and the collaborator contracts. Each failure scenario has
//! its own variant so callers can report it without crashing the host process.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     Ok(())
//! }
//!
//! match some_function() {
//!     Ok(_) => println!("Success!"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use bitga::error::{Result, ResultExt};
//!
//! fn parse_facts(raw: &str) -> Result<serde_json::Value> {
//!     serde_json::from_str(raw).context("Failed to parse facts")
//! }
//!
//! assert!(parse_facts("{ not json").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use bitga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[i64]) -> bitga::error::Result<i64> {
//!     scores.iter().max().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_score(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in this library.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a selection operator receives inconsistent input.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when a rule table cannot be parsed.
    #[error("Rule parse error: {0}")]
    RuleParse(#[from] serde_json::Error),

    /// Error reported by an image classifier.
    #[error("Classification error: {0}")]
    Classification(String),

    /// Error reported while reading a document.
    #[error("Document error: {0}")]
    Document(String),

    /// Error that occurs when a document yields no text.
    #[error("Empty document: no text could be extracted")]
    EmptyDocument,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for this library.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::Result;
///
/// fn may_fail() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::ResultExt;
/// use std::fs::File;
///
/// fn read_rules(path: &str) -> bitga::error::Result<()> {
///     File::open(path).context("Failed to open rule table")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `GeneticError` with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
