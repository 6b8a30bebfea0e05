//! Error Types
//!
//! This module defines the error types used by the define list and the
//! shader variant cache.
//!
//! # Overview
//!
//! [`DefineError`] covers every failure mode of the crate:
//! - Invalid construction arguments
//! - Slot ids outside the configured capacity
//! - Define values that have no preprocessor representation
//! - Name/type registries that are too short for the active slots
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, DefineError>`.
//!
//! ```rust,ignore
//! use myth_defines::errors::Result;
//! use myth_defines::DefineList;
//!
//! fn build() -> Result<DefineList> {
//!     let mut defines = DefineList::new(4)?;
//!     defines.set_bool(0, true)?;
//!     Ok(defines)
//! }
//! ```

use thiserror::Error;

/// The error type for define list operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefineError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// Requested capacity lies outside `0..=MAX_DEFINES`.
    #[error("Define capacity must be between 0 and {max} (got {capacity})")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: i32,
        /// Upper bound (inclusive)
        max: usize,
    },

    // ========================================================================
    // Access Errors
    // ========================================================================
    /// Slot id outside `[0, capacity)`.
    #[error("Define id {id} out of range (capacity: {capacity})")]
    OutOfRange {
        /// The invalid slot id
        id: usize,
        /// Capacity of the define list that was accessed
        capacity: usize,
    },

    // ========================================================================
    // Source Generation Errors
    // ========================================================================
    /// A float-typed define holds NaN or an infinity.
    #[error("GLSL does not support NaN or infinite float literals (define '{name}', slot {index})")]
    InvalidFloatLiteral {
        /// Preprocessor symbol of the offending slot
        name: String,
        /// Slot index
        index: usize,
    },

    /// No name was supplied for an active slot.
    #[error("Missing define name for slot {index}")]
    MissingDefineName {
        /// Slot index
        index: usize,
    },

    /// A type table was supplied but has no entry for an active slot.
    #[error("Missing define type for slot {index}")]
    MissingDefineType {
        /// Slot index
        index: usize,
    },
}

/// Alias for `Result<T, DefineError>`.
pub type Result<T> = std::result::Result<T, DefineError>;
