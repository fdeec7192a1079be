//! Error types for core type parsing.
//!
//! This module provides:
//! - `TenorError`: Errors from tenor string parsing
//! - `ShiftTypeError`: Errors from shift type tag parsing

use thiserror::Error;

/// Tenor parsing errors.
///
/// # Examples
///
/// ```
/// use scenario_core::types::{Tenor, TenorError};
///
/// let err = "5Q".parse::<Tenor>().unwrap_err();
/// assert_eq!(err, TenorError::UnknownUnit('Q'));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// The input string was empty.
    #[error("Empty tenor string")]
    Empty,

    /// No unit letter at the end of the input.
    #[error("Tenor '{0}' has no unit letter (expected D, W, M or Y)")]
    MissingUnit(String),

    /// The length prefix could not be parsed as an unsigned integer.
    #[error("Tenor '{0}' has an invalid length prefix")]
    InvalidLength(String),

    /// Unit letter other than D, W, M or Y.
    #[error("Unknown tenor unit '{0}' (expected D, W, M or Y)")]
    UnknownUnit(char),
}

/// Shift type tag parsing errors.
///
/// # Examples
///
/// ```
/// use scenario_core::types::{ShiftType, ShiftTypeError};
///
/// let err = "Additive".parse::<ShiftType>().unwrap_err();
/// assert_eq!(err, ShiftTypeError::Unknown("Additive".to_string()));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShiftTypeError {
    /// Tag other than "Absolute" or "Relative".
    #[error("Unknown shift type '{0}' (expected Absolute or Relative)")]
    Unknown(String),
}
