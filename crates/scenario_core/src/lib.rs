//! # scenario_core: Foundation Types for Stress Scenario Processing
//!
//! ## Foundation Layer Role
//!
//! scenario_core is the bottom layer of the scenario workspace, providing:
//! - Tenor type for curve and surface axes (`types::tenor`)
//! - Shift type tags for absolute/relative bumps (`types::shift`)
//! - Error types: `TenorError`, `ShiftTypeError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other scenario_* crates,
//! with minimal external dependencies:
//! - thiserror: Structured error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use scenario_core::types::{ShiftType, Tenor};
//!
//! // Tenor parsing and display
//! let tenor: Tenor = "10Y".parse().unwrap();
//! assert_eq!(tenor.to_string(), "10Y");
//! assert!((tenor.approx_years() - 10.0).abs() < 1e-12);
//!
//! // Shift type tags are case-insensitive on input
//! let shift: ShiftType = "absolute".parse().unwrap();
//! assert_eq!(shift, ShiftType::Absolute);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable string-backed serialisation for `Tenor` and `ShiftType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
