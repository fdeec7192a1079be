//! Error taxonomy for stress scenario loading.
//!
//! Every variant carries the offending section and instrument identifier
//! where one exists, so a failed load names exactly what was wrong and
//! where. There is no multi-error aggregation: the first failure aborts
//! the whole load.

use scenario_core::types::{ShiftTypeError, TenorError};
use thiserror::Error;

use crate::xml::XmlError;

/// Errors raised while loading stress scenario configuration.
///
/// # Variants
///
/// - `MissingSection`: Required section container absent (structural)
/// - `MissingField`: Required tag or attribute absent (structural)
/// - `EmptyShifts`: Shift list present but empty (validation)
/// - `LengthMismatch`: Shift and axis lists differ in length (validation)
/// - `IncompleteCell`: Exactly one of expiry/term given on a grid cell (validation)
/// - `InvalidNumber`: Unparseable numeric value (validation)
/// - `InvalidTenor`: Unparseable tenor (validation)
/// - `InvalidShiftType`: Unknown shift type tag (validation)
/// - `Xml`: Malformed configuration document
/// - `Unsupported`: Reverse serialisation requested
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StressConfigError {
    /// Required section container not found.
    #[error("required section '{section}' not found in {scope}")]
    MissingSection {
        /// Name of the missing section container.
        section: String,
        /// Where it was expected ("document" or "stress test '<label>'").
        scope: String,
    },

    /// Required field (child tag or attribute) not found.
    #[error("required field '{field}' not found in {section} for '{key}'")]
    MissingField {
        /// Name of the missing tag or attribute.
        field: String,
        /// Section being parsed.
        section: String,
        /// Instrument identifier or stress test label.
        key: String,
    },

    /// Shift list is empty.
    #[error("no shifts provided in {section} for '{key}'")]
    EmptyShifts {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
    },

    /// Shift and axis lists have different lengths.
    #[error(
        "number of shifts ({shifts}) does not match number of axis points ({tenors}) \
         in {section} for '{key}'"
    )]
    LengthMismatch {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
        /// Number of shift values supplied.
        shifts: usize,
        /// Number of axis points supplied.
        tenors: usize,
    },

    /// A grid cell supplied exactly one of its two coordinates.
    #[error("expiry and term attributes required together on shift cells in {section} for '{key}'")]
    IncompleteCell {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
    },

    /// A numeric value could not be parsed.
    #[error("invalid numeric value '{value}' in {section} for '{key}'")]
    InvalidNumber {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
        /// The offending token.
        value: String,
    },

    /// A tenor string could not be parsed.
    #[error("invalid tenor in {section} for '{key}': {source}")]
    InvalidTenor {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
        /// Underlying tenor parse error.
        #[source]
        source: TenorError,
    },

    /// A shift type tag could not be parsed.
    #[error("invalid shift type in {section} for '{key}': {source}")]
    InvalidShiftType {
        /// Section being parsed.
        section: String,
        /// Instrument identifier.
        key: String,
        /// Underlying shift type parse error.
        #[source]
        source: ShiftTypeError,
    },

    /// The configuration document itself is malformed.
    #[error("configuration document error: {0}")]
    Xml(#[from] XmlError),

    /// Operation intentionally not implemented.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_display() {
        let err = StressConfigError::MissingSection {
            section: "IndexCurves".to_string(),
            scope: "stress test 'Scenario1'".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "required section 'IndexCurves' not found in stress test 'Scenario1'"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = StressConfigError::LengthMismatch {
            section: "DiscountCurves".to_string(),
            key: "USD".to_string(),
            shifts: 3,
            tenors: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("DiscountCurves"));
        assert!(msg.contains("USD"));
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_invalid_tenor_source_chain() {
        let err = StressConfigError::InvalidTenor {
            section: "YieldCurves".to_string(),
            key: "BondCurve".to_string(),
            source: TenorError::UnknownUnit('Q'),
        };
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }

    #[test]
    fn test_from_xml_error() {
        let err: StressConfigError = XmlError::Empty.into();
        assert!(matches!(err, StressConfigError::Xml(_)));
    }

    #[test]
    fn test_unsupported_display() {
        let err = StressConfigError::Unsupported("stress test serialisation");
        assert_eq!(
            format!("{}", err),
            "unsupported operation: stress test serialisation"
        );
    }
}
