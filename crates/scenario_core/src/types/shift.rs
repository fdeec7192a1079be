//! Shift type tags for market data bumps.

use std::fmt;
use std::str::FromStr;

use super::error::ShiftTypeError;

/// How a bump is applied to a market quantity.
///
/// An absolute shift is an additive offset; a relative shift is a
/// multiplicative factor applied to the base value.
///
/// # Examples
///
/// ```
/// use scenario_core::types::ShiftType;
///
/// let shift: ShiftType = "Relative".parse().unwrap();
/// assert_eq!(shift, ShiftType::Relative);
/// assert_eq!(shift.to_string(), "Relative");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftType {
    /// Additive offset applied to the base value.
    Absolute,
    /// Multiplicative factor applied to the base value.
    Relative,
}

impl ShiftType {
    /// Returns the canonical tag used in configuration documents.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ShiftType::Absolute => "Absolute",
            ShiftType::Relative => "Relative",
        }
    }
}

impl FromStr for ShiftType {
    type Err = ShiftTypeError;

    /// Parses a shift type tag (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ABSOLUTE" => Ok(ShiftType::Absolute),
            "RELATIVE" => Ok(ShiftType::Relative),
            _ => Err(ShiftTypeError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ShiftType;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for ShiftType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for ShiftType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            ShiftType::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!("Absolute".parse::<ShiftType>().unwrap(), ShiftType::Absolute);
        assert_eq!("Relative".parse::<ShiftType>().unwrap(), ShiftType::Relative);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("ABSOLUTE".parse::<ShiftType>().unwrap(), ShiftType::Absolute);
        assert_eq!("relative".parse::<ShiftType>().unwrap(), ShiftType::Relative);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" Absolute ".parse::<ShiftType>().unwrap(), ShiftType::Absolute);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Additive".parse::<ShiftType>().unwrap_err();
        assert_eq!(err, ShiftTypeError::Unknown("Additive".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        assert!("".parse::<ShiftType>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ShiftType::Absolute.to_string(), "Absolute");
        assert_eq!(ShiftType::Relative.to_string(), "Relative");
    }
}
