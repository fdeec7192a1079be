//! Tenor type for curve and volatility surface axes.
//!
//! A tenor is a calendar offset such as "1Y" or "6M" identifying a point
//! on a curve or volatility surface axis. Tenors are parsed from the
//! compact market convention string form and compared by their approximate
//! year fraction, so axis collections sort from short end to long end.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::TenorError;

/// Unit of a tenor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Calendar weeks
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

impl TenorUnit {
    /// Returns the single-letter market convention code.
    #[inline]
    pub fn code(&self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }

    // Rank used only as an Ord tie-break between units of equal year
    // fraction (e.g. 7D vs 1W).
    fn rank(&self) -> u8 {
        match self {
            TenorUnit::Days => 0,
            TenorUnit::Weeks => 1,
            TenorUnit::Months => 2,
            TenorUnit::Years => 3,
        }
    }
}

/// A calendar offset identifying a point on a curve or surface axis.
///
/// # Examples
///
/// ```
/// use scenario_core::types::{Tenor, TenorUnit};
///
/// let tenor: Tenor = "18M".parse().unwrap();
/// assert_eq!(tenor.length(), 18);
/// assert_eq!(tenor.unit(), TenorUnit::Months);
/// assert_eq!(tenor.to_string(), "18M");
///
/// // Tenors order by year fraction
/// let short: Tenor = "6M".parse().unwrap();
/// let long: Tenor = "10Y".parse().unwrap();
/// assert!(short < long);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    /// Number of units in the offset.
    length: u32,
    /// Unit of the offset.
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from a length and unit.
    ///
    /// A zero length is permitted; "0D" is the degenerate offset some
    /// configurations use for the spot pillar.
    #[inline]
    pub fn new(length: u32, unit: TenorUnit) -> Self {
        Self { length, unit }
    }

    /// Convenience constructor for whole-year tenors.
    #[inline]
    pub fn years(length: u32) -> Self {
        Self::new(length, TenorUnit::Years)
    }

    /// Convenience constructor for whole-month tenors.
    #[inline]
    pub fn months(length: u32) -> Self {
        Self::new(length, TenorUnit::Months)
    }

    /// Returns the number of units.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns the unit.
    #[inline]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns the approximate offset in years.
    ///
    /// Uses the flat conventions 365 days and 12 months per year. Good
    /// enough for ordering axis points; not a day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_core::types::Tenor;
    ///
    /// let six_months: Tenor = "6M".parse().unwrap();
    /// assert!((six_months.approx_years() - 0.5).abs() < 1e-12);
    /// ```
    pub fn approx_years(&self) -> f64 {
        match self.unit {
            TenorUnit::Days => self.length as f64 / 365.0,
            TenorUnit::Weeks => self.length as f64 * 7.0 / 365.0,
            TenorUnit::Months => self.length as f64 / 12.0,
            TenorUnit::Years => self.length as f64,
        }
    }
}

impl PartialOrd for Tenor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tenor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.approx_years()
            .total_cmp(&other.approx_years())
            .then_with(|| self.unit.rank().cmp(&other.unit.rank()))
            .then_with(|| self.length.cmp(&other.length))
    }
}

impl FromStr for Tenor {
    type Err = TenorError;

    /// Parses a tenor from the compact market convention form.
    ///
    /// The input is a decimal length followed by a unit letter: "10D",
    /// "2W", "6M", "1Y". The unit letter is case-insensitive and
    /// surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TenorError::Empty);
        }

        let unit_char = s.chars().next_back().unwrap_or_default();
        let unit = match unit_char.to_ascii_uppercase() {
            'D' => TenorUnit::Days,
            'W' => TenorUnit::Weeks,
            'M' => TenorUnit::Months,
            'Y' => TenorUnit::Years,
            c if c.is_ascii_digit() => return Err(TenorError::MissingUnit(s.to_string())),
            c => return Err(TenorError::UnknownUnit(c)),
        };

        let digits = &s[..s.len() - unit_char.len_utf8()];
        if digits.is_empty() {
            return Err(TenorError::InvalidLength(s.to_string()));
        }
        let length = digits
            .parse::<u32>()
            .map_err(|_| TenorError::InvalidLength(s.to_string()))?;

        Ok(Self { length, unit })
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Tenor;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Tenor {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Tenor {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Tenor::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_years() {
        let tenor: Tenor = "1Y".parse().unwrap();
        assert_eq!(tenor, Tenor::new(1, TenorUnit::Years));
    }

    #[test]
    fn test_parse_months() {
        let tenor: Tenor = "18M".parse().unwrap();
        assert_eq!(tenor.length(), 18);
        assert_eq!(tenor.unit(), TenorUnit::Months);
    }

    #[test]
    fn test_parse_weeks_and_days() {
        assert_eq!("2W".parse::<Tenor>().unwrap(), Tenor::new(2, TenorUnit::Weeks));
        assert_eq!("10D".parse::<Tenor>().unwrap(), Tenor::new(10, TenorUnit::Days));
    }

    #[test]
    fn test_parse_lower_case() {
        assert_eq!("5y".parse::<Tenor>().unwrap(), Tenor::years(5));
        assert_eq!("6m".parse::<Tenor>().unwrap(), Tenor::months(6));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(" 3Y ".parse::<Tenor>().unwrap(), Tenor::years(3));
    }

    #[test]
    fn test_parse_zero_length() {
        let tenor: Tenor = "0D".parse().unwrap();
        assert_eq!(tenor.length(), 0);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<Tenor>(), Err(TenorError::Empty));
        assert_eq!("   ".parse::<Tenor>(), Err(TenorError::Empty));
    }

    #[test]
    fn test_parse_missing_unit() {
        assert_eq!(
            "5".parse::<Tenor>(),
            Err(TenorError::MissingUnit("5".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert_eq!("5Q".parse::<Tenor>(), Err(TenorError::UnknownUnit('Q')));
    }

    #[test]
    fn test_parse_missing_length() {
        assert_eq!(
            "Y".parse::<Tenor>(),
            Err(TenorError::InvalidLength("Y".to_string()))
        );
    }

    #[test]
    fn test_parse_garbage_length() {
        assert_eq!(
            "1.5Y".parse::<Tenor>(),
            Err(TenorError::InvalidLength("1.5Y".to_string()))
        );
        assert_eq!(
            "-1Y".parse::<Tenor>(),
            Err(TenorError::InvalidLength("-1Y".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["10D", "2W", "6M", "1Y", "30Y"] {
            let tenor: Tenor = s.parse().unwrap();
            assert_eq!(tenor.to_string(), s);
        }
    }

    #[test]
    fn test_approx_years() {
        use approx::assert_relative_eq;

        assert_relative_eq!("1Y".parse::<Tenor>().unwrap().approx_years(), 1.0);
        assert_relative_eq!("6M".parse::<Tenor>().unwrap().approx_years(), 0.5);
        assert_relative_eq!("2W".parse::<Tenor>().unwrap().approx_years(), 14.0 / 365.0);
    }

    #[test]
    fn test_ordering() {
        let mut tenors: Vec<Tenor> = ["10Y", "1M", "2Y", "1W"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        tenors.sort();
        let labels: Vec<String> = tenors.iter().map(Tenor::to_string).collect();
        assert_eq!(labels, vec!["1W", "1M", "2Y", "10Y"]);
    }

    #[test]
    fn test_ordering_equal_year_fraction() {
        // 7D and 1W cover the same span but remain distinct, so the
        // ordering must still be total and deterministic.
        let days: Tenor = "7D".parse().unwrap();
        let weeks: Tenor = "1W".parse().unwrap();
        assert_ne!(days, weeks);
        assert!(days < weeks);
    }

    #[test]
    fn test_hash_distinct() {
        let mut set = HashSet::new();
        set.insert("1Y".parse::<Tenor>().unwrap());
        set.insert("2Y".parse::<Tenor>().unwrap());
        set.insert("1Y".parse::<Tenor>().unwrap()); // Duplicate
        assert_eq!(set.len(), 2);
    }
}
