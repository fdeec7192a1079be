//! Scenario data model for stress testing.
//!
//! This module provides the typed model built by the loader and consumed
//! by the downstream scenario generation engine:
//! - `ScenarioSet`: Ordered collection of named stress tests
//! - `StressTest`: One named scenario across curves, FX and volatilities
//! - `CurveShift`, `SpotShift`, `VolShift`, `SwaptionVolShift`: Shift records
//!
//! The model is immutable once built; the engine has read-only access to
//! the record fields.

use scenario_core::types::{ShiftType, Tenor};
use std::collections::HashMap;

/// A tenor-bucketed shift applied to a discount, index or yield curve.
///
/// `shifts[i]` is the bump applied at `tenors[i]`; the loader guarantees
/// the two lists are non-empty and equal in length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurveShift {
    /// Whether the shifts are absolute offsets or relative factors.
    pub shift_type: ShiftType,
    /// Curve pillars the shifts apply to, in document order.
    pub tenors: Vec<Tenor>,
    /// Shift magnitudes, positionally aligned with `tenors`.
    pub shifts: Vec<f64>,
}

/// A single-value shift applied to an FX spot rate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotShift {
    /// Whether the shift is an absolute offset or a relative factor.
    pub shift_type: ShiftType,
    /// Shift magnitude.
    pub size: f64,
}

/// An expiry-bucketed shift applied to an FX or cap/floor volatility curve.
///
/// Same alignment guarantee as [`CurveShift`], over expiries rather than
/// curve pillars.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VolShift {
    /// Whether the shifts are absolute offsets or relative factors.
    pub shift_type: ShiftType,
    /// Volatility expiries the shifts apply to, in document order.
    pub expiries: Vec<Tenor>,
    /// Shift magnitudes, positionally aligned with `expiries`.
    pub shifts: Vec<f64>,
}

/// A sparse two-dimensional shift over a swaption volatility surface.
///
/// The declared `terms` and `expiries` axes describe the addressable grid;
/// `cells` holds the explicitly configured `(expiry, term)` overrides and
/// `parallel_shift` is the uniform default applied everywhere else.
///
/// # Examples
///
/// ```
/// use adapter_stress::SwaptionVolShift;
/// use scenario_core::types::{ShiftType, Tenor};
///
/// let mut shift = SwaptionVolShift::new(ShiftType::Absolute, vec![], vec![]);
/// shift.parallel_shift = 0.001;
/// shift
///     .cells
///     .insert((Tenor::years(1), Tenor::years(5)), 0.002);
///
/// assert_eq!(shift.shift_at(Tenor::years(1), Tenor::years(5)), 0.002);
/// assert_eq!(shift.shift_at(Tenor::years(2), Tenor::years(5)), 0.001);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SwaptionVolShift {
    /// Whether the shifts are absolute offsets or relative factors.
    pub shift_type: ShiftType,
    /// Underlying swap terms declaring the grid's term axis.
    pub terms: Vec<Tenor>,
    /// Option expiries declaring the grid's expiry axis.
    pub expiries: Vec<Tenor>,
    /// Uniform shift applied to every grid point without an override.
    pub parallel_shift: f64,
    /// Per-point overrides keyed by `(expiry, term)`.
    pub cells: HashMap<(Tenor, Tenor), f64>,
}

impl SwaptionVolShift {
    /// Creates a shift with the given axes, no overrides and a zero
    /// parallel shift.
    pub fn new(shift_type: ShiftType, terms: Vec<Tenor>, expiries: Vec<Tenor>) -> Self {
        Self {
            shift_type,
            terms,
            expiries,
            parallel_shift: 0.0,
            cells: HashMap::new(),
        }
    }

    /// Resolves the shift at one grid point: the `(expiry, term)` override
    /// if configured, otherwise the parallel shift.
    pub fn shift_at(&self, expiry: Tenor, term: Tenor) -> f64 {
        self.cells
            .get(&(expiry, term))
            .copied()
            .unwrap_or(self.parallel_shift)
    }
}

/// One named stress scenario: a coordinated set of shifts across curves,
/// FX rates and volatility surfaces.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StressTest {
    /// Scenario label from the configuration document.
    pub label: String,
    /// Discount curve shifts keyed by currency code.
    pub discount_curve_shifts: HashMap<String, CurveShift>,
    /// Index curve shifts keyed by index name.
    pub index_curve_shifts: HashMap<String, CurveShift>,
    /// Yield curve shifts keyed by curve name.
    pub yield_curve_shifts: HashMap<String, CurveShift>,
    /// FX spot shifts keyed by currency pair.
    pub fx_shifts: HashMap<String, SpotShift>,
    /// FX volatility shifts keyed by currency pair.
    pub fx_vol_shifts: HashMap<String, VolShift>,
    /// Swaption volatility shifts keyed by currency code.
    pub swaption_vol_shifts: HashMap<String, SwaptionVolShift>,
    /// Cap/floor volatility shifts keyed by currency code.
    pub cap_floor_vol_shifts: HashMap<String, VolShift>,
}

/// An ordered collection of stress tests loaded from one configuration
/// document.
///
/// Document order is preserved. Duplicate labels are not rejected;
/// [`ScenarioSet::get`] resolves to the first match.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioSet {
    tests: Vec<StressTest>,
}

impl ScenarioSet {
    /// Creates a set from already-built stress tests.
    pub fn new(tests: Vec<StressTest>) -> Self {
        Self { tests }
    }

    /// Returns the stress tests in document order.
    #[inline]
    pub fn tests(&self) -> &[StressTest] {
        &self.tests
    }

    /// Returns the number of stress tests.
    #[inline]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns whether the set contains no stress tests.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Iterates over the stress tests in document order.
    pub fn iter(&self) -> impl Iterator<Item = &StressTest> {
        self.tests.iter()
    }

    /// Returns the first stress test with the given label.
    pub fn get(&self, label: &str) -> Option<&StressTest> {
        self.tests.iter().find(|test| test.label == label)
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a StressTest;
    type IntoIter = std::slice::Iter<'a, StressTest>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(label: &str) -> StressTest {
        StressTest {
            label: label.to_string(),
            ..StressTest::default()
        }
    }

    #[test]
    fn test_scenario_set_preserves_order() {
        let set = ScenarioSet::new(vec![named("a"), named("b")]);
        let labels: Vec<&str> = set.iter().map(|test| test.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_scenario_set_get_first_match() {
        let set = ScenarioSet::new(vec![named("dup"), named("dup")]);
        assert_eq!(set.len(), 2);
        assert!(set.get("dup").is_some());
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn test_scenario_set_empty() {
        let set = ScenarioSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_swaption_shift_resolution_prefers_cell() {
        let mut shift = SwaptionVolShift::new(
            ShiftType::Absolute,
            vec![Tenor::years(2), Tenor::years(5)],
            vec![Tenor::years(1), Tenor::years(5)],
        );
        shift.parallel_shift = 0.001;
        shift.cells.insert((Tenor::years(1), Tenor::years(2)), 0.004);

        assert_eq!(shift.shift_at(Tenor::years(1), Tenor::years(2)), 0.004);
        // Everything else falls back to the parallel default
        assert_eq!(shift.shift_at(Tenor::years(5), Tenor::years(2)), 0.001);
    }

    #[test]
    fn test_swaption_shift_default_parallel_is_zero() {
        let shift = SwaptionVolShift::new(ShiftType::Relative, vec![], vec![]);
        assert_eq!(shift.parallel_shift, 0.0);
        assert!(shift.cells.is_empty());
        assert_eq!(shift.shift_at(Tenor::months(6), Tenor::years(10)), 0.0);
    }
}
