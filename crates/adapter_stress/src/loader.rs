//! Stress scenario document loading.
//!
//! Turns a parsed configuration tree into a [`ScenarioSet`]. One generic
//! routine handles every tenor-bucketed section (discount, index and
//! yield curves share it with the FX and cap/floor volatility sections);
//! FX spots use a scalar parser and swaption volatilities a sparse
//! two-dimensional grid parser with a parallel-shift fallback.
//!
//! Loading is fail-fast: the first structural or validation error aborts
//! the whole load with the offending section and instrument identifier in
//! the error.

use scenario_core::types::{ShiftType, Tenor};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::data::{CurveShift, ScenarioSet, SpotShift, StressTest, SwaptionVolShift, VolShift};
use crate::error::StressConfigError;
use crate::xml::Element;

/// Tag names describing one tenor-bucketed section of a stress test.
struct SectionTags {
    /// Section container element.
    container: &'static str,
    /// Per-instrument entry element.
    entry: &'static str,
    /// Attribute carrying the instrument identifier.
    key_attr: &'static str,
    /// Axis list element (`ShiftTenors` or `ShiftExpiries`).
    axis: &'static str,
}

const DISCOUNT_CURVES: SectionTags = SectionTags {
    container: "DiscountCurves",
    entry: "DiscountCurve",
    key_attr: "ccy",
    axis: "ShiftTenors",
};

const INDEX_CURVES: SectionTags = SectionTags {
    container: "IndexCurves",
    entry: "IndexCurve",
    key_attr: "index",
    axis: "ShiftTenors",
};

const YIELD_CURVES: SectionTags = SectionTags {
    container: "YieldCurves",
    entry: "YieldCurve",
    key_attr: "name",
    axis: "ShiftTenors",
};

const FX_VOLATILITIES: SectionTags = SectionTags {
    container: "FxVolatilities",
    entry: "FxVolatility",
    key_attr: "ccypair",
    axis: "ShiftExpiries",
};

const CAP_FLOOR_VOLATILITIES: SectionTags = SectionTags {
    container: "CapFloorVolatilities",
    entry: "CapFloorVolatility",
    key_attr: "ccy",
    axis: "ShiftExpiries",
};

impl ScenarioSet {
    /// Loads stress scenarios from a configuration document string.
    ///
    /// Convenience wrapper composing [`Element::parse_str`] and
    /// [`ScenarioSet::from_document`].
    pub fn from_xml_str(xml: &str) -> Result<Self, StressConfigError> {
        let root = Element::parse_str(xml)?;
        Self::from_document(&root)
    }

    /// Loads stress scenarios from a parsed configuration tree.
    ///
    /// The `StressTesting` section is located anywhere under `root` (or
    /// may be `root` itself). Every stress test must carry all seven
    /// subsection containers; an empty container is fine, a missing one
    /// fails the load. Each call returns a freshly constructed set.
    pub fn from_document(root: &Element) -> Result<Self, StressConfigError> {
        let node =
            locate(root, "StressTesting").ok_or_else(|| StressConfigError::MissingSection {
                section: "StressTesting".to_string(),
                scope: "document".to_string(),
            })?;

        let mut tests = Vec::new();
        for case in node.children("StressTest") {
            let test = parse_stress_test(case)?;
            info!(label = %test.label, "loaded stress test");
            tests.push(test);
        }

        info!(count = tests.len(), "loading stress tests done");
        Ok(ScenarioSet::new(tests))
    }

    /// Serialises the set back to the configuration format.
    ///
    /// Intentionally unimplemented: the reverse direction always reports
    /// [`StressConfigError::Unsupported`] and never writes output.
    pub fn to_xml(&self) -> Result<String, StressConfigError> {
        Err(StressConfigError::Unsupported("stress test serialisation"))
    }
}

/// Depth-first search for the first element with the given tag name.
fn locate<'a>(node: &'a Element, name: &str) -> Option<&'a Element> {
    if node.name() == name {
        return Some(node);
    }
    node.child_nodes()
        .iter()
        .find_map(|child| locate(child, name))
}

fn parse_stress_test(case: &Element) -> Result<StressTest, StressConfigError> {
    let label = case.attr("id").unwrap_or_default().to_string();
    debug!(label = %label, "loading stress test parameters");

    Ok(StressTest {
        discount_curve_shifts: parse_vector_section(case, &DISCOUNT_CURVES, &label, curve_shift)?,
        index_curve_shifts: parse_vector_section(case, &INDEX_CURVES, &label, curve_shift)?,
        yield_curve_shifts: parse_vector_section(case, &YIELD_CURVES, &label, curve_shift)?,
        fx_shifts: parse_fx_spots(case, &label)?,
        fx_vol_shifts: parse_vector_section(case, &FX_VOLATILITIES, &label, vol_shift)?,
        swaption_vol_shifts: parse_swaption_vols(case, &label)?,
        cap_floor_vol_shifts: parse_vector_section(
            case,
            &CAP_FLOOR_VOLATILITIES,
            &label,
            vol_shift,
        )?,
        label,
    })
}

/// Raw output of the generic tenor-bucketed section parser.
struct VectorShift {
    shift_type: ShiftType,
    axis: Vec<Tenor>,
    values: Vec<f64>,
}

fn curve_shift(shift: VectorShift) -> CurveShift {
    CurveShift {
        shift_type: shift.shift_type,
        tenors: shift.axis,
        shifts: shift.values,
    }
}

fn vol_shift(shift: VectorShift) -> VolShift {
    VolShift {
        shift_type: shift.shift_type,
        expiries: shift.axis,
        shifts: shift.values,
    }
}

/// Parses one tenor-bucketed section into a map keyed by instrument
/// identifier.
///
/// Shared by the three curve sections and the two one-dimensional
/// volatility sections; `build` converts the raw parse into the section's
/// record type.
fn parse_vector_section<T>(
    case: &Element,
    tags: &SectionTags,
    label: &str,
    build: impl Fn(VectorShift) -> T,
) -> Result<HashMap<String, T>, StressConfigError> {
    let container = required_section(case, tags.container, label)?;

    let mut shifts = HashMap::new();
    for entry in container.children(tags.entry) {
        let key = required_attr(entry, tags.key_attr, tags.container, label)?;
        debug!(section = tags.container, key, "loading shift parameters");

        let shift_type = parse_shift_type(entry, tags.container, key)?;
        let values = required_doubles(entry, "Shifts", tags.container, key)?;
        let axis = required_tenors(entry, tags.axis, tags.container, key)?;

        if values.len() != axis.len() {
            return Err(StressConfigError::LengthMismatch {
                section: tags.container.to_string(),
                key: key.to_string(),
                shifts: values.len(),
                tenors: axis.len(),
            });
        }
        if values.is_empty() {
            return Err(StressConfigError::EmptyShifts {
                section: tags.container.to_string(),
                key: key.to_string(),
            });
        }

        shifts.insert(
            key.to_string(),
            build(VectorShift {
                shift_type,
                axis,
                values,
            }),
        );
    }
    Ok(shifts)
}

fn parse_fx_spots(
    case: &Element,
    label: &str,
) -> Result<HashMap<String, SpotShift>, StressConfigError> {
    const SECTION: &str = "FxSpots";
    let container = required_section(case, SECTION, label)?;

    let mut shifts = HashMap::new();
    for entry in container.children("FxSpot") {
        let key = required_attr(entry, "ccypair", SECTION, label)?;
        debug!(section = SECTION, key, "loading shift parameters");

        let shift_type = parse_shift_type(entry, SECTION, key)?;
        let size = required_double(entry, "ShiftSize", SECTION, key)?;
        shifts.insert(key.to_string(), SpotShift { shift_type, size });
    }
    Ok(shifts)
}

fn parse_swaption_vols(
    case: &Element,
    label: &str,
) -> Result<HashMap<String, SwaptionVolShift>, StressConfigError> {
    const SECTION: &str = "SwaptionVolatilities";
    let container = required_section(case, SECTION, label)?;

    let mut shifts = HashMap::new();
    for entry in container.children("SwaptionVolatility") {
        let key = required_attr(entry, "ccy", SECTION, label)?;
        debug!(section = SECTION, key, "loading shift parameters");

        let shift_type = parse_shift_type(entry, SECTION, key)?;
        let terms = required_tenors(entry, "ShiftTerms", SECTION, key)?;
        let expiries = required_tenors(entry, "ShiftExpiries", SECTION, key)?;
        let cells_node = required_child(entry, "Shifts", SECTION, key)?;

        let mut shift = SwaptionVolShift::new(shift_type, terms, expiries);
        for cell in cells_node.children("Shift") {
            // An empty attribute value counts as absent, matching the
            // historical configuration convention.
            let expiry = cell.attr("expiry").filter(|value| !value.is_empty());
            let term = cell.attr("term").filter(|value| !value.is_empty());

            match (expiry, term) {
                // No coordinates: the uniform default. Last one wins.
                (None, None) => shift.parallel_shift = parse_double(cell.text(), SECTION, key)?,
                (Some(expiry), Some(term)) => {
                    let expiry = parse_tenor(expiry, SECTION, key)?;
                    let term = parse_tenor(term, SECTION, key)?;
                    let value = parse_double(cell.text(), SECTION, key)?;
                    shift.cells.insert((expiry, term), value);
                }
                _ => {
                    return Err(StressConfigError::IncompleteCell {
                        section: SECTION.to_string(),
                        key: key.to_string(),
                    })
                }
            }
        }
        shifts.insert(key.to_string(), shift);
    }
    Ok(shifts)
}

// ----------------------------------------------------------------------
// Field helpers
// ----------------------------------------------------------------------

fn required_section<'a>(
    case: &'a Element,
    section: &str,
    label: &str,
) -> Result<&'a Element, StressConfigError> {
    case.child(section)
        .ok_or_else(|| StressConfigError::MissingSection {
            section: section.to_string(),
            scope: format!("stress test '{}'", label),
        })
}

fn required_child<'a>(
    node: &'a Element,
    tag: &str,
    section: &str,
    key: &str,
) -> Result<&'a Element, StressConfigError> {
    node.child(tag).ok_or_else(|| StressConfigError::MissingField {
        field: tag.to_string(),
        section: section.to_string(),
        key: key.to_string(),
    })
}

fn required_attr<'a>(
    node: &'a Element,
    attr: &str,
    section: &str,
    label: &str,
) -> Result<&'a str, StressConfigError> {
    node.attr(attr).ok_or_else(|| StressConfigError::MissingField {
        field: attr.to_string(),
        section: section.to_string(),
        key: label.to_string(),
    })
}

fn parse_shift_type(
    node: &Element,
    section: &str,
    key: &str,
) -> Result<ShiftType, StressConfigError> {
    required_child(node, "ShiftType", section, key)?
        .text()
        .parse()
        .map_err(|source| StressConfigError::InvalidShiftType {
            section: section.to_string(),
            key: key.to_string(),
            source,
        })
}

fn parse_double(text: &str, section: &str, key: &str) -> Result<f64, StressConfigError> {
    text.trim()
        .parse()
        .map_err(|_| StressConfigError::InvalidNumber {
            section: section.to_string(),
            key: key.to_string(),
            value: text.trim().to_string(),
        })
}

fn parse_tenor(text: &str, section: &str, key: &str) -> Result<Tenor, StressConfigError> {
    text.parse().map_err(|source| StressConfigError::InvalidTenor {
        section: section.to_string(),
        key: key.to_string(),
        source,
    })
}

fn required_double(
    node: &Element,
    tag: &str,
    section: &str,
    key: &str,
) -> Result<f64, StressConfigError> {
    let child = required_child(node, tag, section, key)?;
    parse_double(child.text(), section, key)
}

/// Reads a compact comma-delimited list of doubles, e.g.
/// `<Shifts>0.01,0.02</Shifts>`.
fn required_doubles(
    node: &Element,
    tag: &str,
    section: &str,
    key: &str,
) -> Result<Vec<f64>, StressConfigError> {
    let child = required_child(node, tag, section, key)?;
    compact_items(child.text())
        .map(|item| parse_double(item, section, key))
        .collect()
}

/// Reads a compact comma-delimited list of tenors, e.g.
/// `<ShiftTenors>1Y,2Y</ShiftTenors>`.
fn required_tenors(
    node: &Element,
    tag: &str,
    section: &str,
    key: &str,
) -> Result<Vec<Tenor>, StressConfigError> {
    let child = required_child(node, tag, section, key)?;
    compact_items(child.text())
        .map(|item| parse_tenor(item, section, key))
        .collect()
}

fn compact_items(text: &str) -> impl Iterator<Item = &str> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
