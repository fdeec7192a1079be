//! # adapter_stress: Stress Test Scenario Configuration Adapter
//!
//! ## Adapter Layer Role
//!
//! adapter_stress turns a hierarchical stress testing configuration
//! document into the typed scenario model consumed by the downstream
//! scenario generation engine:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              adapter_stress                   │
//! ├──────────────────────────────────────────────┤
//! │  xml      - Configuration document tree      │
//! │  data     - ScenarioSet, StressTest, shifts  │
//! │  loader   - Document -> ScenarioSet parse    │
//! │  error    - StressConfigError taxonomy       │
//! └──────────────────────────────────────────────┘
//!          ↓
//! ┌──────────────────────────────────────────────┐
//! │            scenario_core (foundation)         │
//! │  Tenor, ShiftType and their parse errors     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Loading is a pure, synchronous, single-pass operation: each call
//! returns a freshly constructed [`ScenarioSet`], so there is no shared
//! mutable loader state and no reentrancy hazard. A single malformed
//! subsection fails the whole load; no partial result escapes.
//!
//! The reverse direction (serialising a `ScenarioSet` back to the
//! configuration format) is intentionally unimplemented and reported as
//! [`StressConfigError::Unsupported`].
//!
//! ## Example
//!
//! ```
//! use adapter_stress::ScenarioSet;
//!
//! let xml = r#"
//! <StressTesting>
//!   <StressTest id="ratesUp">
//!     <DiscountCurves>
//!       <DiscountCurve ccy="USD">
//!         <ShiftType>Absolute</ShiftType>
//!         <Shifts>0.01,0.02</Shifts>
//!         <ShiftTenors>1Y,2Y</ShiftTenors>
//!       </DiscountCurve>
//!     </DiscountCurves>
//!     <IndexCurves/>
//!     <YieldCurves/>
//!     <FxSpots/>
//!     <FxVolatilities/>
//!     <SwaptionVolatilities/>
//!     <CapFloorVolatilities/>
//!   </StressTest>
//! </StressTesting>"#;
//!
//! let scenarios = ScenarioSet::from_xml_str(xml).unwrap();
//! assert_eq!(scenarios.len(), 1);
//!
//! let test = scenarios.get("ratesUp").unwrap();
//! assert_eq!(test.discount_curve_shifts["USD"].shifts, vec![0.01, 0.02]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation of the scenario model

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod data;
pub mod error;
mod loader;
pub mod xml;

pub use data::{CurveShift, ScenarioSet, SpotShift, StressTest, SwaptionVolShift, VolShift};
pub use error::StressConfigError;
pub use xml::{Element, XmlError};
