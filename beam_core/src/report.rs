//! # Design Input and Report
//!
//! JSON entry point for a single beam definition. Follows the crate-wide
//! pattern:
//!
//! - [`DesignInput`] - materials and section, parsed and validated from JSON
//! - [`DesignReport`] - serializable snapshot of every derived property
//!
//! ## JSON Example
//!
//! Omitted material fields take their defaults; only `fc_psi`, `fy_psi`, `b`
//! and `h` are required.
//!
//! ```json
//! {
//!   "concrete": { "fc_psi": 4000.0 },
//!   "steel": { "fy_psi": 60000.0 },
//!   "section": { "b": 15.0, "h": 24.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    Concrete, ConcreteInput, ConcreteProperties, Steel, SteelInput, SteelProperties,
};
use crate::shapes::{RectangularInput, RectangularShape, SectionProperties, Shape};

/// Unvalidated JSON shape of a [`DesignInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawDesignInput {
    pub concrete: ConcreteInput,
    pub steel: SteelInput,
    pub section: RectangularInput,
}

/// Materials and cross-section of one beam.
///
/// Every field passes through its validating constructor during
/// deserialization, so a parsed `DesignInput` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDesignInput")]
pub struct DesignInput {
    pub concrete: Concrete,
    pub steel: Steel,
    pub section: RectangularShape,
}

impl DesignInput {
    pub fn new(concrete: Concrete, steel: Steel, section: RectangularShape) -> Self {
        DesignInput {
            concrete,
            steel,
            section,
        }
    }

    /// Parse and validate a design input from JSON text.
    ///
    /// Malformed JSON or a missing required field gives
    /// [`CalcError::SerializationError`]. Out-of-range values give the same
    /// error their constructor returns (`InvalidMaterialProperty` or
    /// `InvalidGeometry`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::report::DesignInput;
    ///
    /// let input = DesignInput::from_json(r#"{
    ///     "concrete": { "fc_psi": 4000.0 },
    ///     "steel": { "fy_psi": 60000.0 },
    ///     "section": { "b": 15.0, "h": 24.0 }
    /// }"#)?;
    ///
    /// let report = input.evaluate();
    /// assert_eq!(report.section.area_in2, 360.0);
    /// assert_eq!(report.concrete.beta1, 0.85);
    /// # Ok::<(), beam_core::CalcError>(())
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let raw: RawDesignInput = serde_json::from_str(json)?;
        let input = DesignInput::try_from(raw)?;
        log::debug!(
            "parsed design input: {}, {}, {}",
            input.concrete,
            input.steel,
            input.section
        );
        Ok(input)
    }

    /// Compute every material and section property.
    pub fn evaluate(&self) -> DesignReport {
        DesignReport {
            concrete: self.concrete.properties(),
            steel: self.steel.properties(),
            section: self.section.properties(),
        }
    }
}

impl TryFrom<RawDesignInput> for DesignInput {
    type Error = CalcError;

    fn try_from(raw: RawDesignInput) -> CalcResult<Self> {
        Ok(DesignInput {
            concrete: Concrete::try_from(raw.concrete)?,
            steel: Steel::try_from(raw.steel)?,
            section: RectangularShape::try_from(raw.section)?,
        })
    }
}

/// Derived properties for a [`DesignInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub concrete: ConcreteProperties,
    pub steel: SteelProperties,
    pub section: SectionProperties,
}
