//! # Cross-Section Shapes
//!
//! A shape supplies four primitives (area, two centroidal inertias and a type
//! tag) plus its bounding width `b` and height `h`. Everything else (section
//! moduli, plastic moduli, radii of gyration, torsion constant and the
//! printable summary) is derived once, in the [`Shape`] trait's provided
//! methods, from those primitives.
//!
//! ## Axes
//!
//! - **X-X**: horizontal centroidal axis, parallel to the width `b`
//!   (strong axis for a beam deeper than it is wide)
//! - **Y-Y**: vertical centroidal axis, parallel to the height `h`
//!
//! ## Adding a Shape
//!
//! Implement the six required methods; all derived properties come for free.
//! The plastic modulus and torsion constant defaults assume a solid,
//! doubly-symmetric rectangle-like section and should be overridden for shapes
//! where that does not hold.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::shapes::{RectangularShape, Shape};
//!
//! let beam = RectangularShape::new(15.0, 24.0)?;
//! assert_eq!(beam.area(), 360.0);
//! assert_eq!(beam.section_modulus_xx(), 1440.0);
//!
//! for (label, value) in beam.summary().iter() {
//!     println!("{:20} = {}", label, value);
//! }
//! # Ok::<(), beam_core::CalcError>(())
//! ```

pub mod rectangular;

pub use rectangular::{RectangularInput, RectangularShape};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::equations::section::{
    elastic_section_modulus, radius_of_gyration, rectangular_plastic_modulus,
    rectangular_torsion_constant,
};
use crate::errors::{CalcError, CalcResult};

/// Classification tag reported by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeType {
    /// Solid rectangle
    Rectangular,
    /// Shape defined outside this crate
    Custom(&'static str),
}

impl ShapeType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeType::Rectangular => "Rectangular",
            ShapeType::Custom(name) => *name,
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Labels produced by [`Shape::summary`], in display order.
pub const SUMMARY_LABELS: [&str; 13] = [
    "Shape Type",
    "Area (in^2)",
    "IXX (in^4)",
    "IYY (in^4)",
    "SXX (in^3)",
    "SYY (in^3)",
    "ZXX (in^3)",
    "ZYY (in^3)",
    "RXX (in)",
    "RYY (in)",
    "J (in^4)",
    "CG Offset",
    "PNA Offset",
];

/// Cross-section capability set.
///
/// Required methods are the primitives each variant must supply; the provided
/// methods are the derived property chain and should rarely need overriding.
pub trait Shape {
    /// Overall width b (in)
    fn width(&self) -> f64;

    /// Overall height h (in)
    fn height(&self) -> f64;

    /// Gross cross-sectional area (in²)
    fn area(&self) -> f64;

    /// Moment of inertia about the X-X axis (in⁴)
    fn inertia_xx(&self) -> f64;

    /// Moment of inertia about the Y-Y axis (in⁴)
    fn inertia_yy(&self) -> f64;

    fn shape_type(&self) -> ShapeType;

    /// Elastic section modulus Sxx = Ixx / (h/2) (in³)
    fn section_modulus_xx(&self) -> f64 {
        elastic_section_modulus(self.inertia_xx(), self.height() / 2.0)
    }

    /// Elastic section modulus Syy = Iyy / (b/2) (in³)
    fn section_modulus_yy(&self) -> f64 {
        elastic_section_modulus(self.inertia_yy(), self.width() / 2.0)
    }

    /// Plastic section modulus Zxx = b·h²/4 (in³). Doubly-symmetric solid sections only.
    fn plastic_modulus_xx(&self) -> f64 {
        rectangular_plastic_modulus(self.width(), self.height())
    }

    /// Plastic section modulus Zyy = h·b²/4 (in³). Doubly-symmetric solid sections only.
    fn plastic_modulus_yy(&self) -> f64 {
        rectangular_plastic_modulus(self.height(), self.width())
    }

    /// Radius of gyration rx = √(Ixx/A) (in)
    fn radius_of_gyration_xx(&self) -> f64 {
        radius_of_gyration(self.inertia_xx(), self.area())
    }

    /// Radius of gyration ry = √(Iyy/A) (in)
    fn radius_of_gyration_yy(&self) -> f64 {
        radius_of_gyration(self.inertia_yy(), self.area())
    }

    /// Approximate torsion constant J (in⁴), solid-rectangle formula
    fn torsion_constant(&self) -> f64 {
        rectangular_torsion_constant(self.width(), self.height())
    }

    /// Centroid offset (x, y) from the bounding-box center (in)
    fn cg_offset(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Plastic neutral axis offset (x, y) from the bounding-box center (in)
    fn pna_offset(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Governing (minimum) radius of gyration
    fn r_min(&self) -> f64 {
        self.radius_of_gyration_xx().min(self.radius_of_gyration_yy())
    }

    /// Every section property in one serializable snapshot
    fn properties(&self) -> SectionProperties {
        SectionProperties {
            shape_type: self.shape_type().display_name().to_string(),
            width_in: self.width(),
            height_in: self.height(),
            area_in2: self.area(),
            ixx_in4: self.inertia_xx(),
            iyy_in4: self.inertia_yy(),
            sxx_in3: self.section_modulus_xx(),
            syy_in3: self.section_modulus_yy(),
            zxx_in3: self.plastic_modulus_xx(),
            zyy_in3: self.plastic_modulus_yy(),
            rx_in: self.radius_of_gyration_xx(),
            ry_in: self.radius_of_gyration_yy(),
            j_in4: self.torsion_constant(),
            cg_offset_in: self.cg_offset(),
            pna_offset_in: self.pna_offset(),
        }
    }

    /// Labelled property listing for console/report display
    fn summary(&self) -> SectionSummary {
        SectionSummary::from(&self.properties())
    }
}

/// Section properties of a shape, with units in the field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub shape_type: String,
    /// Overall width (in)
    pub width_in: f64,
    /// Overall height (in)
    pub height_in: f64,
    /// Cross-sectional area (in²)
    pub area_in2: f64,
    /// Moment of inertia about X-axis (in⁴)
    pub ixx_in4: f64,
    /// Moment of inertia about Y-axis (in⁴)
    pub iyy_in4: f64,
    /// Elastic section modulus about X-axis (in³)
    pub sxx_in3: f64,
    /// Elastic section modulus about Y-axis (in³)
    pub syy_in3: f64,
    /// Plastic section modulus about X-axis (in³)
    pub zxx_in3: f64,
    /// Plastic section modulus about Y-axis (in³)
    pub zyy_in3: f64,
    /// Radius of gyration about X-axis (in)
    pub rx_in: f64,
    /// Radius of gyration about Y-axis (in)
    pub ry_in: f64,
    /// Torsional constant (in⁴)
    pub j_in4: f64,
    /// Centroid offset (in)
    pub cg_offset_in: (f64, f64),
    /// Plastic neutral axis offset (in)
    pub pna_offset_in: (f64, f64),
}

/// A single value in a [`SectionSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Text(String),
    Number(f64),
    Pair(f64, f64),
}

impl SummaryValue {
    /// The numeric value, if this entry is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SummaryValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryValue::Text(s) => write!(f, "{}", s),
            SummaryValue::Number(v) => write!(f, "{:.4}", v),
            SummaryValue::Pair(x, y) => write!(f, "({}, {})", x, y),
        }
    }
}

/// Ordered mapping from display label (units included) to value.
///
/// Serializes as a JSON object with keys in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    entries: Vec<(&'static str, SummaryValue)>,
}

impl SectionSummary {
    /// Look up a value by its label (e.g., "Area (in^2)")
    pub fn get(&self, label: &str) -> Option<&SummaryValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }

    /// Look up a numeric value by its label
    pub fn number(&self, label: &str) -> Option<f64> {
        self.get(label).and_then(SummaryValue::as_number)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SummaryValue)> + '_ {
        self.entries.iter().map(|(l, v)| (*l, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&SectionProperties> for SectionSummary {
    fn from(p: &SectionProperties) -> Self {
        use SummaryValue::{Number, Pair, Text};

        let values = [
            Text(p.shape_type.clone()),
            Number(p.area_in2),
            Number(p.ixx_in4),
            Number(p.iyy_in4),
            Number(p.sxx_in3),
            Number(p.syy_in3),
            Number(p.zxx_in3),
            Number(p.zyy_in3),
            Number(p.rx_in),
            Number(p.ry_in),
            Number(p.j_in4),
            Pair(p.cg_offset_in.0, p.cg_offset_in.1),
            Pair(p.pna_offset_in.0, p.pna_offset_in.1),
        ];

        SectionSummary {
            entries: SUMMARY_LABELS.into_iter().zip(values).collect(),
        }
    }
}

impl Serialize for SectionSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl std::fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, value) in &self.entries {
            writeln!(f, "{:20} = {}", label, value)?;
        }
        Ok(())
    }
}

/// Reject a dimension that is not a finite, strictly positive length.
pub(crate) fn require_dimension(dimension: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        log::warn!("rejected section dimension {} = {}", dimension, value);
        Err(CalcError::invalid_geometry(
            dimension,
            value,
            "Must be a finite positive length",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::section::rectangular_moment_of_inertia;

    /// Square defined only through the required primitives
    struct Square {
        side: f64,
    }

    impl Shape for Square {
        fn width(&self) -> f64 {
            self.side
        }
        fn height(&self) -> f64 {
            self.side
        }
        fn area(&self) -> f64 {
            self.side * self.side
        }
        fn inertia_xx(&self) -> f64 {
            self.side.powi(4) / 12.0
        }
        fn inertia_yy(&self) -> f64 {
            self.side.powi(4) / 12.0
        }
        fn shape_type(&self) -> ShapeType {
            ShapeType::Custom("Square")
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_new_variant_gets_derived_properties() {
        let sq = Square { side: 12.0 };
        // S = a³/6, Z = a³/4, r = a/√12
        assert!(approx_eq(sq.section_modulus_xx(), 288.0));
        assert!(approx_eq(sq.section_modulus_yy(), 288.0));
        assert!(approx_eq(sq.plastic_modulus_xx(), 432.0));
        assert!(approx_eq(sq.plastic_modulus_yy(), 432.0));
        assert!(approx_eq(sq.radius_of_gyration_xx(), 12.0 / 12.0_f64.sqrt()));
        assert!(approx_eq(sq.r_min(), sq.radius_of_gyration_yy()));
        assert_eq!(sq.cg_offset(), (0.0, 0.0));
    }

    #[test]
    fn test_custom_shape_summary() {
        let summary = Square { side: 10.0 }.summary();
        assert_eq!(summary.get("Shape Type"), Some(&SummaryValue::Text("Square".to_string())));
        assert!(approx_eq(summary.number("Area (in^2)").unwrap(), 100.0));
    }

    #[test]
    fn test_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Square { side: 10.0 }),
            Box::new(RectangularShape::new(10.0, 10.0).unwrap()),
        ];
        // Same geometry through two variants gives the same derived values
        let a = shapes[0].properties();
        let b = shapes[1].properties();
        assert!(approx_eq(a.sxx_in3, b.sxx_in3));
        assert!(approx_eq(a.j_in4, b.j_in4));
        assert_ne!(a.shape_type, b.shape_type);
    }

    #[test]
    fn test_summary_labels_and_order() {
        let summary = RectangularShape::new(15.0, 24.0).unwrap().summary();
        assert_eq!(summary.len(), SUMMARY_LABELS.len());
        let labels: Vec<&str> = summary.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, SUMMARY_LABELS.to_vec());
        assert_eq!(summary.get("CG Offset"), Some(&SummaryValue::Pair(0.0, 0.0)));
        assert_eq!(summary.get("PNA Offset"), Some(&SummaryValue::Pair(0.0, 0.0)));
        assert!(summary.get("Nonexistent").is_none());
        assert!(summary.number("Shape Type").is_none());
    }

    #[test]
    fn test_summary_display() {
        let text = RectangularShape::new(15.0, 24.0).unwrap().summary().to_string();
        assert!(text.contains("Shape Type           = Rectangular"));
        assert!(text.contains("Area (in^2)          = 360.0000"));
        assert!(text.contains("SXX (in^3)           = 1440.0000"));
        assert!(text.contains("CG Offset            = (0, 0)"));
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn test_summary_serialization_keeps_order() {
        let summary = RectangularShape::new(15.0, 24.0).unwrap().summary();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.starts_with("{\"Shape Type\":\"Rectangular\",\"Area (in^2)\":360.0"));
        assert!(json.ends_with("\"PNA Offset\":[0.0,0.0]}"));
    }

    #[test]
    fn test_properties_serialization() {
        let props = RectangularShape::new(15.0, 24.0).unwrap().properties();
        let json = serde_json::to_string(&props).unwrap();
        let parsed: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, parsed);
        assert_eq!(parsed.ixx_in4, rectangular_moment_of_inertia(15.0, 24.0));
    }

    #[test]
    fn test_require_dimension() {
        assert_eq!(require_dimension("b", 12.0), Ok(12.0));
        let err = require_dimension("h", 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
        assert!(require_dimension("h", f64::NAN).is_err());
    }

    #[test]
    fn test_shape_type_display() {
        assert_eq!(ShapeType::Rectangular.to_string(), "Rectangular");
        assert_eq!(ShapeType::Custom("Tee").to_string(), "Tee");
    }
}
