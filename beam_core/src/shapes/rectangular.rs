//! Solid Rectangular Section
//!
//! ```text
//!          b
//!     ┌─────────┐
//!     │         │
//!   h │ ─ ─X─ ─ │  X-X axis parallel to b
//!     │         │
//!     └─────────┘
//! ```

use serde::{Deserialize, Serialize};

use super::{require_dimension, Shape, ShapeType};
use crate::equations::section::{rectangular_area, rectangular_moment_of_inertia};
use crate::errors::{CalcError, CalcResult};

/// Unvalidated rectangle dimensions.
///
/// ## JSON Example
///
/// ```json
/// { "b": 15.0, "h": 24.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularInput {
    /// Width (in)
    #[serde(alias = "width_in")]
    pub b: f64,
    /// Height (in)
    #[serde(alias = "height_in", alias = "depth_in")]
    pub h: f64,
}

/// Solid rectangular cross-section with validated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangularInput", into = "RectangularInput")]
pub struct RectangularShape {
    b: f64,
    h: f64,
}

impl RectangularShape {
    /// Rectangle of width `b` and height `h` (in)
    pub fn new(b: f64, h: f64) -> CalcResult<Self> {
        Self::try_from(RectangularInput { b, h })
    }

    /// Display label (e.g., "15 x 24 Rectangular")
    pub fn display_name(&self) -> String {
        format!("{} x {} {}", self.b, self.h, self.shape_type())
    }
}

impl TryFrom<RectangularInput> for RectangularShape {
    type Error = CalcError;

    fn try_from(input: RectangularInput) -> CalcResult<Self> {
        let shape = RectangularShape {
            b: require_dimension("b", input.b)?,
            h: require_dimension("h", input.h)?,
        };
        log::debug!("constructed {}", shape);
        Ok(shape)
    }
}

impl From<RectangularShape> for RectangularInput {
    fn from(shape: RectangularShape) -> Self {
        RectangularInput { b: shape.b, h: shape.h }
    }
}

impl Shape for RectangularShape {
    fn width(&self) -> f64 {
        self.b
    }

    fn height(&self) -> f64 {
        self.h
    }

    fn area(&self) -> f64 {
        rectangular_area(self.b, self.h)
    }

    /// b·h³/12
    fn inertia_xx(&self) -> f64 {
        rectangular_moment_of_inertia(self.b, self.h)
    }

    /// h·b³/12
    fn inertia_yy(&self) -> f64 {
        rectangular_moment_of_inertia(self.h, self.b)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangular
    }
}

impl std::fmt::Display for RectangularShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_primitives_15x24() {
        let shape = RectangularShape::new(15.0, 24.0).unwrap();
        assert_eq!(shape.area(), 360.0);
        assert_eq!(shape.inertia_xx(), 17_280.0);
        assert_eq!(shape.inertia_yy(), 6750.0);
        assert_eq!(shape.shape_type(), ShapeType::Rectangular);
    }

    #[test]
    fn test_derived_15x24() {
        let shape = RectangularShape::new(15.0, 24.0).unwrap();
        assert_eq!(shape.section_modulus_xx(), 1440.0);
        assert_eq!(shape.section_modulus_yy(), 900.0);
        assert_eq!(shape.plastic_modulus_xx(), 2160.0);
        assert_eq!(shape.plastic_modulus_yy(), 1350.0);
        assert!(approx_eq(shape.radius_of_gyration_xx(), 24.0 / 12.0_f64.sqrt()));
        assert!(approx_eq(shape.radius_of_gyration_yy(), 15.0 / 12.0_f64.sqrt()));
        assert_eq!(shape.r_min(), shape.radius_of_gyration_yy());
    }

    #[test]
    fn test_torsion_constant_15x24() {
        // a = 24, t = 15
        let j = RectangularShape::new(15.0, 24.0).unwrap().torsion_constant();
        assert!((j - 16_503.93).abs() < 0.01, "J = {}", j);

        let rotated = RectangularShape::new(24.0, 15.0).unwrap().torsion_constant();
        assert_eq!(j, rotated);
    }

    #[test]
    fn test_rotation_swaps_axes() {
        let upright = RectangularShape::new(12.0, 20.0).unwrap();
        let flat = RectangularShape::new(20.0, 12.0).unwrap();
        assert_eq!(upright.inertia_xx(), flat.inertia_yy());
        assert_eq!(upright.section_modulus_xx(), flat.section_modulus_yy());
        assert_eq!(upright.area(), flat.area());
    }

    #[test]
    fn test_repeated_access_is_identical() {
        let shape = RectangularShape::new(13.5, 27.25).unwrap();
        assert_eq!(shape.radius_of_gyration_xx().to_bits(), shape.radius_of_gyration_xx().to_bits());
        assert_eq!(shape.torsion_constant().to_bits(), shape.torsion_constant().to_bits());
        assert_eq!(shape.summary(), shape.summary());
    }

    #[test]
    fn test_summary_values() {
        let summary = RectangularShape::new(15.0, 24.0).unwrap().summary();
        assert_eq!(summary.number("Area (in^2)"), Some(360.0));
        assert_eq!(summary.number("IXX (in^4)"), Some(17_280.0));
        assert_eq!(summary.number("IYY (in^4)"), Some(6750.0));
        assert_eq!(summary.number("SXX (in^3)"), Some(1440.0));
        assert_eq!(summary.number("ZXX (in^3)"), Some(2160.0));
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        for (b, h) in [(0.0, 24.0), (15.0, 0.0), (-15.0, 24.0), (15.0, f64::INFINITY)] {
            let err = RectangularShape::new(b, h).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_GEOMETRY", "b={}, h={}", b, h);
        }

        match RectangularShape::new(15.0, -1.0).unwrap_err() {
            CalcError::InvalidGeometry { dimension, .. } => assert_eq!(dimension, "h"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_json() {
        let shape: RectangularShape = serde_json::from_str(r#"{ "b": 15.0, "h": 24.0 }"#).unwrap();
        assert_eq!(shape, RectangularShape::new(15.0, 24.0).unwrap());

        let shape: RectangularShape =
            serde_json::from_str(r#"{ "width_in": 12.0, "depth_in": 30.0 }"#).unwrap();
        assert_eq!(shape.height(), 30.0);

        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"b":12.0,"h":30.0}"#);

        let bad: Result<RectangularShape, _> = serde_json::from_str(r#"{ "b": 0.0, "h": 24.0 }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display_name() {
        let shape = RectangularShape::new(15.0, 24.0).unwrap();
        assert_eq!(shape.to_string(), "15 x 24 Rectangular");
    }
}
