//! # Unit Types
//!
//! Type-safe wrappers for the engineering units that cross an API boundary.
//! These are plain f64 newtypes: serialization stays clean (just numbers) and
//! the conversions carry the only constants that matter (1 ksi = 1000 psi,
//! 1 ft³ = 1728 in³).
//!
//! Formula functions in [`crate::equations`] take raw `f64` values in the
//! documented units; these wrappers are used where a unit conversion happens.
//!
//! ## US Customary Units
//!
//! - Stress: pounds per square inch (psi), kips per square inch (ksi)
//! - Unit weight: pounds per cubic foot (pcf), pounds per cubic inch (pci)
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Ksi, Pcf, Pci, Psi};
//!
//! let fy: Psi = Ksi(60.0).into();
//! assert_eq!(fy.0, 60_000.0);
//!
//! let gamma: Pci = Pcf(1728.0).into();
//! assert_eq!(gamma.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Cubic inches in one cubic foot
const IN3_PER_FT3: f64 = 12.0 * 12.0 * 12.0;

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Unit Weight
// ============================================================================

/// Unit weight in pounds per cubic foot (pcf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

/// Unit weight in pounds per cubic inch (pci)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pci(pub f64);

impl From<Pcf> for Pci {
    fn from(pcf: Pcf) -> Self {
        Pci(pcf.0 / IN3_PER_FT3)
    }
}

impl From<Pci> for Pcf {
    fn from(pci: Pci) -> Self {
        Pcf(pci.0 * IN3_PER_FT3)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Psi);
impl_arithmetic!(Ksi);
impl_arithmetic!(Pcf);
impl_arithmetic!(Pci);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ksi_to_psi() {
        let fy = Ksi(60.0);
        let psi: Psi = fy.into();
        assert_eq!(psi.0, 60_000.0);

        let back: Ksi = psi.into();
        assert_eq!(back, fy);
    }

    #[test]
    fn test_pcf_to_pci() {
        let normal_weight = Pcf(150.0);
        let pci: Pci = normal_weight.into();
        assert!((pci.0 - 0.086_805_555).abs() < 1e-8);

        let back: Pcf = pci.into();
        assert!((back.0 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Psi(4000.0);
        let b = Psi(1000.0);
        assert_eq!((a + b).0, 5000.0);
        assert_eq!((a - b).0, 3000.0);
        assert_eq!((a * 2.0).0, 8000.0);
        assert_eq!((a / 2.0).value(), 2000.0);
        assert_eq!(Psi::new(1.5), Psi(1.5));
    }

    #[test]
    fn test_serialization() {
        let fc = Psi(4000.0);
        let json = serde_json::to_string(&fc).unwrap();
        assert_eq!(json, "4000.0");

        let roundtrip: Psi = serde_json::from_str(&json).unwrap();
        assert_eq!(fc, roundtrip);
    }
}
