//! Fixed-point unit types
//!
//! Lengths are stored as integer nanometers, angles as integer
//! microdegrees and ratios as integer parts-per-million. Integer storage
//! makes equality exact, which the wire joiner relies on when matching
//! endpoints. Arithmetic saturates at the `i64` range instead of
//! overflowing.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Nanometers per millimeter
pub const NM_PER_MM: i64 = 1_000_000;

/// Microdegrees per degree
pub const MICRODEG_PER_DEG: i64 = 1_000_000;

/// Signed length in nanometers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Length(i64);

impl Length {
    /// Zero length
    pub const ZERO: Length = Length(0);

    /// Creates a length from nanometers.
    pub const fn from_nm(nm: i64) -> Self {
        Self(nm)
    }

    /// Returns the value in nanometers.
    pub const fn to_nm(self) -> i64 {
        self.0
    }

    /// Returns the value in millimeters.
    pub fn to_mm(self) -> f64 {
        self.0 as f64 / NM_PER_MM as f64
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Multiplies by a floating point factor, rounding to the nearest nanometer.
    pub fn scaled(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, other: Length) -> Length {
        Length(self.0.saturating_add(other.0))
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, other: Length) -> Length {
        Length(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Length {
    type Output = Length;
    fn mul(self, factor: i64) -> Length {
        Length(self.0.saturating_mul(factor))
    }
}

impl Div<i64> for Length {
    type Output = Length;
    fn div(self, divisor: i64) -> Length {
        Length(self.0.saturating_div(divisor))
    }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(self.0.saturating_neg())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.to_mm())
    }
}

/// Length which is guaranteed to be >= 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Length", into = "Length")]
pub struct UnsignedLength(Length);

impl UnsignedLength {
    pub const ZERO: UnsignedLength = UnsignedLength(Length::ZERO);

    /// Validates that `length` is not negative.
    pub fn new(length: Length) -> Result<Self> {
        if length.to_nm() < 0 {
            return Err(Error::NegativeLength {
                nm: length.to_nm(),
            });
        }
        Ok(Self(length))
    }

    pub const fn get(self) -> Length {
        self.0
    }
}

impl Default for UnsignedLength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Length> for UnsignedLength {
    type Error = Error;

    fn try_from(length: Length) -> Result<Self> {
        Self::new(length)
    }
}

impl From<UnsignedLength> for Length {
    fn from(length: UnsignedLength) -> Length {
        length.0
    }
}

impl fmt::Display for UnsignedLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Length which is guaranteed to be > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Length", into = "Length")]
pub struct PositiveLength(Length);

impl PositiveLength {
    /// Smallest positive length (1nm)
    pub const MIN: PositiveLength = PositiveLength(Length::from_nm(1));

    /// Validates that `length` is greater than zero.
    pub fn new(length: Length) -> Result<Self> {
        if length.to_nm() <= 0 {
            return Err(Error::NonPositiveLength {
                nm: length.to_nm(),
            });
        }
        Ok(Self(length))
    }

    pub const fn get(self) -> Length {
        self.0
    }
}

impl TryFrom<Length> for PositiveLength {
    type Error = Error;

    fn try_from(length: Length) -> Result<Self> {
        Self::new(length)
    }
}

impl From<PositiveLength> for Length {
    fn from(length: PositiveLength) -> Length {
        length.0
    }
}

impl From<PositiveLength> for UnsignedLength {
    fn from(length: PositiveLength) -> UnsignedLength {
        UnsignedLength(length.0)
    }
}

impl fmt::Display for PositiveLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Signed angle in microdegrees
///
/// Not normalized: -180° and 180° are different values, which matters for
/// arc bulges where the sign selects the arc direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Angle(i64);

impl Angle {
    pub const DEG0: Angle = Angle(0);
    pub const DEG90: Angle = Angle(90 * MICRODEG_PER_DEG);
    pub const DEG180: Angle = Angle(180 * MICRODEG_PER_DEG);
    pub const DEG270: Angle = Angle(270 * MICRODEG_PER_DEG);
    pub const DEG360: Angle = Angle(360 * MICRODEG_PER_DEG);

    /// Creates an angle from microdegrees.
    pub const fn from_microdeg(microdeg: i64) -> Self {
        Self(microdeg)
    }

    pub const fn to_microdeg(self) -> i64 {
        self.0
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / MICRODEG_PER_DEG as f64
    }

    pub fn to_rad(self) -> f64 {
        self.to_deg().to_radians()
    }

    /// Maps the angle into the range [0°, 360°).
    pub fn normalized(self) -> Self {
        Self(self.0.rem_euclid(Self::DEG360.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, other: Angle) -> Angle {
        Angle(self.0.saturating_add(other.0))
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, other: Angle) -> Angle {
        Angle(self.0.saturating_sub(other.0))
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(self.0.saturating_neg())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_deg())
    }
}

/// Ratio in parts per million (1.0 == 1_000_000)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ratio(i64);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0);
    pub const PERCENT_50: Ratio = Ratio(500_000);
    pub const PERCENT_100: Ratio = Ratio(1_000_000);

    pub const fn from_ppm(ppm: i64) -> Self {
        Self(ppm)
    }

    pub const fn to_ppm(self) -> i64 {
        self.0
    }

    /// Creates a ratio from a percentage, rounding to the nearest ppm.
    pub fn from_percent(percent: f64) -> Self {
        Self((percent * 10_000.0).round() as i64)
    }

    pub fn to_normalized(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 as f64 / 10_000.0)
    }
}
