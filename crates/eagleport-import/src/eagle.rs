//! Parsed EAGLE primitives
//!
//! Flat attribute records as delivered by the EAGLE file parser. All
//! coordinates and lengths are in millimeters, all angles in degrees,
//! exactly as they appear in the `.lbr` XML. Nothing in here is validated;
//! the converters treat out-of-range values as caller errors.

use crate::error::ImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 2D point in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotation attribute (`rot="MR90"` and friends)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    /// Counterclockwise rotation in degrees
    pub angle: f64,
}

impl Rotation {
    pub fn degrees(angle: f64) -> Self {
        Self { angle }
    }
}

/// Polygon vertex; `curve` is the arc angle to the next vertex
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point,
    #[serde(default)]
    pub curve: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, curve: f64) -> Self {
        Self {
            position: Point::new(x, y),
            curve,
        }
    }
}

/// Straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub p1: Point,
    pub p2: Point,
    pub width: f64,
    pub layer: i32,
}

impl Wire {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, width: f64, layer: i32) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
            width,
            layer,
        }
    }
}

/// Axis aligned rectangle given by two opposite corners, rotated about its
/// center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub p1: Point,
    pub p2: Point,
    pub layer: i32,
    #[serde(default)]
    pub rotation: Rotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub width: f64,
    pub layer: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    /// Outline width; zero means filled
    pub width: f64,
    pub layer: i32,
}

/// Non-plated drill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub position: Point,
    pub drill: f64,
}

/// Shape keyword of a through-hole pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadShape {
    Square,
    #[default]
    Round,
    Octagon,
    /// Obround, twice as long as wide
    Long,
    /// Like `Long`, with the drill at one end
    Offset,
}

impl fmt::Display for PadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Round => write!(f, "round"),
            Self::Octagon => write!(f, "octagon"),
            Self::Long => write!(f, "long"),
            Self::Offset => write!(f, "offset"),
        }
    }
}

impl FromStr for PadShape {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Self::Square),
            "round" => Ok(Self::Round),
            "octagon" => Ok(Self::Octagon),
            "long" => Ok(Self::Long),
            "offset" => Ok(Self::Offset),
            _ => Err(ImportError::UnknownKeyword {
                attribute: "pad shape",
                value: s.to_string(),
            }),
        }
    }
}

/// Through-hole pad (`<pad>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThtPad {
    pub name: String,
    pub position: Point,
    pub drill: f64,
    /// Pad diameter; zero lets the size follow the drill
    #[serde(default)]
    pub diameter: f64,
    #[serde(default)]
    pub shape: PadShape,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Surface mount pad (`<smd>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtPad {
    pub name: String,
    pub position: Point,
    pub dx: f64,
    pub dy: f64,
    /// 1 (top copper) or 16 (bottom copper)
    pub layer: i32,
    /// Corner roundness in percent (0..=100)
    #[serde(default)]
    pub roundness: f64,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Text (`<text>`); `size` is carried along but not used for conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub position: Point,
    pub size: f64,
    pub layer: i32,
    #[serde(default)]
    pub rotation: Rotation,
}

/// Length keyword of a symbol pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinLength {
    Point,
    Short,
    Middle,
    #[default]
    Long,
}

impl fmt::Display for PinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Short => write!(f, "short"),
            Self::Middle => write!(f, "middle"),
            Self::Long => write!(f, "long"),
        }
    }
}

impl FromStr for PinLength {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(Self::Point),
            "short" => Ok(Self::Short),
            "middle" => Ok(Self::Middle),
            "long" => Ok(Self::Long),
            _ => Err(ImportError::UnknownKeyword {
                attribute: "pin length",
                value: s.to_string(),
            }),
        }
    }
}

/// Symbol pin (`<pin>`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub name: String,
    pub position: Point,
    #[serde(default)]
    pub length: PinLength,
    #[serde(default)]
    pub rotation: Rotation,
}
