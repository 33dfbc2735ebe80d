//! Footprint pads
//!
//! A pad is split into its logical identity ([`PackagePad`], owned by the
//! package and referenced by name from the circuit) and its geometric
//! placement ([`FootprintPad`]), which points back to the package pad by
//! UUID.

use super::hole::Hole;
use crate::geometry::Point;
use crate::names::CircuitIdentifier;
use crate::units::{Angle, PositiveLength, Ratio};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Logical pad of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePad {
    pub uuid: Uuid,
    pub name: CircuitIdentifier,
}

impl PackagePad {
    pub fn new(name: CircuitIdentifier) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name,
        }
    }
}

/// Outline family of a footprint pad; the corner radius refines it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadShape {
    /// Rectangle with rounded corners (radius 100% gives an obround or circle)
    RoundedRect,
    /// Octagon with rounded corners
    RoundedOctagon,
}

impl fmt::Display for PadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundedRect => write!(f, "roundrect"),
            Self::RoundedOctagon => write!(f, "octagon"),
        }
    }
}

/// Board side a pad is placed on when the footprint is not mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSide {
    Top,
    Bottom,
}

/// Geometric pad of a footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintPad {
    pub uuid: Uuid,
    /// The package pad this pad is connected to, if any
    pub package_pad_uuid: Option<Uuid>,
    pub position: Point,
    pub rotation: Angle,
    pub shape: PadShape,
    pub width: PositiveLength,
    pub height: PositiveLength,
    /// Corner radius relative to half of the smaller pad dimension
    pub radius: Ratio,
    pub component_side: ComponentSide,
    /// Holes relative to the pad origin; empty for SMT pads
    pub holes: Vec<Hole>,
}

impl FootprintPad {
    pub fn is_tht(&self) -> bool {
        !self.holes.is_empty()
    }
}
