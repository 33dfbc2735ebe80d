//! Drill holes

use crate::geometry::{Path, Point, Vertex};
use crate::units::PositiveLength;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hole, either free standing in a footprint or inside a pad.
///
/// The path describes the hole's center line: a single vertex for a round
/// drill, more vertices for a slot. Pad holes are relative to the pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub uuid: Uuid,
    pub diameter: PositiveLength,
    pub path: Path,
}

impl Hole {
    pub fn new(diameter: PositiveLength, path: Path) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            diameter,
            path,
        }
    }

    /// Round hole at `center`.
    pub fn round(diameter: PositiveLength, center: Point) -> Self {
        Self::new(diameter, Path::new(vec![Vertex::straight(center)]))
    }

    pub fn is_slot(&self) -> bool {
        self.path.len() > 1
    }
}
