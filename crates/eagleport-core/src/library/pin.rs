//! Symbol pins

use crate::geometry::Point;
use crate::names::CircuitIdentifier;
use crate::units::{Angle, UnsignedLength};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pin of a schematic symbol
///
/// The pin starts at `position` and extends `length` in the direction given
/// by `rotation`; a zero length pin is a bare connection point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPin {
    pub uuid: Uuid,
    pub name: CircuitIdentifier,
    pub position: Point,
    pub length: UnsignedLength,
    pub rotation: Angle,
}

impl SymbolPin {
    pub fn new(
        name: CircuitIdentifier,
        position: Point,
        length: UnsignedLength,
        rotation: Angle,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name,
            position,
            length,
            rotation,
        }
    }
}
