//! Pad conversion
//!
//! Every EAGLE pad yields a pair: the [`PackagePad`] carrying the logical
//! identity and the [`FootprintPad`] carrying the geometry, linked by UUID.

use crate::eagle;
use crate::names::convert_pin_or_pad_name;
use crate::units::{
    convert_angle, convert_length, convert_point, convert_positive_length, to_positive_length,
};
use eagleport_core::{ComponentSide, FootprintPad, Hole, Length, PackagePad, PadShape, Point, Ratio};
use tracing::warn;
use uuid::Uuid;

/// EAGLE id of the bottom copper layer
const BOTTOM_COPPER_LAYER: i32 = 16;

/// Pad size relative to the drill when no diameter is given
const AUTO_DIAMETER_FACTOR: f64 = 1.5;

/// Converts a through-hole pad.
///
/// Through-hole pads exist on both sides, the component side is always top.
/// `long` pads are twice as wide as high; `offset` pads are long pads whose
/// drill sits at one end instead of the center.
pub fn convert_tht_pad(pad: &eagle::ThtPad) -> (PackagePad, FootprintPad) {
    let package_pad = PackagePad::new(convert_pin_or_pad_name(&pad.name));
    let drill = convert_positive_length(pad.drill, "pad drill");
    let size = if pad.diameter > 0.0 {
        convert_length(pad.diameter)
    } else {
        drill.get().scaled(AUTO_DIAMETER_FACTOR)
    };
    let rotation = convert_angle(pad.rotation.angle);
    let mut position = convert_point(pad.position);
    let mut hole_position = Point::default();

    let (shape, radius, width) = match pad.shape {
        eagle::PadShape::Square => (PadShape::RoundedRect, Ratio::ZERO, size),
        eagle::PadShape::Round => (PadShape::RoundedRect, Ratio::PERCENT_100, size),
        eagle::PadShape::Octagon => (PadShape::RoundedOctagon, Ratio::ZERO, size),
        eagle::PadShape::Long => (PadShape::RoundedRect, Ratio::PERCENT_100, size * 2),
        eagle::PadShape::Offset => {
            let shift = Point::new(size / 2, Length::ZERO);
            position = position + shift.rotated(rotation, Point::default());
            hole_position = Point::new(-shift.x, Length::ZERO);
            (PadShape::RoundedRect, Ratio::PERCENT_100, size * 2)
        }
    };

    let footprint_pad = FootprintPad {
        uuid: Uuid::new_v4(),
        package_pad_uuid: Some(package_pad.uuid),
        position,
        rotation,
        shape,
        width: to_positive_length(width, "pad width"),
        height: to_positive_length(size, "pad height"),
        radius,
        component_side: ComponentSide::Top,
        holes: vec![Hole::round(drill, hole_position)],
    };
    (package_pad, footprint_pad)
}

/// Converts a surface mount pad.
///
/// Layer 16 places the pad on the bottom side; any other layer is treated as
/// top copper.
pub fn convert_smt_pad(pad: &eagle::SmtPad) -> (PackagePad, FootprintPad) {
    let package_pad = PackagePad::new(convert_pin_or_pad_name(&pad.name));
    let component_side = match pad.layer {
        BOTTOM_COPPER_LAYER => ComponentSide::Bottom,
        1 => ComponentSide::Top,
        other => {
            warn!("SMT pad '{}' on non-copper layer {}, placed on top", pad.name, other);
            ComponentSide::Top
        }
    };

    let footprint_pad = FootprintPad {
        uuid: Uuid::new_v4(),
        package_pad_uuid: Some(package_pad.uuid),
        position: convert_point(pad.position),
        rotation: convert_angle(pad.rotation.angle),
        shape: PadShape::RoundedRect,
        width: convert_positive_length(pad.dx, "pad width"),
        height: convert_positive_length(pad.dy, "pad height"),
        radius: Ratio::from_percent(pad.roundness.clamp(0.0, 100.0)),
        component_side,
        holes: Vec::new(),
    };
    (package_pad, footprint_pad)
}
