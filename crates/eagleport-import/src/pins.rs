//! Symbol pin conversion

use crate::eagle::{self, PinLength};
use crate::names::convert_pin_or_pad_name;
use crate::units::{convert_angle, convert_point, convert_unsigned_length};
use eagleport_core::SymbolPin;

/// Length of a pin keyword in millimeters
fn pin_length_mm(length: PinLength) -> f64 {
    match length {
        PinLength::Point => 0.0,
        PinLength::Short => 2.54,
        PinLength::Middle => 5.08,
        PinLength::Long => 7.62,
    }
}

pub fn convert_symbol_pin(pin: &eagle::Pin) -> SymbolPin {
    SymbolPin::new(
        convert_pin_or_pad_name(&pin.name),
        convert_point(pin.position),
        convert_unsigned_length(pin_length_mm(pin.length), "pin length"),
        convert_angle(pin.rotation.angle),
    )
}
