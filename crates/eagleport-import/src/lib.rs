//! # eagleport Import
//!
//! Converts parsed EAGLE library primitives into the eagleport model.
//!
//! Supports:
//! - Unit conversion from millimeters and degrees to fixed-point values
//! - Name sanitizing for elements, components, devices, gates, pins and pads
//! - Rectangles, polygons, circles, holes, pads, pins and texts
//! - Layer id lookup for schematics and boards
//! - Joining of independent wires into paths
//!
//! Parsing the `.lbr` XML is left to the caller, which hands over the flat
//! records of the [`eagle`] module. All conversions are pure functions.

pub mod eagle;
pub mod error;
pub mod layers;
pub mod names;
pub mod pads;
pub mod pins;
pub mod shapes;
pub mod style;
pub mod text;
pub mod units;
pub mod wires;

pub use error::{ImportError, Result};
pub use layers::{try_convert_board_layer, try_convert_schematic_layer};
pub use names::{
    convert_component_name, convert_device_name, convert_element_description,
    convert_element_name, convert_gate_name, convert_pin_or_pad_name, convert_text_value,
};
pub use pads::{convert_smt_pad, convert_tht_pad};
pub use pins::convert_symbol_pin;
pub use shapes::{convert_circle, convert_hole, convert_polygon, convert_rectangle, Geometry};
pub use style::{BoardTextStyle, SchematicTextStyle};
pub use text::{
    try_convert_board_text, try_convert_board_text_with_style, try_convert_schematic_text,
    try_convert_schematic_text_with_style,
};
pub use units::{convert_angle, convert_length, convert_point, convert_vertex, convert_vertices};
pub use wires::convert_and_join_wires;
