//! Text conversion
//!
//! Texts on layers without a counterpart in the target domain are dropped
//! (`None`). Position, rotation and value come from the EAGLE text, the
//! styling from a [`SchematicTextStyle`] or [`BoardTextStyle`].

use crate::eagle;
use crate::layers::{try_convert_board_layer, try_convert_schematic_layer};
use crate::names::convert_text_value;
use crate::style::{BoardTextStyle, SchematicTextStyle};
use crate::units::{convert_angle, convert_point, convert_positive_length, convert_unsigned_length};
use eagleport_core::{StrokeText, Text};
use tracing::trace;
use uuid::Uuid;

pub fn try_convert_schematic_text(text: &eagle::Text) -> Option<Text> {
    try_convert_schematic_text_with_style(text, &SchematicTextStyle::default())
}

pub fn try_convert_schematic_text_with_style(
    text: &eagle::Text,
    style: &SchematicTextStyle,
) -> Option<Text> {
    let Some(layer) = try_convert_schematic_layer(text.layer) else {
        trace!("Schematic text on unmapped layer {} skipped", text.layer);
        return None;
    };
    Some(Text {
        uuid: Uuid::new_v4(),
        layer,
        text: convert_text_value(&text.value),
        position: convert_point(text.position),
        rotation: convert_angle(text.rotation.angle),
        height: convert_positive_length(style.height, "text height"),
        align: style.align,
    })
}

pub fn try_convert_board_text(text: &eagle::Text) -> Option<StrokeText> {
    try_convert_board_text_with_style(text, &BoardTextStyle::default())
}

pub fn try_convert_board_text_with_style(
    text: &eagle::Text,
    style: &BoardTextStyle,
) -> Option<StrokeText> {
    let Some(layer) = try_convert_board_layer(text.layer) else {
        trace!("Board text on unmapped layer {} skipped", text.layer);
        return None;
    };
    Some(StrokeText {
        uuid: Uuid::new_v4(),
        layer,
        text: convert_text_value(&text.value),
        position: convert_point(text.position),
        rotation: convert_angle(text.rotation.angle),
        height: convert_positive_length(style.height, "text height"),
        stroke_width: convert_unsigned_length(style.stroke_width, "text stroke width"),
        letter_spacing: style.letter_spacing,
        line_spacing: style.line_spacing,
        align: style.align,
        mirrored: style.mirrored,
        auto_rotate: style.auto_rotate,
    })
}
