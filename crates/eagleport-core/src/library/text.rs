//! Schematic texts and board stroke texts

use crate::geometry::Point;
use crate::layer::Layer;
use crate::units::{Angle, PositiveLength, Ratio, UnsignedLength};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Bottom,
    Center,
    Top,
}

/// Anchor of a text relative to its position (default: left/bottom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Alignment {
    pub h: HAlign,
    pub v: VAlign,
}

impl Alignment {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }
}

/// Letter or line spacing of a stroke text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeTextSpacing {
    /// Derived from the font
    #[default]
    Auto,
    /// Fixed ratio of the text height
    Ratio(Ratio),
}

/// Text on a schematic layer, rendered with the schematic font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub uuid: Uuid,
    pub layer: Layer,
    pub text: String,
    pub position: Point,
    pub rotation: Angle,
    pub height: PositiveLength,
    pub align: Alignment,
}

/// Text on a board layer, rendered as strokes of `stroke_width`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeText {
    pub uuid: Uuid,
    pub layer: Layer,
    pub text: String,
    pub position: Point,
    pub rotation: Angle,
    pub height: PositiveLength,
    pub stroke_width: UnsignedLength,
    pub letter_spacing: StrokeTextSpacing,
    pub line_spacing: StrokeTextSpacing,
    pub align: Alignment,
    pub mirrored: bool,
    /// Keep the text readable when the footprint is rotated
    pub auto_rotate: bool,
}
