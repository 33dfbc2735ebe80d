//! Text house style
//!
//! Imported texts drop EAGLE's own size, ratio and font settings and get a
//! fixed style instead. The defaults are the house style; callers may load
//! overrides from any serde source, missing fields keep their default.

use eagleport_core::{Alignment, StrokeTextSpacing};
use serde::{Deserialize, Serialize};

/// Style of texts on schematic (symbol) layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicTextStyle {
    /// Text height in millimeters
    pub height: f64,
    pub align: Alignment,
}

impl Default for SchematicTextStyle {
    fn default() -> Self {
        Self {
            height: 2.5,
            align: Alignment::default(),
        }
    }
}

/// Style of stroke texts on board (footprint) layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardTextStyle {
    /// Text height in millimeters
    pub height: f64,
    /// Stroke width in millimeters
    pub stroke_width: f64,
    pub letter_spacing: StrokeTextSpacing,
    pub line_spacing: StrokeTextSpacing,
    pub align: Alignment,
    pub mirrored: bool,
    pub auto_rotate: bool,
}

impl Default for BoardTextStyle {
    fn default() -> Self {
        Self {
            height: 1.0,
            stroke_width: 0.2,
            letter_spacing: StrokeTextSpacing::Auto,
            line_spacing: StrokeTextSpacing::Auto,
            align: Alignment::default(),
            mirrored: false,
            auto_rotate: true,
        }
    }
}
