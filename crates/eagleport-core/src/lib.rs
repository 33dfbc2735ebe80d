//! # eagleport Core
//!
//! Fixed-point geometry and library element model shared by the eagleport
//! crates. Provides the value types produced by the EAGLE importer:
//! nanometer lengths, microdegree angles, points, vertices, paths, layers,
//! validated names and library elements (pads, holes, texts, pins).

pub mod error;
pub mod geometry;
pub mod layer;
pub mod library;
pub mod names;
pub mod units;

pub use error::{Error, Result};
pub use geometry::{Path, Point, Vertex};
pub use layer::Layer;
pub use library::{
    Alignment, ComponentSide, FootprintPad, HAlign, Hole, PackagePad, PadShape, StrokeText,
    StrokeTextSpacing, SymbolPin, Text, VAlign,
};
pub use names::{CircuitIdentifier, ElementName, GateSuffix, UNNAMED};
pub use units::{Angle, Length, PositiveLength, Ratio, UnsignedLength};
