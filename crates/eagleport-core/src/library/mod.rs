//! Library elements
//!
//! Value types for the parts of symbols and footprints produced by the
//! importer:
//! - Pads ([`PackagePad`] identity plus [`FootprintPad`] geometry)
//! - Non-plated and plated holes
//! - Schematic texts and board stroke texts
//! - Symbol pins
//!
//! Every element carries a UUID. UUIDs are generated per constructor call
//! and never take part in geometric comparisons.

pub mod hole;
pub mod pad;
pub mod pin;
pub mod text;

pub use hole::Hole;
pub use pad::{ComponentSide, FootprintPad, PackagePad, PadShape};
pub use pin::SymbolPin;
pub use text::{Alignment, HAlign, StrokeText, StrokeTextSpacing, Text, VAlign};
