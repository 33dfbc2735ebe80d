//! # eagleport
//!
//! Converts primitives of EAGLE libraries into a fixed-point PCB library
//! model:
//! - Lines, rectangles, polygons, circles and holes
//! - Through-hole and surface mount pads
//! - Symbol pins and texts
//! - Names of elements, components, devices, gates, pins and pads
//!
//! ## Architecture
//!
//! eagleport is organized as a workspace with multiple crates:
//!
//! 1. **eagleport-core** - Units, geometry, layers, names and library elements
//! 2. **eagleport-import** - EAGLE records and their conversion, wire joining
//! 3. **eagleport** - This facade, re-exporting both crates
//!
//! Parsing EAGLE files and assembling libraries is up to the caller.

pub use eagleport_core as model;
pub use eagleport_import as import;

pub use eagleport_core::{
    Angle, CircuitIdentifier, ElementName, Error, FootprintPad, GateSuffix, Hole, Layer, Length,
    PackagePad, Path, Point, PositiveLength, Ratio, Result, StrokeText, SymbolPin, Text,
    UnsignedLength, Vertex,
};

pub use eagleport_import::{eagle, Geometry, ImportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (default level INFO)
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
