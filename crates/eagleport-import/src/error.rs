//! Error types for the EAGLE importer
//!
//! Import errors never abort a conversion batch. Per-item failures are
//! collected as strings in the caller's error list, see
//! [`convert_and_join_wires`](crate::wires::convert_and_join_wires).

use thiserror::Error;

/// Import error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    /// A wire with zero or negative width was skipped
    #[error("Wire on layer {layer} with invalid width {width_mm}mm ignored")]
    InvalidWireWidth {
        /// EAGLE layer id of the wire.
        layer: i32,
        /// The width as given in the source, in millimeters.
        width_mm: f64,
    },

    /// A keyword attribute had an unsupported value
    #[error("Unknown {attribute} '{value}'")]
    UnknownKeyword {
        /// Name of the attribute, e.g. "pad shape".
        attribute: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, ImportError>;
