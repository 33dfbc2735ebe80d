//! Unit conversion
//!
//! Converts EAGLE's floating point millimeters and degrees into the
//! fixed-point model. Values are scaled by 1e6 and rounded half away from
//! zero. Non-finite input is a caller error and not checked here.

use crate::eagle;
use eagleport_core::{Angle, Length, Path, Point, PositiveLength, UnsignedLength, Vertex};
use tracing::warn;

const SCALE: f64 = 1_000_000.0;

/// Millimeters to nanometers.
pub fn convert_length(mm: f64) -> Length {
    Length::from_nm((mm * SCALE).round() as i64)
}

pub fn convert_point(p: eagle::Point) -> Point {
    Point::new(convert_length(p.x), convert_length(p.y))
}

/// Degrees to microdegrees.
pub fn convert_angle(deg: f64) -> Angle {
    Angle::from_microdeg((deg * SCALE).round() as i64)
}

/// Position plus curve, the curve becoming the bulge towards the next vertex.
pub fn convert_vertex(v: eagle::Vertex) -> Vertex {
    Vertex::new(convert_point(v.position), convert_angle(v.curve))
}

/// Converts a vertex list, optionally closing it with a copy of the first
/// position.
pub fn convert_vertices(vertices: &[eagle::Vertex], close_to_first: bool) -> Path {
    let mut out: Vec<Vertex> = vertices.iter().copied().map(convert_vertex).collect();
    if close_to_first {
        if let Some(first) = out.first() {
            out.push(Vertex::straight(first.position));
        }
    }
    Path::new(out)
}

/// Converts a length which must not be negative, clamping to zero otherwise.
pub(crate) fn convert_unsigned_length(mm: f64, what: &str) -> UnsignedLength {
    let length = convert_length(mm);
    UnsignedLength::new(length).unwrap_or_else(|err| {
        warn!("{} clamped to zero: {}", what, err);
        UnsignedLength::ZERO
    })
}

/// Makes a length positive, clamping to the smallest positive value otherwise.
pub(crate) fn to_positive_length(length: Length, what: &str) -> PositiveLength {
    PositiveLength::new(length).unwrap_or_else(|err| {
        warn!("{} clamped to 1nm: {}", what, err);
        PositiveLength::MIN
    })
}

pub(crate) fn convert_positive_length(mm: f64, what: &str) -> PositiveLength {
    to_positive_length(convert_length(mm), what)
}
