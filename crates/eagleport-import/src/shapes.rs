//! Shape conversion
//!
//! Rectangles, polygons and circles all become a [`Geometry`]: a path with
//! line width and fill flags, tagged with the EAGLE layer id so the caller
//! can pick the schematic or board lookup. Circles additionally keep their
//! exact center and diameter.

use crate::eagle;
use crate::units::{
    convert_angle, convert_length, convert_point, convert_positive_length,
    convert_unsigned_length, convert_vertices, to_positive_length,
};
use eagleport_core::{Angle, Hole, Length, Path, Point, PositiveLength, UnsignedLength, Vertex};
use serde::{Deserialize, Serialize};

/// A converted drawing primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// EAGLE layer id, not yet mapped
    pub layer_id: i32,
    pub line_width: UnsignedLength,
    pub filled: bool,
    /// Clicking inside the area selects the element
    pub grab_area: bool,
    pub path: Path,
    /// Center and diameter for primitives which are exact circles
    pub circle: Option<(Point, PositiveLength)>,
}

/// Converts a rectangle into a closed, filled five vertex path.
///
/// Corners start at `p1` and run counterclockwise for a rectangle given by
/// its lower left and upper right corner. A rotation turns the corners about
/// the rectangle's center.
pub fn convert_rectangle(rect: &eagle::Rectangle, grab_area: bool) -> Geometry {
    let p1 = convert_point(rect.p1);
    let p2 = convert_point(rect.p2);
    let center = p1.midpoint(p2);
    let rotation = convert_angle(rect.rotation.angle);
    let corners = [p1, Point::new(p2.x, p1.y), p2, Point::new(p1.x, p2.y), p1];
    Geometry {
        layer_id: rect.layer,
        line_width: UnsignedLength::ZERO,
        filled: true,
        grab_area,
        path: Path::straight(corners.into_iter().map(|p| p.rotated(rotation, center))),
        circle: None,
    }
}

/// EAGLE polygons are always filled; the width strokes the outline.
pub fn convert_polygon(polygon: &eagle::Polygon, grab_area: bool) -> Geometry {
    Geometry {
        layer_id: polygon.layer,
        line_width: convert_unsigned_length(polygon.width, "polygon width"),
        filled: true,
        grab_area,
        path: convert_vertices(&polygon.vertices, true),
        circle: None,
    }
}

/// Converts a circle; a zero width means filled.
///
/// The path consists of two half arcs instead of one full arc, whose start
/// and end would coincide.
pub fn convert_circle(circle: &eagle::Circle, grab_area: bool) -> Geometry {
    let center = convert_point(circle.center);
    let radius = convert_length(circle.radius);
    let line_width = convert_unsigned_length(circle.width, "circle width");
    let right = Point::new(center.x + radius, center.y);
    let left = Point::new(center.x - radius, center.y);
    Geometry {
        layer_id: circle.layer,
        line_width,
        filled: line_width.get() == Length::ZERO,
        grab_area,
        path: Path::new(vec![
            Vertex::new(right, -Angle::DEG180),
            Vertex::new(left, -Angle::DEG180),
            Vertex::straight(right),
        ]),
        circle: Some((center, to_positive_length(radius * 2, "circle diameter"))),
    }
}

pub fn convert_hole(hole: &eagle::Hole) -> Hole {
    Hole::round(
        convert_positive_length(hole.drill, "hole drill"),
        convert_point(hole.position),
    )
}
