//! Points, vertices and paths in fixed-point coordinates.

use crate::units::{Angle, Length};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A 2D point in nanometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Creates a point from raw nanometer coordinates.
    pub const fn from_nm(x: i64, y: i64) -> Self {
        Self {
            x: Length::from_nm(x),
            y: Length::from_nm(y),
        }
    }

    /// Midpoint between two points (integer division, rounds toward zero).
    pub fn midpoint(self, other: Point) -> Point {
        fn mid(a: Length, b: Length) -> Length {
            Length::from_nm(((a.to_nm() as i128 + b.to_nm() as i128) / 2) as i64)
        }
        Point::new(mid(self.x, other.x), mid(self.y, other.y))
    }

    /// Rotates the point counterclockwise around `center`.
    ///
    /// Multiples of 90° are computed exactly; any other angle goes through
    /// floating point and is rounded to the nearest nanometer.
    pub fn rotated(self, angle: Angle, center: Point) -> Point {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        let normalized = angle.normalized();
        if normalized == Angle::DEG0 {
            self
        } else if normalized == Angle::DEG90 {
            Point::new(center.x - dy, center.y + dx)
        } else if normalized == Angle::DEG180 {
            Point::new(center.x - dx, center.y - dy)
        } else if normalized == Angle::DEG270 {
            Point::new(center.x + dy, center.y - dx)
        } else {
            let (sin_a, cos_a) = angle.to_rad().sin_cos();
            let dx = dx.to_nm() as f64;
            let dy = dy.to_nm() as f64;
            Point::new(
                center.x + Length::from_nm((dx * cos_a - dy * sin_a).round() as i64),
                center.y + Length::from_nm((dx * sin_a + dy * cos_a).round() as i64),
            )
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A path vertex.
///
/// `bulge` is the arc angle from this vertex to the next one; zero means a
/// straight segment. The bulge of the last vertex of a path has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point,
    pub bulge: Angle,
}

impl Vertex {
    pub const fn new(position: Point, bulge: Angle) -> Self {
        Self { position, bulge }
    }

    /// Vertex followed by a straight segment.
    pub const fn straight(position: Point) -> Self {
        Self {
            position,
            bulge: Angle::DEG0,
        }
    }
}

/// Ordered sequence of vertices, open or closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Creates a path of straight segments through `points`.
    pub fn straight<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            vertices: points.into_iter().map(Vertex::straight).collect(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A path is closed if it has at least two vertices and the last one
    /// repeats the first position with a zero bulge.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) if self.vertices.len() > 1 => {
                first.position == last.position && last.bulge.is_zero()
            }
            _ => false,
        }
    }

    /// True if no segment of the path is an arc.
    pub fn is_straight(&self) -> bool {
        self.vertices.iter().all(|v| v.bulge.is_zero())
    }
}

impl From<Vec<Vertex>> for Path {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}
