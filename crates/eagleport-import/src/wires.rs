//! Wire joining
//!
//! EAGLE stores outlines as independent straight wires. Joining them back
//! into paths keeps outlines editable as one element. Wires only join when
//! they share layer and width and their converted endpoints are identical.

use crate::eagle;
use crate::error::ImportError;
use crate::shapes::Geometry;
use crate::units::{convert_length, convert_point};
use eagleport_core::{Path, Point, PositiveLength, UnsignedLength};
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

type Segment = (Point, Point);

/// Converts wires and joins connected ones into paths.
///
/// Wires with a non-positive width are skipped and reported in `errors`.
/// The output is ordered by first appearance of each (layer, width) pair,
/// then by the first wire of each path. Closed paths are grab areas if
/// `grab_area_if_closed` is set, open paths never are.
pub fn convert_and_join_wires(
    wires: &[eagle::Wire],
    grab_area_if_closed: bool,
    errors: &mut Vec<String>,
) -> Vec<Geometry> {
    let mut partitions: IndexMap<(i32, UnsignedLength), Vec<Segment>> = IndexMap::new();
    for wire in wires {
        let width = match PositiveLength::new(convert_length(wire.width)) {
            Ok(width) => UnsignedLength::from(width),
            Err(_) => {
                let err = ImportError::InvalidWireWidth {
                    layer: wire.layer,
                    width_mm: wire.width,
                };
                warn!("{}", err);
                errors.push(err.to_string());
                continue;
            }
        };
        partitions
            .entry((wire.layer, width))
            .or_default()
            .push((convert_point(wire.p1), convert_point(wire.p2)));
    }

    let mut geometries = Vec::new();
    for ((layer_id, line_width), segments) in &partitions {
        for points in join_segments(segments) {
            let path = Path::straight(points);
            geometries.push(Geometry {
                layer_id: *layer_id,
                line_width: *line_width,
                filled: false,
                grab_area: grab_area_if_closed && path.is_closed(),
                path,
                circle: None,
            });
        }
    }

    debug!(
        "Joined {} wires into {} paths ({} partitions)",
        wires.len(),
        geometries.len(),
        partitions.len()
    );
    geometries
}

/// Greedily chains segments with exactly matching endpoints.
///
/// Each chain is seeded by the first unused segment and extended at its
/// tail, then at its head, until no unused segment touches an open end or
/// the chain has closed.
fn join_segments(segments: &[Segment]) -> Vec<VecDeque<Point>> {
    let mut endpoints: HashMap<Point, Vec<usize>> = HashMap::new();
    for (i, (a, b)) in segments.iter().enumerate() {
        endpoints.entry(*a).or_default().push(i);
        if b != a {
            endpoints.entry(*b).or_default().push(i);
        }
    }

    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();
    for (seed, &(start, end)) in segments.iter().enumerate() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut chain = VecDeque::from([start, end]);

        while !is_closed(&chain) {
            let Some(tail) = chain.back().copied() else {
                break;
            };
            match take_next(tail, segments, &endpoints, &mut used) {
                Some(next) => chain.push_back(next),
                None => break,
            }
        }
        while !is_closed(&chain) {
            let Some(head) = chain.front().copied() else {
                break;
            };
            match take_next(head, segments, &endpoints, &mut used) {
                Some(next) => chain.push_front(next),
                None => break,
            }
        }
        chains.push(chain);
    }
    chains
}

fn is_closed(chain: &VecDeque<Point>) -> bool {
    chain.len() > 2 && chain.front() == chain.back()
}

/// Marks the first unused segment touching `point` as used and returns its
/// other endpoint.
fn take_next(
    point: Point,
    segments: &[Segment],
    endpoints: &HashMap<Point, Vec<usize>>,
    used: &mut [bool],
) -> Option<Point> {
    let index = endpoints
        .get(&point)?
        .iter()
        .copied()
        .find(|&i| !used[i])?;
    used[index] = true;
    let (a, b) = segments[index];
    Some(if a == point { b } else { a })
}
