//! Position fingerprints used to find coincident faces and walls.
//!
//! Positions are snapped to a grid of [`tolerance`] so that values computed
//! through different arithmetic (a reflected fourth corner against a corner
//! given verbatim) still compare equal.

use crate::float_types::{Real, tolerance};
use nalgebra::Point3;

/// A position snapped to the tolerance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizedPoint(pub i64, pub i64, pub i64);

impl QuantizedPoint {
    pub fn new(p: &Point3<Real>) -> Self {
        let grid = tolerance();
        QuantizedPoint(
            (p.x / grid).round() as i64,
            (p.y / grid).round() as i64,
            (p.z / grid).round() as i64,
        )
    }
}

/// The set of distinct positions of a face or wall.
///
/// Stored sorted and without repeats, so set equality is plain `==` and the
/// value can key a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointSet(Vec<QuantizedPoint>);

impl PointSet {
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Point3<Real>>,
    {
        let mut points: Vec<QuantizedPoint> =
            positions.into_iter().map(|p| QuantizedPoint::new(&p)).collect();
        points.sort_unstable();
        points.dedup();
        PointSet(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, p: &Point3<Real>) -> bool {
        self.0.binary_search(&QuantizedPoint::new(p)).is_ok()
    }
}
