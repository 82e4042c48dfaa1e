//! Struct and functions for working with `Vertex`s from which `Face`s are composed.

use crate::float_types::Real;
use nalgebra::Point3;

/// A registered point of a [`Mesh`](super::Mesh).
///
/// Every vertex is issued by the mesh's point registry and carries the
/// 1-based registry index it was given, which is what index-based exporters
/// (OBJ) refer to. Faces never share vertices: two faces touching the same
/// corner hold two distinct `Vertex` values with equal positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub index: usize,
    pub pos: Point3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// Only the registry should call this; see [`Mesh::points`](super::Mesh::points).
    pub(crate) const fn new(index: usize, pos: Point3<Real>) -> Self {
        Vertex { index, pos }
    }
}

/// Monotonic point counter owned by a single mesh.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointRegistry {
    points: Vec<Vertex>,
}

impl PointRegistry {
    /// Issue the next vertex for `pos`. Indices start at 1 and never repeat.
    pub fn register(&mut self, pos: Point3<Real>) -> Vertex {
        let vertex = Vertex::new(self.points.len() + 1, pos);
        self.points.push(vertex);
        vertex
    }

    pub fn points(&self) -> &[Vertex] {
        &self.points
    }
}
