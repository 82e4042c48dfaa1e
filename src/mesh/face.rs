//! Oriented faces and their active/retired status.

use crate::float_types::{Real, tolerance};
use crate::mesh::fingerprint::PointSet;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Whether a face or wall still takes part in serialization.
///
/// Retiring is never undone and never removes anything from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Retired,
}

/// A planar triangle or quadrilateral with an explicit outward normal.
///
/// The normal is stored verbatim and need not be unit length. For quads the
/// vertices run around the perimeter, so a fan from the first vertex gives
/// the two triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Vertex>,
    pub normal: Vector3<Real>,
    pub status: Status,
}

impl Face {
    pub(crate) fn new(vertices: Vec<Vertex>, normal: Vector3<Real>) -> Self {
        debug_assert!(
            matches!(vertices.len(), 3 | 4),
            "faces are triangles or quads, got {} vertices",
            vertices.len()
        );
        Face { vertices, normal, status: Status::Active }
    }

    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Mark the face as retired. Returns `true` if it was active before.
    pub fn retire(&mut self) -> bool {
        let was_active = self.is_active();
        self.status = Status::Retired;
        was_active
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<Real>> + '_ {
        self.vertices.iter().map(|v| v.pos)
    }

    /// Distinct vertex positions of this face.
    pub fn point_set(&self) -> PointSet {
        PointSet::from_positions(self.positions())
    }

    /// Whether `other` points the same way, ignoring length.
    pub fn same_orientation(&self, other: &Face) -> bool {
        let a = self.normal.normalize();
        let b = other.normal.normalize();
        (a - b).norm() <= tolerance()
    }

    /// Fan-triangulate the face from its first vertex.
    pub fn triangles(&self) -> Vec<[Point3<Real>; 3]> {
        let first = self.vertices[0].pos;
        self.vertices[1..]
            .windows(2)
            .map(|pair| [first, pair[0].pos, pair[1].pos])
            .collect()
    }
}
