//! Index-based Wavefront OBJ output.
//!
//! Every registered point is written as a `v` line in registry order, so the
//! registry index of a [`Vertex`](crate::mesh::Vertex) is exactly its OBJ
//! index. Faces reference those indices; retired faces are skipped but their
//! points stay in the list to keep the numbering intact.

use crate::float_types::unsigned_zero;
use crate::io::DEFAULT_PRECISION;
use crate::mesh::Mesh;
use std::fmt::Write;

/// Convert `mesh` to OBJ text with `precision` decimals per coordinate.
pub fn to_obj(mesh: &Mesh, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "o {}", mesh.name());

    for point in mesh.points() {
        let p = point.pos;
        let _ = writeln!(
            out,
            "v {:.prec$} {:.prec$} {:.prec$}",
            unsigned_zero(p.x),
            unsigned_zero(p.y),
            unsigned_zero(p.z),
            prec = precision
        );
    }

    for face in mesh.active_faces() {
        out.push('f');
        for vertex in &face.vertices {
            let _ = write!(out, " {}", vertex.index);
        }
        out.push('\n');
    }
    out
}

impl Mesh {
    /// OBJ text of the mesh, named after it.
    pub fn to_obj(&self) -> String {
        self::to_obj(self, DEFAULT_PRECISION)
    }
}
