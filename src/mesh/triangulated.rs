use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};

impl Triangulated3D for Mesh {
    /// Active faces only; quads are fanned from their first vertex.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Point3<Real>; 3], Vector3<Real>),
    {
        for face in self.active_faces() {
            let normal = face.normal.normalize();
            for tri in face.triangles() {
                f(tri, normal);
            }
        }
    }
}
