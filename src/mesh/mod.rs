//! `Mesh` struct: the accumulating state that shape builders append to.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

pub mod dedup;
pub mod face;
pub mod fingerprint;
pub mod manifold;
pub mod shapes;
pub mod triangulated;
pub mod vertex;
pub mod wall;

pub use dedup::DedupReport;
pub use face::{Face, Status};
pub use shapes::Axis;
pub use vertex::Vertex;
pub use wall::Wall;

use vertex::PointRegistry;

/// An append-only collection of oriented faces.
///
/// Builders only ever push; the deduplication pass only ever retires. Face
/// and wall indices are therefore stable for the lifetime of the mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    registry: PointRegistry,
    faces: Vec<Face>,
    walls: Vec<Wall>,
}

impl Default for Mesh {
    fn default() -> Self {
        Mesh::new("mesh")
    }
}

impl Mesh {
    /// Create an empty mesh; `name` becomes the solid name in STL output.
    pub fn new(name: impl Into<String>) -> Self {
        Mesh {
            name: name.into(),
            registry: PointRegistry::default(),
            faces: Vec::new(),
            walls: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every point registered so far, in registry order.
    pub fn points(&self) -> &[Vertex] {
        self.registry.points()
    }

    /// All faces, active or retired, in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All walls, active or retired, in insertion order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn active_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(|f| f.is_active())
    }

    pub fn active_face_count(&self) -> usize {
        self.active_faces().count()
    }

    /// The two faces making up `wall`.
    ///
    /// # Panics
    /// If `wall` was taken from a different mesh whose face indices run past
    /// this one's. Walls are only meaningful for the mesh that built them.
    pub fn wall_faces(&self, wall: &Wall) -> [&Face; 2] {
        [&self.faces[wall.faces[0]], &self.faces[wall.faces[1]]]
    }

    /// Axis-aligned bounds `(mins, maxs)` of the active faces, `None` if there are none.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut positions = self.active_faces().flat_map(|f| f.positions());
        let first = positions.next()?;
        Some(positions.fold((first, first), |(mins, maxs), p| {
            (mins.inf(&p), maxs.sup(&p))
        }))
    }

    /// Register fresh points for `positions` and append them as one face.
    pub(crate) fn push_face(&mut self, positions: &[Point3<Real>], normal: Vector3<Real>) -> usize {
        let vertices = positions.iter().map(|&p| self.registry.register(p)).collect();
        self.faces.push(Face::new(vertices, normal));
        self.faces.len() - 1
    }

    pub(crate) fn push_wall(&mut self, first: usize, second: usize) -> usize {
        self.walls.push(Wall::new(first, second));
        self.walls.len() - 1
    }

    /// Retire a face. Returns `true` if it was active.
    pub(crate) fn retire_face(&mut self, id: usize) -> bool {
        self.faces[id].retire()
    }

    /// Retire a wall together with both of its faces. Returns `true` if the wall was active.
    pub(crate) fn retire_wall(&mut self, id: usize) -> bool {
        let wall = &mut self.walls[id];
        let was_active = wall.is_active();
        wall.status = Status::Retired;
        let [first, second] = wall.faces;
        self.faces[first].retire();
        self.faces[second].retire();
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = Mesh::new("empty");
        assert_eq!(mesh.name(), "empty");
        assert!(mesh.bounding_box().is_none());
        assert_eq!(mesh.active_face_count(), 0);
    }

    #[test]
    fn retiring_a_wall_retires_its_faces() {
        let mut mesh = Mesh::default();
        let a = mesh.push_face(
            &[Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
            Vector3::z(),
        );
        let b = mesh.push_face(
            &[Point3::origin(), Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            Vector3::z(),
        );
        let wall = mesh.push_wall(a, b);

        assert!(mesh.retire_wall(wall));
        assert!(!mesh.retire_wall(wall));
        assert_eq!(mesh.active_face_count(), 0);
        // retired geometry is still there to inspect
        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.points().len(), 6);
    }
}
