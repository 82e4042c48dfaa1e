use crate::mesh::face::{Face, Status};
use crate::mesh::fingerprint::PointSet;

/// Two triangles that together tile one rectangular panel.
///
/// Holds indices into the owning mesh's face list rather than the faces
/// themselves, so retiring a wall and retiring its faces act on the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub faces: [usize; 2],
    pub status: Status,
}

impl Wall {
    pub(crate) const fn new(first: usize, second: usize) -> Self {
        Wall { faces: [first, second], status: Status::Active }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Distinct corner positions of the panel.
    pub fn point_set(&self, faces: &[Face]) -> PointSet {
        PointSet::from_positions(
            self.faces.iter().flat_map(|&id| faces[id].positions()),
        )
    }
}
