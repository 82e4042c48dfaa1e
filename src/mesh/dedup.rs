//! Retire coincident panels and triangles once all shapes are built.
//!
//! Two pieces placed flush against each other both emit the panel they
//! share. Neither copy belongs on the surface of the combined solid, so
//! coincident walls are retired in pairs. Triangles are compared afterwards:
//! an exact repeat (same corners, same facing) loses its later copy, while
//! coincident triangles facing different ways cancel each other out.
//!
//! Matches are found by grouping equal [`PointSet`]s, which gives the same
//! result as comparing every pair.

use crate::mesh::Mesh;
use crate::mesh::fingerprint::PointSet;
use hashbrown::HashMap;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What a [`Mesh::deduplicate`] run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Walls retired by this run (each retires its two faces too).
    pub walls_retired: usize,
    /// Faces retired by the triangle comparison of this run.
    pub faces_retired: usize,
}

impl DedupReport {
    pub const fn is_empty(&self) -> bool {
        self.walls_retired == 0 && self.faces_retired == 0
    }
}

/// Indices grouped by fingerprint, groups and members in ascending order.
fn groups(fingerprints: Vec<(usize, PointSet)>) -> Vec<Vec<usize>> {
    let mut by_set: HashMap<PointSet, Vec<usize>> = HashMap::new();
    for (id, set) in fingerprints {
        by_set.entry(set).or_default().push(id);
    }
    let mut groups: Vec<Vec<usize>> = by_set.into_values().filter(|ids| ids.len() > 1).collect();
    groups.sort_unstable_by_key(|ids| ids[0]);
    groups
}

impl Mesh {
    /// Retire duplicated geometry: coincident walls first, then coincident triangles.
    ///
    /// Decisions depend only on positions and normals, never on whether
    /// something is already retired, so running it again changes nothing.
    ///
    /// # Example
    /// ```
    /// use blocksmith::mesh::Mesh;
    ///
    /// let mut mesh = Mesh::new("pair");
    /// mesh.cube(0.0, 0.0, 0.0, 10.0)?.cube(10.0, 0.0, 0.0, 10.0)?;
    /// let report = mesh.deduplicate();
    /// assert_eq!(report.walls_retired, 2);
    /// assert_eq!(mesh.active_face_count(), 20);
    /// # Ok::<(), blocksmith::errors::ValidationError>(())
    /// ```
    pub fn deduplicate(&mut self) -> DedupReport {
        let mut report = DedupReport::default();

        for group in groups(self.wall_fingerprints()) {
            for id in group {
                if self.retire_wall(id) {
                    trace!(wall = id, "retired coincident wall");
                    report.walls_retired += 1;
                }
            }
        }

        for group in groups(self.triangle_fingerprints()) {
            for (n, &i) in group.iter().enumerate() {
                for &j in &group[n + 1..] {
                    if self.faces[i].same_orientation(&self.faces[j]) {
                        report.faces_retired += usize::from(self.retire_face(j));
                    } else {
                        report.faces_retired += usize::from(self.retire_face(i));
                        report.faces_retired += usize::from(self.retire_face(j));
                    }
                    trace!(first = i, second = j, "coincident triangles");
                }
            }
        }

        debug!(
            walls_retired = report.walls_retired,
            faces_retired = report.faces_retired,
            active_faces = self.active_face_count(),
            "deduplicated {}",
            self.name()
        );
        report
    }

    #[cfg(not(feature = "parallel"))]
    fn wall_fingerprints(&self) -> Vec<(usize, PointSet)> {
        self.walls
            .iter()
            .enumerate()
            .map(|(id, wall)| (id, wall.point_set(&self.faces)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn wall_fingerprints(&self) -> Vec<(usize, PointSet)> {
        self.walls
            .par_iter()
            .enumerate()
            .map(|(id, wall)| (id, wall.point_set(&self.faces)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn triangle_fingerprints(&self) -> Vec<(usize, PointSet)> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.is_triangle())
            .map(|(id, face)| (id, face.point_set()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn triangle_fingerprints(&self) -> Vec<(usize, PointSet)> {
        self.faces
            .par_iter()
            .enumerate()
            .filter(|(_, face)| face.is_triangle())
            .map(|(id, face)| (id, face.point_set()))
            .collect()
    }
}
