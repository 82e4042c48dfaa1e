use crate::mesh::Mesh;
use crate::mesh::fingerprint::QuantizedPoint;
use hashbrown::HashMap;

impl Mesh {
    /// Checks if the active faces of the Mesh close up
    ///
    /// ### Returns
    /// Returns `true` if every edge of the active triangles appears exactly 2 times
    ///
    /// ### Notes:
    /// - Quads are fanned into triangles first, so their diagonal counts twice as well.
    /// - Positions are snapped to the tolerance grid, as in deduplication.
    /// - An empty mesh is trivially manifold.
    pub fn is_manifold(&self) -> bool {
        let mut edge_counts: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();

        for face in self.active_faces() {
            for tri in face.triangles() {
                for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                    let p0 = QuantizedPoint::new(&tri[i0]);
                    let p1 = QuantizedPoint::new(&tri[i1]);

                    // Order them so (p0, p1) and (p1, p0) become the same key
                    let key = if p0 < p1 { (p0, p1) } else { (p1, p0) };
                    *edge_counts.entry(key).or_insert(0) += 1;
                }
            }
        }

        edge_counts.values().all(|&count| count == 2)
    }
}
