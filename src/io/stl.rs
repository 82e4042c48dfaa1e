use crate::float_types::unsigned_zero;
use crate::io::DEFAULT_PRECISION;
use crate::mesh::Mesh;
use crate::triangulated::Triangulated3D;
use std::fmt::Write;

/// Export to ASCII STL
/// Convert any triangulated shape to an **ASCII STL** string with the given `name`,
/// printing coordinates with `precision` decimals.
///
/// ```rust
/// # use blocksmith::mesh::Mesh;
/// # use blocksmith::io::stl::to_stl_ascii;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut mesh = Mesh::new("my_solid");
/// mesh.cube(0.0, 0.0, 0.0, 1.0)?;
/// let text = to_stl_ascii(&mesh, "my_solid", 3);
/// assert!(text.starts_with("solid my_solid\n"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solid {name}");

    shape.visit_triangles(|tri, n| {
        let _ = writeln!(
            out,
            "  facet normal {:.p$} {:.p$} {:.p$}",
            unsigned_zero(n.x),
            unsigned_zero(n.y),
            unsigned_zero(n.z),
            p = precision
        );
        out.push_str("    outer loop\n");
        for v in &tri {
            let _ = writeln!(
                out,
                "      vertex {:.p$} {:.p$} {:.p$}",
                unsigned_zero(v.x),
                unsigned_zero(v.y),
                unsigned_zero(v.z),
                p = precision
            );
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    let _ = writeln!(out, "endsolid {name}");
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Convert any triangulated shape to a **binary STL** byte vector. The binary
/// header carries no name.
#[cfg(feature = "stl-io")]
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri, n| {
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    let mut cursor = std::io::Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl Mesh {
    /// ASCII STL of the active faces, named after the mesh.
    pub fn to_stl_ascii(&self) -> String {
        self::to_stl_ascii(self, self.name(), DEFAULT_PRECISION)
    }

    /// Binary STL of the active faces.
    #[cfg(feature = "stl-io")]
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::Mesh;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn single_triangle_layout() {
        let mut mesh = Mesh::new("tri");
        mesh.triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 5.0),
        )
        .unwrap();

        let expected = "\
solid tri
  facet normal 0.00000 0.00000 1.00000
    outer loop
      vertex 0.00000 0.00000 0.00000
      vertex 1.00000 0.00000 0.00000
      vertex 0.00000 1.00000 0.00000
    endloop
  endfacet
endsolid tri
";
        assert_eq!(mesh.to_stl_ascii(), expected);
    }

    #[test]
    fn negative_zero_is_not_printed() {
        let mut mesh = Mesh::new("down");
        mesh.triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            -Vector3::z(),
        )
        .unwrap();
        let text = mesh.to_stl_ascii();
        assert!(text.contains("facet normal 0.00000 0.00000 -1.00000"));
        assert!(!text.contains("-0.00000"));
    }

    #[test]
    fn retired_faces_are_omitted() {
        let mut mesh = Mesh::new("pair");
        mesh.cube(0.0, 0.0, 0.0, 1.0).unwrap();
        mesh.cube(1.0, 0.0, 0.0, 1.0).unwrap();
        mesh.deduplicate();
        let text = mesh.to_stl_ascii();
        assert_eq!(text.matches("facet normal").count(), 20);
    }
}
