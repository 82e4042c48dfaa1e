//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use blocksmith::{float_types::Real, mesh::Face};
use nalgebra::{Point3, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Whether every vertex of `face` has coordinate `value` along `axis` (0 = x, 1 = y, 2 = z).
pub fn lies_on_plane(face: &Face, axis: usize, value: Real) -> bool {
    face.vertices.iter().all(|v| approx_eq(v.pos[axis], value, 1e-9))
}

/// Whether `face` is flat on the plane `axis = value` and inside the
/// rectangle `lo..=hi` on the two other axes.
pub fn inside_patch(face: &Face, axis: usize, value: Real, lo: [Real; 3], hi: [Real; 3]) -> bool {
    lies_on_plane(face, axis, value)
        && face.vertices.iter().all(|v| {
            (0..3)
                .filter(|&i| i != axis)
                .all(|i| v.pos[i] >= lo[i] - 1e-9 && v.pos[i] <= hi[i] + 1e-9)
        })
}

/// Centroid of a face.
pub fn centroid(face: &Face) -> Point3<Real> {
    let sum = face
        .vertices
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + v.pos.coords);
    Point3::from(sum / face.vertices.len() as Real)
}

/// One `facet` block of an ASCII STL file.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub normal: [Real; 3],
    pub vertices: Vec<[Real; 3]>,
}

fn parse_triple(words: &[&str]) -> [Real; 3] {
    let mut out = [0.0; 3];
    for (slot, word) in out.iter_mut().zip(words) {
        *slot = word.parse().expect("number in STL");
    }
    out
}

/// Minimal ASCII STL reader: returns the solid name and the facets.
///
/// Panics on anything that is not well formed, which fails the calling test.
pub fn parse_stl_ascii(text: &str) -> (String, Vec<Facet>) {
    let mut lines = text.lines().map(str::trim);
    let header = lines.next().expect("header line");
    let name = header.strip_prefix("solid ").expect("solid header").to_string();

    let mut facets = Vec::new();
    let mut current: Option<Facet> = None;
    let mut ended = false;
    for line in lines {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["facet", "normal", rest @ ..] => {
                assert!(current.is_none(), "nested facet");
                current = Some(Facet { normal: parse_triple(rest), vertices: Vec::new() });
            },
            ["outer", "loop"] | ["endloop"] => {},
            ["vertex", rest @ ..] => {
                current.as_mut().expect("vertex outside facet").vertices.push(parse_triple(rest));
            },
            ["endfacet"] => facets.push(current.take().expect("endfacet without facet")),
            ["endsolid", end_name] => {
                assert_eq!(*end_name, name);
                ended = true;
            },
            other => panic!("unexpected STL line: {:?}", other),
        }
    }
    assert!(ended, "missing endsolid");
    (name, facets)
}
