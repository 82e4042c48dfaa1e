//! Example scenes built with the mesh API.

use blocksmith::float_types::Real;
use blocksmith::{Mesh, ValidationError};
use clap::ValueEnum;
use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Two stacked cubes with a tunnelled block against the upper one
    Gap,
    /// A single panel
    Face,
    /// Two cubes sharing a face
    Boxes,
    /// A hollow cup on a solid base with a looped handle
    GapCup,
    /// An arch assembled panel by panel from shared corner points
    PredefinedPoints,
    /// An S-shaped run of cubes
    BoxyS,
    /// A square pyramid made of two prisms on a cube
    Pyramid,
}

impl Scene {
    pub const fn name(self) -> &'static str {
        match self {
            Scene::Gap => "gap",
            Scene::Face => "face",
            Scene::Boxes => "boxes",
            Scene::GapCup => "gap_cup",
            Scene::PredefinedPoints => "predefined_points",
            Scene::BoxyS => "boxy_s",
            Scene::Pyramid => "pyramid",
        }
    }

    pub fn build(self, mesh: &mut Mesh) -> Result<(), ValidationError> {
        match self {
            Scene::Gap => gap(mesh),
            Scene::Face => face(mesh),
            Scene::Boxes => boxes(mesh),
            Scene::GapCup => gap_cup(mesh),
            Scene::PredefinedPoints => predefined_points(mesh),
            Scene::BoxyS => boxy_s(mesh),
            Scene::Pyramid => pyramid(mesh),
        }
    }
}

fn gap(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let gap = 5.0;
    let u = 50.0;
    mesh.cube(0.0, 0.0, 0.0, u)?
        .cube(0.0, 0.0, u, u)?
        .cuboid(u, 0.0, u, u, u, u, Some(gap), Some(gap), None)?;
    Ok(())
}

fn face(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let u = 10.0;
    mesh.rectangle(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(u, 0.0, u),
        Point3::new(u, 0.0, 0.0),
        -Vector3::y(),
    )?;
    Ok(())
}

fn boxes(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let u = 10.0;
    mesh.cube(0.0, 0.0, 0.0, u)?.cube(u, 0.0, 0.0, u)?;
    Ok(())
}

fn gap_cup(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let u: Real = 50.0;
    let gap = 5.0;
    let base = 40.0;
    let handle = 8.0;
    let handle_depth = 10.0;
    let handle_y = (u / 2.0).floor() - handle;
    let low = base + (u / 4.0).floor();
    let high = base + u - (u / 4.0).floor();

    // base and body
    mesh.cuboid(0.0, 0.0, 0.0, u, u, base, None, None, None)?
        .cuboid(0.0, 0.0, base, u, u, u, Some(gap), Some(gap), None)?;

    // handle: arms from the cup, elbows, and the upright joining them
    mesh.cuboid(u, handle_y, low, handle_depth, handle, handle, None, None, None)?
        .cuboid(u, handle_y, high, handle_depth, handle, handle, None, None, None)?
        .cube(u + handle_depth, handle_y, high, handle)?
        .cube(u + handle_depth, handle_y, low, handle)?
        .cuboid(
            u + handle_depth + handle,
            handle_y,
            low,
            handle,
            handle,
            (u / 2.0).floor() + handle,
            None,
            None,
            None,
        )?;
    Ok(())
}

fn predefined_points(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let u: Real = 28.0;
    let p = |x: Real, y: Real, z: Real| Point3::new(x * u, y * u, z * u);

    let p1 = p(0.0, 0.0, 0.0);
    let p2 = p(1.0, 0.0, 0.0);
    let p3 = p(2.0, 0.0, 0.0);
    let p4 = p(3.0, 0.0, 0.0);
    let p5 = p(0.0, 1.0, 0.0);
    let p6 = p(1.0, 1.0, 0.0);
    let p7 = p(2.0, 1.0, 0.0);
    let p8 = p(3.0, 1.0, 0.0);

    let p9 = p(1.0, 0.0, 1.0);
    let p10 = p(2.0, 0.0, 1.0);
    let p11 = p(2.0, 1.0, 1.0);
    let p12 = p(1.0, 1.0, 1.0);

    let p13 = p(0.0, 0.0, 2.0);
    let p14 = p(1.0, 0.0, 2.0);
    let p15 = p(2.0, 0.0, 2.0);
    let p16 = p(3.0, 0.0, 2.0);
    let p17 = p(0.0, 1.0, 2.0);
    let p18 = p(1.0, 1.0, 2.0);
    let p19 = p(2.0, 1.0, 2.0);
    let p20 = p(3.0, 1.0, 2.0);

    let (x, y, z) = (Vector3::x(), Vector3::y(), Vector3::z());

    mesh.rectangle(p14, p17, p18, z)?
        .rectangle(p1, p17, p5, -x)?
        .rectangle(p4, p20, p8, x)?
        .rectangle(p15, p20, p19, z)?
        .rectangle(p9, p18, p14, x)?
        .rectangle(p10, p19, p11, -x)?
        .rectangle(p9, p11, p12, z)?
        .rectangle(p1, p14, p13, -y)?
        .rectangle(p3, p16, p4, -y)?
        .rectangle(p2, p10, p9, -y)?
        .rectangle(p5, p18, p6, y)?
        .rectangle(p7, p20, p19, y)?
        .rectangle(p6, p11, p7, y)?
        .rectangle(p1, p8, p4, -z)?;
    Ok(())
}

fn boxy_s(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let side = 2.0;
    mesh.cube(0.0, 0.0, 0.0, side)?
        .cube(0.0, 0.0, side, side)?
        .cube(side, 0.0, 0.0, side)?
        .cube(side * 2.0, 0.0, 0.0, side)?
        .cuboid(side * 2.0, 0.0, side, side, side, side * 3.0, None, None, None)?
        .cube(side * 2.0, 0.0, side * 4.0, side)?
        .cube(side * 3.0, 0.0, side * 4.0, side)?
        .cube(side * 4.0, 0.0, side * 4.0, side)?
        .cube(side * 4.0, 0.0, side * 3.0, side)?
        // p3 is not a right-angle corner here, so this panel is a parallelogram
        .rectangle(
            Point3::new(side * 4.0, 0.0, side * 3.0),
            Point3::new(side * 4.0, 0.0, 0.0),
            Point3::new(side * 7.0, 0.0, 0.0),
            -Vector3::y(),
        )?;
    Ok(())
}

fn pyramid(mesh: &mut Mesh) -> Result<(), ValidationError> {
    let side = 20.0;
    let height = 15.0;
    let c = |x: Real, y: Real| Point3::new(x, y, side);
    let apex = Point3::new(side / 2.0, side / 2.0, side + height);

    // the two prisms share the inner triangle under the apex diagonal, and
    // their bases lie on the cube's top; deduplication removes both seams
    mesh.cube(0.0, 0.0, 0.0, side)?
        .prism(c(0.0, 0.0), c(side, 0.0), c(side, side), apex)?
        .prism(c(0.0, 0.0), c(side, side), c(0.0, side), apex)?;
    Ok(())
}
