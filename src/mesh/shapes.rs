//! Shape builders: panels, triangles, prisms and (optionally tunnelled) cuboids.
//!
//! Every builder validates its input first and only then appends to the
//! mesh, so an `Err` never leaves half a shape behind.

use crate::errors::ValidationError;
use crate::float_types::{Real, coordinate_limit, tolerance};
use crate::mesh::Mesh;
use nalgebra::{Point3, Vector3};
use std::fmt;
use tracing::debug;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn unit(self) -> Vector3<Real> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// The other two axes `(p, q)` in cyclic order, so that `p × q = self`.
    pub const fn cyclic_others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Fourth corner of the rectangle with diagonal `p1`–`p2` and corner `p3`.
///
/// Point reflection of `p3` through the diagonal's midpoint:
/// `p4 = 2 * mid(p1, p2) - p3`, evaluated as `p1 + p2 - p3`.
pub fn fourth_corner(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Point3<Real> {
    Point3::from(p1.coords + p2.coords - p3.coords)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Outward,
    Inward,
}

/// A rectangular hole through a cuboid along `open`.
///
/// `wall[axis]` is the solid thickness left on each side along `axis`;
/// it is zero along `open`.
#[derive(Debug, Clone, Copy)]
struct Tunnel {
    open: Axis,
    wall: Vector3<Real>,
}

impl Tunnel {
    /// Interpret the three optional gaps of a cuboid call.
    fn resolve(gaps: [Option<Real>; 3]) -> Result<Option<Tunnel>, ValidationError> {
        let tunnel = |open: Axis, wall: Vector3<Real>| -> Result<Option<Tunnel>, ValidationError> {
            Ok(Some(Tunnel { open, wall }))
        };
        match gaps {
            [None, None, None] => Ok(None),
            [Some(_), Some(_), Some(_)] => Err(ValidationError::InvalidGapConfiguration),
            [None, Some(g_y), Some(g_z)] => tunnel(Axis::X, Vector3::new(0.0, g_y, g_z)),
            [Some(g_x), None, Some(g_z)] => tunnel(Axis::Y, Vector3::new(g_x, 0.0, g_z)),
            [Some(g_x), Some(g_y), None] => tunnel(Axis::Z, Vector3::new(g_x, g_y, 0.0)),
            [Some(_), None, None] => {
                Err(ValidationError::IncompleteGapConfiguration { given: Axis::X })
            },
            [None, Some(_), None] => {
                Err(ValidationError::IncompleteGapConfiguration { given: Axis::Y })
            },
            [None, None, Some(_)] => {
                Err(ValidationError::IncompleteGapConfiguration { given: Axis::Z })
            },
        }
    }

    fn validate(&self, size: &Vector3<Real>) -> Result<(), ValidationError> {
        let (p, q) = self.open.cyclic_others();
        for axis in [p, q] {
            let gap = self.wall[axis.index()];
            let extent = size[axis.index()];
            let fits = gap.is_finite() && gap > 0.0 && extent - 2.0 * gap > tolerance();
            if !fits {
                return Err(ValidationError::InvalidGapWidth { axis, gap, extent });
            }
        }
        Ok(())
    }
}

// beyond the coordinate limit corners no longer get a grid cell of their own
fn check_coordinates(points: &[Point3<Real>]) -> Result<(), ValidationError> {
    let limit = coordinate_limit();
    match points
        .iter()
        .find(|p| !p.coords.iter().all(|c| c.is_finite() && c.abs() < limit))
    {
        Some(p) => Err(ValidationError::InvalidCoordinate(*p)),
        None => Ok(()),
    }
}

// NaN fails the comparison too
fn check_normal(normal: &Vector3<Real>) -> Result<(), ValidationError> {
    if normal.norm() > tolerance() {
        Ok(())
    } else {
        Err(ValidationError::ZeroNormal)
    }
}

/// Whether `p3` lies within [`tolerance`] of the line through `p1` and `p2`
/// (or the three points are too close to span a triangle).
fn is_collinear(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> bool {
    let (a, b) = (p2 - p1, p3 - p1);
    // |a × b| is an area; divide by the longer edge for a height
    a.cross(&b).norm() <= tolerance() * a.norm().max(b.norm())
}

impl Mesh {
    /// Rectangular panel from three corners and an outward normal.
    ///
    /// `p1` and `p2` must be diagonally opposite and `p3` adjacent to both;
    /// the fourth corner is [`fourth_corner`]. Emits the triangles
    /// `(p1, p4, p2)` and `(p1, p2, p3)`, both carrying `normal`, and
    /// registers them as one [`Wall`](crate::mesh::Wall).
    ///
    /// For the triangles to wind counter-clockwise seen from outside, pick
    /// `p3` so that `(p1, p2, p3)` is counter-clockwise around `normal`.
    /// If `p3` is not a right-angle corner the result is the parallelogram
    /// `p1, p4, p2, p3`; the corners are used as given.
    ///
    /// # Example
    /// ```
    /// use blocksmith::mesh::Mesh;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let mut mesh = Mesh::new("panel");
    /// mesh.rectangle(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 0.0, 10.0),
    ///     Point3::new(10.0, 0.0, 0.0),
    ///     -Vector3::y(),
    /// )?;
    /// assert_eq!(mesh.walls().len(), 1);
    /// assert_eq!(mesh.faces().len(), 2);
    /// # Ok::<(), blocksmith::errors::ValidationError>(())
    /// ```
    pub fn rectangle(
        &mut self,
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
        normal: Vector3<Real>,
    ) -> Result<&mut Self, ValidationError> {
        check_coordinates(&[p1, p2, p3, fourth_corner(p1, p2, p3)])?;
        check_normal(&normal)?;
        if is_collinear(p1, p2, p3) {
            return Err(ValidationError::DegenerateRectangle(p3));
        }
        let wall = self.push_rectangle(p1, p2, p3, normal);
        debug!(wall, ?normal, "rectangle");
        Ok(self)
    }

    /// Same corners as [`Mesh::rectangle`], kept as a single quadrilateral face
    /// `(p1, p4, p2, p3)`.
    ///
    /// Quads are not registered as walls and face-level deduplication only
    /// compares triangles, so a quad is never retired.
    pub fn quad(
        &mut self,
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
        normal: Vector3<Real>,
    ) -> Result<&mut Self, ValidationError> {
        check_coordinates(&[p1, p2, p3, fourth_corner(p1, p2, p3)])?;
        check_normal(&normal)?;
        if is_collinear(p1, p2, p3) {
            return Err(ValidationError::DegenerateRectangle(p3));
        }
        let p4 = fourth_corner(p1, p2, p3);
        let face = self.push_face(&[p1, p4, p2, p3], normal);
        debug!(face, ?normal, "quad");
        Ok(self)
    }

    /// A single triangle with the points taken verbatim.
    pub fn triangle(
        &mut self,
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
        normal: Vector3<Real>,
    ) -> Result<&mut Self, ValidationError> {
        check_coordinates(&[p1, p2, p3])?;
        check_normal(&normal)?;
        if is_collinear(p1, p2, p3) {
            return Err(ValidationError::DegenerateTriangle(p3));
        }
        let face = self.push_face(&[p1, p2, p3], normal);
        debug!(face, ?normal, "triangle");
        Ok(self)
    }

    /// Triangular base `(p1, p2, p3)` closed off by three sides meeting at `apex`.
    ///
    /// The base normal is vertical: `-Z` when the apex is above `p1`, `+Z`
    /// otherwise. The sides `(p1, p2, apex)`, `(p2, p3, apex)` and
    /// `(p3, p1, apex)` get the cross product of their edges from the first
    /// vertex as normal, so they face outward when the base runs
    /// counter-clockwise seen from the apex. Winding is not corrected, and
    /// the base keeps its vertical normal whatever its own winding.
    pub fn prism(
        &mut self,
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
        apex: Point3<Real>,
    ) -> Result<&mut Self, ValidationError> {
        check_coordinates(&[p1, p2, p3, apex])?;
        if is_collinear(p1, p2, p3) {
            return Err(ValidationError::DegenerateTriangle(p3));
        }
        let base = (p2 - p1).cross(&(p3 - p1));
        // distance of the apex from the base plane
        if (base.dot(&(apex - p1)) / base.norm()).abs() <= tolerance() {
            return Err(ValidationError::DegeneratePrism(apex));
        }

        let base_normal = if apex.z > p1.z { -Vector3::z() } else { Vector3::z() };
        self.push_face(&[p1, p2, p3], base_normal);
        for [a, b] in [[p1, p2], [p2, p3], [p3, p1]] {
            let normal = (b - a).cross(&(apex - a));
            self.push_face(&[a, b, apex], normal);
        }
        debug!(?apex, "prism");
        Ok(self)
    }

    /// Cube with its minimum corner at `(x, y, z)`.
    pub fn cube(&mut self, x: Real, y: Real, z: Real, side: Real) -> Result<&mut Self, ValidationError> {
        self.cuboid(x, y, z, side, side, side, None, None, None)
    }

    /// Axis-aligned cuboid with its minimum corner at `(x, y, z)`.
    ///
    /// Without gaps this is six panels with outward normals `±X`, `±Y`, `±Z`.
    ///
    /// Giving gaps on exactly two axes bores a rectangular hole through the
    /// remaining (open) axis. Each gap is the wall thickness kept on both
    /// sides along its axis, so with `g_x` and `g_y` the hole spans
    /// `x + g_x ..= x + w_x - g_x` and `y + g_y ..= y + w_y - g_y` over the
    /// whole height. The four sides parallel to the hole stay full panels,
    /// each end becomes a ring of eight triangles, and four panels line the
    /// hole facing inward.
    ///
    /// Gaps on all three axes are rejected with
    /// [`ValidationError::InvalidGapConfiguration`]; a gap on one axis only
    /// with [`ValidationError::IncompleteGapConfiguration`].
    ///
    /// # Example
    /// ```
    /// use blocksmith::mesh::Mesh;
    ///
    /// let mut mesh = Mesh::new("cup");
    /// mesh.cuboid(0.0, 0.0, 0.0, 50.0, 50.0, 50.0, Some(5.0), Some(5.0), None)?;
    /// assert_eq!(mesh.walls().len(), 8);
    ///
    /// assert!(mesh.cuboid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, Some(0.1), Some(0.1), Some(0.1)).is_err());
    /// # Ok::<(), blocksmith::errors::ValidationError>(())
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn cuboid(
        &mut self,
        x: Real,
        y: Real,
        z: Real,
        w_x: Real,
        w_y: Real,
        w_z: Real,
        g_x: Option<Real>,
        g_y: Option<Real>,
        g_z: Option<Real>,
    ) -> Result<&mut Self, ValidationError> {
        let tunnel = Tunnel::resolve([g_x, g_y, g_z])?;

        let min = Point3::new(x, y, z);
        check_coordinates(&[min])?;
        let size = Vector3::new(w_x, w_y, w_z);
        for axis in Axis::ALL {
            let extent = size[axis.index()];
            if !(extent.is_finite() && extent > 0.0) {
                return Err(ValidationError::NonPositiveExtent { axis, extent });
            }
        }
        check_coordinates(&[min + size])?;
        if let Some(tunnel) = &tunnel {
            tunnel.validate(&size)?;
        }

        let faces_before = self.faces.len();
        let walls_before = self.walls.len();
        match tunnel {
            None => {
                for axis in Axis::ALL {
                    self.push_side(min, size, axis, End::Min, Facing::Outward);
                    self.push_side(min, size, axis, End::Max, Facing::Outward);
                }
            },
            Some(tunnel) => self.push_tunnelled(min, size, tunnel),
        }
        debug!(
            open = ?tunnel.map(|t| t.open),
            faces = self.faces.len() - faces_before,
            walls = self.walls.len() - walls_before,
            "cuboid"
        );
        Ok(self)
    }

    /// Unchecked panel: two triangles plus their wall. Returns the wall index.
    pub(crate) fn push_rectangle(
        &mut self,
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
        normal: Vector3<Real>,
    ) -> usize {
        let p4 = fourth_corner(p1, p2, p3);
        let first = self.push_face(&[p1, p4, p2], normal);
        let second = self.push_face(&[p1, p2, p3], normal);
        self.push_wall(first, second)
    }

    /// One side of the box `min .. min + size` perpendicular to `axis`.
    ///
    /// Outward sides face away from the box, inward sides into it (the lining
    /// of a hole). Corners are ordered counter-clockwise around the normal.
    fn push_side(
        &mut self,
        min: Point3<Real>,
        size: Vector3<Real>,
        axis: Axis,
        end: End,
        facing: Facing,
    ) {
        let (p, q) = axis.cyclic_others();
        let along_p = p.unit() * size[p.index()];
        let along_q = q.unit() * size[q.index()];
        let (corner, mut a, mut b, mut normal) = match end {
            End::Max => (min + axis.unit() * size[axis.index()], along_p, along_q, axis.unit()),
            End::Min => (min, along_q, along_p, -axis.unit()),
        };
        if facing == Facing::Inward {
            std::mem::swap(&mut a, &mut b);
            normal = -normal;
        }
        self.push_rectangle(corner, corner + a + b, corner + b, normal);
    }

    fn push_tunnelled(&mut self, min: Point3<Real>, size: Vector3<Real>, tunnel: Tunnel) {
        let (p, q) = tunnel.open.cyclic_others();

        for axis in [p, q] {
            self.push_side(min, size, axis, End::Min, Facing::Outward);
            self.push_side(min, size, axis, End::Max, Facing::Outward);
        }

        // lining: the sides of the hole itself, turned to face into it
        let hole_min = min + tunnel.wall;
        let hole_size = size - tunnel.wall * 2.0;
        for axis in [p, q] {
            self.push_side(hole_min, hole_size, axis, End::Min, Facing::Inward);
            self.push_side(hole_min, hole_size, axis, End::Max, Facing::Inward);
        }

        self.push_ring(min, size, tunnel, End::Min);
        self.push_ring(min, size, tunnel, End::Max);
    }

    /// Outer rectangle minus the hole at one end of the open axis, as eight
    /// triangles: two per side, each side spanning outer edge to inner edge.
    fn push_ring(&mut self, min: Point3<Real>, size: Vector3<Real>, tunnel: Tunnel, end: End) {
        let open = tunnel.open;
        let (p, q) = open.cyclic_others();
        let (u, v) = (size[p.index()], size[q.index()]);
        let (gu, gv) = (tunnel.wall[p.index()], tunnel.wall[q.index()]);
        let (level, normal) = match end {
            End::Min => (0.0, -open.unit()),
            End::Max => (size[open.index()], open.unit()),
        };
        let at = |s: Real, t: Real| min + p.unit() * s + q.unit() * t + open.unit() * level;

        let outer = [at(0.0, 0.0), at(u, 0.0), at(u, v), at(0.0, v)];
        let inner = [at(gu, gv), at(u - gu, gv), at(u - gu, v - gv), at(gu, v - gv)];

        for k in 0..4 {
            let next = (k + 1) % 4;
            let (o0, o1, i0, i1) = (outer[k], outer[next], inner[k], inner[next]);
            match end {
                End::Max => {
                    self.push_face(&[o0, o1, i1], normal);
                    self.push_face(&[o0, i1, i0], normal);
                },
                End::Min => {
                    self.push_face(&[o0, i1, o1], normal);
                    self.push_face(&[o0, i0, i1], normal);
                },
            }
        }
    }
}
