//! Validation errors

use crate::float_types::Real;
use crate::mesh::Axis;
use nalgebra::Point3;

/// All the precondition failures a shape builder can report.
///
/// Builders validate before touching the mesh, so a call that returns one of
/// these leaves the [`Mesh`](crate::mesh::Mesh) exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidGapConfiguration) A cuboid got a gap on every axis, so the hole
    /// would never reach the outside
    #[error("(InvalidGapConfiguration) Gap on one axis needs to be None so that the hole leads outside")]
    InvalidGapConfiguration,
    /// (IncompleteGapConfiguration) A cuboid got a gap on a single axis
    #[error("(IncompleteGapConfiguration) Only the {given} axis has a gap; a hole needs gaps on exactly two axes")]
    IncompleteGapConfiguration { given: Axis },
    /// (NonPositiveExtent) A cuboid extent is zero, negative or not finite
    #[error("(NonPositiveExtent) Extent along {axis} must be positive, got {extent}")]
    NonPositiveExtent { axis: Axis, extent: Real },
    /// (InvalidGapWidth) A gap is not positive or leaves no hole between the walls
    #[error("(InvalidGapWidth) Gap {gap} along {axis} does not fit inside extent {extent}")]
    InvalidGapWidth { axis: Axis, gap: Real, extent: Real },
    /// (InvalidCoordinate) The coordinate has a NaN or infinite, or lies beyond
    /// [`coordinate_limit`](crate::float_types::coordinate_limit)
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite or is too far from the origin")]
    InvalidCoordinate(Point3<Real>),
    /// (ZeroNormal) An explicit face normal has no direction
    #[error("(ZeroNormal) The face normal has zero length")]
    ZeroNormal,
    /// (DegenerateRectangle) The three given corners are collinear
    #[error("(DegenerateRectangle) Corners are collinear at: {0}")]
    DegenerateRectangle(Point3<Real>),
    /// (DegenerateTriangle) The three given points are collinear
    #[error("(DegenerateTriangle) Points are collinear at: {0}")]
    DegenerateTriangle(Point3<Real>),
    /// (DegeneratePrism) The apex lies in the plane of the base
    #[error("(DegeneratePrism) Apex {0} lies in the base plane")]
    DegeneratePrism(Point3<Real>),
}
