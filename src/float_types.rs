//! Scalar type and the coincidence tolerance shared by builders and deduplication.
//!
//! Two positions closer than [`tolerance`] on every axis snap to the same
//! grid cell and count as one corner when walls and triangles are compared.
//! The same length is the smallest height a panel or triangle may have.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Grid size for corner comparison.
///
/// Fixed on first use: a value given with [`set_tolerance`] wins, then
/// `BLOCKSMITH_TOLERANCE` as seen when the crate was compiled, then
/// `1e-6` (`f64`) or `1e-4` (`f32`).
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("BLOCKSMITH_TOLERANCE")
            .and_then(|text| Real::from_str(text).ok())
            .map_or_else(default_tolerance, |value| value.max(Real::EPSILON))
    })
}

/// Choose the grid size before the first mesh is built.
///
/// Returns `false`, and changes nothing, once a tolerance is in effect:
/// corners already compared must keep comparing the same way.
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE_CELL.set(value.max(Real::EPSILON)).is_ok()
}

/// Largest coordinate magnitude whose grid cell still fits an `i64`.
///
/// Builders reject corners beyond it with
/// [`ValidationError::InvalidCoordinate`](crate::errors::ValidationError::InvalidCoordinate).
pub fn coordinate_limit() -> Real {
    tolerance() * i64::MAX as Real
}

/// Maps `-0.0` to `0.0` so emitted text never shows a signed zero.
#[inline]
pub fn unsigned_zero(value: Real) -> Real {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_positive() {
        assert!(tolerance() > 0.0);
        assert!(tolerance() < 1.0);
    }

    #[test]
    fn coordinate_limit_stays_on_the_grid() {
        let limit = coordinate_limit();
        assert!(limit.is_finite());
        assert!(limit > 1e6);
    }

    #[test]
    fn signed_zero_is_cleared() {
        let negative_zero: Real = -0.0;
        assert!(negative_zero.is_sign_negative());
        assert!(unsigned_zero(negative_zero).is_sign_positive());
        assert_eq!(unsigned_zero(-2.5), -2.5);
    }
}
