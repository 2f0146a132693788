//! Spatial queries for 2D broad-phase collision detection.
//!
//! This crate provides the spatial primitives the physics core filters
//! candidate pairs with, generic over the data attached to each entry:
//!
//! - [`Aabb`] - axis-aligned bounding box with interval-overlap tests
//! - [`SpatialHash`] - uniform grid for same-cell candidate pairs
//! - [`sweep_axis`] - sort-and-sweep over AABB extents along one axis
//!
//! # Example
//!
//! ```
//! use ricochet_spatial::Aabb;
//! use glam::Vec2;
//!
//! let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
//! let b = Aabb::from_center_half_extents(Vec2::splat(12.0), Vec2::splat(3.0));
//!
//! assert!(a.intersects(&b));
//! assert!(a.contains_point(Vec2::new(5.0, 5.0)));
//! ```

use glam::Vec2;

mod spatial_hash;
mod sweep;

pub use spatial_hash::*;
pub use sweep::*;

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner (lower-left).
    pub min: Vec2,
    /// Maximum corner (upper-right).
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new AABB from min and max corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from center and half-extents.
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Creates the smallest AABB enclosing all of the given points.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Returns the center of the AABB.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the half-extents (half-size) of the AABB.
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Returns the size of the AABB.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Checks if this AABB contains a point.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if this AABB intersects another AABB.
    ///
    /// Interval overlap on both axes; touching boxes count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns the minimum extent along an axis (0 = x, 1 = y).
    pub fn min_along(&self, axis: usize) -> f32 {
        match axis {
            0 => self.min.x,
            1 => self.min.y,
            _ => panic!("axis out of range: {axis}"),
        }
    }

    /// Returns the maximum extent along an axis (0 = x, 1 = y).
    pub fn max_along(&self, axis: usize) -> f32 {
        match axis {
            0 => self.max.x,
            1 => self.max.y,
            _ => panic!("axis out of range: {axis}"),
        }
    }
}
