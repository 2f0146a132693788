//! Collision shapes for rigid bodies.
//!
//! A [`Shape`] couples an immutable geometric description ([`ShapeKind`])
//! with its mass, rotational inertia, and local-frame center of mass. The
//! derived quantities are computed once at construction, which is also
//! where degenerate geometry is rejected.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, PhysicsResult};
use ricochet_spatial::Aabb;

/// Geometric variants a rigid body can carry.
///
/// The enum is closed on purpose: bounding-volume and inertia dispatch are
/// exhaustive matches, so adding a variant is a compile-time checklist
/// rather than a runtime type probe.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// Circle around the local origin.
    Circle {
        /// Radius of the circle.
        radius: f32,
    },
    /// Rectangle centered on the local origin, axis-aligned before rotation.
    Rect {
        /// Full width.
        width: f32,
        /// Full height.
        height: f32,
    },
    /// Convex polygon with counter-clockwise vertices in the local frame.
    Polygon {
        /// Vertex positions relative to the local origin.
        vertices: Vec<Vec2>,
    },
}

/// An immutable shape with derived mass properties.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    kind: ShapeKind,
    mass: f32,
    inertia: f32,
    center_of_mass: Vec2,
}

impl Shape {
    /// Creates a circle shape.
    pub fn circle(mass: f32, radius: f32) -> PhysicsResult<Self> {
        if mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        if radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        Ok(Self {
            kind: ShapeKind::Circle { radius },
            mass,
            inertia: 0.5 * mass * radius * radius,
            center_of_mass: Vec2::ZERO,
        })
    }

    /// Creates a rectangle shape.
    pub fn rect(mass: f32, width: f32, height: f32) -> PhysicsResult<Self> {
        if mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(PhysicsError::NonPositiveSize { width, height });
        }
        Ok(Self {
            kind: ShapeKind::Rect { width, height },
            mass,
            inertia: mass * (width * width + height * height) / 12.0,
            center_of_mass: Vec2::ZERO,
        })
    }

    /// Creates a convex polygon shape from counter-clockwise vertices.
    ///
    /// Fails with [`PhysicsError::DegeneratePolygon`] when the vertex loop
    /// evaluates to a non-positive inertia (degenerate geometry or a
    /// clockwise winding).
    pub fn polygon(mass: f32, vertices: Vec<Vec2>) -> PhysicsResult<Self> {
        if mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        let inertia = polygon_inertia(mass, &vertices);
        if inertia <= 0.0 {
            return Err(PhysicsError::DegeneratePolygon { inertia });
        }
        let center_of_mass =
            vertices.iter().copied().sum::<Vec2>() / vertices.len() as f32;
        Ok(Self {
            kind: ShapeKind::Polygon { vertices },
            mass,
            inertia,
            center_of_mass,
        })
    }

    /// Creates a regular polygon with `sides` vertices on a circle of the
    /// given radius, wound counter-clockwise.
    pub fn regular_polygon(mass: f32, radius: f32, sides: u32) -> PhysicsResult<Self> {
        if radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        let vertices = (0..sides)
            .map(|i| {
                let angle = i as f32 / sides as f32 * std::f32::consts::TAU;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::polygon(mass, vertices)
    }

    /// Returns the geometric variant.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Returns the mass.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Returns the rotational inertia about the local origin.
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Returns the local-frame center of mass.
    pub fn center_of_mass(&self) -> Vec2 {
        self.center_of_mass
    }

    /// Computes the world-space AABB of this shape at the given pose.
    ///
    /// Pure function of (position, angle, geometry); recomputed from
    /// scratch on every call.
    pub fn aabb(&self, position: Vec2, angle: f32) -> Aabb {
        match &self.kind {
            ShapeKind::Circle { radius } => {
                Aabb::from_center_half_extents(position, Vec2::splat(*radius))
            }
            ShapeKind::Rect { width, height } => {
                let half = Vec2::new(width * 0.5, height * 0.5);
                let corners = [
                    Vec2::new(-half.x, -half.y),
                    Vec2::new(half.x, -half.y),
                    Vec2::new(half.x, half.y),
                    Vec2::new(-half.x, half.y),
                ];
                points_aabb(position, angle, &corners)
            }
            ShapeKind::Polygon { vertices } => points_aabb(position, angle, vertices),
        }
    }
}

/// Smallest AABB around local points rotated by `angle` and moved to
/// `position`. The points slice is non-empty for every constructed shape.
fn points_aabb(position: Vec2, angle: f32, points: &[Vec2]) -> Aabb {
    let rot = Vec2::from_angle(angle);
    let first = position + rot.rotate(points[0]);
    let (min, max) = points[1..].iter().fold((first, first), |(min, max), &p| {
        let world = position + rot.rotate(p);
        (min.min(world), max.max(world))
    });
    Aabb::new(min, max)
}

/// Rotational inertia of a polygon about the local origin.
///
/// Shoelace-weighted edge sum; positive only for a counter-clockwise,
/// non-degenerate vertex loop.
fn polygon_inertia(mass: f32, vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let mut inertia = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let factor = a.x * b.y - b.x * a.y;
        let term = a.x * a.x + b.x * b.x + a.y * a.y + b.y * b.y;
        inertia += factor * term;
    }
    inertia * mass / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inertia() {
        let shape = Shape::circle(2.0, 3.0).unwrap();
        assert_eq!(shape.inertia(), 0.5 * 2.0 * 9.0);
        assert_eq!(shape.center_of_mass(), Vec2::ZERO);
    }

    #[test]
    fn test_rect_inertia() {
        let shape = Shape::rect(1.0, 2.0, 4.0).unwrap();
        assert!((shape.inertia() - (4.0 + 16.0) / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_mass_is_rejected() {
        assert!(matches!(
            Shape::circle(0.0, 1.0),
            Err(PhysicsError::NonPositiveMass(_))
        ));
        assert!(matches!(
            Shape::rect(-1.0, 1.0, 1.0),
            Err(PhysicsError::NonPositiveMass(_))
        ));
    }

    #[test]
    fn test_non_positive_geometry_is_rejected() {
        assert!(matches!(
            Shape::circle(1.0, 0.0),
            Err(PhysicsError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            Shape::rect(1.0, 0.0, 1.0),
            Err(PhysicsError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn test_clockwise_polygon_is_degenerate() {
        // Counter-clockwise square works, the reversed winding fails.
        let ccw = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let mut cw = ccw.clone();
        cw.reverse();

        assert!(Shape::polygon(1.0, ccw).is_ok());
        assert!(matches!(
            Shape::polygon(1.0, cw),
            Err(PhysicsError::DegeneratePolygon { .. })
        ));
    }

    #[test]
    fn test_too_few_vertices_are_degenerate() {
        assert!(Shape::polygon(1.0, vec![]).is_err());
        assert!(Shape::polygon(1.0, vec![Vec2::ZERO, Vec2::X]).is_err());
    }

    #[test]
    fn test_regular_polygon_is_counter_clockwise() {
        let shape = Shape::regular_polygon(1.0, 0.5, 6).unwrap();
        assert!(shape.inertia() > 0.0);
        // Centroid of a regular polygon is the origin.
        assert!(shape.center_of_mass().length() < 1e-6);
    }

    #[test]
    fn test_circle_aabb_ignores_rotation() {
        let shape = Shape::circle(1.0, 2.0).unwrap();
        let pos = Vec2::new(10.0, 20.0);
        let a = shape.aabb(pos, 0.0);
        let b = shape.aabb(pos, 1.3);
        assert_eq!(a, b);
        assert_eq!(a.min, Vec2::new(8.0, 18.0));
        assert_eq!(a.max, Vec2::new(12.0, 22.0));
    }

    #[test]
    fn test_rect_aabb_grows_under_rotation() {
        let shape = Shape::rect(1.0, 2.0, 2.0).unwrap();
        let axis_aligned = shape.aabb(Vec2::ZERO, 0.0);
        assert!((axis_aligned.half_extents().x - 1.0).abs() < 1e-6);

        // At 45 degrees the half-extent becomes sqrt(2).
        let rotated = shape.aabb(Vec2::ZERO, std::f32::consts::FRAC_PI_4);
        assert!((rotated.half_extents().x - std::f32::consts::SQRT_2).abs() < 1e-5);
        assert!((rotated.half_extents().y - std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_polygon_aabb_follows_pose() {
        let shape = Shape::regular_polygon(1.0, 1.0, 4).unwrap();
        let aabb = shape.aabb(Vec2::new(5.0, 5.0), 0.0);
        assert!(aabb.contains_point(Vec2::new(5.0, 5.0)));
        assert!((aabb.center() - Vec2::new(5.0, 5.0)).length() < 1e-5);
    }
}
