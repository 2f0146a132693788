//! Oriented rigid bodies.

use glam::Vec2;

use crate::shape::Shape;
use ricochet_spatial::Aabb;

/// A rigid body with linear and angular state.
///
/// The body owns its [`Shape`] and a world-space AABB derived from the
/// current pose. The AABB is recomputed from scratch by
/// [`integrate`](RigidBody::integrate) (and [`update_aabb`](RigidBody::update_aabb)
/// after external position changes), never updated incrementally, so it is
/// consistent with the pose whenever those calls return.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// Position in world space.
    pub position: Vec2,
    /// Linear velocity.
    pub linear_velocity: Vec2,
    /// Angular velocity in radians per second.
    pub angular_velocity: f32,
    angle: f32,
    force: Vec2,
    torque: f32,
    shape: Shape,
    aabb: Aabb,
}

impl RigidBody {
    /// Creates a body at the given pose with no velocity.
    ///
    /// The shape carries the validated mass and inertia, so construction
    /// cannot fail here.
    pub fn new(position: Vec2, angle: f32, shape: Shape) -> Self {
        let angle = angle.rem_euclid(std::f32::consts::TAU);
        let aabb = shape.aabb(position, angle);
        Self {
            position,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            angle,
            force: Vec2::ZERO,
            torque: 0.0,
            shape,
            aabb,
        }
    }

    /// Sets the initial linear velocity.
    pub fn with_linear_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Sets the initial angular velocity.
    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Returns the mass, owned by the shape.
    pub fn mass(&self) -> f32 {
        self.shape.mass()
    }

    /// Returns the shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the orientation in radians, always in [0, 2π).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Returns the world-space AABB for the current pose.
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Accumulates a force at the center of mass for the next integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulates a force at a local-frame point, generating torque about
    /// the center of mass.
    pub fn apply_force_at(&mut self, force: Vec2, local_point: Vec2) {
        self.force += force;
        let r = local_point - self.shape.center_of_mass();
        self.torque += r.perp_dot(force);
    }

    /// Accumulates a raw torque for the next integration.
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Advances linear and angular state by one semi-implicit Euler step.
    ///
    /// The angle wraps into [0, 2π), the AABB is recomputed for the new
    /// pose, and the force and torque accumulators reset to zero.
    pub fn integrate(&mut self, dt: f32) {
        let linear_acceleration = self.force / self.shape.mass();
        self.linear_velocity += linear_acceleration * dt;
        self.position += self.linear_velocity * dt;

        let angular_acceleration = self.torque / self.shape.inertia();
        self.angular_velocity += angular_acceleration * dt;
        self.angle = (self.angle + self.angular_velocity * dt).rem_euclid(std::f32::consts::TAU);

        self.aabb = self.shape.aabb(self.position, self.angle);
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    /// Recomputes the AABB from the current pose.
    ///
    /// Call after mutating `position` outside of `integrate`, e.g. when a
    /// boundary clamp moves the body.
    pub fn update_aabb(&mut self) {
        self.aabb = self.shape.aabb(self.position, self.angle);
    }
}
