//! Point-mass particles and the swarm spawner.
//!
//! Particles are circles with mass but no orientation. Their kinematic
//! state advances by semi-implicit Euler in [`Particle::integrate`]; the
//! accumulated force resets to zero afterwards and the world re-applies
//! gravity at the start of the next step.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, PhysicsResult};
use ricochet_spatial::Aabb;

/// A point mass with a radius for collision purposes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Particle {
    /// Position in world space.
    pub position: Vec2,
    /// Velocity in units per second.
    pub velocity: Vec2,
    /// Acceleration from the most recent integration.
    pub acceleration: Vec2,
    mass: f32,
    radius: f32,
    force: Vec2,
}

impl Particle {
    /// Creates a particle at rest-frame defaults with the given state.
    ///
    /// Mass and radius are fixed for the particle's lifetime; both must be
    /// strictly positive.
    pub fn new(mass: f32, radius: f32, position: Vec2, velocity: Vec2) -> PhysicsResult<Self> {
        if mass <= 0.0 {
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        if radius <= 0.0 {
            return Err(PhysicsError::NonPositiveRadius(radius));
        }
        Ok(Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass,
            radius,
            force: Vec2::ZERO,
        })
    }

    /// Returns the mass.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Returns the collision radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulates a force for the next integration.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Advances the kinematic state by one semi-implicit Euler step.
    ///
    /// Velocity picks up the acceleration first, then position picks up the
    /// updated velocity. The accumulated force is consumed and reset.
    pub fn integrate(&mut self, dt: f32) {
        self.acceleration = self.force / self.mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.force = Vec2::ZERO;
    }

    /// Distance between this particle's center and another's.
    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    /// Whether the two particles' circles touch or overlap.
    pub fn collides_with(&self, other: &Particle) -> bool {
        self.distance_to(other) <= self.radius + other.radius
    }
}

/// Deterministic xorshift64 generator for swarm setup.
#[derive(Debug, Clone)]
pub struct SwarmRng {
    state: u64,
}

impl Default for SwarmRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl SwarmRng {
    /// Creates a new generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            // xorshift64 has a fixed point at zero
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a random f32 in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Returns a random f32 in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

/// Spawns a particle swarm with uniform position and velocity sampling.
///
/// Positions are sampled uniformly inside the arena; velocity components
/// uniformly inside the configured range. All particles share one mass and
/// radius.
#[derive(Debug, Clone)]
pub struct ParticleSpawner {
    /// Region positions are sampled from.
    pub arena: Aabb,
    /// Lower bound of each velocity component.
    pub velocity_min: Vec2,
    /// Upper bound of each velocity component.
    pub velocity_max: Vec2,
    /// Mass given to every spawned particle.
    pub mass: f32,
    /// Radius given to every spawned particle.
    pub radius: f32,
}

impl ParticleSpawner {
    /// Creates a spawner over the given arena with default particle
    /// parameters.
    pub fn new(arena: Aabb) -> Self {
        Self {
            arena,
            velocity_min: Vec2::ZERO,
            velocity_max: Vec2::splat(1000.0),
            mass: 1.0,
            radius: 10.0,
        }
    }

    /// Sets the per-component velocity sampling range.
    pub fn with_velocity_range(mut self, min: Vec2, max: Vec2) -> Self {
        self.velocity_min = min;
        self.velocity_max = max;
        self
    }

    /// Sets the mass of spawned particles.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the radius of spawned particles.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Spawns `count` particles.
    pub fn spawn(&self, count: usize, rng: &mut SwarmRng) -> PhysicsResult<Vec<Particle>> {
        (0..count)
            .map(|_| {
                let position = Vec2::new(
                    rng.range(self.arena.min.x, self.arena.max.x),
                    rng.range(self.arena.min.y, self.arena.max.y),
                );
                let velocity = Vec2::new(
                    rng.range(self.velocity_min.x, self.velocity_max.x),
                    rng.range(self.velocity_min.y, self.velocity_max.y),
                );
                Particle::new(self.mass, self.radius, position, velocity)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_bad_parameters() {
        assert!(matches!(
            Particle::new(0.0, 1.0, Vec2::ZERO, Vec2::ZERO),
            Err(PhysicsError::NonPositiveMass(_))
        ));
        assert!(matches!(
            Particle::new(1.0, -1.0, Vec2::ZERO, Vec2::ZERO),
            Err(PhysicsError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_semi_implicit_euler_order() {
        // Position must pick up the *updated* velocity within the step.
        let mut p = Particle::new(2.0, 1.0, Vec2::ZERO, Vec2::ZERO).unwrap();
        p.apply_force(Vec2::new(4.0, 0.0));
        p.integrate(0.5);

        assert_eq!(p.acceleration, Vec2::new(2.0, 0.0));
        assert_eq!(p.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(p.position, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_force_resets_after_integration() {
        let mut p = Particle::new(1.0, 1.0, Vec2::ZERO, Vec2::ZERO).unwrap();
        p.apply_force(Vec2::new(1.0, 0.0));
        p.integrate(1.0);
        let velocity_after_first = p.velocity;

        // No force accumulated: velocity must not change again.
        p.integrate(1.0);
        assert_eq!(p.velocity, velocity_after_first);
    }

    #[test]
    fn test_contact_helpers() {
        let a = Particle::new(1.0, 5.0, Vec2::ZERO, Vec2::ZERO).unwrap();
        let b = Particle::new(1.0, 5.0, Vec2::new(9.0, 0.0), Vec2::ZERO).unwrap();
        let c = Particle::new(1.0, 5.0, Vec2::new(11.0, 0.0), Vec2::ZERO).unwrap();

        assert_eq!(a.distance_to(&b), 9.0);
        assert!(a.collides_with(&b));
        assert!(!a.collides_with(&c));
    }

    #[test]
    fn test_rng_range_bounds() {
        let mut rng = SwarmRng::new(7);
        for _ in 0..1000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&v));
        }
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        let mut a = SwarmRng::new(42);
        let mut b = SwarmRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn test_spawner_samples_inside_arena() {
        let arena = Aabb::new(Vec2::ZERO, Vec2::new(1200.0, 800.0));
        let spawner = ParticleSpawner::new(arena)
            .with_velocity_range(Vec2::splat(-50.0), Vec2::splat(50.0))
            .with_mass(2.0)
            .with_radius(4.0);

        let mut rng = SwarmRng::new(99);
        let particles = spawner.spawn(200, &mut rng).unwrap();
        assert_eq!(particles.len(), 200);

        for p in &particles {
            assert!(arena.contains_point(p.position));
            assert!(p.velocity.x >= -50.0 && p.velocity.x < 50.0);
            assert!(p.velocity.y >= -50.0 && p.velocity.y < 50.0);
            assert_eq!(p.mass(), 2.0);
            assert_eq!(p.radius(), 4.0);
        }
    }
}
