//! The simulation world and its step pipeline.
//!
//! [`World`] owns every particle and rigid body plus the run configuration.
//! [`World::step`] runs the fixed stage order the whole engine is built
//! around: apply forces, integrate, broad phase, narrow phase, boundary
//! constraints. No stage is ever skipped or reordered.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::body::RigidBody;
use crate::collision;
use crate::particle::Particle;
use ricochet_spatial::{sweep_axis, Aabb, SpatialHash};

/// Configuration for a simulation run.
///
/// Treated as immutable for the duration of the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// Gravity acceleration applied to every body each step.
    pub gravity: Vec2,
    /// Fixed timestep.
    pub dt: f32,
    /// Arena every body is kept inside.
    pub arena: Aabb,
    /// Velocity retention on a wall bounce, in [0, 1].
    pub wall_damping: f32,
    /// Restitution for particle collisions, in [0, 1].
    pub restitution: f32,
    /// Cell size of the particle broad phase.
    ///
    /// Two particles straddling a cell boundary are never candidates, so
    /// keep this safely larger than twice the typical particle diameter.
    pub cell_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            dt: 0.01,
            arena: Aabb::new(Vec2::ZERO, Vec2::new(1200.0, 800.0)),
            wall_damping: 0.95,
            restitution: 0.95,
            cell_size: 100.0,
        }
    }
}

/// The simulation world.
#[derive(Clone, Debug)]
pub struct World {
    /// All particles, in insertion order.
    pub particles: Vec<Particle>,
    /// All rigid bodies, in insertion order.
    pub bodies: Vec<RigidBody>,
    /// Run configuration.
    pub config: WorldConfig,
    body_overlaps: Vec<(usize, usize)>,
}

impl World {
    /// Creates an empty world.
    pub fn new(config: WorldConfig) -> Self {
        Self {
            particles: Vec::new(),
            bodies: Vec::new(),
            config,
            body_overlaps: Vec::new(),
        }
    }

    /// Adds a particle and returns its index.
    pub fn add_particle(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    /// Adds a rigid body and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Removes a rigid body by index.
    ///
    /// Later indices shift down, matching `Vec::remove`.
    pub fn remove_body(&mut self, index: usize) -> Option<RigidBody> {
        if index < self.bodies.len() {
            Some(self.bodies.remove(index))
        } else {
            None
        }
    }

    /// Rigid-body index pairs whose AABBs overlapped during the latest step.
    ///
    /// Overlap is detected, not resolved.
    pub fn body_overlaps(&self) -> &[(usize, usize)] {
        &self.body_overlaps
    }

    /// Advances the simulation by one fixed timestep.
    pub fn step(&mut self) {
        self.apply_forces();
        self.integrate();
        self.resolve_particle_collisions();
        self.detect_body_overlaps();
        self.enforce_bounds();
    }

    /// Applies gravity to every particle and body.
    ///
    /// Accumulators were reset to zero by the previous integration, so this
    /// is the only standing external force.
    fn apply_forces(&mut self) {
        let gravity = self.config.gravity;

        for particle in &mut self.particles {
            particle.apply_force(gravity * particle.mass());
        }
        for body in &mut self.bodies {
            body.apply_force(gravity * body.mass());
        }
    }

    /// Integrates every particle and body by `dt`.
    fn integrate(&mut self) {
        let dt = self.config.dt;

        for particle in &mut self.particles {
            particle.integrate(dt);
        }
        for body in &mut self.bodies {
            body.integrate(dt);
        }
    }

    /// Particle broad phase plus narrow-phase resolution.
    ///
    /// A fresh grid partitions the swarm; same-cell pairs are confirmed by
    /// the exact distance test and resolved by impulse.
    fn resolve_particle_collisions(&mut self) {
        let mut grid = SpatialHash::new(self.config.cell_size);
        for (index, particle) in self.particles.iter().enumerate() {
            grid.insert(particle.position, index);
        }

        let candidates: Vec<(usize, usize)> = grid
            .cell_pairs()
            .map(|(&i, &j)| if i < j { (i, j) } else { (j, i) })
            .collect();

        let restitution = self.config.restitution;
        for (i, j) in candidates {
            let contact = {
                let (pa, pb) = (&self.particles[i], &self.particles[j]);
                collision::particle_particle(i, j, pa, pb)
            };
            if let Some(contact) = contact {
                let (left, right) = self.particles.split_at_mut(contact.b);
                collision::resolve(&contact, &mut left[contact.a], &mut right[0], restitution);
            }
        }
    }

    /// Rigid-body broad phase: sort-and-sweep along x, confirmed by the
    /// exact AABB test.
    fn detect_body_overlaps(&mut self) {
        self.body_overlaps.clear();
        if self.bodies.len() < 2 {
            return;
        }

        let boxes: Vec<Aabb> = self.bodies.iter().map(|b| b.aabb()).collect();
        for (i, j) in sweep_axis(&boxes, 0) {
            if boxes[i].intersects(&boxes[j]) {
                log::debug!("rigid body overlap: {i} <-> {j}");
                self.body_overlaps.push((i, j));
            }
        }
    }

    /// Clamps every body into the arena, damping the offending velocity
    /// component.
    ///
    /// A hard constraint, not a collision response: it runs last and wins
    /// over any velocity set earlier in the step. All four walls are checked
    /// independently, so a corner hit clamps both axes in the same step.
    fn enforce_bounds(&mut self) {
        let arena = self.config.arena;
        let damp = self.config.wall_damping;

        for particle in &mut self.particles {
            let r = particle.radius();
            if particle.position.x - r < arena.min.x {
                particle.position.x = arena.min.x + r;
                particle.velocity.x = -damp * particle.velocity.x;
            }
            if particle.position.x + r > arena.max.x {
                particle.position.x = arena.max.x - r;
                particle.velocity.x = -damp * particle.velocity.x;
            }
            if particle.position.y - r < arena.min.y {
                particle.position.y = arena.min.y + r;
                particle.velocity.y = -damp * particle.velocity.y;
            }
            if particle.position.y + r > arena.max.y {
                particle.position.y = arena.max.y - r;
                particle.velocity.y = -damp * particle.velocity.y;
            }
        }

        for body in &mut self.bodies {
            let half = body.aabb().half_extents();
            let mut clamped = false;

            if body.position.x - half.x < arena.min.x {
                body.position.x = arena.min.x + half.x;
                body.linear_velocity.x = -damp * body.linear_velocity.x;
                clamped = true;
            }
            if body.position.x + half.x > arena.max.x {
                body.position.x = arena.max.x - half.x;
                body.linear_velocity.x = -damp * body.linear_velocity.x;
                clamped = true;
            }
            if body.position.y - half.y < arena.min.y {
                body.position.y = arena.min.y + half.y;
                body.linear_velocity.y = -damp * body.linear_velocity.y;
                clamped = true;
            }
            if body.position.y + half.y > arena.max.y {
                body.position.y = arena.max.y - half.y;
                body.linear_velocity.y = -damp * body.linear_velocity.y;
                clamped = true;
            }

            if clamped {
                body.update_aabb();
            }
        }
    }
}
