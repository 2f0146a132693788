//! 2D impulse-based physics core.
//!
//! Advances particles and oriented rigid bodies under gravity inside a
//! bounded arena, with broad-phase filtering before every exact test:
//!
//! - [`Particle`] / [`RigidBody`] - kinematic state, semi-implicit Euler
//! - [`Shape`] - circle, rectangle, or convex polygon with derived inertia
//! - [`World`] - the per-run context and the ordered step pipeline
//! - [`Simulation`] - fixed-step driver with an injected [`Renderer`]
//!
//! Particle swarms are filtered through a uniform grid, rigid bodies
//! through sort-and-sweep over their AABBs (overlap is detected, not
//! resolved). Everything is single-threaded: a step runs to completion
//! before the next begins.
//!
//! # Example
//!
//! ```
//! use ricochet_physics::{Particle, World, WorldConfig};
//! use glam::Vec2;
//!
//! let mut world = World::new(WorldConfig::default());
//! world.add_particle(
//!     Particle::new(1.0, 10.0, Vec2::new(600.0, 400.0), Vec2::new(250.0, 0.0)).unwrap(),
//! );
//!
//! for _ in 0..100 {
//!     world.step();
//! }
//!
//! // Boundary constraints keep everything inside the arena.
//! let p = &world.particles[0];
//! assert!(world.config.arena.contains_point(p.position));
//! ```

pub mod body;
pub mod collision;
pub mod error;
pub mod particle;
pub mod render;
pub mod shape;
pub mod sim;
pub mod world;

pub use body::RigidBody;
pub use collision::{particle_particle, resolve, Contact};
pub use error::{PhysicsError, PhysicsResult};
pub use particle::{Particle, ParticleSpawner, SwarmRng};
pub use render::{NullRenderer, Renderer};
pub use shape::{Shape, ShapeKind};
pub use sim::Simulation;
pub use world::{World, WorldConfig};
