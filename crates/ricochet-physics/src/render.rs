//! The rendering capability consumed by the simulation driver.
//!
//! The core never references a concrete backend; it talks to whatever
//! implements [`Renderer`] and is injected into the driver. Snapshots are
//! read-only and nothing the renderer does can influence physics state.

use crate::body::RigidBody;
use crate::particle::Particle;

/// A render target the driver draws into once per step.
pub trait Renderer {
    /// Presents the current state. Positions, orientations, and shape
    /// descriptors are read through the slices; implementations must not
    /// hold on to them.
    fn render(&mut self, particles: &[Particle], bodies: &[RigidBody]);

    /// Releases the target. Called exactly once at teardown.
    fn close(&mut self);
}

/// A renderer that draws nothing, for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _particles: &[Particle], _bodies: &[RigidBody]) {}

    fn close(&mut self) {}
}
