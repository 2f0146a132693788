//! Fixed-step simulation driver.
//!
//! Owns a [`World`] and an injected [`Renderer`], runs a configured number
//! of timesteps, and guarantees the render target is released exactly once
//! at teardown, even when the run ends early.

use crate::render::Renderer;
use crate::world::World;

/// Drives a world through a fixed number of timesteps.
pub struct Simulation {
    world: World,
    renderer: Box<dyn Renderer>,
    render_enabled: bool,
    closed: bool,
}

impl Simulation {
    /// Creates a driver around a world and an injected render target.
    ///
    /// With `render_enabled` false the renderer is never drawn into, only
    /// closed at teardown.
    pub fn new(world: World, renderer: Box<dyn Renderer>, render_enabled: bool) -> Self {
        Self {
            world,
            renderer,
            render_enabled,
            closed: false,
        }
    }

    /// Returns the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the world mutably, for setup between runs.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Runs `total_steps` fixed timesteps.
    ///
    /// Each step advances the world once and, when enabled, renders once.
    /// Rendering is never skipped or batched.
    pub fn run(&mut self, total_steps: u32) {
        log::debug!(
            "run: {} steps, {} particles, {} bodies",
            total_steps,
            self.world.particles.len(),
            self.world.bodies.len()
        );

        for _ in 0..total_steps {
            self.world.step();
            if self.render_enabled {
                self.renderer
                    .render(&self.world.particles, &self.world.bodies);
            }
        }
    }

    /// Tears the simulation down, releasing the render target.
    ///
    /// Dropping the simulation has the same effect; this form just makes
    /// the release point explicit.
    pub fn finish(mut self) {
        self.close_renderer();
    }

    fn close_renderer(&mut self) {
        if !self.closed {
            self.renderer.close();
            self.closed = true;
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.close_renderer();
    }
}
