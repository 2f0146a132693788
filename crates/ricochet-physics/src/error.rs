//! Error types for body and shape construction.

/// Errors that can occur while constructing shapes and bodies.
///
/// All of these are fatal configuration errors: they surface before the
/// first simulation step and are never produced during stepping.
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    /// Mass must be strictly positive.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    /// Radius must be strictly positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// Rectangle dimensions must be strictly positive.
    #[error("rectangle size must be positive, got {width}x{height}")]
    NonPositiveSize {
        /// Offending width.
        width: f32,
        /// Offending height.
        height: f32,
    },

    /// Polygon vertices produced a non-positive rotational inertia, which
    /// happens for a degenerate or clockwise vertex loop.
    #[error("degenerate polygon: computed inertia {inertia} (vertices must be counter-clockwise and non-degenerate)")]
    DegeneratePolygon {
        /// The inertia the vertex loop evaluated to.
        inertia: f32,
    },
}

/// Result type for physics construction.
pub type PhysicsResult<T> = Result<T, PhysicsError>;
