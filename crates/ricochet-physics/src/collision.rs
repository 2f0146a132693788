//! Narrow-phase collision tests and impulse response for particle pairs.
//!
//! Broad-phase candidates are confirmed by an exact distance test, then
//! resolved with an instantaneous impulse along the contact normal plus a
//! half-depth positional separation. That is the one resolution policy in
//! the codebase; there is no impulse-only variant.

use glam::Vec2;

use crate::particle::Particle;

/// A confirmed contact between two particles.
#[derive(Clone, Debug)]
pub struct Contact {
    /// Index of the first particle.
    pub a: usize,
    /// Index of the second particle.
    pub b: usize,
    /// Unit normal pointing from the first particle toward the second.
    pub normal: Vec2,
    /// Penetration depth (non-negative).
    pub depth: f32,
}

/// Tests whether two particles are actually touching.
///
/// Returns `None` when the center distance exceeds the radius sum. For
/// coincident centers the normal is undefined; an arbitrary fixed normal is
/// substituted rather than dividing by zero.
pub fn particle_particle(a: usize, b: usize, pa: &Particle, pb: &Particle) -> Option<Contact> {
    let d = pb.position - pa.position;
    let dist_sq = d.length_squared();
    let radius_sum = pa.radius() + pb.radius();

    if dist_sq > radius_sum * radius_sum {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > f32::EPSILON { d / dist } else { Vec2::Y };

    Some(Contact {
        a,
        b,
        normal,
        depth: radius_sum - dist,
    })
}

/// Resolves a contact between two particles.
///
/// Skips pairs already separating along the normal (no impulse, no energy
/// injection). Otherwise applies the restitution impulse
/// `j = -(1 + e) * vn / (1/m1 + 1/m2)` and displaces both particles apart
/// by half the penetration depth.
pub fn resolve(contact: &Contact, first: &mut Particle, second: &mut Particle, restitution: f32) {
    let relative = second.velocity - first.velocity;
    let vn = relative.dot(contact.normal);

    // Already separating.
    if vn > 0.0 {
        return;
    }

    let inv_mass_sum = 1.0 / first.mass() + 1.0 / second.mass();
    let j = -(1.0 + restitution) * vn / inv_mass_sum;
    let impulse = contact.normal * j;

    first.velocity -= impulse / first.mass();
    second.velocity += impulse / second.mass();

    let separation = contact.normal * (contact.depth * 0.5);
    first.position -= separation;
    second.position += separation;
}
