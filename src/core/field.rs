use super::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// One wireframe cube in the background swarm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Parameters controlling the swarm. `Default` matches the shipped look.
///
/// - `count`: number of particles created at startup
/// - `spawn_extent`: edge length of the spawn cube centered on the origin
/// - `velocity_spread`: per-axis initial velocity range, centered on zero
/// - `boundary`: an axis whose |position| exceeds this has its velocity flipped
/// - `pointer_scale`: multiplier from normalized pointer coords to world x/y
/// - `repel_radius`: x/y distance under which the pointer pushes a particle
/// - `repel_strength`: length of the push applied per step
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub spawn_extent: f32,
    pub velocity_spread: f32,
    pub boundary: f32,
    pub pointer_scale: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spawn_extent: SPAWN_EXTENT,
            velocity_spread: VELOCITY_SPREAD,
            boundary: FIELD_BOUNDARY,
            pointer_scale: POINTER_WORLD_SCALE,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
        }
    }
}

/// Particle swarm advanced once per rendered frame.
///
/// Each step moves every particle by its velocity, reflects velocity on any
/// axis that left the boundary, then pushes particles near the pointer away
/// from it in the x/y plane.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
}

impl ParticleField {
    /// Scatter `params.count` particles using a seeded RNG.
    pub fn new(params: FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = params.spawn_extent * 0.5;
        let vhalf = params.velocity_spread * 0.5;
        let particles = (0..params.count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                velocity: Vec3::new(
                    rng.gen_range(-vhalf..vhalf),
                    rng.gen_range(-vhalf..vhalf),
                    rng.gen_range(-vhalf..vhalf),
                ),
            })
            .collect();
        Self { particles, params }
    }

    /// Build a field from explicit particles (used for scripted scenes).
    pub fn from_particles(particles: Vec<Particle>, params: FieldParams) -> Self {
        Self { particles, params }
    }

    /// World-space x/y of a normalized pointer coordinate.
    #[inline]
    pub fn pointer_world(&self, pointer_ndc: Vec2) -> Vec2 {
        pointer_ndc * self.params.pointer_scale
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer_ndc: Vec2) {
        let pointer = self.pointer_world(pointer_ndc);
        let boundary = self.params.boundary;
        let radius = self.params.repel_radius;
        let strength = self.params.repel_strength;
        for p in &mut self.particles {
            p.position += p.velocity;
            // reflection tests the drifted position; repulsion lands after it
            reflect_at_boundary(p, boundary);
            p.position += repel_offset(p.position, pointer, radius, strength);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }
}

#[inline]
fn reflect_at_boundary(p: &mut Particle, boundary: f32) {
    if p.position.x.abs() > boundary {
        p.velocity.x = -p.velocity.x;
    }
    if p.position.y.abs() > boundary {
        p.velocity.y = -p.velocity.y;
    }
    if p.position.z.abs() > boundary {
        p.velocity.z = -p.velocity.z;
    }
}

/// Push applied to a particle at `position` by a pointer at world `pointer`.
///
/// Zero outside `radius`, and zero when the particle sits exactly under the
/// pointer (no direction to push in).
#[inline]
pub fn repel_offset(position: Vec3, pointer: Vec2, radius: f32, strength: f32) -> Vec3 {
    let away = Vec2::new(position.x, position.y) - pointer;
    if away.length() >= radius {
        return Vec3::ZERO;
    }
    let dir = away.normalize_or_zero() * strength;
    Vec3::new(dir.x, dir.y, 0.0)
}
