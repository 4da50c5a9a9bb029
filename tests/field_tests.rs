// Host-side tests for the particle field update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use constants::*;
use field::*;
use glam::{Vec2, Vec3};

fn single(position: Vec3, velocity: Vec3) -> ParticleField {
    ParticleField::from_particles(vec![Particle { position, velocity }], FieldParams::default())
}

// Pointer at the top-right corner maps to world (20, 20), far from most test particles.
const FAR_POINTER: Vec2 = Vec2::new(1.0, 1.0);

#[test]
fn new_field_spawns_inside_bounds() {
    let field = ParticleField::new(FieldParams::default(), 7);
    assert_eq!(field.len(), PARTICLE_COUNT);
    let half = SPAWN_EXTENT / 2.0;
    let vhalf = VELOCITY_SPREAD / 2.0;
    for p in &field.particles {
        for c in p.position.to_array() {
            assert!((-half..half).contains(&c), "position {c} out of spawn cube");
        }
        for v in p.velocity.to_array() {
            assert!((-vhalf..vhalf).contains(&v), "velocity {v} out of range");
        }
    }
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::new(FieldParams::default(), 42);
    let b = ParticleField::new(FieldParams::default(), 42);
    assert_eq!(a.particles, b.particles);
    let c = ParticleField::new(FieldParams::default(), 43);
    assert_ne!(a.particles, c.particles);
}

#[test]
fn step_advances_by_velocity() {
    let mut field = single(Vec3::new(1.0, -15.0, 3.0), Vec3::new(0.004, -0.002, 0.001));
    field.step(FAR_POINTER);
    let p = field.particles[0];
    assert!((p.position - Vec3::new(1.004, -15.002, 3.001)).length() < 1e-5);
    assert_eq!(p.velocity, Vec3::new(0.004, -0.002, 0.001));
}

#[test]
fn velocity_flips_only_on_axes_past_boundary() {
    // x crosses +20, z crosses -20, y stays inside
    let mut field = single(
        Vec3::new(19.995, -15.0, -19.995),
        Vec3::new(0.01, 0.004, -0.01),
    );
    field.step(FAR_POINTER);
    let p = field.particles[0];
    assert!(p.position.x > FIELD_BOUNDARY);
    assert!(p.position.z < -FIELD_BOUNDARY);
    assert_eq!(p.velocity.x, -0.01);
    assert_eq!(p.velocity.y, 0.004);
    assert_eq!(p.velocity.z, 0.01);
}

#[test]
fn boundary_flip_matches_position_magnitude_for_any_start() {
    // Sweep starting x across the boundary with the pointer out of range; the flip
    // must happen iff |x| > 20 after the drift
    let mut x = 19.90_f32;
    while x < 20.10 {
        for v in [0.004_f32, -0.004] {
            let mut field = single(Vec3::new(x, -15.0, 0.0), Vec3::new(v, 0.0, 0.0));
            field.step(FAR_POINTER);
            let p = field.particles[0];
            let flipped = p.velocity.x.signum() != v.signum();
            assert_eq!(
                flipped,
                p.position.x.abs() > FIELD_BOUNDARY,
                "x0={x} v={v} -> x={}",
                p.position.x
            );
        }
        x += 0.003;
    }
}

#[test]
fn reflection_is_decided_before_repulsion() {
    // Pointer sits at world (19, -15), just inside the boundary and left of the particle
    let pointer = Vec2::new(19.0 / POINTER_WORLD_SCALE, -15.0 / POINTER_WORLD_SCALE);
    let mut field = single(Vec3::new(19.99, -15.0, 0.0), Vec3::new(0.004, 0.0, 0.0));
    field.step(pointer);
    let p = field.particles[0];
    // drifted to 19.994 (inside, no flip), then pushed out by the pointer
    assert!((p.position.x - (19.994 + REPEL_STRENGTH)).abs() < 1e-4, "x={}", p.position.x);
    assert!(p.position.x > FIELD_BOUNDARY);
    assert_eq!(p.velocity.x, 0.004);

    // the next drift starts outside and is reflected
    field.step(FAR_POINTER);
    assert_eq!(field.particles[0].velocity.x, -0.004);
}

#[test]
fn particle_returns_after_bounce() {
    let mut field = single(Vec3::new(19.999, -15.0, 0.0), Vec3::new(0.005, 0.0, 0.0));
    field.step(FAR_POINTER);
    assert!(field.particles[0].velocity.x < 0.0);
    for _ in 0..10 {
        field.step(FAR_POINTER);
    }
    assert!(field.particles[0].position.x < FIELD_BOUNDARY);
}

#[test]
fn pointer_pushes_nearby_particle_away_by_fixed_amount() {
    let start = Vec3::new(3.0, 4.0, 5.0);
    let mut field = single(start, Vec3::ZERO);
    field.step(Vec2::ZERO);
    let p = field.particles[0].position;
    let moved = p - start;
    assert!((moved.length() - REPEL_STRENGTH).abs() < 1e-5);
    // away from the pointer at the origin, along (0.6, 0.8)
    assert!((moved.x - 0.18).abs() < 1e-5);
    assert!((moved.y - 0.24).abs() < 1e-5);
    assert_eq!(moved.z, 0.0);
}

#[test]
fn pointer_is_scaled_into_world_space() {
    // ndc (0.5, -0.25) -> world (10, -5); particle 2 units to its right
    let mut field = single(Vec3::new(12.0, -5.0, 0.0), Vec3::ZERO);
    assert_eq!(field.pointer_world(Vec2::new(0.5, -0.25)), Vec2::new(10.0, -5.0));
    field.step(Vec2::new(0.5, -0.25));
    let p = field.particles[0].position;
    assert!((p - Vec3::new(12.3, -5.0, 0.0)).length() < 1e-5);
}

#[test]
fn particles_outside_radius_are_not_pushed() {
    let mut field = single(Vec3::new(8.5, 0.0, 0.0), Vec3::ZERO);
    field.step(Vec2::ZERO);
    assert_eq!(field.particles[0].position, Vec3::new(8.5, 0.0, 0.0));

    // the radius is exclusive
    let mut edge = single(Vec3::new(REPEL_RADIUS, 0.0, 0.0), Vec3::ZERO);
    edge.step(Vec2::ZERO);
    assert_eq!(edge.particles[0].position, Vec3::new(REPEL_RADIUS, 0.0, 0.0));
}

#[test]
fn repulsion_ignores_depth() {
    // far away in z but on top of the pointer in x/y: still pushed
    let mut field = single(Vec3::new(1.0, 0.0, -18.0), Vec3::ZERO);
    field.step(Vec2::ZERO);
    let p = field.particles[0].position;
    assert!((p - Vec3::new(1.3, 0.0, -18.0)).length() < 1e-5);
}

#[test]
fn particle_under_pointer_is_left_in_place() {
    let mut field = single(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
    field.step(Vec2::ZERO);
    let p = field.particles[0].position;
    assert!(p.is_finite());
    assert_eq!(p, Vec3::new(0.0, 0.0, 2.0));
}

#[test]
fn every_particle_sees_the_same_pointer() {
    // pointer world (2, 0); identical particles must move identically
    let particles = vec![
        Particle {
            position: Vec3::new(4.0, 0.0, 0.0),
            velocity: Vec3::ZERO,
        };
        5
    ];
    let mut field = ParticleField::from_particles(particles, FieldParams::default());
    field.step(Vec2::new(0.1, 0.0));
    for p in &field.particles {
        assert!((p.position - Vec3::new(4.3, 0.0, 0.0)).length() < 1e-5);
    }
}

#[test]
fn repel_offset_direct() {
    let off = repel_offset(Vec3::new(0.0, -1.0, 9.0), Vec2::ZERO, 8.0, 0.3);
    assert!((off - Vec3::new(0.0, -0.3, 0.0)).length() < 1e-6);
    assert_eq!(repel_offset(Vec3::new(0.0, -9.0, 0.0), Vec2::ZERO, 8.0, 0.3), Vec3::ZERO);
}

#[test]
fn positions_iterates_in_order() {
    let mut field = ParticleField::new(FieldParams { count: 4, ..FieldParams::default() }, 1);
    field.step(FAR_POINTER);
    let collected: Vec<Vec3> = field.positions().collect();
    assert_eq!(collected.len(), 4);
    for (a, b) in collected.iter().zip(field.particles.iter()) {
        assert_eq!(*a, b.position);
    }
}

#[test]
fn empty_field_steps_without_effect() {
    let mut field = ParticleField::new(FieldParams { count: 0, ..FieldParams::default() }, 1);
    assert!(field.is_empty());
    field.step(Vec2::ZERO);
    assert_eq!(field.positions().count(), 0);
}
