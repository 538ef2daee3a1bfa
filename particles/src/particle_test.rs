#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const EPSILON: f64 = 1e-9;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

fn at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, vx, vy, radius: 2.0, wander_angle: 0.0 }
}

// =============================================================
// Spawn
// =============================================================

#[test]
fn spawn_lands_inside_arena() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng, 320.0, 240.0, 1.5);
        assert!((0.0..=320.0).contains(&p.x));
        assert!((0.0..=240.0).contains(&p.y));
    }
}

#[test]
fn spawn_radius_in_range() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng, 100.0, 100.0, 1.0);
        assert!(p.radius >= 1.0 && p.radius < 3.0, "radius {}", p.radius);
    }
}

#[test]
fn spawn_velocity_is_small() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng, 100.0, 100.0, 2.0);
        assert!(p.vx.abs() <= 1.0);
        assert!(p.vy.abs() <= 1.0);
    }
}

#[test]
fn spawn_in_empty_arena_sits_at_origin() {
    let mut rng = rng();
    let p = Particle::spawn(&mut rng, 0.0, 0.0, 1.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
}

// =============================================================
// Wander
// =============================================================

#[test]
fn wander_with_zero_strength_is_inert() {
    let mut rng = rng();
    let mut p = at(10.0, 10.0, 0.3, -0.2);
    p.wander_angle = 1.0;
    p.wander(&mut rng, 0.0);
    assert_eq!(p.vx, 0.3);
    assert_eq!(p.vy, -0.2);
    assert_eq!(p.wander_angle, 1.0);
}

#[test]
fn wander_pushes_with_given_magnitude() {
    let mut rng = rng();
    let mut p = at(10.0, 10.0, 0.0, 0.0);
    p.wander(&mut rng, 0.1);
    assert!((p.speed() - 0.1).abs() < EPSILON);
}

#[test]
fn wander_heading_change_is_bounded() {
    let mut rng = rng();
    let mut p = at(10.0, 10.0, 0.0, 0.0);
    for _ in 0..100 {
        let before = p.wander_angle;
        p.wander(&mut rng, 0.2);
        assert!((p.wander_angle - before).abs() <= 0.5 * 0.2 * 0.3 + EPSILON);
    }
}

// =============================================================
// Repulsion
// =============================================================

#[test]
fn repel_pushes_away_from_pointer() {
    let mut p = at(100.0, 100.0, 0.0, 0.0);
    p.repel(Point::new(110.0, 100.0), 50.0);
    assert!(p.vx < 0.0);
    assert!(p.vy.abs() < EPSILON);
}

#[test]
fn repel_force_falls_off_linearly() {
    let mut p = at(100.0, 100.0, 0.0, 0.0);
    p.repel(Point::new(100.0, 125.0), 50.0);
    // Half the radius away: force 0.5, scaled by 0.5.
    assert!((p.vy + 0.25).abs() < EPSILON);
    assert!(p.vx.abs() < EPSILON);
}

#[test]
fn repel_outside_radius_is_inert() {
    let mut p = at(0.0, 0.0, 0.4, 0.4);
    p.repel(Point::new(60.0, 0.0), 50.0);
    assert_eq!(p.vx, 0.4);
    assert_eq!(p.vy, 0.4);
}

#[test]
fn repel_at_exact_radius_is_inert() {
    let mut p = at(0.0, 0.0, 0.0, 0.0);
    p.repel(Point::new(50.0, 0.0), 50.0);
    assert_eq!(p.vx, 0.0);
}

#[test]
fn repel_with_zero_radius_is_inert() {
    let mut p = at(5.0, 5.0, 0.0, 0.0);
    p.repel(Point::new(5.0, 5.0), 0.0);
    assert_eq!(p.vx, 0.0);
    assert_eq!(p.vy, 0.0);
}

// =============================================================
// Speed clamp
// =============================================================

#[test]
fn clamp_rescales_fast_particle_to_cap() {
    let mut p = at(0.0, 0.0, 30.0, 40.0);
    p.clamp_speed(3.0);
    assert!((p.speed() - 3.0).abs() < EPSILON);
    assert!((p.vx - 1.8).abs() < EPSILON);
    assert!((p.vy - 2.4).abs() < EPSILON);
}

#[test]
fn clamp_leaves_slow_particle_alone() {
    let mut p = at(0.0, 0.0, 0.5, -0.5);
    p.clamp_speed(3.0);
    assert_eq!(p.vx, 0.5);
    assert_eq!(p.vy, -0.5);
}

#[test]
fn clamp_never_exceeds_cap_for_any_direction() {
    let mut rng = rng();
    for _ in 0..1000 {
        let vx = (rng.random::<f64>() - 0.5) * 200.0;
        let vy = (rng.random::<f64>() - 0.5) * 200.0;
        let mut p = at(0.0, 0.0, vx, vy);
        p.clamp_speed(2.4);
        assert!(p.speed() <= 2.4 + EPSILON, "speed {}", p.speed());
    }
}

// =============================================================
// Integrate / damp
// =============================================================

#[test]
fn integrate_moves_by_velocity() {
    let mut p = at(10.0, 20.0, 1.5, -2.0);
    p.integrate();
    assert_eq!(p.x, 11.5);
    assert_eq!(p.y, 18.0);
}

#[test]
fn damp_scales_velocity() {
    let mut p = at(0.0, 0.0, 1.0, -2.0);
    p.damp();
    assert!((p.vx - 0.98).abs() < EPSILON);
    assert!((p.vy + 1.96).abs() < EPSILON);
}

// =============================================================
// Bounce
// =============================================================

#[test]
fn bounce_off_left_edge() {
    let mut rng = rng();
    let mut p = at(-3.0, 50.0, -1.0, 0.2);
    assert!(p.bounce(&mut rng, 100.0, 100.0));
    assert_eq!(p.x, 0.0);
    assert!((p.vx - 0.9).abs() < EPSILON);
    assert_eq!(p.vy, 0.2);
}

#[test]
fn bounce_off_bottom_edge() {
    let mut rng = rng();
    let mut p = at(50.0, 104.0, 0.0, 2.0);
    assert!(p.bounce(&mut rng, 100.0, 100.0));
    assert_eq!(p.y, 100.0);
    assert!((p.vy + 1.8).abs() < EPSILON);
}

#[test]
fn bounce_off_corner_flips_both_axes() {
    let mut rng = rng();
    let mut p = at(120.0, -5.0, 1.0, -1.0);
    assert!(p.bounce(&mut rng, 100.0, 100.0));
    assert_eq!(p.x, 100.0);
    assert_eq!(p.y, 0.0);
    assert!(p.vx < 0.0);
    assert!(p.vy > 0.0);
}

#[test]
fn bounce_randomizes_heading() {
    let mut rng = rng();
    let mut p = at(-1.0, 50.0, -1.0, 0.0);
    p.wander_angle = 100.0;
    p.bounce(&mut rng, 100.0, 100.0);
    assert!((0.0..TAU).contains(&p.wander_angle));
}

#[test]
fn no_bounce_inside_arena() {
    let mut rng = rng();
    let mut p = at(50.0, 50.0, 1.0, 1.0);
    p.wander_angle = 0.7;
    assert!(!p.bounce(&mut rng, 100.0, 100.0));
    assert_eq!(p, Particle { x: 50.0, y: 50.0, vx: 1.0, vy: 1.0, radius: 2.0, wander_angle: 0.7 });
}

#[test]
fn edge_positions_are_inside() {
    let mut rng = rng();
    let mut p = at(100.0, 0.0, 1.0, -1.0);
    assert!(!p.bounce(&mut rng, 100.0, 100.0));
}
