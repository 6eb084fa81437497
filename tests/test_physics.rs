use alien_platformer::config::GRAVITY;
use alien_platformer::entities::Rect;
use alien_platformer::physics::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tile(x: f32, y: f32) -> Rect {
    Rect::new(x, y, 64.0, 64.0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── integrate ─────────────────────────────────────────────────────────────────

#[test]
fn integrate_moves_along_one_axis_only() {
    let r = Rect::new(10.0, 20.0, 5.0, 5.0);
    assert_eq!(integrate(r, 3.0, Axis::X), Rect::new(13.0, 20.0, 5.0, 5.0));
    assert_eq!(integrate(r, -4.0, Axis::Y), Rect::new(10.0, 16.0, 5.0, 5.0));
}

// ── collide: each direction ───────────────────────────────────────────────────

#[test]
fn positive_x_snaps_right_edge_to_solid_left() {
    let solid = tile(200.0, 0.0);
    let r = Rect::new(170.0, 10.0, 40.0, 40.0);
    let res = collide(r, 5.0, Axis::X, &[solid]);
    assert_eq!(res.rect.right(), 200.0);
    assert_eq!(res.velocity, 0.0);
    assert!(res.collided);
    assert!(!res.on_ground);
}

#[test]
fn negative_x_snaps_left_edge_to_solid_right() {
    let solid = tile(200.0, 0.0);
    let r = Rect::new(250.0, 10.0, 40.0, 40.0);
    let res = collide(r, -5.0, Axis::X, &[solid]);
    assert_eq!(res.rect.left(), 264.0);
    assert_eq!(res.velocity, 0.0);
    assert!(res.collided);
}

#[test]
fn falling_onto_solid_lands_and_grounds() {
    let floor = tile(0.0, 320.0);
    let r = Rect::new(10.0, 280.0, 40.0, 50.0);
    let res = collide(r, 6.4, Axis::Y, &[floor]);
    assert_eq!(res.rect.bottom(), 320.0);
    assert_eq!(res.velocity, 0.0);
    assert!(res.on_ground);
}

#[test]
fn rising_into_ceiling_stops_without_grounding() {
    let ceiling = tile(0.0, 0.0);
    let r = Rect::new(10.0, 60.0, 40.0, 50.0);
    let res = collide(r, -14.0, Axis::Y, &[ceiling]);
    assert_eq!(res.rect.top(), 64.0);
    assert_eq!(res.velocity, 0.0);
    assert!(!res.on_ground);
}

#[test]
fn no_overlap_leaves_everything_alone() {
    let r = Rect::new(0.0, 0.0, 40.0, 50.0);
    let res = collide(r, 5.0, Axis::X, &[tile(500.0, 500.0)]);
    assert_eq!(res.rect, r);
    assert_eq!(res.velocity, 5.0);
    assert!(!res.collided);
}

#[test]
fn zero_velocity_corrects_nothing_even_when_overlapping() {
    let solid = tile(0.0, 0.0);
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    let res = collide(r, 0.0, Axis::Y, &[solid]);
    assert_eq!(res.rect, r);
    assert!(!res.collided);
}

#[test]
fn last_overlapping_solid_wins() {
    // After snapping to the first solid the rect still overlaps the second,
    // which then pulls it further back.
    let first = tile(100.0, 0.0);
    let second = tile(95.0, 0.0);
    let r = Rect::new(70.0, 0.0, 40.0, 10.0);
    let res = collide(r, 5.0, Axis::X, &[first, second]);
    assert_eq!(res.rect.right(), 95.0);
}

// ── resolve ───────────────────────────────────────────────────────────────────

#[test]
fn resolve_integrates_then_collides() {
    let solid = tile(200.0, 0.0);
    let r = Rect::new(159.0, 0.0, 40.0, 50.0); // one pixel short of the tile
    let res = resolve(r, 5.0, Axis::X, &[solid]);
    assert_eq!(res.rect.right(), 200.0);
    assert_eq!(res.velocity, 0.0);
}

#[test]
fn resolve_with_zero_velocity_is_idempotent() {
    let solids = [tile(200.0, 0.0), tile(0.0, 320.0)];
    let r = Rect::new(100.0, 100.0, 40.0, 50.0);
    let once = resolve(r, 0.0, Axis::X, &solids);
    let twice = resolve(once.rect, 0.0, Axis::X, &solids);
    assert_eq!(once.rect, r);
    assert_eq!(twice.rect, r);
    let y_once = resolve(r, 0.0, Axis::Y, &solids);
    assert_eq!(y_once.rect, r);
}

// ── screen clamp, gravity, fall-out ───────────────────────────────────────────

#[test]
fn clamp_keeps_rect_on_screen() {
    let w = 825.0;
    assert_eq!(clamp_horizontal(Rect::new(-5.0, 0.0, 40.0, 50.0), w).x, 0.0);
    assert_eq!(clamp_horizontal(Rect::new(800.0, 0.0, 40.0, 50.0), w).right(), w);
    let inside = Rect::new(300.0, 9.0, 40.0, 50.0);
    assert_eq!(clamp_horizontal(inside, w), inside);
}

#[test]
fn gravity_is_uncapped() {
    let mut vy = 0.0;
    for _ in 0..1000 {
        vy = apply_gravity(vy);
    }
    assert!(vy > 700.0);
    assert_eq!(apply_gravity(0.0), GRAVITY);
}

#[test]
fn fell_out_needs_top_strictly_below_bound() {
    assert!(!fell_out(&Rect::new(0.0, 512.0, 40.0, 50.0), 512.0));
    assert!(fell_out(&Rect::new(0.0, 512.5, 40.0, 50.0), 512.0));
}

// ── randomized properties ─────────────────────────────────────────────────────

#[test]
fn horizontal_penetration_always_resolves_flush() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let sx = rng.gen_range(0..700) as f32;
        let sy = rng.gen_range(0..400) as f32;
        let solid = tile(sx, sy);

        let w = rng.gen_range(2..60) as f32;
        let h = rng.gen_range(2..60) as f32;
        let y = sy + rng.gen_range(0..(64 - h as i32 + 1)) as f32;
        let depth = rng.gen_range(1..w as i32) as f32;
        let v = rng.gen_range(1..20) as f32;

        // Entering from the left
        let r = Rect::new(sx - w + depth, y, w, h);
        let res = collide(r, v, Axis::X, &[solid]);
        assert_eq!(res.rect.right(), solid.left());
        assert_eq!(res.rect.y, y);
        assert_eq!(res.velocity, 0.0);

        // Entering from the right
        let r = Rect::new(solid.right() - depth, y, w, h);
        let res = collide(r, -v, Axis::X, &[solid]);
        assert_eq!(res.rect.left(), solid.right());
        assert_eq!(res.velocity, 0.0);
    }
}

#[test]
fn resolved_rect_never_overlaps_a_single_solid() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let solid = tile(rng.gen_range(0..700) as f32, rng.gen_range(0..400) as f32);
        let r = Rect::new(
            rng.gen_range(-50..800) as f32,
            rng.gen_range(-50..500) as f32,
            rng.gen_range(2..60) as f32,
            rng.gen_range(2..60) as f32,
        );
        let v = rng.gen_range(1..30) as f32 * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let axis = if rng.gen_bool(0.5) { Axis::X } else { Axis::Y };

        let res = resolve(r, v, axis, &[solid]);
        assert!(!res.rect.intersects(&solid), "{r:?} v={v} {axis:?} -> {:?}", res.rect);
        assert_eq!(res.collided, res.velocity == 0.0);
    }
}
