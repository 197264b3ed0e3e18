use crate::domain::{CargoBox, PhysicsConfig};
use crate::geometry::Vec2;

/// Integrate one free box and clamp it against floor and walls.
pub(super) fn integrate_box(b: &mut CargoBox, physics: &PhysicsConfig, floor_y: f32, world_width: f32) {
    b.vy += physics.gravity;
    b.x += b.vx;
    b.y += b.vy;

    let half = b.half();

    if b.y + half > floor_y {
        b.y = floor_y - half;
        b.vy = -b.vy * physics.bounce;
        b.vx *= physics.friction;
        if b.vy.abs() < physics.rest_threshold {
            b.vy = 0.0;
        }
    }

    if b.x - half < 0.0 {
        b.x = half;
        b.vx = -b.vx * physics.bounce;
    }
    if b.x + half > world_width {
        b.x = world_width - half;
        b.vx = -b.vx * physics.bounce;
    }
}

/// Pin a held box under the claw pivot.
#[inline]
pub(super) fn carry_box(b: &mut CargoBox, end: Vec2, carry_offset: f32) {
    let at = end + Vec2::new(0.0, carry_offset);
    b.x = at.x;
    b.y = at.y;
    b.vx = 0.0;
    b.vy = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 307.0;
    const WIDTH: f32 = 400.0;

    #[test]
    fn box_on_floor_stays_put() {
        let physics = PhysicsConfig::default();
        let mut b = CargoBox::new(1, 80.0, 294.0, 26.0, "#fff");
        for _ in 0..50 {
            integrate_box(&mut b, &physics, FLOOR, WIDTH);
        }
        assert_eq!(b.y, 294.0);
        assert_eq!(b.vy, 0.0);
    }

    #[test]
    fn bounce_speeds_strictly_decrease_then_rest() {
        let physics = PhysicsConfig::default();
        let mut b = CargoBox::new(1, 200.0, 40.0, 26.0, "#fff");

        let mut bounces = Vec::new();
        for _ in 0..2000 {
            let falling = b.vy;
            integrate_box(&mut b, &physics, FLOOR, WIDTH);
            assert!(b.y + b.half() <= FLOOR + 1e-3);
            if b.y + b.half() == FLOOR && falling > 0.0 {
                bounces.push(b.vy.abs());
            }
        }

        assert!(bounces.len() >= 2, "{bounces:?}");
        let moving: Vec<f32> = bounces.iter().copied().take_while(|v| *v > 0.0).collect();
        for w in moving.windows(2) {
            assert!(w[1] < w[0], "{bounces:?}");
        }
        assert_eq!(b.vy, 0.0);
        assert_eq!(b.y, FLOOR - 13.0);
    }

    #[test]
    fn walls_reflect_and_damp() {
        let physics = PhysicsConfig::default();
        let mut b = CargoBox::new(1, 20.0, 294.0, 26.0, "#fff");
        b.vx = -10.0;
        integrate_box(&mut b, &physics, FLOOR, WIDTH);
        assert_eq!(b.x, 13.0);
        assert!(b.vx > 0.0 && b.vx <= 3.0);

        let mut b = CargoBox::new(2, 380.0, 294.0, 26.0, "#fff");
        b.vx = 10.0;
        integrate_box(&mut b, &physics, FLOOR, WIDTH);
        assert_eq!(b.x, WIDTH - 13.0);
        assert!(b.vx < 0.0);
    }

    #[test]
    fn carried_box_tracks_claw() {
        let mut b = CargoBox::new(1, 0.0, 0.0, 26.0, "#fff");
        b.vx = 3.0;
        b.vy = -2.0;
        carry_box(&mut b, Vec2::new(150.0, 120.0), 18.0);
        assert_eq!((b.x, b.y, b.vx, b.vy), (150.0, 138.0, 0.0, 0.0));
    }
}
