use rand::rngs::StdRng;
use rand::Rng;

use crate::elements::Particle;

/// Vertical speed at which a landing turns into a sideways kick
pub const LANDING_SPEED: f32 = 1.5;

/// Falling particles accelerate, resting ones lose horizontal speed
#[inline]
pub fn apply_gravity_or_friction(p: &mut Particle, gravity: f32) {
    if p.is_falling {
        p.y_velocity += gravity;
    } else {
        p.x_velocity *= p.friction;
    }
}

/// -1 (left) or +1 (right), one draw per update
#[inline]
pub fn random_side(rng: &mut StdRng) -> i32 {
    if rng.gen_range(0..2) == 0 { -1 } else { 1 }
}

/// Uniform in `[min, max)`; `min` when the range is empty
#[inline]
pub fn random_between(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// A hard landing converts into a horizontal kick of up to `bounciness`
/// cells per tick, pushed opposite to `side`.
pub fn landing_impact(p: &mut Particle, was_falling: bool, last_y: f32, side: i32, rng: &mut StdRng) {
    if p.is_falling || !was_falling || last_y.abs() < LANDING_SPEED {
        return;
    }
    let kick = p.bounciness * rng.gen::<f32>();
    p.x_velocity -= side as f32 * kick;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Palette;
    use rand::SeedableRng;

    fn sand() -> Particle {
        Palette::builtin().instantiate(0).unwrap()
    }

    #[test]
    fn gravity_only_while_falling() {
        let mut p = sand();
        p.x_velocity = 1.0;
        apply_gravity_or_friction(&mut p, 0.1);
        assert!((p.y_velocity - 0.1).abs() < 1e-6);
        assert_eq!(p.x_velocity, 1.0);

        p.is_falling = false;
        apply_gravity_or_friction(&mut p, 0.1);
        assert!((p.y_velocity - 0.1).abs() < 1e-6);
        assert!((p.x_velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn landing_kick_needs_fast_fall() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = sand();
        p.is_falling = false;

        landing_impact(&mut p, true, 1.2, 1, &mut rng);
        assert_eq!(p.x_velocity, 0.0);

        landing_impact(&mut p, false, 3.0, 1, &mut rng);
        assert_eq!(p.x_velocity, 0.0);

        landing_impact(&mut p, true, -1.6, 1, &mut rng);
        assert!(p.x_velocity <= 0.0 && p.x_velocity >= -p.bounciness);
    }

    #[test]
    fn random_side_is_left_or_right() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..64 {
            let s = random_side(&mut rng);
            assert!(s == -1 || s == 1);
        }
    }

    #[test]
    fn random_between_handles_empty_range() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_between(&mut rng, 0.4, 0.4), 0.4);
        let v = random_between(&mut rng, 0.2, 0.8);
        assert!((0.2..0.8).contains(&v));
    }
}
