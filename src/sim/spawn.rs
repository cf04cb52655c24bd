//! Obstacle spawning
//!
//! The size draw is the only randomness in the game. It is kept apart from
//! placement so placement stays a pure function of its inputs.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::{Tuning, Viewport};

/// Draw an obstacle side length, uniform in `[size_min, size_min + size_range)`
pub fn draw_size<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    let side = tuning.obstacle_size_min + rng.random::<f32>() * tuning.obstacle_size_range;
    // f32 rounding can land exactly on the open upper bound
    if tuning.obstacle_size_range > 0.0 {
        side.min(next_down(tuning.obstacle_size_min + tuning.obstacle_size_range))
    } else {
        side
    }
}

/// Place a square obstacle just past the right edge, flush on the ground
pub fn place(id: u32, side: f32, tuning: &Tuning, viewport: Viewport) -> Obstacle {
    Obstacle::resting(
        id,
        viewport.width + tuning.spawn_offset,
        tuning.ground_y(viewport),
        side,
    )
}

/// Largest f32 strictly below a positive finite `x`
fn next_down(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sizes_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let side = draw_size(&mut rng, &tuning);
            assert!(side >= tuning.obstacle_size_min);
            assert!(side < tuning.obstacle_size_min + tuning.obstacle_size_range);
        }
    }

    #[test]
    fn test_same_seed_same_sizes() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(draw_size(&mut a, &tuning), draw_size(&mut b, &tuning));
        }
    }

    #[test]
    fn test_zero_range_is_fixed_size() {
        let tuning = Tuning {
            obstacle_size_range: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(draw_size(&mut rng, &tuning), tuning.obstacle_size_min);
    }

    #[test]
    fn test_place_rests_on_ground() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(800.0, 600.0);
        let ob = place(9, 40.0, &tuning, viewport);
        assert_eq!(ob.id, 9);
        assert_eq!(ob.pos.x, 850.0);
        assert_eq!(ob.pos.y + ob.size.y, 450.0);
        assert_eq!(ob.size.x, ob.size.y);
        assert!(!ob.passed);
    }
}
