//! Variable timestep simulation tick
//!
//! Core game loop step. Ordering matters: difficulty and score first, then
//! spawning and scrolling, then the bike, and the collision check last so it
//! sees every position produced in the same step.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::first_hit;
use super::spawn;
use super::state::{GamePhase, GameState};

/// Player intents for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    /// Steer left (held)
    pub left: bool,
    /// Steer right (held)
    pub right: bool,
    /// Jump (held; only acts while grounded)
    pub jump: bool,
    /// Start a new run (one-shot, handled by the host)
    pub restart: bool,
    /// Pause toggle (one-shot, handled by the host)
    pub pause: bool,
}

/// Summary of a step for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub score: u64,
    pub phase: GamePhase,
    /// True only on the step that ended the run
    pub crashed: bool,
}

impl StepResult {
    pub fn of(state: &GameState) -> Self {
        Self {
            score: state.score(),
            phase: state.phase,
            crashed: false,
        }
    }
}

/// Advance the game state by `dt` seconds.
///
/// Idle states are left untouched. Negative or non-finite `dt` is treated as
/// a zero-length step, which changes nothing.
pub fn tick<R: Rng>(state: &mut GameState, input: &Intents, dt: f32, rng: &mut R) -> StepResult {
    if state.phase != GamePhase::Running {
        return StepResult::of(state);
    }

    let dt = sanitize_dt(dt);
    if dt == 0.0 {
        return StepResult::of(state);
    }

    ramp_and_score(state, dt);
    spawn_due(state, dt, rng);
    scroll_obstacles(state, dt);
    steer(state, input, dt);
    jump_and_fall(state, input, dt);

    let crashed = check_crash(state);
    StepResult {
        crashed,
        ..StepResult::of(state)
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring malformed step dt={dt}");
        0.0
    }
}

/// Speed ramps linearly; the score grows with the (already ramped) speed
fn ramp_and_score(state: &mut GameState, dt: f32) {
    state.speed += state.tuning.ramp_rate * dt;
    state.distance += state.speed * dt * state.tuning.distance_scale;
}

fn spawn_due<R: Rng>(state: &mut GameState, dt: f32, rng: &mut R) {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return;
    }

    let side = spawn::draw_size(rng, &state.tuning);
    let id = state.next_entity_id();
    let obstacle = spawn::place(id, side, &state.tuning, state.viewport);
    log::debug!(
        "Spawned obstacle {} (side {:.1}) at x={:.1}",
        id,
        side,
        obstacle.pos.x
    );
    state.obstacles.push(obstacle);
    state.spawn_timer = state.tuning.spawn_interval(state.speed);
}

/// Move obstacles left, pay out pass bonuses, drop the ones far off-screen
fn scroll_obstacles(state: &mut GameState, dt: f32) {
    let shift = state.speed * dt;
    let player_left = state.player.pos.x;
    let mut bonus = 0.0;

    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= shift;
        if !obstacle.passed && obstacle.right() < player_left {
            obstacle.passed = true;
            bonus += state.tuning.pass_bonus;
        }
    }
    state.distance += bonus;

    let cull_x = -state.tuning.cull_margin;
    let before = state.obstacles.len();
    state.obstacles.retain(|ob| ob.right() >= cull_x);
    let culled = before - state.obstacles.len();
    if culled > 0 {
        log::debug!("Culled {culled} obstacle(s)");
    }
}

fn steer(state: &mut GameState, input: &Intents, dt: f32) {
    let step = state.tuning.move_speed * dt;
    let player = &mut state.player;
    if input.left {
        player.pos.x -= step;
    }
    if input.right {
        player.pos.x += step;
    }
    let (min_x, max_x) = state.tuning.player_x_bounds(state.viewport);
    player.pos.x = player.pos.x.clamp(min_x, max_x);
}

/// Takeoff, then semi-implicit Euler with a single sub-step
fn jump_and_fall(state: &mut GameState, input: &Intents, dt: f32) {
    let ground_y = state.ground_y();
    let tuning = &state.tuning;
    let player = &mut state.player;

    if input.jump && player.on_ground {
        player.vy = tuning.jump_velocity;
        player.on_ground = false;
    }

    player.vy += tuning.gravity * dt;
    player.pos.y += player.vy * dt;
    if player.bottom() >= ground_y {
        player.land(ground_y);
    } else {
        player.on_ground = false;
    }
}

fn check_crash(state: &mut GameState) -> bool {
    let Some(obstacle) = first_hit(&state.player, &state.obstacles) else {
        return false;
    };
    log::info!(
        "Crashed into obstacle {} - final score {}",
        obstacle.id,
        state.score()
    );
    state.phase = GamePhase::Idle;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Obstacle;
    use crate::tuning::{Tuning, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn running_state() -> GameState {
        let mut state = GameState::new(Tuning::default(), Viewport::new(800.0, 600.0));
        state.start_run();
        state
    }

    fn no_spawns(state: &mut GameState) {
        state.spawn_timer = f32::MAX;
    }

    #[test]
    fn test_idle_is_untouched() {
        let mut state = GameState::new(Tuning::default(), Viewport::new(800.0, 600.0));
        let mut rng = Pcg32::seed_from_u64(1);
        let before = format!("{state:?}");
        let result = tick(&mut state, &Intents { jump: true, ..Default::default() }, DT, &mut rng);
        assert_eq!(result.phase, GamePhase::Idle);
        assert!(!result.crashed);
        assert_eq!(format!("{state:?}"), before);
    }

    #[test]
    fn test_distance_after_one_second() {
        let mut state = running_state();
        no_spawns(&mut state);
        let mut rng = Pcg32::seed_from_u64(1);

        let result = tick(&mut state, &Intents::default(), 1.0, &mut rng);

        // Ramp applies first: speed 205, distance 205 * 1.0 * 0.01
        assert!((state.speed - 205.0).abs() < 1e-4);
        assert!((state.distance - 2.05).abs() < 1e-4);
        assert_eq!(result.score, 2);
        assert_eq!(result.phase, GamePhase::Running);
    }

    #[test]
    fn test_first_step_spawns() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(3);
        tick(&mut state, &Intents::default(), DT, &mut rng);

        assert_eq!(state.obstacles.len(), 1);
        let ob = &state.obstacles[0];
        assert!((ob.pos.y + ob.size.y - state.ground_y()).abs() < 1e-4);
        assert!(ob.size.x >= OBSTACLE_SIZE_MIN);
        assert!(ob.size.x < OBSTACLE_SIZE_MIN + OBSTACLE_SIZE_RANGE);
        assert!((state.spawn_timer - state.tuning.spawn_interval(state.speed)).abs() < 1e-6);
    }

    #[test]
    fn test_pass_bonus_granted_once() {
        let mut state = running_state();
        no_spawns(&mut state);
        let ground_y = state.ground_y();
        // Just right of the bike's left edge, it scrolls past on the next step
        let x = state.player.pos.x - 40.0;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::resting(id, x, ground_y, 40.0));
        let mut rng = Pcg32::seed_from_u64(1);

        tick(&mut state, &Intents::default(), DT, &mut rng);
        assert!(state.obstacles[0].passed);
        let after_first = state.distance;
        assert!(after_first > PASS_BONUS);

        tick(&mut state, &Intents::default(), DT, &mut rng);
        assert!(state.obstacles[0].passed);
        assert!(state.distance - after_first < 1.0);
    }

    #[test]
    fn test_overlap_ends_run() {
        let mut state = running_state();
        no_spawns(&mut state);
        let ground_y = state.ground_y();
        let id = state.next_entity_id();
        let x = state.player.pos.x;
        state.obstacles.push(Obstacle::resting(id, x, ground_y, 40.0));
        let mut rng = Pcg32::seed_from_u64(1);

        let result = tick(&mut state, &Intents::default(), DT, &mut rng);
        assert!(result.crashed);
        assert_eq!(result.phase, GamePhase::Idle);
        assert_eq!(state.phase, GamePhase::Idle);

        // Frozen afterwards
        let frozen = format!("{state:?}");
        let result = tick(&mut state, &Intents { right: true, ..Default::default() }, DT, &mut rng);
        assert!(!result.crashed);
        assert_eq!(format!("{state:?}"), frozen);
    }

    #[test]
    fn test_spawn_then_collide_same_step() {
        let mut state = running_state();
        // Spawn point moved onto the bike so the fresh obstacle lands on it
        state.tuning.spawn_offset = state.player.pos.x - state.viewport.width;
        let mut rng = Pcg32::seed_from_u64(1);

        let result = tick(&mut state, &Intents::default(), DT, &mut rng);
        assert_eq!(state.obstacles.len(), 1);
        assert!(result.crashed);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_cull_removes_exactly_one() {
        let mut state = running_state();
        no_spawns(&mut state);
        let ground_y = state.ground_y();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::resting(id, 0.0, ground_y, 40.0));
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::resting(id, 2000.0, ground_y, 40.0));
        let mut rng = Pcg32::seed_from_u64(1);

        let mut steps = 0;
        while state.obstacles.len() == 2 {
            assert!(state.obstacles[0].right() >= -CULL_MARGIN);
            tick(&mut state, &Intents::default(), DT, &mut rng);
            steps += 1;
            assert!(steps < 1000, "obstacle never culled");
        }
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].id, id);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut state = running_state();
        no_spawns(&mut state);
        let mut rng = Pcg32::seed_from_u64(1);
        let jump = Intents { jump: true, ..Default::default() };

        tick(&mut state, &jump, DT, &mut rng);
        assert!(!state.player.on_ground);
        assert!((state.player.vy - (JUMP_VELOCITY + GRAVITY * DT)).abs() < 1e-3);

        // Still airborne: holding jump does not re-launch
        let vy = state.player.vy;
        tick(&mut state, &jump, DT, &mut rng);
        assert!(!state.player.on_ground);
        assert!((state.player.vy - (vy + GRAVITY * DT)).abs() < 1e-3);
    }

    #[test]
    fn test_jump_lands_again() {
        let mut state = running_state();
        no_spawns(&mut state);
        let mut rng = Pcg32::seed_from_u64(1);

        tick(&mut state, &Intents { jump: true, ..Default::default() }, DT, &mut rng);
        // Airtime is 2 * 600 / 1500 = 0.8 s
        for _ in 0..60 {
            tick(&mut state, &Intents::default(), DT, &mut rng);
        }
        assert!(state.player.on_ground);
        assert_eq!(state.player.vy, 0.0);
        assert_eq!(state.player.bottom(), state.ground_y());
    }

    #[test]
    fn test_steering_is_clamped() {
        let mut state = running_state();
        no_spawns(&mut state);
        let mut rng = Pcg32::seed_from_u64(1);
        let (min_x, max_x) = state.tuning.player_x_bounds(state.viewport);

        for _ in 0..200 {
            tick(&mut state, &Intents { left: true, ..Default::default() }, DT, &mut rng);
        }
        assert_eq!(state.player.pos.x, min_x);

        for _ in 0..200 {
            tick(&mut state, &Intents { right: true, ..Default::default() }, DT, &mut rng);
        }
        assert_eq!(state.player.pos.x, max_x);
    }

    #[test]
    fn test_malformed_dt_is_noop() {
        let mut state = running_state();
        let mut rng = Pcg32::seed_from_u64(1);
        let before = format!("{state:?}");
        for dt in [-0.5, 0.0, f32::NAN, f32::INFINITY] {
            let result = tick(&mut state, &Intents { jump: true, ..Default::default() }, dt, &mut rng);
            assert_eq!(result.phase, GamePhase::Running);
        }
        assert_eq!(format!("{state:?}"), before);
    }

    #[test]
    fn test_determinism() {
        let mut a = running_state();
        let mut b = running_state();
        let mut rng_a = Pcg32::seed_from_u64(99999);
        let mut rng_b = Pcg32::seed_from_u64(99999);

        let inputs = [
            Intents { right: true, ..Default::default() },
            Intents { jump: true, ..Default::default() },
            Intents::default(),
            Intents { left: true, jump: true, ..Default::default() },
        ];
        for i in 0..240 {
            let input = &inputs[i % inputs.len()];
            let ra = tick(&mut a, input, DT, &mut rng_a);
            let rb = tick(&mut b, input, DT, &mut rng_b);
            assert_eq!(ra, rb);
        }
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
        assert_eq!(a.distance, b.distance);
    }
}
