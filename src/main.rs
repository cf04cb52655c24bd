//! Moto Runner entry point
//!
//! Native builds run a headless session: a simple autopilot feeds keys into
//! the host loop at 60 Hz until the bike crashes or the time limit passes.
//!
//! Usage: `moto-runner [seed] [seconds] [tuning.json]`

use moto_runner::platform::{GameLoop, Key};
use moto_runner::renderer::SceneBuilder;
use moto_runner::sim::{GameState, SimulationEngine};
use moto_runner::tuning::{Tuning, Viewport};

const FRAME: f64 = 1.0 / 60.0;
/// Jump when the next obstacle's left edge is this many seconds away
const JUMP_LEAD: f32 = 0.18;

/// Holds jump when an unpassed obstacle is about to reach the bike
fn autopilot_wants_jump(state: &GameState) -> bool {
    let bike_right = state.player.pos.x + state.player.size.x;
    state
        .obstacles
        .iter()
        .filter(|ob| !ob.passed && ob.pos.x + ob.size.x >= state.player.pos.x)
        .any(|ob| ob.pos.x - bike_right <= state.speed * JUMP_LEAD)
}

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => Tuning::from_json_or_default(&json),
        Err(e) => {
            log::warn!("Could not read {path}: {e}, using default tuning");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Moto Runner (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let seconds: f64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let tuning = load_tuning(args.get(2).map(String::as_str));

    let engine = match SimulationEngine::new(tuning, Viewport::new(1280.0, 720.0), seed) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Game initialized with seed: {seed}");

    let mut game = GameLoop::new(engine);
    let mut scene = SceneBuilder::new();
    game.input_mut().press_start();

    let mut now = 0.0;
    let mut jumping = false;
    let mut last_result = game.frame(now, &mut scene);
    while now < seconds {
        now += FRAME;

        let wants_jump = autopilot_wants_jump(game.engine().state());
        if wants_jump != jumping {
            if wants_jump {
                game.input_mut().key_down(Key::Space);
            } else {
                game.input_mut().key_up(Key::Space);
            }
            jumping = wants_jump;
        }

        last_result = game.frame(now, &mut scene);
        if last_result.crashed {
            break;
        }
    }

    log::info!(
        "Session over after {:.1}s, {} vertices in last frame",
        now,
        scene.vertices().len()
    );
    println!("{}", game.banner());
    println!("Final score: {}", last_result.score);
}
