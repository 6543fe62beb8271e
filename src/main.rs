//! Balloon Drift headless demo
//!
//! Runs the simulation to completion with a small autopilot on the burner
//! and prints the outcome. A real host would swap the autopilot for player
//! input and hand each frame's snapshot to a renderer.
//!
//! Usage: `balloon-drift [SEED] [--json]`

use std::time::Duration;

use balloon_drift::driver::{FrameScheduler, run_until_ended};
use balloon_drift::sim::{GameStatus, InputEvent, SimState, Viewport};

/// Paces the demo at a fixed frame rate
struct FixedRate {
    frame: Duration,
}

impl FrameScheduler for FixedRate {
    fn await_next_frame(&mut self) {
        std::thread::sleep(self.frame);
    }
}

/// Minimal burner pilot: climb until clear of the tallest crown ahead,
/// otherwise hug the deck where burning is cheap. Emits only edges, the way
/// the input interface expects.
fn autopilot(state: &SimState) -> Vec<InputEvent> {
    if state.status == GameStatus::NotStarted {
        return vec![InputEvent::HeatStart];
    }

    let balloon = &state.balloon;

    // Highest crown reach among the trees just ahead (y grows downward, so
    // "highest" is the minimum of center.y - radius)
    let threat_top = state
        .world
        .trees
        .iter()
        .filter(|t| t.x > balloon.pos.x - 80.0 && t.x < balloon.pos.x + 300.0)
        .flat_map(|t| t.crown_circles())
        .map(|(center, radius)| center.y - radius)
        .fold(f32::INFINITY, f32::min);

    // Staying low burns less fuel, but the ground stops the scroll
    let cruise = -60.0;
    let target = if threat_top.is_finite() {
        (threat_top - 40.0).min(cruise)
    } else {
        cruise
    };

    let want_heat = balloon.pos.y > target && balloon.fuel > 0.0;
    if want_heat != balloon.heating {
        vec![if want_heat {
            InputEvent::HeatStart
        } else {
            InputEvent::HeatEnd
        }]
    } else {
        Vec::new()
    }
}

fn main() {
    env_logger::init();

    let mut seed = 42_u64;
    let mut dump_json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            dump_json = true;
        } else if let Ok(parsed) = arg.parse::<u64>() {
            seed = parsed;
        } else {
            eprintln!("usage: balloon-drift [SEED] [--json]");
            std::process::exit(2);
        }
    }

    log::info!("Balloon Drift starting (seed {seed})");

    let viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };
    let mut state = SimState::new(seed, viewport);
    let mut scheduler = FixedRate {
        frame: Duration::from_millis(16),
    };

    let reason = run_until_ended(&mut state, &mut scheduler, autopilot, |_snapshot| {
        // A renderer would draw the snapshot here
    });

    println!(
        "{reason:?} after {} ticks: {} m flown, {:.0} fuel left",
        state.time_ticks, state.score, state.balloon.fuel
    );

    if dump_json {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("snapshot serialization failed: {e}"),
        }
    }
}
