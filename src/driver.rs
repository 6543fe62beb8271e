//! Frame scheduling and the explicit run loop
//!
//! The simulation never schedules itself. The host injects a
//! [`FrameScheduler`] and the loop advances one tick per frame until the run
//! ends; stopping the loop is the only cancellation there is.

use crate::sim::{EndReason, FrameSnapshot, GameStatus, InputEvent, SimState, apply_event, tick};

/// Host-side frame pacing. One call blocks until the next frame should run.
pub trait FrameScheduler {
    fn await_next_frame(&mut self);
}

/// Zero-delay scheduler for tests and headless runs
#[derive(Debug, Default)]
pub struct Immediate;

impl FrameScheduler for Immediate {
    fn await_next_frame(&mut self) {}
}

/// Drive the simulation until the run ends.
///
/// Each frame: drain the host's queued events (applied atomically, never
/// mid-tick), advance one tick, hand the post-tick snapshot to `present`.
/// Returns the reason the run ended.
///
/// The loop only returns once the run reaches `Ended`; a host whose events
/// never start or finish a run keeps the loop alive indefinitely, exactly
/// like a player who never lights the burner.
pub fn run_until_ended<S: FrameScheduler>(
    state: &mut SimState,
    scheduler: &mut S,
    mut poll_events: impl FnMut(&SimState) -> Vec<InputEvent>,
    mut present: impl FnMut(&FrameSnapshot<'_>),
) -> EndReason {
    loop {
        for event in poll_events(state) {
            apply_event(state, event);
        }
        tick(state);
        present(&state.snapshot());

        if let GameStatus::Ended(reason) = state.status {
            return reason;
        }
        scheduler.await_next_frame();
    }
}
