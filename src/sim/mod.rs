//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no internal scheduling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{balloon_hits_any, balloon_hits_tree, gondola_points};
pub use state::{Balloon, EndReason, FrameSnapshot, GameStatus, SimState, Viewport};
pub use tick::{InputEvent, apply_event, tick};
pub use world::{BackgroundTree, Tree, TreeColor, World, CROWN_OFFSETS};
