//! Balloon Drift - a side-scrolling hot-air balloon arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, world generation, collisions)
//! - `config`: Validated world-generation parameters
//! - `driver`: Frame-scheduling seam and the explicit run loop
//!
//! Rendering is not part of this crate. A host renderer consumes the
//! [`FrameSnapshot`](sim::FrameSnapshot) available after each tick and never
//! mutates simulation state.

pub mod config;
pub mod driver;
pub mod sim;

pub use config::WorldConfig;
pub use sim::{FrameSnapshot, GameStatus, InputEvent, SimState, Viewport};

/// Game configuration constants
pub mod consts {
    /// Width of the centered main play area in world units
    pub const MAIN_AREA_WIDTH: f32 = 400.0;

    /// Upward acceleration per tick while the burner is lit
    pub const HEAT_ACCEL: f32 = 0.09;
    /// Downward acceleration per tick while coasting
    pub const COOL_ACCEL: f32 = 0.05;
    /// Vertical velocity cap while rising (negative y is up)
    pub const MAX_RISE_VELOCITY: f32 = -3.0;
    /// Vertical velocity cap while falling
    pub const MAX_FALL_VELOCITY: f32 = 5.0;
    /// Vertical velocity at the start of a run (sinking toward the ground)
    pub const START_VERTICAL_VELOCITY: f32 = 3.0;
    /// Constant horizontal scroll speed while airborne
    pub const SCROLL_SPEED: f32 = 0.3;
    /// Fuel reserve at the start of a run
    pub const START_FUEL: f32 = 500.0;
    /// Fuel burned per tick per world unit of altitude
    pub const FUEL_BURN_RATE: f32 = 0.001;
    /// World units per scored meter
    pub const UNITS_PER_METER: f32 = 30.0;

    /// Gondola sample points sit this far left/right of the balloon anchor
    pub const GONDOLA_HALF_WIDTH: f32 = 30.0;
    /// Height of the gondola's top sample point above the anchor
    pub const GONDOLA_HEIGHT: f32 = 40.0;

    /// Minimum horizontal gap between foreground trees
    pub const TREE_MIN_GAP: f32 = 50.0;
    /// Maximum horizontal gap between foreground trees
    pub const TREE_MAX_GAP: f32 = 600.0;
    /// Minimum horizontal gap between background trees
    pub const BACKGROUND_MIN_GAP: f32 = 30.0;
    /// Maximum horizontal gap between background trees
    pub const BACKGROUND_MAX_GAP: f32 = 150.0;
    /// X coordinate of the first foreground tree of a run
    pub const FIRST_TREE_X: f32 = 400.0;
    /// How far past the trailing edge a foreground tree drifts before recycling
    pub const TREE_RECYCLE_MARGIN: f32 = 100.0;
    /// Recycle margin for background trees
    pub const BACKGROUND_RECYCLE_MARGIN: f32 = 40.0;
    /// Scroll factor of the background layer relative to the balloon
    pub const BACKGROUND_PARALLAX: f32 = 0.3;
    /// One foreground tree per this many units of viewport width at init
    pub const TREE_DENSITY: f32 = 50.0;
    /// One background tree per this many units of viewport width at init
    pub const BACKGROUND_DENSITY: f32 = 30.0;

    /// Lower bound of the uniform crown radius draw
    pub const CROWN_RADIUS_MIN: f32 = 32.0;
    /// Upper bound of the uniform crown radius draw
    pub const CROWN_RADIUS_MAX: f32 = 48.0;
    /// Lower bound of the uniform trunk height draw
    pub const TRUNK_HEIGHT_MIN: f32 = 60.0;
    /// Upper bound of the uniform trunk height draw
    pub const TRUNK_HEIGHT_MAX: f32 = 140.0;
}
