//! Simulation state and the render-facing snapshot
//!
//! Everything the loop owns lives here. State is created fresh on reset,
//! replaced wholesale on restart, and never persisted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::{BackgroundTree, Tree, World};
use crate::config::WorldConfig;
use crate::consts::*;

/// Why a run ended. Both are normal terminal outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The gondola clipped a tree crown
    Collision,
    /// The tank ran dry and the balloon touched down
    FuelExhausted,
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first burner input
    NotStarted,
    /// Active gameplay
    Running,
    /// Terminal until an explicit restart
    Ended(EndReason),
}

/// Host viewport dimensions, read-only to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Horizontal offset centering the main play area on screen
    #[inline]
    pub fn horizontal_padding(&self) -> f32 {
        (self.width - MAIN_AREA_WIDTH) / 2.0
    }
}

/// The balloon: position, velocity, fuel, and burner state
///
/// `pos.y` is zero at ground level and negative in the air; `pos.x` never
/// decreases while airborne.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub pos: Vec2,
    /// `x` is the constant scroll rate; `y` the current vertical velocity
    /// (positive = sinking)
    pub velocity: Vec2,
    /// Remaining burner fuel, `0..=500`
    pub fuel: f32,
    /// Whether the burner is lit
    pub heating: bool,
}

impl Balloon {
    fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            velocity: Vec2::new(SCROLL_SPEED, START_VERTICAL_VELOCITY),
            fuel: START_FUEL,
            heating: false,
        }
    }

    /// True once the balloon has left the ground
    #[inline]
    pub fn airborne(&self) -> bool {
        self.pos.y < 0.0
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub status: GameStatus,
    pub balloon: Balloon,
    pub world: World,
    pub viewport: Viewport,
    /// Distance flown, in meters
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Create a fresh run with the default world configuration.
    ///
    /// # Panics
    ///
    /// Panics if the viewport has non-positive dimensions.
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::with_config(seed, viewport, WorldConfig::default())
    }

    /// Create a fresh run with an explicit world configuration.
    ///
    /// # Panics
    ///
    /// Panics if the viewport has non-positive dimensions or `config` fails
    /// [`WorldConfig::validate`].
    pub fn with_config(seed: u64, viewport: Viewport, config: WorldConfig) -> Self {
        assert!(
            viewport.width > 0.0 && viewport.height > 0.0,
            "viewport dimensions must be positive, got {}x{}",
            viewport.width,
            viewport.height
        );

        Self {
            seed,
            status: GameStatus::NotStarted,
            balloon: Balloon::new(),
            world: World::new(seed, viewport.width, config),
            viewport,
            score: 0,
            time_ticks: 0,
        }
    }

    /// Render-facing view of the post-tick state
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            balloon: &self.balloon,
            foreground_trees: &self.world.trees,
            background_trees: &self.world.background_trees,
            fuel: self.balloon.fuel,
            score: self.score,
            viewport: self.viewport,
        }
    }
}

/// Per-frame view handed to the renderer. Borrows the state and never
/// mutates it; serializable so hosts can ship it across any boundary.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub balloon: &'a Balloon,
    pub foreground_trees: &'a [Tree],
    pub background_trees: &'a [BackgroundTree],
    /// Fuel readout for the HUD
    pub fuel: f32,
    /// Score readout for the HUD
    pub score: u32,
    pub viewport: Viewport,
}
