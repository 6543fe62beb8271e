//! Procedural forest: two infinite tree streams
//!
//! Each stream is a sliding window over a lazy, append-on-demand sequence.
//! Once the head tree scrolls a margin past the viewport's trailing edge it
//! is evicted and exactly one new tree is appended past the current tail, so
//! the window length never changes and the sequence is never rewound.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::consts::*;

/// Foliage palette, three fixed greens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeColor {
    Moss,
    Olive,
    Lime,
}

impl TreeColor {
    /// All palette entries, in draw order
    pub const PALETTE: [TreeColor; 3] = [TreeColor::Moss, TreeColor::Olive, TreeColor::Lime];

    /// CSS hex value for the renderer
    pub fn hex(&self) -> &'static str {
        match self {
            TreeColor::Moss => "#6D8821",
            TreeColor::Olive => "#8FAC34",
            TreeColor::Lime => "#98B333",
        }
    }
}

/// Offsets of the seven crown circles from the trunk apex `(x, -height)`,
/// leading side first. Only the first [`COLLIDING_CROWN_CIRCLES`] take part
/// in collision detection; the trailing pair is draw-only.
pub const CROWN_OFFSETS: [Vec2; 7] = [
    Vec2::new(-20.0, -15.0),
    Vec2::new(-30.0, -25.0),
    Vec2::new(-20.0, -35.0),
    Vec2::new(0.0, -45.0),
    Vec2::new(20.0, -35.0),
    Vec2::new(30.0, -25.0),
    Vec2::new(20.0, -15.0),
];

/// Number of crown circles that take part in collision detection
pub const COLLIDING_CROWN_CIRCLES: usize = 5;

/// A foreground tree; immutable once generated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Absolute world x of the trunk centerline
    pub x: f32,
    /// Trunk height; the crown hangs from the apex at `(x, -height)`
    pub height: f32,
    /// Crown circle radii, in the order of [`CROWN_OFFSETS`]
    pub crown_radii: [f32; 7],
    pub color: TreeColor,
}

impl Tree {
    /// Absolute center of crown circle `i`
    #[inline]
    pub fn crown_center(&self, i: usize) -> Vec2 {
        Vec2::new(self.x, -self.height) + CROWN_OFFSETS[i]
    }

    /// All seven crown circles as `(center, radius)`, for drawing
    pub fn crown_circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.crown_radii
            .iter()
            .enumerate()
            .map(|(i, &r)| (self.crown_center(i), r))
    }

    /// The five leading crown circles, the only ones collision sees
    pub fn collision_circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.crown_circles().take(COLLIDING_CROWN_CIRCLES)
    }
}

/// A parallax-layer tree; decoration only, never collides or scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTree {
    /// Absolute world x on the background layer
    pub x: f32,
    pub color: TreeColor,
}

/// Both tree streams plus the seeded RNG that extends them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Foreground window, ascending x; takes part in collision and recycling
    pub trees: Vec<Tree>,
    /// Background window, ascending x; parallax decoration
    pub background_trees: Vec<BackgroundTree>,
    config: WorldConfig,
    rng: Pcg32,
}

impl World {
    /// Build both windows for a fresh run. Window lengths are derived from
    /// the viewport width here and fixed for the lifetime of the run.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`WorldConfig::validate`] or if
    /// `viewport_width` is not a positive finite number.
    pub fn new(seed: u64, viewport_width: f32, config: WorldConfig) -> Self {
        config.validate();
        assert!(
            viewport_width.is_finite() && viewport_width > 0.0,
            "viewport width must be positive, got {viewport_width}"
        );

        let mut world = Self {
            trees: Vec::new(),
            background_trees: Vec::new(),
            config,
            rng: Pcg32::seed_from_u64(seed),
        };

        let tree_count = ((viewport_width / config.foreground.density) as usize).max(1);
        for _ in 0..tree_count {
            world.grow_foreground();
        }

        let background_count = ((viewport_width / config.background.density) as usize).max(1);
        for _ in 0..background_count {
            world.grow_background();
        }

        world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Generate the next foreground tree to the right of `tail`. With no
    /// tail the tree lands at the fixed first-tree coordinate.
    pub fn next_tree(&mut self, tail: Option<&Tree>) -> Tree {
        self.generate_tree(tail.map(|t| t.x))
    }

    /// Generate the next background tree to the right of `tail`. With no
    /// tail the gap is measured from the world origin.
    pub fn next_background_tree(&mut self, tail: Option<&BackgroundTree>) -> BackgroundTree {
        self.generate_background_tree(tail.map(|t| t.x))
    }

    /// Per-tick window maintenance: evict the head of each stream once it
    /// has scrolled its margin past the viewport's trailing edge, appending
    /// one replacement per evicted tree. `padding` is the horizontal offset
    /// centering the main play area on screen.
    pub fn recycle(&mut self, balloon_x: f32, padding: f32) {
        let margin = self.config.foreground.recycle_margin;
        if let Some(head) = self.trees.first()
            && head.x - (balloon_x - padding) < -margin
        {
            let culled = self.trees.remove(0);
            log::debug!("recycled tree at x={:.0}", culled.x);
            self.grow_foreground();
        }

        let margin = self.config.background.recycle_margin;
        let layer_x = balloon_x * self.config.parallax;
        if let Some(head) = self.background_trees.first()
            && head.x - (layer_x - padding) < -margin
        {
            self.background_trees.remove(0);
            self.grow_background();
        }
    }

    fn grow_foreground(&mut self) {
        let tail_x = self.trees.last().map(|t| t.x);
        let tree = self.generate_tree(tail_x);
        self.trees.push(tree);
    }

    fn grow_background(&mut self) {
        let tail_x = self.background_trees.last().map(|t| t.x);
        let tree = self.generate_background_tree(tail_x);
        self.background_trees.push(tree);
    }

    fn generate_tree(&mut self, tail_x: Option<f32>) -> Tree {
        let gaps = self.config.foreground;
        let x = match tail_x {
            Some(tail) => tail + gaps.min_gap + self.rng.random_range(0.0..gaps.max_gap - gaps.min_gap),
            None => self.config.first_tree_x,
        };

        let height = self.rng.random_range(TRUNK_HEIGHT_MIN..TRUNK_HEIGHT_MAX);
        let mut crown_radii = [0.0_f32; 7];
        for radius in &mut crown_radii {
            *radius = self.rng.random_range(CROWN_RADIUS_MIN..CROWN_RADIUS_MAX);
        }

        Tree {
            x,
            height,
            crown_radii,
            color: self.pick_color(),
        }
    }

    fn generate_background_tree(&mut self, tail_x: Option<f32>) -> BackgroundTree {
        let gaps = self.config.background;
        let x = tail_x.unwrap_or(0.0)
            + gaps.min_gap
            + self.rng.random_range(0.0..gaps.max_gap - gaps.min_gap);

        BackgroundTree {
            x,
            color: self.pick_color(),
        }
    }

    fn pick_color(&mut self) -> TreeColor {
        TreeColor::PALETTE[self.rng.random_range(0..TreeColor::PALETTE.len())]
    }
}
