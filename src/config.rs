//! World-generation configuration
//!
//! Gap bounds, recycle margins, and window densities for the two tree
//! streams. Defaults reproduce the hand-tuned forest. Malformed values are a
//! programmer error and are rejected at construction, not handled at runtime.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Parameters of one infinite tree stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Minimum horizontal gap between consecutive trees
    pub min_gap: f32,
    /// Maximum horizontal gap between consecutive trees
    pub max_gap: f32,
    /// How far past the trailing edge the head may drift before eviction
    pub recycle_margin: f32,
    /// One tree per this many units of viewport width at init
    pub density: f32,
}

impl StreamConfig {
    fn validate(&self, stream: &str) {
        assert!(
            self.min_gap.is_finite() && self.min_gap > 0.0,
            "{stream}: min_gap must be positive, got {}",
            self.min_gap
        );
        assert!(
            self.max_gap.is_finite() && self.max_gap > self.min_gap,
            "{stream}: max_gap must exceed min_gap, got [{}, {}]",
            self.min_gap,
            self.max_gap
        );
        assert!(
            self.recycle_margin.is_finite() && self.recycle_margin > 0.0,
            "{stream}: recycle_margin must be positive, got {}",
            self.recycle_margin
        );
        assert!(
            self.density.is_finite() && self.density > 0.0,
            "{stream}: density must be positive, got {}",
            self.density
        );
    }
}

/// Configuration for both tree streams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub foreground: StreamConfig,
    pub background: StreamConfig,
    /// Background scroll factor relative to the balloon (parallax depth)
    pub parallax: f32,
    /// Fixed x of the first foreground tree when there is no tail to extend
    pub first_tree_x: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            foreground: StreamConfig {
                min_gap: TREE_MIN_GAP,
                max_gap: TREE_MAX_GAP,
                recycle_margin: TREE_RECYCLE_MARGIN,
                density: TREE_DENSITY,
            },
            background: StreamConfig {
                min_gap: BACKGROUND_MIN_GAP,
                max_gap: BACKGROUND_MAX_GAP,
                recycle_margin: BACKGROUND_RECYCLE_MARGIN,
                density: BACKGROUND_DENSITY,
            },
            parallax: BACKGROUND_PARALLAX,
            first_tree_x: FIRST_TREE_X,
        }
    }
}

impl WorldConfig {
    /// Check construction preconditions.
    ///
    /// # Panics
    ///
    /// Panics if either stream has non-positive or inverted gap bounds, a
    /// non-positive recycle margin or density, or if the parallax factor is
    /// outside `(0, 1]` or the first-tree seed is not a finite non-negative
    /// coordinate.
    pub fn validate(&self) {
        self.foreground.validate("foreground");
        self.background.validate("background");
        assert!(
            self.parallax.is_finite() && self.parallax > 0.0 && self.parallax <= 1.0,
            "parallax must be in (0, 1], got {}",
            self.parallax
        );
        assert!(
            self.first_tree_x.is_finite() && self.first_tree_x >= 0.0,
            "first_tree_x must be a non-negative coordinate, got {}",
            self.first_tree_x
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        WorldConfig::default().validate();
    }

    #[test]
    #[should_panic(expected = "min_gap must be positive")]
    fn negative_gap_rejected() {
        let mut config = WorldConfig::default();
        config.foreground.min_gap = -50.0;
        config.validate();
    }

    #[test]
    #[should_panic(expected = "max_gap must exceed min_gap")]
    fn inverted_gap_bounds_rejected() {
        let mut config = WorldConfig::default();
        config.background.max_gap = config.background.min_gap - 1.0;
        config.validate();
    }

    #[test]
    #[should_panic(expected = "parallax")]
    fn zero_parallax_rejected() {
        let config = WorldConfig {
            parallax: 0.0,
            ..WorldConfig::default()
        };
        config.validate();
    }
}
