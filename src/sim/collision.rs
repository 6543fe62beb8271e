//! Gondola-versus-crown collision detection
//!
//! Deliberately coarse: the gondola is three sample points, each crown five
//! overlapping circles, and a hit is any sample point strictly inside any
//! circle (15 distance checks per tree). Crowns are decorative blobs, so
//! exact silhouette intersection buys nothing.

use glam::Vec2;

use super::state::Balloon;
use super::world::Tree;
use crate::consts::*;

/// The three gondola sample points for a balloon anchored at `pos`:
/// bottom-left, bottom-right, top-right of the fixed-size basket rectangle.
pub fn gondola_points(balloon: &Balloon) -> [Vec2; 3] {
    let Vec2 { x, y } = balloon.pos;
    [
        Vec2::new(x - GONDOLA_HALF_WIDTH, y),
        Vec2::new(x + GONDOLA_HALF_WIDTH, y),
        Vec2::new(x + GONDOLA_HALF_WIDTH, y - GONDOLA_HEIGHT),
    ]
}

/// Test the balloon against one tree's colliding crown circles
pub fn balloon_hits_tree(balloon: &Balloon, tree: &Tree) -> bool {
    let points = gondola_points(balloon);
    tree.collision_circles()
        .any(|(center, radius)| points.iter().any(|p| p.distance(center) < radius))
}

/// Test the balloon against every visible foreground tree. Background trees
/// never participate.
pub fn balloon_hits_any(balloon: &Balloon, trees: &[Tree]) -> bool {
    trees.iter().any(|tree| balloon_hits_tree(balloon, tree))
}
