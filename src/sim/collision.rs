//! Collision tests on the tile grid
//!
//! Everything here is an axis-aligned check against tile-sized boxes anchored
//! at an entity's top-left corner.

use super::grid::GridPosition;

/// Does `a`'s tile box `[a, a + tile_size)` contain `b`'s origin?
///
/// This is containment of a point, not box/box overlap, so it is asymmetric:
/// `overlaps(a, b, t)` and `overlaps(b, a, t)` differ whenever the two origins
/// are offset by less than a tile on both axes but not equal.
#[inline]
pub fn overlaps(a: GridPosition, b: GridPosition, tile_size: i32) -> bool {
    b.x >= a.x && b.x < a.x + tile_size && b.y >= a.y && b.y < a.y + tile_size
}

/// Has `pos` left the playfield? The far edges themselves still count as inside.
#[inline]
pub fn out_of_bounds(pos: GridPosition, width: i32, height: i32) -> bool {
    pos.x < 0 || pos.x > width || pos.y < 0 || pos.y > height
}

/// Is `pos` within one tile of any playfield edge?
#[inline]
pub fn near_edge(pos: GridPosition, width: i32, height: i32, tile_size: i32) -> bool {
    pos.x <= tile_size
        || pos.x >= width - tile_size
        || pos.y <= tile_size
        || pos.y >= height - tile_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;

    #[test]
    fn test_overlaps_same_origin() {
        let p = IVec2::new(40, 80);
        assert!(overlaps(p, p, 40));
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let a = IVec2::new(40, 40);
        assert!(overlaps(a, IVec2::new(79, 79), 40));
        assert!(!overlaps(a, IVec2::new(80, 40), 40));
        assert!(!overlaps(a, IVec2::new(40, 80), 40));
    }

    #[test]
    fn test_overlaps_is_asymmetric() {
        let a = IVec2::new(40, 40);
        let b = IVec2::new(60, 50);
        assert!(overlaps(a, b, 40));
        assert!(!overlaps(b, a, 40));
    }

    #[test]
    fn test_adjacent_tiles_do_not_overlap() {
        let a = IVec2::new(0, 0);
        let b = IVec2::new(40, 0);
        assert!(!overlaps(a, b, 40));
        assert!(!overlaps(b, a, 40));
    }

    #[test]
    fn test_out_of_bounds_edges_inclusive() {
        assert!(!out_of_bounds(IVec2::new(0, 0), 1000, 800));
        assert!(!out_of_bounds(IVec2::new(1000, 800), 1000, 800));
        assert!(out_of_bounds(IVec2::new(1040, 400), 1000, 800));
        assert!(out_of_bounds(IVec2::new(-40, 400), 1000, 800));
        assert!(out_of_bounds(IVec2::new(400, -40), 1000, 800));
        assert!(out_of_bounds(IVec2::new(400, 840), 1000, 800));
    }

    #[test]
    fn test_near_edge() {
        assert!(near_edge(IVec2::new(0, 400), 1000, 800, 40));
        assert!(near_edge(IVec2::new(40, 400), 1000, 800, 40));
        assert!(near_edge(IVec2::new(400, 760), 1000, 800, 40));
        assert!(!near_edge(IVec2::new(80, 80), 1000, 800, 40));
        assert!(!near_edge(IVec2::new(800, 600), 1000, 800, 40));
    }

    proptest! {
        #[test]
        fn prop_overlaps_matches_containment(
            ax in -500i32..500, ay in -500i32..500,
            bx in -500i32..500, by in -500i32..500,
            tile in 1i32..64,
        ) {
            let a = IVec2::new(ax, ay);
            let b = IVec2::new(bx, by);
            let expected = (ax..ax + tile).contains(&bx) && (ay..ay + tile).contains(&by);
            prop_assert_eq!(overlaps(a, b, tile), expected);
        }

        #[test]
        fn prop_mutual_overlap_only_on_shared_origin(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
            tile in 1i32..64,
        ) {
            let a = IVec2::new(ax, ay);
            let b = IVec2::new(bx, by);
            if overlaps(a, b, tile) && overlaps(b, a, tile) {
                prop_assert_eq!(a, b);
            }
        }
    }
}
