//! Tests for best-candidate selection from a pool

#[cfg(test)]
mod tests {
    use crate::fixtures::{raw_tile, tile};
    use puzzlestitch::algorithm::matching::{MatchPolicy, Score};
    use puzzlestitch::algorithm::pool::TilePool;
    use puzzlestitch::algorithm::selection::select_candidate;
    use puzzlestitch::analysis::classification::Role;
    use puzzlestitch::spatial::Tile;
    use puzzlestitch::spatial::edges::{SampleMode, Side};

    /// Source tile (id 0) with a right border of 100, followed by
    /// candidates whose left borders take the given values
    fn tile_set(lefts: &[u8]) -> Vec<Tile> {
        let source = tile(
            0,
            raw_tile(7, 5, |x, _| if x == 6 { [100; 3] } else { [0; 3] }),
            SampleMode::Luminance,
        );

        let mut tiles = vec![source];
        for (offset, &left) in lefts.iter().enumerate() {
            let raw = raw_tile(7, 5, move |x, _| if x == 0 { [left; 3] } else { [0; 3] });
            tiles.push(tile(offset + 1, raw, SampleMode::Luminance));
        }
        tiles
    }

    fn general_pool(tiles: &[Tile]) -> TilePool {
        TilePool::new(Role::GeneralMember, (1..tiles.len()).collect())
    }

    // Tests the lowest summed difference wins
    // Verified by keeping the highest score instead
    #[test]
    fn test_lowest_score_wins() {
        let tiles = tile_set(&[90, 99, 120]);
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::Scored);

        assert_eq!(chosen.map(|c| (c.slot, c.tile)), Some((1, 2)));
        assert_eq!(chosen.map(|c| c.score), Some(Score::new(5)));
    }

    // Tests equal scores resolve to the first member in pool order
    // Verified by replacing the strict comparison with <=
    #[test]
    fn test_ties_go_to_first_encountered() {
        let tiles = tile_set(&[110, 90, 90, 110]);
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::Scored);

        assert_eq!(chosen.map(|c| c.tile), Some(1));
    }

    // Tests a perfect match is taken even when later members are also perfect
    // Verified by continuing the scan past a perfect score with <=
    #[test]
    fn test_first_perfect_match_wins() {
        let tiles = tile_set(&[50, 100, 100]);
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::Scored);

        assert_eq!(chosen.map(|c| c.tile), Some(2));
        assert!(chosen.is_some_and(|c| c.score.is_perfect()));
    }

    // Tests taken members are no longer considered
    // Verified by iterating all pool members
    #[test]
    fn test_consumed_members_are_skipped() {
        let tiles = tile_set(&[100, 97]);
        let mut pool = general_pool(&tiles);
        assert_eq!(pool.take(0), Some(1));
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::Scored);

        assert_eq!(chosen.map(|c| c.tile), Some(2));
    }

    // Tests incompatible candidates are never returned, even ahead of a poor match
    // Verified by seeding the search with the first candidate regardless of score
    #[test]
    fn test_incompatible_candidates_are_never_chosen() {
        let mut tiles = tile_set(&[]);
        tiles.push(tile(1, raw_tile(7, 4, |_, _| [100; 3]), SampleMode::Luminance));
        tiles.push(tile(2, raw_tile(7, 6, |_, _| [100; 3]), SampleMode::Luminance));
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::Scored);

        assert!(chosen.is_none());

        // An incompatible member ahead of a poor compatible one
        let mut mixed = tile_set(&[]);
        mixed.push(tile(1, raw_tile(7, 4, |_, _| [100; 3]), SampleMode::Luminance));
        mixed.push(tile(2, raw_tile(7, 5, |x, _| if x == 0 { [50; 3] } else { [0; 3] }), SampleMode::Luminance));
        let mixed_pool = general_pool(&mixed);
        let Some(mixed_source) = mixed.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(
            &mixed_pool,
            &mixed,
            mixed_source,
            Side::Right,
            &MatchPolicy::Scored,
        );

        assert_eq!(chosen.map(|c| c.tile), Some(2));
        assert_eq!(chosen.map(|c| c.score), Some(Score::new(250)));
    }

    // Tests the tolerance policy takes the first acceptable member with its real score
    // Verified by scanning for the best accepted member
    #[test]
    fn test_tolerance_takes_first_accepted() {
        let tiles = tile_set(&[50, 80, 100]);
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let chosen = select_candidate(&pool, &tiles, source, Side::Right, &MatchPolicy::tolerance());

        assert_eq!(chosen.map(|c| c.tile), Some(2));
        assert_eq!(chosen.map(|c| c.score), Some(Score::new(100)));
    }

    // Tests the tolerance policy yields nothing when no member is within bounds
    // Verified by falling back to the lowest score
    #[test]
    fn test_tolerance_without_acceptable_member() {
        let tiles = tile_set(&[10, 200]);
        let pool = general_pool(&tiles);
        let Some(source) = tiles.first() else {
            unreachable!("source tile is always built");
        };

        let policy = MatchPolicy::Tolerance { tolerance: 25 };
        assert!(select_candidate(&pool, &tiles, source, Side::Right, &policy).is_none());
    }
}
