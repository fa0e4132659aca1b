use crate::{
    algorithm::{
        matching::{MatchPolicy, Score, Verdict, score},
        pool::TilePool,
    },
    spatial::{Tile, edges::Side},
};

/// Winning candidate for one grid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Slot of the winner inside its pool
    pub slot: usize,
    /// Index of the winner in the tile set
    pub tile: usize,
    /// Summed difference against the previous tile
    pub score: Score,
}

/// Pick the pool member that best extends `source` on `side`
///
/// Members are visited in pool order. Under the scored policy the lowest
/// score wins and ties go to the first member seen; a perfect score stops
/// the scan. Under the tolerance policy the first accepted member wins.
/// Incompatible members are never returned, so `None` means the pool has
/// nothing placeable.
pub fn select_candidate(
    pool: &TilePool,
    tiles: &[Tile],
    source: &Tile,
    side: Side,
    policy: &MatchPolicy,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (slot, tile) in pool.available() {
        let Some(candidate) = tiles.get(tile) else {
            continue;
        };

        match policy.evaluate(source, candidate, side) {
            Verdict::Rejected => {}
            Verdict::Accepted => {
                return Some(Candidate {
                    slot,
                    tile,
                    score: score(source, candidate, side),
                });
            }
            Verdict::Scored(value) => {
                if best.is_none_or(|current| value < current.score) {
                    best = Some(Candidate {
                        slot,
                        tile,
                        score: value,
                    });
                }
                if value.is_perfect() {
                    break;
                }
            }
        }
    }

    best
}
