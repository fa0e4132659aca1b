//! Border comparison between a placed tile and a candidate neighbour
//!
//! Two policies are available and exactly one is used per run: summed
//! absolute differences where the lowest score wins, and a per-channel
//! tolerance test where the first accepted candidate wins.

use std::fmt;

use crate::io::configuration::COLOR_TOLERANCE;
use crate::spatial::Tile;
use crate::spatial::edges::{Side, Signature, luminance};

/// Border mismatch; lower is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u64);

impl Score {
    /// Identical borders
    pub const PERFECT: Self = Self(0);
    /// Borders of different length; such tiles can never be adjacent
    pub const INCOMPATIBLE: Self = Self(u64::MAX);

    /// Wrap a raw mismatch value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw mismatch value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether the borders are identical
    pub const fn is_perfect(self) -> bool {
        self.0 == 0
    }

    /// Whether the borders have the same length
    pub const fn is_compatible(self) -> bool {
        self.0 != u64::MAX
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compatible() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("incompatible")
        }
    }
}

/// Score placing `candidate` against the `side` of `source`
///
/// Reads `source`'s `side` signature and `candidate`'s opposite one, so the
/// result depends on direction: `score(a, b, Right)` compares `a.right`
/// with `b.left`.
pub fn score(source: &Tile, candidate: &Tile, side: Side) -> Score {
    signature_distance(source.edge(side), candidate.edge(side.opposite()))
}

/// Sum of absolute sample differences between two signatures
///
/// Colour samples contribute the sum of their three channel differences.
/// Signatures of different lengths are `Score::INCOMPATIBLE`.
pub fn signature_distance(a: &Signature, b: &Signature) -> Score {
    if a.len() != b.len() {
        return Score::INCOMPATIBLE;
    }

    let total: u64 = match (a, b) {
        (Signature::Color(lhs), Signature::Color(rhs)) => lhs
            .iter()
            .zip(rhs)
            .map(|(x, y)| {
                x.iter()
                    .zip(y)
                    .map(|(&p, &q)| u64::from(p.abs_diff(q)))
                    .sum::<u64>()
            })
            .sum(),
        (Signature::Luminance(lhs), Signature::Luminance(rhs)) => lhs
            .iter()
            .zip(rhs)
            .map(|(&p, &q)| u64::from(p.abs_diff(q)))
            .sum(),
        // Mixed modes only arise from hand-built tiles; compare brightness
        (Signature::Color(c), Signature::Luminance(l))
        | (Signature::Luminance(l), Signature::Color(c)) => c
            .iter()
            .zip(l)
            .map(|(&rgb, &q)| u64::from(luminance(rgb).abs_diff(q)))
            .sum(),
    };

    Score::new(total)
}

/// Whether `candidate` fits against the `side` of `source` within `tolerance`
///
/// Every channel of every sample pair must differ by at most `tolerance`.
/// Different lengths never match.
pub fn accepts(source: &Tile, candidate: &Tile, side: Side, tolerance: u8) -> bool {
    signatures_within(source.edge(side), candidate.edge(side.opposite()), tolerance)
}

/// Per-sample tolerance test between two signatures
pub fn signatures_within(a: &Signature, b: &Signature, tolerance: u8) -> bool {
    if a.len() != b.len() {
        return false;
    }

    match (a, b) {
        (Signature::Color(lhs), Signature::Color(rhs)) => lhs.iter().zip(rhs).all(|(x, y)| {
            x.iter()
                .zip(y)
                .all(|(&p, &q)| p.abs_diff(q) <= tolerance)
        }),
        (Signature::Luminance(lhs), Signature::Luminance(rhs)) => {
            lhs.iter().zip(rhs).all(|(&p, &q)| p.abs_diff(q) <= tolerance)
        }
        (Signature::Color(c), Signature::Luminance(l))
        | (Signature::Luminance(l), Signature::Color(c)) => c
            .iter()
            .zip(l)
            .all(|(&rgb, &q)| luminance(rgb).abs_diff(q) <= tolerance),
    }
}

/// Outcome of evaluating one candidate under a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate can't be placed here
    Rejected,
    /// Candidate is eligible with this score
    Scored(Score),
    /// Candidate is accepted outright and ends the search
    Accepted,
}

/// How candidates are compared during assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Lowest summed difference wins; a perfect score ends the search
    #[default]
    Scored,
    /// First candidate within `tolerance` on every channel wins
    Tolerance {
        /// Maximum per-channel difference
        tolerance: u8,
    },
}

impl MatchPolicy {
    /// Tolerance policy with the reference per-channel limit
    pub const fn tolerance() -> Self {
        Self::Tolerance {
            tolerance: COLOR_TOLERANCE,
        }
    }

    /// Judge `candidate` against the `side` of `source`
    pub fn evaluate(&self, source: &Tile, candidate: &Tile, side: Side) -> Verdict {
        match *self {
            Self::Scored => {
                let value = score(source, candidate, side);
                if value.is_compatible() {
                    Verdict::Scored(value)
                } else {
                    Verdict::Rejected
                }
            }
            Self::Tolerance { tolerance } => {
                if accepts(source, candidate, side, tolerance) {
                    Verdict::Accepted
                } else {
                    Verdict::Rejected
                }
            }
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scored => f.write_str("scored"),
            Self::Tolerance { tolerance } => write!(f, "tolerance({tolerance})"),
        }
    }
}
