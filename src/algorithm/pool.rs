use bitvec::prelude::*;
use std::fmt;

use crate::analysis::classification::Role;

/// Unplaced tiles of one role
///
/// Members keep their input order and are never reordered; taking a tile
/// only flips its consumed bit, so iteration order (and with it the
/// first-encountered tie-break) is the same on every run.
#[derive(Clone, Debug)]
pub struct TilePool {
    role: Role,
    members: Vec<usize>,
    consumed: BitVec,
}

impl TilePool {
    /// Create a pool over tile indices in the given order
    pub fn new(role: Role, members: Vec<usize>) -> Self {
        let consumed = bitvec![0; members.len()];
        Self {
            role,
            members,
            consumed,
        }
    }

    /// Role shared by every member
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Number of members not yet taken
    pub fn remaining(&self) -> usize {
        self.consumed.count_zeros()
    }

    /// Whether every member has been taken
    pub fn is_exhausted(&self) -> bool {
        self.consumed.all()
    }

    /// `(slot, tile index)` for every member not yet taken, in input order
    pub fn available(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.consumed
            .iter_zeros()
            .filter_map(|slot| self.members.get(slot).map(|&tile| (slot, tile)))
    }

    /// Remove the member at `slot`, returning its tile index
    ///
    /// Returns `None` if the slot is out of range or already taken.
    pub fn take(&mut self, slot: usize) -> Option<usize> {
        let tile = self.members.get(slot).copied()?;
        if self.consumed.get(slot).as_deref() != Some(&false) {
            return None;
        }
        self.consumed.set(slot, true);
        Some(tile)
    }

    /// Tile indices still in the pool
    pub fn leftover(&self) -> Vec<usize> {
        self.available().map(|(_, tile)| tile).collect()
    }
}

impl fmt::Display for TilePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pool: {}/{} remaining",
            self.role,
            self.remaining(),
            self.members.len()
        )
    }
}
