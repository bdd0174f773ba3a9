use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

use itertools::Itertools;

use crate::Arena;
use crate::Player;
use crate::Set;
use crate::VertexIndex;

/// The winning regions of both players, as sets of node identifiers.
///
/// Every node of the solved arena is in exactly one of the two regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinningPartition {
    regions: [BTreeSet<String>; 2],
}

impl WinningPartition {
    /// Converts the pair of vertex sets (even, odd) into identifiers of the arena.
    pub fn from_sets(arena: &Arena, sets: &[Set; 2]) -> Self {
        let regions = sets.each_ref().map(|set| {
            set.iter_ones()
                .map(|v| arena.identifier(VertexIndex::new(v)).to_string())
                .collect()
        });

        Self { regions }
    }

    /// Returns the identifiers of the nodes won by the given player.
    pub fn winning_region(&self, player: Player) -> &BTreeSet<String> {
        &self.regions[player.to_index()]
    }

    /// Returns the player that wins from the given node, or None if the node is
    /// not part of the solved arena.
    pub fn winner(&self, id: &str) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|player| self.regions[player.to_index()].contains(id))
    }

    /// Returns true iff the node is in one of the regions.
    pub fn contains(&self, id: &str) -> bool {
        self.winner(id).is_some()
    }

    /// Returns the total number of nodes in both regions.
    pub fn len(&self) -> usize {
        self.regions.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(BTreeSet::is_empty)
    }

    /// Returns true iff every node of the arena is in exactly one region.
    pub fn is_partition_of(&self, arena: &Arena) -> bool {
        self.regions[0].is_disjoint(&self.regions[1])
            && self.len() == arena.num_of_vertices()
            && arena.iter_vertices().all(|v| self.contains(arena.identifier(v)))
    }
}

impl Index<Player> for WinningPartition {
    type Output = BTreeSet<String>;

    fn index(&self, player: Player) -> &Self::Output {
        self.winning_region(player)
    }
}

impl fmt::Display for WinningPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in Player::ALL {
            writeln!(
                f,
                "Winning region of {player}: {{{}}}",
                self.winning_region(player).iter().format(", ")
            )?;
        }

        Ok(())
    }
}
