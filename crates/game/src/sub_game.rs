#![allow(nonstandard_style)]
//! Sets of vertices are named with capitals, following the usual presentation
//! of the algorithm.

use std::fmt;

use bitvec::bitvec;
use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use itertools::Itertools;

use crate::Arena;
use crate::GameError;
use crate::Player;
use crate::Priority;
use crate::VertexIndex;

/// A set of vertices of an [Arena], with one bit per vertex of the arena.
pub type Set = BitVec<usize, Lsb0>;

/// Returns the empty set for the given arena.
pub fn empty_set(arena: &Arena) -> Set {
    bitvec![usize, Lsb0; 0; arena.num_of_vertices()]
}

/// The subgame of an [Arena] induced by a set of its vertices. The edges of the
/// subgame are exactly the edges of the arena between two of these vertices.
///
/// Every subgame owns its vertex set, the arena itself is shared and never
/// modified.
pub struct SubGame<'a> {
    arena: &'a Arena,
    vertices: Set,
}

impl<'a> SubGame<'a> {
    /// The subgame containing every vertex of the arena.
    pub fn full(arena: &'a Arena) -> Self {
        let mut vertices = empty_set(arena);
        vertices.fill(true);

        Self { arena, vertices }
    }

    /// The subgame induced by the given vertices.
    pub fn new(arena: &'a Arena, vertices: Set) -> Self {
        debug_assert_eq!(
            vertices.len(),
            arena.num_of_vertices(),
            "The set should have one bit for every vertex of the arena"
        );

        Self { arena, vertices }
    }

    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    pub fn vertices(&self) -> &Set {
        &self.vertices
    }

    pub fn contains(&self, vertex: VertexIndex) -> bool {
        self.vertices[*vertex]
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.not_any()
    }

    pub fn num_of_vertices(&self) -> usize {
        self.vertices.count_ones()
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.iter_ones().map(VertexIndex::new)
    }

    /// Returns the successors of the given vertex that are part of the subgame.
    pub fn outgoing_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.arena.outgoing_edges(vertex).filter(|w| self.vertices[**w])
    }

    pub fn owner(&self, vertex: VertexIndex) -> Player {
        self.arena.owner(vertex)
    }

    pub fn priority(&self, vertex: VertexIndex) -> Priority {
        self.arena.priority(vertex)
    }

    /// Returns the maximal priority in the subgame, fails with
    /// [GameError::EmptyArena] when the subgame has no vertices.
    pub fn max_priority(&self) -> Result<Priority, GameError> {
        self.iter_vertices()
            .map(|v| self.priority(v))
            .max()
            .ok_or(GameError::EmptyArena)
    }

    /// Returns the vertices of the subgame with exactly the given priority.
    pub fn vertices_with_priority(&self, priority: Priority) -> Set {
        let mut U = empty_set(self.arena);
        for v in self.iter_vertices() {
            if self.priority(v) == priority {
                U.set(*v, true);
            }
        }

        U
    }

    /// Returns the vertices of the subgame that are not in `A`, as a new set.
    pub fn complement(&self, A: &Set) -> Set {
        let mut C = self.vertices.clone();
        C &= !A.clone();
        C
    }

    /// Fails with [GameError::ArenaDeadlock] for the first vertex without a
    /// successor in the subgame.
    pub fn check_total(&self) -> Result<(), GameError> {
        match self.iter_vertices().find(|v| self.outgoing_edges(*v).next().is_none()) {
            Some(v) => Err(GameError::ArenaDeadlock(self.arena.identifier(v).to_string())),
            None => Ok(()),
        }
    }

    /// Returns true iff every vertex in `S` has an edge to a vertex in `S`.
    pub fn is_trap(&self, S: &Set) -> bool {
        S.iter_ones()
            .all(|v| self.arena.outgoing_edges(VertexIndex::new(v)).any(|w| S[*w]))
    }

    /// Returns the subgame induced by `S`, which must be a subset of this
    /// subgame in which every vertex keeps at least one successor.
    pub fn induced_subgame(&self, S: Set) -> SubGame<'a> {
        debug_assert!(
            S.iter_ones().all(|v| self.vertices[v]),
            "The induced vertices should be contained in the subgame"
        );
        debug_assert!(self.is_trap(&S), "The induced subgame should not deadlock");

        SubGame::new(self.arena, S)
    }
}

/// Displays a set of vertices by their identifiers.
pub struct DisplaySet<'a> {
    arena: &'a Arena,
    set: &'a Set,
}

impl<'a> DisplaySet<'a> {
    pub fn new(arena: &'a Arena, set: &'a Set) -> Self {
        Self { arena, set }
    }
}

impl fmt::Display for DisplaySet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.set
                .iter_ones()
                .map(|v| self.arena.identifier(VertexIndex::new(v)))
                .format(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::Arena;
    use crate::DisplaySet;
    use crate::GameError;
    use crate::Player;
    use crate::Priority;
    use crate::SubGame;
    use crate::empty_set;

    /// A triangle a -> b -> c -> a with an extra edge c -> b.
    fn triangle() -> Arena {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 4).unwrap();
        arena.add_node("b", Player::Odd, 1).unwrap();
        arena.add_node("c", Player::Even, 4).unwrap();
        arena.add_edge("a", "b").unwrap();
        arena.add_edge("b", "c").unwrap();
        arena.add_edge("c", "a").unwrap();
        arena.add_edge("c", "b").unwrap();
        arena
    }

    #[test]
    fn test_priorities() {
        let arena = triangle();
        let game = arena.full_game();

        assert_eq!(game.max_priority(), Ok(Priority::new(4)));

        let U = game.vertices_with_priority(Priority::new(4));
        assert_eq!(DisplaySet::new(&arena, &U).to_string(), "{a, c}");
        assert!(game.vertices_with_priority(Priority::new(2)).not_any());
    }

    #[test]
    fn test_empty_subgame() {
        let arena = triangle();
        let game = SubGame::new(&arena, empty_set(&arena));

        assert!(game.is_empty());
        assert_eq!(game.max_priority(), Err(GameError::EmptyArena));
    }

    #[test]
    fn test_induced_subgame() {
        let arena = triangle();
        let game = arena.full_game();
        let a = arena.vertex("a").unwrap();
        let b = arena.vertex("b").unwrap();
        let c = arena.vertex("c").unwrap();

        let mut A = empty_set(&arena);
        A.set(*a, true);

        let C = game.complement(&A);
        assert!(game.is_trap(&C));

        let subgame = game.induced_subgame(C);
        assert_eq!(subgame.num_of_vertices(), 2);
        assert!(!subgame.contains(a));
        assert_eq!(subgame.outgoing_edges(c).collect::<Vec<_>>(), vec![b]);
        assert_eq!(subgame.max_priority(), Ok(Priority::new(4)));

        // The complement is a fresh set, A itself is untouched.
        assert_eq!(A.count_ones(), 1);
        assert_eq!(game.num_of_vertices(), 3);
    }

    #[test]
    fn test_not_a_trap() {
        let arena = triangle();
        let game = arena.full_game();

        let mut S = empty_set(&arena);
        S.set(*arena.vertex("a").unwrap(), true);
        S.set(*arena.vertex("b").unwrap(), true);

        assert!(!game.is_trap(&S));
    }

    #[test]
    fn test_subgame_deadlock() {
        let arena = triangle();
        let game = arena.full_game();
        assert_eq!(game.check_total(), Ok(()));

        // Without c, the vertex b has no successor left.
        let mut S = empty_set(&arena);
        S.set(*arena.vertex("a").unwrap(), true);
        S.set(*arena.vertex("b").unwrap(), true);

        let subgame = SubGame::new(&arena, S);
        assert_eq!(subgame.check_total(), Err(GameError::ArenaDeadlock("b".to_string())));
    }
}
