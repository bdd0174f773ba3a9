use std::fmt;

use itertools::Itertools;
use log::trace;
use rustc_hash::FxHashMap;

use mcnz_utilities::TagIndex;

use crate::GameError;
use crate::Player;
use crate::SubGame;

/// A strong type for the vertices.
pub struct VertexTag;

/// A strong type for the priorities.
pub struct PriorityTag;

/// The index for a vertex.
pub type VertexIndex = TagIndex<usize, VertexTag>;

/// The strong type for a priority.
pub type Priority = TagIndex<usize, PriorityTag>;

/// The game graph of an explicit max-priority parity game, meaning that higher
/// priority values are more significant.
///
/// Nodes are identified by a caller chosen string and are assigned a dense
/// [VertexIndex] in the order in which they are added. Nodes and edges can only
/// be added, never removed, and duplicate edges are collapsed.
#[derive(Default)]
pub struct Arena {
    /// Stores the identifier of every vertex.
    identifiers: Vec<String>,

    /// Maps an identifier back to its vertex.
    lookup: FxHashMap<String, VertexIndex>,

    /// Stores the owner of every vertex.
    owner: Vec<Player>,

    /// Stores the priority of every vertex.
    priority: Vec<Priority>,

    successors: Vec<Vec<VertexIndex>>,
    predecessors: Vec<Vec<VertexIndex>>,

    num_of_edges: usize,
}

impl Arena {
    /// Creates an arena without any nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given identifier, owner and priority.
    ///
    /// Fails with [GameError::DuplicateNode] when the identifier is already in
    /// use, in which case the arena is unchanged.
    pub fn add_node(&mut self, id: impl Into<String>, owner: Player, priority: usize) -> Result<VertexIndex, GameError> {
        let id = id.into();
        if self.lookup.contains_key(&id) {
            return Err(GameError::DuplicateNode(id));
        }

        let vertex = VertexIndex::new(self.identifiers.len());
        trace!("Added node {id} as vertex {vertex}, owner {owner}, priority {priority}");

        self.lookup.insert(id.clone(), vertex);
        self.identifiers.push(id);
        self.owner.push(owner);
        self.priority.push(Priority::new(priority));
        self.successors.push(Vec::new());
        self.predecessors.push(Vec::new());

        Ok(vertex)
    }

    /// Adds an edge between two existing nodes. Returns false when the edge was
    /// already present, in which case nothing changes.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<bool, GameError> {
        let from = self.vertex(from).ok_or_else(|| GameError::UnknownNode(from.to_string()))?;
        let to = self.vertex(to).ok_or_else(|| GameError::UnknownNode(to.to_string()))?;

        Ok(self.add_vertex_edge(from, to))
    }

    /// Same as [Self::add_edge], but for vertices that are known to exist.
    pub fn add_vertex_edge(&mut self, from: VertexIndex, to: VertexIndex) -> bool {
        debug_assert!(
            *from < self.num_of_vertices() && *to < self.num_of_vertices(),
            "Vertex index out of bounds: from {from:?}, to {to:?}"
        );

        if self.successors[from].contains(&to) {
            return false;
        }

        self.successors[from].push(to);
        self.predecessors[to].push(from);
        self.num_of_edges += 1;
        true
    }

    /// Returns the vertex with the given identifier, if it exists.
    pub fn vertex(&self, id: &str) -> Option<VertexIndex> {
        self.lookup.get(id).copied()
    }

    /// Returns the identifier of the given vertex.
    pub fn identifier(&self, vertex: VertexIndex) -> &str {
        &self.identifiers[vertex]
    }

    pub fn num_of_vertices(&self) -> usize {
        self.identifiers.len()
    }

    pub fn num_of_edges(&self) -> usize {
        self.num_of_edges
    }

    /// Returns an iterator over all vertices, in the order they were added.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.num_of_vertices()).map(VertexIndex::new)
    }

    /// Returns an iterator over the successors of the given vertex.
    pub fn outgoing_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.successors[vertex].iter().copied()
    }

    /// Returns an iterator over the vertices with an edge to the given vertex.
    pub fn incoming_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        self.predecessors[vertex].iter().copied()
    }

    pub fn owner(&self, vertex: VertexIndex) -> Player {
        self.owner[vertex]
    }

    pub fn priority(&self, vertex: VertexIndex) -> Priority {
        self.priority[vertex]
    }

    /// Returns true iff every vertex has at least one outgoing edge.
    pub fn is_total(&self) -> bool {
        self.check_total().is_ok()
    }

    /// Fails with [GameError::ArenaDeadlock] for the first vertex without
    /// outgoing edges.
    pub fn check_total(&self) -> Result<(), GameError> {
        match self.iter_vertices().find(|v| self.successors[*v].is_empty()) {
            Some(v) => Err(GameError::ArenaDeadlock(self.identifier(v).to_string())),
            None => Ok(()),
        }
    }

    /// Returns the whole arena as a subgame.
    pub fn full_game(&self) -> SubGame<'_> {
        SubGame::full(self)
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arena {{")?;
        writeln!(f, "  num_vertices: {},", self.num_of_vertices())?;
        writeln!(f, "  num_edges: {},", self.num_of_edges())?;
        writeln!(f, "  vertices: [")?;
        for v in self.iter_vertices() {
            writeln!(
                f,
                "    {}: ({}, priority: {}, outgoing: [{}]),",
                self.identifier(v),
                self.owner(v),
                self.priority(v),
                self.outgoing_edges(v).map(|w| self.identifier(w)).format(", ")
            )?;
        }
        writeln!(f, "  ]")?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::Arena;
    use crate::GameError;
    use crate::Player;

    #[test]
    fn test_duplicate_node() {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 2).unwrap();

        assert_eq!(
            arena.add_node("a", Player::Odd, 1),
            Err(GameError::DuplicateNode("a".to_string()))
        );

        // The rejected node left the arena unchanged.
        assert_eq!(arena.num_of_vertices(), 1);
        let a = arena.vertex("a").unwrap();
        assert_eq!(arena.owner(a), Player::Even);
        assert_eq!(*arena.priority(a), 2);
    }

    #[test]
    fn test_unknown_node() {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 0).unwrap();

        assert_eq!(arena.add_edge("a", "b"), Err(GameError::UnknownNode("b".to_string())));
        assert_eq!(arena.add_edge("c", "a"), Err(GameError::UnknownNode("c".to_string())));
        assert_eq!(arena.num_of_edges(), 0);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 0).unwrap();
        arena.add_node("b", Player::Odd, 1).unwrap();

        assert_eq!(arena.add_edge("a", "b"), Ok(true));
        assert_eq!(arena.add_edge("a", "b"), Ok(false));
        assert_eq!(arena.add_edge("b", "b"), Ok(true));

        assert_eq!(arena.num_of_edges(), 2);

        let a = arena.vertex("a").unwrap();
        let b = arena.vertex("b").unwrap();
        assert_eq!(arena.outgoing_edges(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(arena.incoming_edges(b).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_identity_not_structure() {
        // Two nodes with the same owner and priority are still different nodes.
        let mut arena = Arena::new();
        let x = arena.add_node("x", Player::Odd, 3).unwrap();
        let y = arena.add_node("y", Player::Odd, 3).unwrap();

        assert_ne!(x, y);
        assert_eq!(arena.identifier(x), "x");
        assert_eq!(arena.identifier(y), "y");
    }

    #[test]
    fn test_check_total() {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 0).unwrap();
        arena.add_node("b", Player::Odd, 1).unwrap();
        arena.add_edge("a", "b").unwrap();

        assert!(!arena.is_total());
        assert_eq!(arena.check_total(), Err(GameError::ArenaDeadlock("b".to_string())));

        arena.add_edge("b", "a").unwrap();
        assert!(arena.is_total());
    }
}
