use rand::Rng;
use rand::seq::SliceRandom;

use crate::Arena;
use crate::Player;
use crate::VertexIndex;

/// Creates a random parity game with the given number of vertices, priorities
/// and maximal outdegree. The vertices are named `v0`, `v1`, and so on.
///
/// When `make_total` is true every vertex without outgoing edges receives a
/// self-loop, and its priority is changed such that the loop is won by the
/// opponent of its owner.
pub fn random_parity_game(
    rng: &mut impl Rng,
    make_total: bool,
    num_of_vertices: usize,
    num_of_priorities: usize,
    outdegree: usize,
) -> Arena {
    assert!(num_of_vertices > 0, "Parity game must have at least one vertex");
    assert!(num_of_priorities > 0, "Parity game must have at least one priority");

    let owner: Vec<Player> = (0..num_of_vertices)
        .map(|_| Player::from_index(rng.random_range(0..2)))
        .collect();

    let mut priority: Vec<usize> = (0..num_of_vertices)
        .map(|_| rng.random_range(0..num_of_priorities))
        .collect();

    // For each vertex, generate 0..=outdegree outgoing edges, there are at most
    // num_of_vertices distinct targets.
    let outdegree = outdegree.min(num_of_vertices);
    let mut edge_list: Vec<(usize, usize)> = Vec::new();
    for v in 0..num_of_vertices {
        let count = rng.random_range(0..=outdegree);
        if count == 0 && make_total {
            edge_list.push((v, v));
            priority[v] = owner[v].opponent().to_index();
        }

        for _ in 0..count {
            edge_list.push((v, rng.random_range(0..num_of_vertices)));
        }
    }

    let mut arena = Arena::new();
    for v in 0..num_of_vertices {
        arena
            .add_node(format!("v{v}"), owner[v], priority[v])
            .expect("Generated identifiers are unique");
    }

    for (from, to) in edge_list {
        arena.add_vertex_edge(VertexIndex::new(from), VertexIndex::new(to));
    }

    arena
}

/// Rebuilds the given arena, adding its nodes and edges in a random order. The
/// result is the same game, but with different vertex indices.
pub fn shuffle_arena(rng: &mut impl Rng, arena: &Arena) -> Arena {
    let mut vertices: Vec<VertexIndex> = arena.iter_vertices().collect();
    vertices.shuffle(rng);

    let mut edges: Vec<(VertexIndex, VertexIndex)> = arena
        .iter_vertices()
        .flat_map(|v| arena.outgoing_edges(v).map(move |w| (v, w)))
        .collect();
    edges.shuffle(rng);

    let mut result = Arena::new();
    for v in vertices {
        result
            .add_node(arena.identifier(v), arena.owner(v), *arena.priority(v))
            .expect("Identifiers of an arena are unique");
    }

    for (from, to) in edges {
        result
            .add_edge(arena.identifier(from), arena.identifier(to))
            .expect("Both endpoints were added before");
    }

    result
}
