use crate::Arena;
use crate::GameError;
use crate::Player;

/// Adds the given nodes and edges to a new arena.
fn build_arena(nodes: &[(&str, Player, usize)], edges: &[(&str, &str)]) -> Result<Arena, GameError> {
    let mut arena = Arena::new();
    for &(id, owner, priority) in nodes {
        arena.add_node(id, owner, priority)?;
    }

    for &(from, to) in edges {
        arena.add_edge(from, to)?;
    }

    Ok(arena)
}

/// A small game on the nodes `a` to `h`. Even wins from `a`, `g` and `h`.
pub fn sample_arena() -> Result<Arena, GameError> {
    use Player::*;

    build_arena(
        &[
            ("a", Even, 2),
            ("b", Odd, 2),
            ("c", Even, 1),
            ("d", Odd, 0),
            ("e", Even, 1),
            ("f", Odd, 0),
            ("g", Even, 0),
            ("h", Even, 0),
        ],
        &[
            ("a", "b"),
            ("a", "h"),
            ("b", "c"),
            ("b", "d"),
            ("c", "b"),
            ("d", "c"),
            ("d", "f"),
            ("e", "d"),
            ("f", "e"),
            ("f", "h"),
            ("g", "f"),
            ("g", "h"),
            ("h", "g"),
            ("h", "a"),
        ],
    )
}

/// Two rails of eight nodes with priorities 0 to 7. The primed rail `a'` to
/// `h'` is owned by Even and the rail `a` to `h` by Odd. Every node is linked to
/// its counterpart on the other rail, with additional rungs between the rails.
pub fn ladder_arena() -> Result<Arena, GameError> {
    const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

    let primed: Vec<String> = NAMES.iter().map(|name| format!("{name}'")).collect();

    let mut nodes = Vec::new();
    for (priority, name) in primed.iter().enumerate() {
        nodes.push((name.as_str(), Player::Even, priority));
    }
    for (priority, name) in NAMES.iter().enumerate() {
        nodes.push((*name, Player::Odd, priority));
    }

    // Every node moves to its counterpart on the other rail.
    let mut edges = Vec::new();
    for (name, primed_name) in NAMES.iter().zip(primed.iter()) {
        edges.push((primed_name.as_str(), *name));
        edges.push((*name, primed_name.as_str()));
    }

    edges.extend([
        ("a'", "b"),
        ("b'", "c"),
        ("b", "c'"),
        ("c", "d'"),
        ("d'", "e"),
        ("d", "e'"),
        ("e'", "f"),
        ("f'", "g"),
        ("f", "g'"),
        ("f", "h'"),
        ("c'", "h"),
        ("g'", "d"),
        ("h", "a"),
        ("e", "b'"),
        ("a", "f'"),
    ]);

    build_arena(&nodes, &edges)
}
