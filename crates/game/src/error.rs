use thiserror::Error;

/// The errors that can occur while constructing or solving a parity game.
///
/// None of these can be recovered from within a single solve, the caller decides
/// whether to report them or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A node with identifier '{0}' already exists")]
    DuplicateNode(String),

    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    #[error("Node '{0}' has no outgoing edges, the arena must be deadlock free")]
    ArenaDeadlock(String),

    /// Only returned when the maximal priority of an empty (sub)game is requested.
    #[error("An empty arena has no maximal priority")]
    EmptyArena,
}
