#![allow(nonstandard_style)]
//! To keep with the theory, we use capitalized variable names for sets of vertices.
//!
//! Implements the recursive algorithm of McNaughton and Zielonka for an [Arena].

use std::fmt;

use log::debug;
use log::info;
use log::trace;

use crate::Arena;
use crate::DisplaySet;
use crate::GameError;
use crate::Player;
use crate::Set;
use crate::SubGame;
use crate::WinningPartition;
use crate::attractor;
use crate::empty_set;

/// Solves the given parity game, returning the winning regions of both players.
///
/// Fails with [GameError::ArenaDeadlock] when a node has no outgoing edges.
pub fn solve_zielonka(arena: &Arena) -> Result<WinningPartition, GameError> {
    arena.check_total()?;

    info!(
        "Solving parity game with {} vertices and {} edges...",
        arena.num_of_vertices(),
        arena.num_of_edges()
    );

    let W = solve_total(&arena.full_game())?;
    Ok(WinningPartition::from_sets(arena, &W))
}

/// Solves the given subgame, returning the winning sets ordered as (even, odd).
///
/// Fails with [GameError::ArenaDeadlock] when a vertex has no successor in the subgame.
pub fn solve_zielonka_sets(game: &SubGame<'_>) -> Result<[Set; 2], GameError> {
    game.check_total()?;
    solve_total(game)
}

/// Runs the recursion on a subgame that is known to be deadlock free.
fn solve_total(game: &SubGame<'_>) -> Result<[Set; 2], GameError> {
    let mut zielonka = ZielonkaSolver::new(game.arena());
    let W = zielonka.zielonka_rec(game.induced_subgame(game.vertices().clone()), 0)?;

    debug!("Performed {} recursive calls", zielonka.recursive_calls);
    Ok(W)
}

struct ZielonkaSolver<'a> {
    arena: &'a Arena,

    /// Keeps track of the total number of recursive calls.
    recursive_calls: usize,
}

impl<'a> ZielonkaSolver<'a> {
    fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            recursive_calls: 0,
        }
    }

    /// Recursively solves the given subgame, the result is indexed by [Player::to_index].
    fn zielonka_rec(&mut self, game: SubGame<'a>, depth: usize) -> Result<[Set; 2], GameError> {
        self.recursive_calls += 1;
        let indent = Repeat::new("|  ", depth);

        if game.is_empty() {
            return Ok([empty_set(self.arena), empty_set(self.arena)]);
        }

        let highest_prio = game.max_priority()?;
        if *highest_prio == 0 {
            debug!(
                "{}|V| = {}, only priority 0, even wins everywhere",
                indent,
                game.num_of_vertices()
            );
            return Ok(self.won_by(Player::Even, &game));
        }

        let alpha = Player::from_priority(&highest_prio);
        let not_alpha = alpha.opponent();

        // The vertices U with the highest priority in V.
        let U = game.vertices_with_priority(highest_prio);

        debug!(
            "{}|V| = {}, highest prio = {}, player = {}, |U| = {}",
            indent,
            game.num_of_vertices(),
            highest_prio,
            alpha,
            U.count_ones()
        );
        trace!("{}Vertices in U: {}", indent, DisplaySet::new(self.arena, &U));

        let A = attractor(&game, alpha, &U)?;

        trace!("{}Vertices in A: {}", indent, DisplaySet::new(self.arena, &A));
        debug!("{}zielonka(V \\ A) |A| = {}", indent, A.count_ones());
        let W1 = self.zielonka_rec(game.induced_subgame(game.complement(&A)), depth + 1)?;

        if !W1[not_alpha.to_index()].any() {
            debug!("{}{} wins everywhere", indent, alpha);
            return Ok(self.won_by(alpha, &game));
        }

        let B = attractor(&game, not_alpha, &W1[not_alpha.to_index()])?;

        trace!("{}Vertices in B: {}", indent, DisplaySet::new(self.arena, &B));
        debug!("{}zielonka(V \\ B) |B| = {}", indent, B.count_ones());
        let mut W2 = self.zielonka_rec(game.induced_subgame(game.complement(&B)), depth + 1)?;

        W2[not_alpha.to_index()] |= B;

        self.check_partition(&W2, &game);
        Ok(W2)
    }

    /// The solution in which `player` wins every vertex of the subgame.
    fn won_by(&self, player: Player, game: &SubGame<'a>) -> [Set; 2] {
        let mut W = [empty_set(self.arena), empty_set(self.arena)];
        W[player.to_index()] = game.vertices().clone();

        self.check_partition(&W, game);
        W
    }

    /// Checks that the given solution is a partition of the vertices of the subgame.
    fn check_partition(&self, W: &[Set; 2], game: &SubGame<'a>) {
        if cfg!(debug_assertions) {
            let intersection = W[0].clone() & &W[1];
            if intersection.any() {
                panic!(
                    "The winning sets are not disjoint. Vertices in both sets: {}",
                    DisplaySet::new(self.arena, &intersection)
                );
            }

            let both = W[0].clone() | &W[1];
            if both != *game.vertices() {
                let missing = game.vertices().clone() ^ &both;
                panic!(
                    "The winning sets do not match the vertices. Vertices in only one of them: {}",
                    DisplaySet::new(self.arena, &missing)
                );
            }
        }
    }
}

/// Utility to print a repeated static string a given number of times.
struct Repeat {
    s: &'static str,
    times: usize,
}

impl Repeat {
    fn new(s: &'static str, times: usize) -> Self {
        Self { s, times }
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.times {
            f.write_str(self.s)?;
        }
        Ok(())
    }
}
