#![allow(nonstandard_style)]

use log::trace;

use crate::GameError;
use crate::Player;
use crate::Set;
use crate::SubGame;
use crate::VertexIndex;

/// Computes the attractor for `alpha` to the set `U` within the given subgame.
///
/// This is the smallest superset `A` of `U` containing every vertex of `alpha`
/// with some successor in `A`, and every vertex of the opponent whose successors
/// are all in `A`. The vertices of the subgame outside of `A` form a trap for
/// `alpha`, so they induce a subgame without deadlocks.
///
/// The given set is copied. Fails with [GameError::ArenaDeadlock] when a vertex
/// outside of `U` has no successors in the subgame.
pub fn attractor(game: &SubGame<'_>, alpha: Player, U: &Set) -> Result<Set, GameError> {
    let arena = game.arena();
    debug_assert!(
        U.iter_ones().all(|v| game.contains(VertexIndex::new(v))),
        "The target set should be contained in the subgame"
    );

    let mut A = U.clone();

    // For every vertex outside of A, the number of successors that are not yet attracted.
    let mut remaining = vec![0usize; arena.num_of_vertices()];
    for v in game.iter_vertices() {
        if A[*v] {
            continue;
        }

        let successors = game.outgoing_edges(v).count();
        if successors == 0 {
            return Err(GameError::ArenaDeadlock(arena.identifier(v).to_string()));
        }
        remaining[v] = successors;
    }

    // 1. Q = {v \in U}
    let mut queue: Vec<VertexIndex> = A.iter_ones().map(VertexIndex::new).collect();

    // 2. While Q is not empty do
    // 3. w := Q.pop()
    while let Some(w) = queue.pop() {
        // For every u with u -> w in the subgame do
        for v in arena.incoming_edges(w) {
            if !game.contains(v) || A[*v] {
                continue;
            }

            let attracted = if game.owner(v) == alpha {
                true
            } else {
                // Edges are unique, so every successor of v is counted once.
                remaining[v] -= 1;
                remaining[v] == 0
            };

            if attracted {
                A.set(*v, true);
                queue.push(v);
            }
        }
    }

    trace!(
        "Attractor for {alpha} grew from {} to {} vertices",
        U.count_ones(),
        A.count_ones()
    );
    Ok(A)
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use test_log::test;

    use mcnz_utilities::random_test;

    use crate::Arena;
    use crate::GameError;
    use crate::Player;
    use crate::Set;
    use crate::SubGame;
    use crate::VertexIndex;
    use crate::attractor;
    use crate::empty_set;
    use crate::random_parity_game;

    /// The attractor as a naive fixpoint, rescanning all vertices until nothing changes.
    fn naive_attractor(game: &SubGame<'_>, alpha: Player, target: &Set) -> Set {
        let mut result = target.clone();

        loop {
            let added = game.iter_vertices().find(|&v| {
                !result[*v]
                    && if game.owner(v) == alpha {
                        game.outgoing_edges(v).any(|w| result[*w])
                    } else {
                        game.outgoing_edges(v).all(|w| result[*w])
                    }
            });

            match added {
                Some(v) => result.set(*v, true),
                None => return result,
            }
        }
    }

    fn random_target(rng: &mut impl Rng, game: &SubGame<'_>) -> Set {
        let mut target = empty_set(game.arena());
        for v in game.iter_vertices() {
            if rng.random_bool(0.2) {
                target.set(*v, true);
            }
        }
        target
    }

    #[test]
    fn test_attractor_chain() {
        // Odd owns b, which can only move into the target a, Even owns c which can choose b.
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 2).unwrap();
        arena.add_node("b", Player::Odd, 1).unwrap();
        arena.add_node("c", Player::Even, 1).unwrap();
        arena.add_node("d", Player::Odd, 0).unwrap();
        arena.add_edge("a", "a").unwrap();
        arena.add_edge("b", "a").unwrap();
        arena.add_edge("c", "b").unwrap();
        arena.add_edge("c", "d").unwrap();
        arena.add_edge("d", "c").unwrap();
        arena.add_edge("d", "d").unwrap();

        let game = arena.full_game();
        let mut target = empty_set(&arena);
        target.set(*arena.vertex("a").unwrap(), true);

        let even = attractor(&game, Player::Even, &target).unwrap();
        let expected: Vec<usize> = ["a", "b", "c"].iter().map(|id| *arena.vertex(id).unwrap()).collect();
        assert_eq!(even.iter_ones().collect::<Vec<_>>(), expected);

        // Odd can only attract b, since Even at c can move to d.
        let odd = attractor(&game, Player::Odd, &target).unwrap();
        assert_eq!(odd.count_ones(), 2);
        assert!(!odd[*arena.vertex("c").unwrap()]);

        // The target itself was not modified.
        assert_eq!(target.count_ones(), 1);
    }

    #[test]
    fn test_attractor_deadlock() {
        let mut arena = Arena::new();
        arena.add_node("a", Player::Even, 0).unwrap();
        arena.add_node("b", Player::Odd, 0).unwrap();
        arena.add_edge("a", "a").unwrap();

        let game = arena.full_game();
        let mut target = empty_set(&arena);
        target.set(*arena.vertex("a").unwrap(), true);

        assert_eq!(
            attractor(&game, Player::Even, &target),
            Err(GameError::ArenaDeadlock("b".to_string()))
        );
    }

    #[test]
    fn test_random_attractor_matches_fixpoint() {
        random_test(100, |rng| {
            let arena = random_parity_game(rng, true, 30, 4, 3);
            let game = arena.full_game();
            let target = random_target(rng, &game);

            for alpha in Player::ALL {
                let A = attractor(&game, alpha, &target).unwrap();
                assert_eq!(A, naive_attractor(&game, alpha, &target));
            }
        })
    }

    #[test]
    fn test_random_attractor_properties() {
        random_test(100, |rng| {
            let arena = random_parity_game(rng, true, 30, 4, 3);
            let game = arena.full_game();
            let target = random_target(rng, &game);

            for alpha in Player::ALL {
                let A = attractor(&game, alpha, &target).unwrap();

                // Contains the target and is idempotent.
                assert_eq!(A.clone() & &target, target);
                assert_eq!(attractor(&game, alpha, &A).unwrap(), A);

                // The complement is a trap, so its induced subgame has no deadlocks.
                let C = game.complement(&A);
                assert!(game.is_trap(&C));

                let subgame = game.induced_subgame(C);
                for v in subgame.iter_vertices() {
                    assert!(subgame.outgoing_edges(v).next().is_some());
                }
            }
        })
    }

    #[test]
    fn test_random_attractor_in_subgame() {
        random_test(50, |rng| {
            let arena = random_parity_game(rng, true, 30, 4, 3);
            let game = arena.full_game();

            // Restrict to the complement of a random attractor, and attract within that subgame.
            let first = attractor(&game, Player::Odd, &random_target(rng, &game)).unwrap();
            let subgame = game.induced_subgame(game.complement(&first));
            let target = random_target(rng, &subgame);

            for alpha in Player::ALL {
                let A = attractor(&subgame, alpha, &target).unwrap();
                assert_eq!(A, naive_attractor(&subgame, alpha, &target));
                assert!(A.iter_ones().all(|v| subgame.contains(VertexIndex::new(v))));
            }
        })
    }
}
