use core::fmt;

use crate::Priority;

/// The two players of a parity game. Even priorities favour [Player::Even].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Player {
    Even,
    Odd,
}

impl Player {
    /// Both players, ordered by their index.
    pub const ALL: [Player; 2] = [Player::Even, Player::Odd];

    /// Constructs a player from its index, where 0 is Even and 1 is Odd. This is
    /// the order used for the pairs of winning regions.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Player::Even,
            1 => Player::Odd,
            _ => panic!("Invalid player index {index}"),
        }
    }

    /// Returns the player favoured by the parity of the given priority.
    pub fn from_priority(priority: &Priority) -> Self {
        if priority.value() % 2 == 0 {
            Player::Even
        } else {
            Player::Odd
        }
    }

    /// The inverse of [Self::from_index].
    pub fn to_index(&self) -> usize {
        match self {
            Player::Even => 0,
            Player::Odd => 1,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Even => write!(f, "even"),
            Player::Odd => write!(f, "odd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Player;
    use crate::Priority;

    #[test]
    fn test_priority_parity() {
        assert_eq!(Player::from_priority(&Priority::new(0)), Player::Even);
        assert_eq!(Player::from_priority(&Priority::new(7)), Player::Odd);
        assert_eq!(Player::from_priority(&Priority::new(12)), Player::Even);
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
            assert_eq!(Player::from_index(player.to_index()), player);
        }
    }
}
