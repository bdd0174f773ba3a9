#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod arena;
mod attractor;
mod error;
mod partition;
mod player;
mod random_game;
mod sample_games;
mod sub_game;
mod zielonka;

pub use arena::*;
pub use attractor::*;
pub use error::*;
pub use partition::*;
pub use player::*;
pub use random_game::*;
pub use sample_games::*;
pub use sub_game::*;
pub use zielonka::*;
