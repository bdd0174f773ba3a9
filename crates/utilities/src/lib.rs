#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

mod error;
mod tagged_index;
mod test_logger;
mod timing;

pub use error::*;
pub use random_test::*;
pub use tagged_index::*;
pub use test_logger::*;
pub use timing::*;
