#![warn(unused_crate_dependencies)]
pub mod deck;
pub mod error;
pub mod machine;
pub mod roster;
pub mod session;
pub mod shuffle;
pub mod view;

pub use deck::{IMPOSTOR_COUNT, MIN_PLAYERS};
pub use roster::MAX_NAME_LENGTH;
