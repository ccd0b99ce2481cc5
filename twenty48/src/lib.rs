pub use cell::*;
pub use errors::*;
pub use game::*;
pub use grid::*;
pub use protocol::*;
pub use tile::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cell;
mod errors;
mod game;
mod grid;
mod movement;
mod protocol;
mod tile;
mod visualization;
