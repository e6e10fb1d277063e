//! A Sokoban board: parse a level, push boxes around, check for a win.
//!
//! ```
//! use sokoban::Board;
//!
//! let mut board = Board::from_lines(["#####", "#@$.#", "#####"]).unwrap();
//! assert!(board.move_right());
//! assert!(board.is_solved());
//! ```

mod board;
mod entity;
mod error;
mod levels;
mod location;
mod notation;
mod parse;
mod walk;

pub use board::{Board, Step, Tile};
pub use entity::{Crate, CrateId, Player, Storage, Wall};
pub use error::{LevelError, ParseError};
pub use levels::Levels;
pub use location::{ALL_DIRECTIONS, Direction, Location};
pub use notation::{NotationError, Replay, parse_moves};
pub use parse::{parse_lines, parse_text};
pub use walk::random_walk;
