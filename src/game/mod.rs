//! Core tic-tac-toe game logic: board representation, player identities, and
//! the turn/outcome state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Mark, CELLS, SIDE, WIN_LINES};
pub use player::Player;
pub use state::{GameOutcome, GameState};
