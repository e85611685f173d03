//! Tic-tac-toe for testing the search engine.
//!
//! - Player 0 (`x`) moves first, turns alternate
//! - A move marks one empty cell
//! - Three in a row, column or diagonal wins; a full board is a draw
//!
//! Small enough that every reachable position can be searched exhaustively.

mod board;
mod game;

pub use board::{Board, Cell, Move, LINES, SIZE};
pub use game::{TicTacToe, TicTacToeState};
