//! Tic-tac-toe rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Error, PlayerId, Result};
use crate::rules::{Game, Utility};

use super::board::{Board, Move};

/// A tic-tac-toe position: the board plus the player to move.
///
/// Fields are private so every state comes from `initial_state`, `result`
/// or `state_from_board`, all of which only produce legal positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    to_move: PlayerId,
    board: Board,
}

impl TicTacToeState {
    /// Player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// The classic 3x3 game. Player 0 plays `x` and moves first.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    pub fn new() -> Self {
        Self
    }

    /// Check if `player` has three in a row on `state`.
    #[must_use]
    pub fn is_winner(&self, state: &TicTacToeState, player: PlayerId) -> bool {
        state.board.has_line(player)
    }

    /// Build a state from an arbitrary board.
    ///
    /// The player to move follows from the mark counts: the first player
    /// has either as many marks as the second (first to move) or one more
    /// (second to move). Only the player who moved last may own a line.
    pub fn state_from_board(&self, board: Board) -> Result<TicTacToeState> {
        let first = board.count(PlayerId::FIRST);
        let second = board.count(PlayerId::SECOND);

        let to_move = if first == second {
            PlayerId::FIRST
        } else if first == second + 1 {
            PlayerId::SECOND
        } else {
            return Err(Error::InvalidBoard {
                reason: format!(
                    "mark counts {first} and {second} cannot arise from alternating play"
                ),
            });
        };

        if board.has_line(to_move) {
            return Err(Error::InvalidBoard {
                reason: format!("{to_move} has a line but is still to move"),
            });
        }

        Ok(TicTacToeState { to_move, board })
    }

    /// Parse a board (see `Board`'s `FromStr`) straight into a state.
    pub fn parse_state(&self, s: &str) -> Result<TicTacToeState> {
        self.state_from_board(s.parse()?)
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = Move;

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState {
            to_move: PlayerId::FIRST,
            board: Board::empty(),
        }
    }

    fn to_move(&self, state: &TicTacToeState) -> PlayerId {
        state.to_move
    }

    fn actions(&self, state: &TicTacToeState) -> Vec<Move> {
        // A decided board may still have empty cells.
        if self.is_terminal(state) {
            return Vec::new();
        }
        state.board.empty_cells().collect()
    }

    fn result(&self, state: &TicTacToeState, action: &Move) -> Result<TicTacToeState> {
        let legal = action.in_bounds()
            && state.board.get(action.row, action.col).is_some_and(|c| c.is_empty())
            && !self.is_terminal(state);
        if !legal {
            return Err(Error::invalid_action(action, &state.board));
        }

        Ok(TicTacToeState {
            to_move: state.to_move.opponent(),
            board: state.board.with_mark(*action, state.to_move),
        })
    }

    /// Only the player who just moved can have completed a line, so the
    /// player to move is never checked.
    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        self.is_winner(state, state.to_move.opponent()) || state.board.is_full()
    }

    fn utility(&self, state: &TicTacToeState, player: PlayerId) -> Result<Utility> {
        if !self.is_terminal(state) {
            return Err(Error::utility_of_non_terminal());
        }

        Ok(if self.is_winner(state, player) {
            1.0
        } else if self.is_winner(state, player.opponent()) {
            -1.0
        } else {
            0.0
        })
    }
}
