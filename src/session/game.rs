//! Game session implementation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Board, CellId, Token};
use crate::error::{Error, Result};
use crate::rules::{evaluate, Outcome};
use crate::search::{Decision, Minimax, MoveSelector};

use super::config::SessionConfig;

/// Whose turn it is, or how the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the human (`X`).
    HumanToMove,
    /// Waiting for the computer (`O`).
    ComputerToMove,
    /// Game over, `Token` owns a line.
    Won(Token),
    /// Game over, board full without a winner.
    Drawn,
}

impl TurnState {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, TurnState::Won(_) | TurnState::Drawn)
    }

    fn after_move(outcome: Outcome, mover: Token) -> Self {
        match outcome {
            Outcome::Won(token) => TurnState::Won(token),
            Outcome::Drawn => TurnState::Drawn,
            Outcome::InProgress => match mover {
                Token::X => TurnState::ComputerToMove,
                Token::O => TurnState::HumanToMove,
            },
        }
    }
}

/// End-of-game announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// A token won.
    Winner(Token),
    /// The game was drawn.
    Draw,
    /// The game was drawn and the session has seen enough draws.
    StrangeGame,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winner(token) => write!(f, "The winner is {}!", token),
            Verdict::Draw => write!(f, "Draw!"),
            Verdict::StrangeGame => {
                write!(f, "A strange game. The only winning move is not to play.")
            }
        }
    }
}

/// One human-versus-computer match, replayable via `reset`.
///
/// The human always moves first. Boards are replaced, never mutated, so
/// a board handed out by `board()` stays valid after later moves.
#[derive(Clone, Debug)]
pub struct GameSession<S: MoveSelector = Minimax> {
    board: Board,
    state: TurnState,
    selector: S,
    config: SessionConfig,
    times_drawn: u32,
}

impl GameSession<Minimax> {
    /// Create a session against the minimax computer.
    pub fn new() -> Self {
        Self::with_selector(Minimax::default(), SessionConfig::default())
    }
}

impl Default for GameSession<Minimax> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSelector> GameSession<S> {
    /// Create a session with a custom move selector.
    pub fn with_selector(selector: S, config: SessionConfig) -> Self {
        Self {
            board: Board::empty(),
            state: TurnState::HumanToMove,
            selector,
            config,
            times_drawn: 0,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Classification of the current board.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Number of drawn games over the session's lifetime.
    #[must_use]
    pub fn times_drawn(&self) -> u32 {
        self.times_drawn
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the move selector.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Place the human's token at `cell`.
    ///
    /// Fails with `NotHumanTurn` or `GameOver` outside the human's turn
    /// and with `CellOccupied` on a taken cell; the session is unchanged
    /// on error.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn human_move(&mut self, cell: CellId) -> Result<Outcome> {
        match self.state {
            TurnState::HumanToMove => {}
            TurnState::ComputerToMove => return Err(Error::NotHumanTurn),
            TurnState::Won(_) | TurnState::Drawn => return Err(Error::GameOver),
        }

        let next = self.board.try_apply_move(cell, Token::HUMAN)?;
        Ok(self.advance(next, Token::HUMAN))
    }

    /// Let the computer play its move.
    ///
    /// Fails with `NotComputerTurn` or `GameOver` outside the computer's
    /// turn.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn computer_move(&mut self) -> Result<Decision> {
        match self.state {
            TurnState::ComputerToMove => {}
            TurnState::HumanToMove => return Err(Error::NotComputerTurn),
            TurnState::Won(_) | TurnState::Drawn => return Err(Error::GameOver),
        }

        let decision = self.selector.select(&self.board)?;
        self.advance(decision.board, Token::COMPUTER);
        Ok(decision)
    }

    /// Human move followed by the computer's reply if the game goes on.
    ///
    /// Returns the outcome after the last move made.
    pub fn play_human_turn(&mut self, cell: CellId) -> Result<Outcome> {
        let outcome = self.human_move(cell)?;
        if outcome.is_decided() {
            return Ok(outcome);
        }

        self.computer_move()?;
        Ok(self.outcome())
    }

    /// Start a new game on an empty board. The draw tally is kept.
    pub fn reset(&mut self) {
        debug!(times_drawn = self.times_drawn, "session reset");
        self.board = Board::empty();
        self.state = TurnState::HumanToMove;
    }

    /// Announcement for a finished game, `None` while it is running.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.state {
            TurnState::Won(token) => Some(Verdict::Winner(token)),
            TurnState::Drawn => {
                let threshold = self.config.strange_game_after;
                if threshold > 0 && self.times_drawn >= threshold {
                    Some(Verdict::StrangeGame)
                } else {
                    Some(Verdict::Draw)
                }
            }
            TurnState::HumanToMove | TurnState::ComputerToMove => None,
        }
    }

    fn advance(&mut self, next: Board, mover: Token) -> Outcome {
        let outcome = evaluate(&next);
        self.board = next;
        self.state = TurnState::after_move(outcome, mover);

        if outcome == Outcome::Drawn {
            self.times_drawn += 1;
        }
        if outcome.is_decided() {
            info!(?outcome, times_drawn = self.times_drawn, "game over");
        } else {
            debug!(%mover, state = ?self.state, "turn passed");
        }

        outcome
    }
}
