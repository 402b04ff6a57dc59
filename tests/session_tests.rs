//! Game session integration tests against the minimax computer.

use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use unbeatable_ttt::search::{Minimax, SearchConfig};
use unbeatable_ttt::{
    minimax, Board, CellId, Error, GameSession, Outcome, SessionConfig, Token, TurnState, Verdict,
};

fn optimal_human_move(board: &Board) -> CellId {
    let mut best: Option<(CellId, i32)> = None;
    for cell in board.empty_cells() {
        let score = minimax(&board.apply_move(cell, Token::X), true, 1);
        if best.map_or(true, |(_, b)| score < b) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell).expect("board has an empty cell")
}

fn play_to_end(session: &mut GameSession, mut human: impl FnMut(&Board) -> CellId) -> Outcome {
    let mut outcome = Outcome::InProgress;
    while !session.is_over() {
        let cell = human(&session.board());
        outcome = session.play_human_turn(cell).unwrap();
    }
    outcome
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_human_moves_first() {
    let mut session = GameSession::new();

    assert_eq!(session.state(), TurnState::HumanToMove);
    assert_eq!(session.computer_move(), Err(Error::NotComputerTurn));
}

#[test]
fn test_play_human_turn_adds_two_tokens() {
    let mut session = GameSession::new();
    session.play_human_turn(CellId::new(0, 0)).unwrap();

    let board = session.board();
    assert_eq!(board.count(Token::X), 1);
    assert_eq!(board.count(Token::O), 1);
    assert_eq!(board.get(CellId::new(1, 1)).token(), Some(Token::O));
    assert_eq!(session.state(), TurnState::HumanToMove);
}

#[test]
fn test_manual_computer_move() {
    let mut session = GameSession::new();
    session.human_move(CellId::new(0, 2)).unwrap();

    let decision = session.computer_move().unwrap();
    assert_eq!(decision.cell, CellId::new(1, 1));
    assert_eq!(decision.board, session.board());
    assert_eq!(session.selector().stats().decisions, 1);
}

// =============================================================================
// Game End
// =============================================================================

#[test]
fn test_optimal_play_draws() {
    let mut session = GameSession::new();
    let outcome = play_to_end(&mut session, optimal_human_move);

    assert_eq!(outcome, Outcome::Drawn);
    assert_eq!(session.state(), TurnState::Drawn);
    assert_eq!(session.verdict(), Some(Verdict::Draw));
    assert_eq!(session.times_drawn(), 1);
    assert_eq!(session.human_move(CellId::new(0, 0)), Err(Error::GameOver));
}

#[test]
fn test_strange_game_after_three_draws() {
    let mut session = GameSession::new();

    for game in 1..=3 {
        play_to_end(&mut session, optimal_human_move);
        assert_eq!(session.times_drawn(), game);
        if game < 3 {
            assert_eq!(session.verdict(), Some(Verdict::Draw));
        }
        session.reset();
    }

    play_to_end(&mut session, optimal_human_move);
    assert_eq!(session.times_drawn(), 4);
    assert_eq!(
        session.verdict().map(|v| v.to_string()).as_deref(),
        Some("A strange game. The only winning move is not to play.")
    );
}

#[test]
fn test_strange_game_can_be_disabled() {
    let config = SessionConfig::new().with_strange_game_after(0);
    let mut session = GameSession::with_selector(Minimax::new(SearchConfig::default()).unwrap(), config);

    for _ in 0..4 {
        session.reset();
        play_to_end(&mut session, optimal_human_move);
    }

    assert_eq!(session.verdict(), Some(Verdict::Draw));
}

#[test]
fn test_random_humans_never_win_a_session() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = GameSession::new();
    let mut draws = 0;

    for _ in 0..30 {
        let outcome = play_to_end(&mut session, |board| {
            board
                .empty_cells()
                .choose(&mut rng)
                .expect("board has an empty cell")
        });

        assert_ne!(outcome, Outcome::Won(Token::X));
        if outcome == Outcome::Drawn {
            draws += 1;
        }
        session.reset();
    }

    assert_eq!(session.times_drawn(), draws);
    assert_eq!(session.board(), Board::empty());
}
