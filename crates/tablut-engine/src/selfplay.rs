use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tablut_core::{move_to_text, Board, BoardError, Move, Side};

use crate::alphabeta::{AlphaBetaConfig, AlphaBetaSearcher};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: GameResult,
    pub reason: EndReason,
    /// Moves actually played; a forfeit adds none.
    pub total_moves: u32,
    pub final_position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWin,
    BlackWin,
}

impl GameResult {
    pub fn winner(self) -> Side {
        match self {
            Self::WhiteWin => Side::White,
            Self::BlackWin => Side::Black,
        }
    }
}

impl From<Side> for GameResult {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Self::WhiteWin,
            Side::Black => Self::BlackWin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    KingEscaped,
    KingCaptured,
    Repetition,
    MoveLimit,
    NoMoves,
}

#[derive(Debug, Clone, Copy)]
pub struct SelfPlayConfig {
    pub search: AlphaBetaConfig,
    /// Moves per side before the side to move forfeits.
    pub move_limit: u32,
    /// Opening plies chosen uniformly at random instead of searched.
    pub random_opening_plies: u32,
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            search: AlphaBetaConfig::default(),
            move_limit: 100,
            random_opening_plies: 2,
            seed: 0,
        }
    }
}

/// Plays one game between two copies of the searcher from the initial
/// position. The same config always produces the same game.
pub fn play_game(config: &SelfPlayConfig) -> Result<GameRecord, BoardError> {
    let mut board = Board::new();
    board.set_move_limit(config.move_limit);
    let mut searcher = AlphaBetaSearcher::new(config.search);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut moves = Vec::new();
    let mut forfeited = false;

    let (winner, reason) = loop {
        if let Some(winner) = board.winner() {
            break (winner, end_reason(&board, winner, forfeited));
        }

        let chosen = if board.move_count() < config.random_opening_plies {
            random_move(&board, &mut rng)
        } else {
            searcher.choose_move(&board)?
        };
        let Some(mv) = chosen else {
            break (board.turn().opponent(), EndReason::NoMoves);
        };

        forfeited = board.move_count() >= config.move_limit.saturating_mul(2);
        board.apply_move(mv)?;
        if !forfeited {
            moves.push(move_to_text(mv));
        }
    };

    Ok(GameRecord {
        total_moves: moves.len() as u32,
        moves,
        result: winner.into(),
        reason,
        final_position: board.encoded(),
    })
}

fn random_move(board: &Board, rng: &mut impl Rng) -> Option<Move> {
    let moves = board.legal_moves(board.turn());
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}

fn end_reason(board: &Board, winner: Side, forfeited: bool) -> EndReason {
    if forfeited {
        EndReason::MoveLimit
    } else if board.repeated_position() {
        EndReason::Repetition
    } else if winner == Side::Black {
        EndReason::KingCaptured
    } else {
        EndReason::KingEscaped
    }
}
