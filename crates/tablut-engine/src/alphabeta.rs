use tablut_core::{
    Board, BoardError, Evaluator, Move, Score, SearchLimits, SearchResult, Searcher, Side,
};

use crate::eval_format::WIN_SCORE;
use crate::material::MaterialEval;

const DEFAULT_MAX_DEPTH: u8 = 2;
const ENDGAME_PIECES: usize = 8;
const INFINITY: i32 = i32::MAX;

/// Picks the search depth for a position given the configured maximum.
pub type DepthPolicy = fn(&Board, u8) -> u8;

pub fn fixed_depth(_board: &Board, max_depth: u8) -> u8 {
    max_depth
}

/// One ply deeper once few pieces remain and the tree is narrow.
pub fn endgame_depth(board: &Board, max_depth: u8) -> u8 {
    let pieces = board.piece_count(Side::White) + board.piece_count(Side::Black);
    if pieces <= ENDGAME_PIECES {
        max_depth.saturating_add(1)
    } else {
        max_depth
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaConfig {
    pub max_depth: u8,
    pub depth_policy: DepthPolicy,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            depth_policy: fixed_depth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaBetaResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}

pub struct AlphaBetaSearcher {
    eval: Box<dyn Evaluator>,
    max_depth: u8,
    depth_policy: DepthPolicy,
    nodes: u64,
}

impl std::fmt::Debug for AlphaBetaSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaBetaSearcher")
            .field("eval", &"<Evaluator>")
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(AlphaBetaConfig::default())
    }
}

impl AlphaBetaSearcher {
    pub fn new(config: AlphaBetaConfig) -> Self {
        Self::with_eval(config, Box::new(MaterialEval::new()))
    }

    pub fn with_eval(config: AlphaBetaConfig, eval: Box<dyn Evaluator>) -> Self {
        Self {
            eval,
            max_depth: config.max_depth,
            depth_policy: config.depth_policy,
            nodes: 0,
        }
    }

    /// Best move for the side to move, or `None` when the game is decided
    /// or that side cannot move. `board` itself is never touched.
    pub fn choose_move(&mut self, board: &Board) -> Result<Option<Move>, BoardError> {
        Ok(self
            .search_with_info(board, SearchLimits::default())?
            .best_move)
    }

    /// Searches a private copy of `board`. `limits.depth` overrides the
    /// depth policy.
    pub fn search_with_info(
        &mut self,
        board: &Board,
        limits: SearchLimits,
    ) -> Result<AlphaBetaResult, BoardError> {
        self.nodes = 0;
        let depth = limits
            .depth
            .unwrap_or_else(|| (self.depth_policy)(board, self.max_depth));

        let mut working = board.clone();
        let (score, best_move) = self.alpha_beta(&mut working, depth, -INFINITY, INFINITY)?;
        debug_assert_eq!(working.encoded(), board.encoded());

        Ok(AlphaBetaResult {
            best_move,
            score: Score(score),
            depth,
            nodes: self.nodes,
        })
    }

    /// Minimax over `board` to `depth` plies; White maximizes, Black
    /// minimizes. Returns the value and the first move that reached it.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<(i32, Option<Move>), BoardError> {
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            return Ok((win_value(winner, depth), None));
        }
        if depth == 0 {
            return Ok((self.eval.evaluate(board).0, None));
        }

        let mover = board.turn();
        let sense = mover.sense();
        let moves = board.legal_moves(mover);
        if moves.is_empty() {
            return Ok((win_value(mover.opponent(), depth), None));
        }

        let mut best_value = -sense * INFINITY;
        let mut best_move = None;
        for mv in moves {
            board.apply_move(mv)?;
            let outcome = self.alpha_beta(board, depth - 1, alpha, beta);
            board.undo()?;
            let (value, _) = outcome?;

            if best_move.is_none() || value * sense > best_value * sense {
                best_value = value;
                best_move = Some(mv);
                if mover == Side::White {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
                if beta <= alpha {
                    break;
                }
            }
        }

        Ok((best_value, best_move))
    }
}

fn win_value(winner: Side, depth: u8) -> i32 {
    winner.sense() * (WIN_SCORE + i32::from(depth))
}

impl Searcher for AlphaBetaSearcher {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, BoardError> {
        let result = self.search_with_info(board, limits)?;
        Ok(SearchResult {
            best_move: result.best_move,
            score: result.score,
            nodes_searched: result.nodes,
        })
    }
}
