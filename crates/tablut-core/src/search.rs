use crate::board::{Board, BoardError};
use crate::types::{Move, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes_searched: u64,
}

/// A move chooser. Implementations search a private copy of `board`.
pub trait Searcher {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, BoardError>;
}
