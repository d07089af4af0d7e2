//! Rules engine for Tablut: board state, custodian captures, win and
//! repetition detection, reversible moves, and legal move generation.

pub mod board;
pub mod capture;
pub mod constants;
pub mod encoding;
pub mod eval;
pub mod movegen;
pub mod notation;
pub mod rays;
pub mod search;
pub mod types;

pub use board::{Board, BoardError, Change, HistoryEntry};
pub use constants::{
    is_castle, CASTLE, ETHRONE, INITIAL_POSITION, NTHRONE, NUM_SQUARES, SIZE, SQUARES, STHRONE,
    THRONE, WTHRONE,
};
pub use encoding::EncodingError;
pub use eval::Evaluator;
pub use notation::{move_to_text, parse_move, MoveParseError};
pub use rays::{rook_rays, Ray, RookRays};
pub use search::{SearchLimits, SearchResult, Searcher};
pub use types::{Direction, Move, MoveList, Piece, Score, Side, Square};
