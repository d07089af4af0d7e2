use std::collections::HashMap;
use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::constants::{
    INITIAL_ATTACKERS, INITIAL_DEFENDERS, NUM_SQUARES, SIZE, SQUARES, THRONE,
};
use crate::types::{Move, Piece, Side, Square};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("game is already over")]
    GameOver,
    #[error("no piece of the side to move on {0}")]
    NotYourPiece(Square),
    #[error("{0} to {1} is not a rook move")]
    NotRookMove(Square, Square),
    #[error("only the king may enter the throne")]
    ThroneReserved,
    #[error("path from {0} to {1} is blocked")]
    Blocked(Square, Square),
    #[error("undo history was cleared")]
    HistoryCleared,
}

/// One square's contents as they were before a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub piece: Piece,
    pub square: Square,
}

/// Everything one applied move changed, in the order it changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub changes: ArrayVec<Change, 6>,
    pub turn: Side,
    pub recorded: Option<String>,
}

/// Tablut game state: the grid plus turn, result, and reversible history.
///
/// `apply_move` and `undo` are the only mutation paths that keep the
/// repetition table and history consistent. Search must work on its own
/// clone; interleaving two callers on one board corrupts the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
    turn: Side,
    winner: Option<Side>,
    repeated: bool,
    move_count: u32,
    move_limit: u32,
    history: Vec<HistoryEntry>,
    pending: ArrayVec<Change, 6>,
    repetitions: HashMap<String, u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening layout with Black to move.
    pub fn new() -> Self {
        let mut cells = [Piece::Empty; NUM_SQUARES];
        for square in INITIAL_ATTACKERS {
            cells[square.index()] = Piece::BlackAttacker;
        }
        for square in INITIAL_DEFENDERS {
            cells[square.index()] = Piece::WhiteDefender;
        }
        cells[THRONE.index()] = Piece::King;
        Self::with_cells(cells, Side::Black)
    }

    pub(crate) fn with_cells(cells: [Piece; NUM_SQUARES], turn: Side) -> Self {
        let mut board = Self {
            cells,
            turn,
            winner: None,
            repeated: false,
            move_count: 0,
            move_limit: u32::MAX / 2,
            history: Vec::new(),
            pending: ArrayVec::new(),
            repetitions: HashMap::new(),
        };
        board.repetitions.insert(board.encoded(), 1);
        board
    }

    /// Makes `self` a deep copy of `model`.
    pub fn copy_from(&mut self, model: &Board) {
        self.clone_from(model);
    }

    pub const fn turn(&self) -> Side {
        self.turn
    }

    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub const fn repeated_position(&self) -> bool {
        self.repeated
    }

    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    pub const fn move_limit(&self) -> u32 {
        self.move_limit
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Ply ceiling; the side to move forfeits once `2 * limit` moves are played.
    pub fn set_move_limit(&mut self, limit: u32) {
        self.move_limit = limit;
    }

    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index()]
    }

    /// Places `piece` directly, bypassing every rule. For setup and tests.
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.cells[square.index()] = piece;
    }

    pub fn king_position(&self) -> Option<Square> {
        SQUARES.into_iter().find(|&square| self.get(square) == Piece::King)
    }

    /// True iff `from` holds a piece of the side to move.
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.get(from).side() == Some(self.turn)
    }

    /// True iff `from`-`to` is an unblocked rook move that respects the
    /// throne. Does not consider whose turn it is.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.check_path(from, to).is_ok()
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from, mv.to)
    }

    /// True iff `to` is empty and every square strictly between is empty.
    pub fn is_unblocked_move(&self, from: Square, to: Square) -> bool {
        let Some(dir) = from.direction_to(to) else {
            return false;
        };
        if !self.get(to).is_empty() {
            return false;
        }
        let mut steps = 1;
        while let Some(square) = from.rook_move(dir, steps) {
            if square == to {
                return true;
            }
            if !self.get(square).is_empty() {
                return false;
            }
            steps += 1;
        }
        false
    }

    fn check_path(&self, from: Square, to: Square) -> Result<(), BoardError> {
        if from.direction_to(to).is_none() {
            return Err(BoardError::NotRookMove(from, to));
        }
        if to == THRONE && self.get(from) != Piece::King {
            return Err(BoardError::ThroneReserved);
        }
        if !self.is_unblocked_move(from, to) {
            return Err(BoardError::Blocked(from, to));
        }
        Ok(())
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        self.apply(mv.from, mv.to)
    }

    /// Plays `from`-`to` for the side to move.
    ///
    /// Forfeiture is checked first: once the move limit is reached, or when
    /// the side to move has nothing to play, the opponent wins and an empty
    /// history entry is recorded. Rule violations are returned as errors and
    /// leave the board untouched.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        if self.winner.is_some() {
            return Err(BoardError::GameOver);
        }

        if self.move_limit.saturating_mul(2) <= self.move_count || !self.has_move(self.turn) {
            self.winner = Some(self.turn.opponent());
            self.commit(self.turn, None);
            return Ok(());
        }

        if !self.is_legal_from(from) {
            return Err(BoardError::NotYourPiece(from));
        }
        self.check_path(from, to)?;

        let mover = self.turn;
        let piece = self.get(from);
        self.record_put(piece, to);
        self.record_put(Piece::Empty, from);

        self.resolve_captures(to);

        if piece == Piece::King && to.is_edge() {
            self.winner = Some(Side::White);
        }

        if self.winner.is_some() {
            self.commit(mover, None);
            return Ok(());
        }

        debug_assert!(
            self.king_position().is_some(),
            "king missing from a live game"
        );
        self.turn = mover.opponent();
        let key = self.check_repeated();
        self.commit(mover, Some(key));
        Ok(())
    }

    /// Sets `square` to `piece`, remembering its previous contents.
    pub(crate) fn record_put(&mut self, piece: Piece, square: Square) {
        self.pending.push(Change {
            piece: self.get(square),
            square,
        });
        self.put(piece, square);
    }

    fn commit(&mut self, turn: Side, recorded: Option<String>) {
        let changes = std::mem::take(&mut self.pending);
        self.history.push(HistoryEntry {
            changes,
            turn,
            recorded,
        });
        self.move_count += 1;
    }

    /// Records the current position and hands the win to the side to move
    /// when it has been seen before.
    fn check_repeated(&mut self) -> String {
        let key = self.encoded();
        let count = self.repetitions.entry(key.clone()).or_insert(0);
        if *count > 0 {
            self.winner = Some(self.turn);
            self.repeated = true;
        }
        *count = count.saturating_add(1);
        key
    }

    fn forget_position(&mut self, key: &str) {
        if let Some(count) = self.repetitions.get_mut(key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.repetitions.remove(key);
            }
        }
    }

    /// Takes back the last move. A no-op on the initial position; fails
    /// only when `clear_history` dropped the entry it needs.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        if self.move_count == 0 {
            return Ok(());
        }
        let entry = self.history.pop().ok_or(BoardError::HistoryCleared)?;

        if let Some(key) = &entry.recorded {
            self.forget_position(key);
        }
        for change in entry.changes.iter().rev() {
            self.put(change.piece, change.square);
        }

        self.turn = entry.turn;
        self.winner = None;
        self.repeated = false;
        self.move_count -= 1;

        debug_assert!(self.history.len() <= self.move_count as usize);
        Ok(())
    }

    /// Drops the undo history. Board contents, result, and the repetition
    /// table are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Turn glyph followed by every square's glyph in index order.
    pub fn encoded(&self) -> String {
        let mut out = String::with_capacity(NUM_SQUARES + 1);
        out.push(self.turn.to_code());
        out.extend(self.cells.iter().map(|piece| piece.glyph()));
        out
    }

    /// Grid rendering, top row first. With `coordinates`, rows are labelled
    /// on the left and columns `a`-`i` along the bottom.
    pub fn render(&self, coordinates: bool) -> String {
        let mut out = String::new();
        for row in (0..SIZE).rev() {
            if coordinates {
                out.push_str(&format!("{:>2}", row + 1));
            } else {
                out.push_str("  ");
            }
            for col in 0..SIZE {
                let square = Square::new_unchecked(col as u8, row as u8);
                out.push_str(&format!(" {}", self.get(square).glyph()));
            }
            out.push('\n');
        }
        if coordinates {
            out.push_str("  ");
            for col in 'a'..='i' {
                out.push(' ');
                out.push(col);
            }
            out.push('\n');
        }
        out
    }

    pub(crate) fn set_winner(&mut self, side: Side) {
        self.winner = Some(side);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
