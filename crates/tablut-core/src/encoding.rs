use thiserror::Error;

use crate::board::Board;
use crate::constants::NUM_SQUARES;
use crate::types::{Piece, Side};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("expected {expected} characters, received {received}")]
    Length { expected: usize, received: usize },
    #[error("invalid side to move {0:?}")]
    InvalidTurn(char),
    #[error("invalid piece {glyph:?} at index {index}")]
    InvalidPiece { glyph: char, index: usize },
    #[error("expected exactly one king, found {0}")]
    KingCount(usize),
}

impl Board {
    /// Builds a board from the text produced by [`Board::encoded`]. The
    /// result has no history and its position counts as seen once.
    pub fn from_encoded(text: &str) -> Result<Self, EncodingError> {
        let chars: Vec<char> = text.trim().chars().collect();
        if chars.len() != NUM_SQUARES + 1 {
            return Err(EncodingError::Length {
                expected: NUM_SQUARES + 1,
                received: chars.len(),
            });
        }

        let turn = Side::from_code(chars[0]).ok_or(EncodingError::InvalidTurn(chars[0]))?;

        let mut cells = [Piece::Empty; NUM_SQUARES];
        for (index, &glyph) in chars[1..].iter().enumerate() {
            cells[index] =
                Piece::from_glyph(glyph).ok_or(EncodingError::InvalidPiece { glyph, index })?;
        }

        let kings = cells.iter().filter(|&&piece| piece == Piece::King).count();
        if kings != 1 {
            return Err(EncodingError::KingCount(kings));
        }

        Ok(Self::with_cells(cells, turn))
    }
}
