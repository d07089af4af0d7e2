//! Compact move text: `e6-f` (column changed) or `f5-8` (row changed).
//! Full destinations such as `e6-f6` are accepted on input.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{col_from_char, row_from_char, Move, Square};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("malformed move text: {0:?}")]
    Malformed(String),
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("not a rook move: {0:?}")]
    NotRookMove(String),
}

pub fn move_to_text(mv: Move) -> String {
    let dest = if mv.from.col() == mv.to.col() {
        mv.to.row_char()
    } else {
        mv.to.col_char()
    };
    format!("{}-{}", mv.from, dest)
}

pub fn parse_move(text: &str) -> Result<Move, MoveParseError> {
    let trimmed = text.trim();
    let (from, dest) = trimmed
        .split_once('-')
        .ok_or_else(|| MoveParseError::Malformed(text.to_string()))?;
    let from =
        Square::parse(from).ok_or_else(|| MoveParseError::InvalidSquare(from.to_string()))?;

    let mut chars = dest.chars();
    let to = match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => {
            if let Some(col) = col_from_char(c) {
                Square::new(col, from.row())
            } else {
                row_from_char(c).and_then(|row| Square::new(from.col(), row))
            }
        }
        (Some(col), Some(row), None) => Square::from_chars(col, row),
        _ => return Err(MoveParseError::Malformed(text.to_string())),
    }
    .ok_or_else(|| MoveParseError::InvalidSquare(dest.to_string()))?;

    Move::new(from, to).ok_or_else(|| MoveParseError::NotRookMove(text.to_string()))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_text(*self))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl TryFrom<String> for Move {
    type Error = MoveParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_move(&value)
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        move_to_text(mv)
    }
}

impl FromStr for Square {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s).ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))
    }
}

impl TryFrom<String> for Square {
    type Error = MoveParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}
