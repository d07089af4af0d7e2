use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::constants::SIZE;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Black => 'B',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::White),
            'B' => Some(Self::Black),
            _ => None,
        }
    }

    /// The ordinary (non-king) piece fielded by this side.
    pub const fn soldier(self) -> Piece {
        match self {
            Self::White => Piece::WhiteDefender,
            Self::Black => Piece::BlackAttacker,
        }
    }

    /// +1 for White, -1 for Black. Scores are White-positive.
    pub const fn sense(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty = 0,
    WhiteDefender = 1,
    BlackAttacker = 2,
    King = 3,
}

impl Piece {
    /// Owning side; the king fights for White.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::WhiteDefender | Self::King => Some(Side::White),
            Self::BlackAttacker => Some(Side::Black),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '-',
            Self::WhiteDefender => 'W',
            Self::BlackAttacker => 'B',
            Self::King => 'K',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '-' => Some(Self::Empty),
            'W' => Some(Self::WhiteDefender),
            'B' => Some(Self::BlackAttacker),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

/// Orthogonal directions, indexed N, E, S, W.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// `(dcol, drow)` for a single step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// The two directions at right angles to this one.
    pub const fn perpendicular(self) -> [Self; 2] {
        match self {
            Self::North | Self::South => [Self::East, Self::West],
            Self::East | Self::West => [Self::North, Self::South],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < SIZE && (row as usize) < SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Caller guarantees `col, row < 9`.
    pub const fn new_unchecked(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SIZE * SIZE {
            Some(Self {
                col: (index % SIZE) as u8,
                row: (index / SIZE) as u8,
            })
        } else {
            None
        }
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// Dense index, `a1 = 0`, `b1 = 1`, ... `i9 = 80`.
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    pub const fn is_edge(self) -> bool {
        self.col == 0
            || self.row == 0
            || self.col as usize == SIZE - 1
            || self.row as usize == SIZE - 1
    }

    pub const fn col_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub const fn row_char(self) -> char {
        (b'1' + self.row) as char
    }

    /// The square `steps` away in `dir`, if it is on the board.
    pub const fn rook_move(self, dir: Direction, steps: u8) -> Option<Self> {
        let (dc, dr) = dir.delta();
        let col = self.col as i16 + dc as i16 * steps as i16;
        let row = self.row as i16 + dr as i16 * steps as i16;
        if col < 0 || row < 0 || col >= SIZE as i16 || row >= SIZE as i16 {
            None
        } else {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        }
    }

    /// Direction of a rook move from `self` to `other`, or `None` when the
    /// two squares are equal or share neither a row nor a column.
    pub const fn direction_to(self, other: Self) -> Option<Direction> {
        if self.col == other.col && self.row < other.row {
            Some(Direction::North)
        } else if self.col == other.col && self.row > other.row {
            Some(Direction::South)
        } else if self.row == other.row && self.col < other.col {
            Some(Direction::East)
        } else if self.row == other.row && self.col > other.col {
            Some(Direction::West)
        } else {
            None
        }
    }

    /// Midpoint of two squares exactly two steps apart on a line.
    pub fn between(self, other: Self) -> Option<Self> {
        let dir = self.direction_to(other)?;
        let mid = self.rook_move(dir, 1)?;
        (mid.rook_move(dir, 1)? == other).then_some(mid)
    }

    /// The two neighbours of `self` at right angles to the line from `from`.
    pub fn flanks(self, from: Self) -> Option<[Self; 2]> {
        let dir = from.direction_to(self)?;
        let [a, b] = dir.perpendicular();
        Some([self.rook_move(a, 1)?, self.rook_move(b, 1)?])
    }

    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let col = chars.next()?;
        let row = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_chars(col, row)
    }

    pub(crate) fn from_chars(col: char, row: char) -> Option<Self> {
        let col = col_from_char(col)?;
        let row = row_from_char(row)?;
        Some(Self { col, row })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

pub(crate) fn col_from_char(c: char) -> Option<u8> {
    ('a'..='i').contains(&c).then(|| c as u8 - b'a')
}

pub(crate) fn row_from_char(c: char) -> Option<u8> {
    ('1'..='9').contains(&c).then(|| c as u8 - b'1')
}

/// A rook move between two distinct squares on a shared line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Option<Self> {
        match from.direction_to(to) {
            Some(_) => Some(Self { from, to }),
            None => None,
        }
    }

    pub const fn new_unchecked(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(pub i32);

/// Sixteen pieces with at most sixteen destinations each.
pub type MoveList = ArrayVec<Move, 256>;
