use crate::types::Square;

/// Squares on a side of the board.
pub const SIZE: usize = 9;

pub const NUM_SQUARES: usize = SIZE * SIZE;

pub const THRONE: Square = Square::new_unchecked(4, 4);
pub const NTHRONE: Square = Square::new_unchecked(4, 5);
pub const STHRONE: Square = Square::new_unchecked(4, 3);
pub const WTHRONE: Square = Square::new_unchecked(3, 4);
pub const ETHRONE: Square = Square::new_unchecked(5, 4);

/// The throne and its four orthogonal neighbours.
pub const CASTLE: [Square; 5] = [THRONE, NTHRONE, ETHRONE, STHRONE, WTHRONE];

pub const INITIAL_ATTACKERS: [Square; 16] = [
    Square::new_unchecked(0, 3),
    Square::new_unchecked(0, 4),
    Square::new_unchecked(0, 5),
    Square::new_unchecked(1, 4),
    Square::new_unchecked(8, 3),
    Square::new_unchecked(8, 4),
    Square::new_unchecked(8, 5),
    Square::new_unchecked(7, 4),
    Square::new_unchecked(3, 0),
    Square::new_unchecked(4, 0),
    Square::new_unchecked(5, 0),
    Square::new_unchecked(4, 1),
    Square::new_unchecked(3, 8),
    Square::new_unchecked(4, 8),
    Square::new_unchecked(5, 8),
    Square::new_unchecked(4, 7),
];

pub const INITIAL_DEFENDERS: [Square; 8] = [
    NTHRONE,
    ETHRONE,
    STHRONE,
    WTHRONE,
    Square::new_unchecked(4, 6),
    Square::new_unchecked(4, 2),
    Square::new_unchecked(2, 4),
    Square::new_unchecked(6, 4),
];

/// Encoded starting position: side to move, then a1..i9 row by row.
pub const INITIAL_POSITION: &str =
    "B---BBB-------B--------W----B---W---BBBWWKWWBBB---W---B----W--------B-------BBB---";

/// Every square in index order.
pub const SQUARES: [Square; NUM_SQUARES] = build_squares();

const fn build_squares() -> [Square; NUM_SQUARES] {
    let mut squares = [Square::new_unchecked(0, 0); NUM_SQUARES];
    let mut index = 0;
    while index < NUM_SQUARES {
        squares[index] = Square::new_unchecked((index % SIZE) as u8, (index / SIZE) as u8);
        index += 1;
    }
    squares
}

pub const fn is_castle(square: Square) -> bool {
    let mut i = 0;
    while i < CASTLE.len() {
        if CASTLE[i].col() == square.col() && CASTLE[i].row() == square.row() {
            return true;
        }
        i += 1;
    }
    false
}
