use crate::board::Board;
use crate::constants::{SQUARES, THRONE};
use crate::rays::rook_rays;
use crate::types::{Direction, Move, MoveList, Piece, Side, Square};

impl Board {
    /// Squares holding pieces of `side`, king included for White, in index
    /// order.
    pub fn piece_locations(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        SQUARES
            .into_iter()
            .filter(move |&square| self.get(square).side() == Some(side))
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.piece_locations(side).count()
    }

    /// Legal moves for `side` regardless of whose turn it is: squares in
    /// index order, then directions N, E, S, W, then distance.
    pub fn legal_moves_iter(&self, side: Side) -> impl Iterator<Item = Move> + '_ {
        self.piece_locations(side).flat_map(move |from| {
            let piece = self.get(from);
            Direction::ALL.into_iter().flat_map(move |dir| {
                rook_rays()
                    .ray(from, dir)
                    .iter()
                    .copied()
                    .take_while(move |&to| self.get(to).is_empty())
                    .filter(move |&to| to != THRONE || piece == Piece::King)
                    .map(move |to| Move::new_unchecked(from, to))
            })
        })
    }

    /// All legal moves for `side`. Empty when `side` cannot move.
    pub fn legal_moves(&self, side: Side) -> MoveList {
        self.legal_moves_iter(side).collect()
    }

    pub fn has_move(&self, side: Side) -> bool {
        self.legal_moves_iter(side).next().is_some()
    }
}
