//! Custodian captures, including the castle and king-surround rules.

use crate::board::Board;
use crate::constants::{is_castle, CASTLE, THRONE};
use crate::rays::rook_rays;
use crate::types::{Direction, Piece, Side, Square};

/// Castle squares held by Black needed before an occupied throne turns
/// hostile to the defenders beside it.
const HOSTILE_THRONE_ATTACKERS: usize = 3;

impl Board {
    /// Resolves every capture triggered by a piece arriving on `to`.
    pub(crate) fn resolve_captures(&mut self, to: Square) {
        for dir in Direction::ALL {
            if let Some(far) = rook_rays().nth(to, dir, 2) {
                self.capture(to, far);
            }
        }
    }

    /// Captures the piece between `sq0` (where the mover landed) and `sq2`
    /// if the rules allow it.
    fn capture(&mut self, sq0: Square, sq2: Square) {
        let Some(sq1) = sq0.between(sq2) else {
            return;
        };
        let mover = self.turn();
        if !self.hostile(mover, sq1, sq2) {
            return;
        }

        if is_castle(sq1) {
            self.castle_capture(sq0, sq1, sq2);
            return;
        }

        let victim = self.get(sq1);
        if victim.side() != Some(mover.opponent()) {
            return;
        }
        let anchor = self.get(sq2);
        let anchored = anchor == mover.soldier()
            || (mover == Side::White && anchor == Piece::King && victim == Piece::BlackAttacker);
        if anchored {
            self.record_put(Piece::Empty, sq1);
            if victim == Piece::King {
                self.set_winner(Side::Black);
            }
        }
    }

    /// `sq1` holds an enemy soldier facing the mover's soldier or a castle
    /// square, or it holds the king facing an attacker or a castle square.
    fn hostile(&self, mover: Side, sq1: Square, sq2: Square) -> bool {
        let victim = self.get(sq1);
        let anchor = self.get(sq2);
        (victim == mover.opponent().soldier() && (anchor == mover.soldier() || is_castle(sq2)))
            || (victim == Piece::King && (anchor == Piece::BlackAttacker || is_castle(sq2)))
    }

    /// Captures on the throne or beside it.
    fn castle_capture(&mut self, sq0: Square, sq1: Square, sq2: Square) {
        let victim = self.get(sq1);

        if sq1 != THRONE && victim != Piece::King {
            let captured = sq2 != THRONE
                || victim == Piece::BlackAttacker
                || self.get(sq2).is_empty()
                || self.castle_attackers() == HOSTILE_THRONE_ATTACKERS;
            if captured {
                self.record_put(Piece::Empty, sq1);
            }
            return;
        }

        let Some(flanks) = sq1.flanks(sq0) else {
            return;
        };
        let surrounded = self.get(sq0) == Piece::BlackAttacker
            && self.black_or_throne(sq2)
            && flanks.iter().all(|&square| self.black_or_throne(square));
        if surrounded {
            self.record_put(Piece::Empty, sq1);
            if victim == Piece::King {
                self.set_winner(Side::Black);
            }
        }
    }

    fn black_or_throne(&self, square: Square) -> bool {
        square == THRONE || self.get(square) == Piece::BlackAttacker
    }

    fn castle_attackers(&self) -> usize {
        CASTLE
            .iter()
            .filter(|&&square| self.get(square) == Piece::BlackAttacker)
            .count()
    }
}
