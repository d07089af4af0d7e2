use tablut_core::{Board, Evaluator, Score, Side};

/// Piece-count balance: White's pieces (king included) minus Black's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl MaterialEval {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for MaterialEval {
    fn evaluate(&self, board: &Board) -> Score {
        let white = board.piece_count(Side::White) as i32;
        let black = board.piece_count(Side::Black) as i32;
        Score(white - black)
    }
}
