use crate::board::Board;
use crate::types::Score;

/// Static position score, positive when White is better.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> Score;
}
