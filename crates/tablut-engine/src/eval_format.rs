use tablut_core::Side;

/// Magnitude of a decided game. Larger than any material balance, and
/// search adds the remaining depth so quicker wins score higher.
pub const WIN_SCORE: i32 = 10_000;

/// Remaining depth never exceeds this, so anything closer to `WIN_SCORE`
/// is a decided game.
const WIN_DEPTH_MARGIN: i32 = 256;

pub fn is_win_score(score: i32) -> bool {
    score.abs() >= WIN_SCORE - WIN_DEPTH_MARGIN
}

/// The side a win score favours, if it is one.
pub fn winning_side(score: i32) -> Option<Side> {
    if !is_win_score(score) {
        return None;
    }
    if score > 0 {
        Some(Side::White)
    } else {
        Some(Side::Black)
    }
}

/// Format a score for display.
/// Wins display as "W#" or "B#", material balances as "+2", "-3", "0".
pub fn format_score(score: i32) -> String {
    match winning_side(score) {
        Some(side) => format!("{}#", side.to_code()),
        None if score == 0 => "0".to_string(),
        None => format!("{score:+}"),
    }
}

/// Format a score from `side`'s point of view; Black sees it negated.
pub fn format_score_for_display(score: i32, side: Side) -> String {
    match winning_side(score) {
        Some(winner) if winner == side => "win".to_string(),
        Some(_) => "loss".to_string(),
        None => format_score(score * side.sense()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_win_score() {
        assert!(is_win_score(WIN_SCORE));
        assert!(is_win_score(WIN_SCORE + 2));
        assert!(is_win_score(-(WIN_SCORE + 1)));
        assert!(!is_win_score(0));
        assert!(!is_win_score(-16));
        assert!(!is_win_score(9));
    }

    #[test]
    fn test_winning_side() {
        assert_eq!(winning_side(WIN_SCORE + 1), Some(Side::White));
        assert_eq!(winning_side(-(WIN_SCORE + 1)), Some(Side::Black));
        assert_eq!(winning_side(5), None);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(WIN_SCORE + 2), "W#");
        assert_eq!(format_score(-(WIN_SCORE + 1)), "B#");
        assert_eq!(format_score(3), "+3");
        assert_eq!(format_score(-7), "-7");
        assert_eq!(format_score(0), "0");
    }

    #[test]
    fn test_format_score_for_display() {
        assert_eq!(format_score_for_display(-7, Side::White), "-7");
        assert_eq!(format_score_for_display(-7, Side::Black), "+7");
        assert_eq!(format_score_for_display(WIN_SCORE + 1, Side::White), "win");
        assert_eq!(format_score_for_display(WIN_SCORE + 1, Side::Black), "loss");
        assert_eq!(format_score_for_display(0, Side::Black), "0");
    }
}
