pub mod alphabeta;
pub mod eval_format;
pub mod material;
pub mod selfplay;

pub use alphabeta::{
    endgame_depth, fixed_depth, AlphaBetaConfig, AlphaBetaResult, AlphaBetaSearcher, DepthPolicy,
};
pub use eval_format::{
    format_score, format_score_for_display, is_win_score, winning_side, WIN_SCORE,
};
pub use material::MaterialEval;
pub use selfplay::{play_game, EndReason, GameRecord, GameResult, SelfPlayConfig};
