use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tablut_engine::{play_game, AlphaBetaConfig, GameRecord, GameResult, SelfPlayConfig};

/// Numbered move list; Black opens, so each number covers a Black move
/// and the White reply.
fn format_transcript(game_num: u32, record: &GameRecord) -> String {
    let result_str = match record.result {
        GameResult::WhiteWin => "1-0",
        GameResult::BlackWin => "0-1",
    };

    let mut out = String::new();
    out.push_str(&format!("[Game \"{game_num}\"]\n"));
    out.push_str(&format!("[Result \"{result_str}\"]\n"));
    out.push_str(&format!("[Reason \"{:?}\"]\n", record.reason));
    out.push_str(&format!("[PlyCount \"{}\"]\n\n", record.total_moves));

    for (i, text) in record.moves.iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(&format!("{}. ", i / 2 + 1));
        }
        out.push_str(text);
        out.push(' ');
    }
    out.push_str(result_str);
    out.push('\n');
    out
}

/// Sibling `.txt` path for the transcript; never the records file itself.
fn transcript_path(output_file: &str) -> PathBuf {
    let path = Path::new(output_file).with_extension("txt");
    if path == Path::new(output_file) {
        PathBuf::from(format!("{output_file}.txt"))
    } else {
        path
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let num_games: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
    let output_file = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("selfplay_data.jsonl");
    let depth: u8 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2);
    let move_limit: u32 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(100);
    let base_seed: u64 = args.get(5).and_then(|s| s.parse().ok()).unwrap_or(0);

    eprintln!("Generating {num_games} games at depth {depth} with a {move_limit}-move limit...");

    let mut records = Vec::with_capacity(num_games as usize);
    let mut white_wins = 0u32;
    for game_num in 1..=num_games {
        let config = SelfPlayConfig {
            search: AlphaBetaConfig {
                max_depth: depth,
                ..AlphaBetaConfig::default()
            },
            move_limit,
            seed: base_seed.wrapping_add(u64::from(game_num)),
            ..SelfPlayConfig::default()
        };

        let record = play_game(&config)?;
        eprintln!(
            "Game {game_num}/{num_games}: {} moves, {:?} ({:?})",
            record.total_moves, record.result, record.reason
        );
        if record.result == GameResult::WhiteWin {
            white_wins += 1;
        }
        records.push((game_num, record));
    }

    let mut file = BufWriter::new(File::create(output_file)?);
    for (_, record) in &records {
        writeln!(file, "{}", serde_json::to_string(record)?)?;
    }
    file.flush()?;

    let transcript_path = transcript_path(output_file);
    let mut transcript = BufWriter::new(File::create(&transcript_path)?);
    for (game_num, record) in &records {
        writeln!(transcript, "{}", format_transcript(*game_num, record))?;
    }
    transcript.flush()?;

    eprintln!(
        "Done. White {white_wins}, Black {}. Wrote {output_file}",
        num_games - white_wins
    );
    eprintln!("Transcripts: {}", transcript_path.display());
    Ok(())
}
