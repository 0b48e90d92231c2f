//! Alien Invasion stats entry point
//!
//! Usage:
//!   alien-invasion-stats               show the stored high score
//!   alien-invasion-stats submit <N>    record a finished game's score
//!   alien-invasion-stats reset         clear the stored high score
//!
//! `HIGH_SCORE_FILE` overrides the score file. Warnings are logged to stderr
//! by default; `RUST_LOG` changes the level.

use alien_invasion_stats::{GameStats, Settings, StatsConfig};

fn usage() {
    eprintln!("usage: alien-invasion-stats [submit <score> | reset]");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::default();
    let config = StatsConfig::from_env();
    log::info!("Using high score file {}", config.high_score_file().display());

    let mut stats = GameStats::new(settings.ship_limit, config);
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => println!("High score: {}", stats.high_score),
        ["submit", score] => {
            let Ok(score) = score.parse::<u64>() else {
                eprintln!("invalid score: {}", score);
                usage();
                std::process::exit(2);
            };

            stats.start_game(settings.ship_limit);
            stats.round.add_points(score);
            let new_record = stats.check_high_score();
            stats.end_game();
            if !new_record {
                println!("Score {} (high score: {})", score, stats.high_score);
            } else if stats.persist_high_score() {
                println!("New high score: {}", stats.high_score);
            } else {
                eprintln!(
                    "new high score {} could not be saved to {}",
                    stats.high_score,
                    stats.high_score_file().display()
                );
                std::process::exit(1);
            }
        }
        ["reset"] => {
            stats.high_score = 0;
            if !stats.persist_high_score() {
                eprintln!(
                    "high score could not be reset in {}",
                    stats.high_score_file().display()
                );
                std::process::exit(1);
            }
            println!("High score reset");
        }
        _ => {
            usage();
            std::process::exit(2);
        }
    }
}
