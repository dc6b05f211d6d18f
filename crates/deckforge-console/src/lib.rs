//! Colorful console output for the recommender.
//!
//! Provides `init()` to set up `tracing` output and a
//! [`ConsoleProgress`] listener that renders the recommendation stages
//! as status lines, the way the original command-line front end did.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use deckforge_core::{DeckSet, LevelIndex};
use deckforge_solver::ProgressListener;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes tracing output for the recommender crates.
///
/// Safe to call multiple times - only the first call has effect.
/// The filter defaults to `deckforge_solver=info` and honors
/// `RUST_LOG` overrides.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive("deckforge_solver=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

/// A progress listener that renders stage updates to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    /// Creates a new console progress listener.
    pub fn new() -> Self {
        ConsoleProgress
    }
}

impl ProgressListener for ConsoleProgress {
    fn on_stage_started(&self, stage: usize, total_stages: usize) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(
            stdout,
            "{} deck slot {}/{}...",
            "Assembling".bright_cyan().bold(),
            stage,
            total_stages
        );
    }

    fn on_stage_ended(&self, _stage: usize, _total_stages: usize, surviving: usize) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(
            stdout,
            "  {} partial deck sets alive",
            surviving.to_formatted_string(&Locale::en).bright_white()
        );
    }

    fn on_ranking_started(&self, candidates: usize) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(
            stdout,
            "{} {} candidate deck sets...",
            "Ranking".bright_cyan().bold(),
            candidates.to_formatted_string(&Locale::en)
        );
    }

    fn on_recommendation_ended(&self, returned: usize) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(
            stdout,
            "{} {} deck set(s) recommended",
            "Done:".bright_green().bold(),
            returned
        );
    }
}

/// Prints one recommended deck-set with its score and level utilization.
pub fn print_deck_set(index: usize, set: &DeckSet, levels: &LevelIndex) {
    let mut stdout = io::stdout().lock();
    let utilization = levels.level_utilization(set.cards());
    let _ = writeln!(
        stdout,
        "{} {} with score {:.6e} and level utilization {:.1}%",
        "Deck set".bold(),
        index + 1,
        set.score(),
        utilization
    );
    for key in set.deck_keys() {
        let _ = writeln!(stdout, "  {}", key);
    }
}
