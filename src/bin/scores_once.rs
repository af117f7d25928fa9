use anyhow::{Context, Result, bail};

use mlb_scoreboard::card::{CardSet, build_cards};
use mlb_scoreboard::config::Config;
use mlb_scoreboard::display::ScoreDisplay;
use mlb_scoreboard::feed::GameRecord;
use mlb_scoreboard::fetch::FeedSource;
use mlb_scoreboard::scoreboard::{CycleOutcome, Scoreboard};

struct StderrDisplay;

impl ScoreDisplay for StderrDisplay {
    fn set_loading(&mut self, _loading: bool) {}

    fn set_error(&mut self, _visible: bool) {}

    fn render_records(&mut self, _records: &[GameRecord]) {}

    fn set_updated_time(&mut self, time: &str) {
        eprintln!("updated at {time}");
    }

    fn log(&mut self, line: String) {
        eprintln!("{line}");
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env();
    let mut board = Scoreboard::new(config.feed_source());
    eprintln!("fetching {}", board.feed().describe());

    match board.run_cycle(&mut StderrDisplay) {
        CycleOutcome::Rendered { .. } => {}
        CycleOutcome::Failed { status: Some(code) } => bail!("feed returned http {code}"),
        CycleOutcome::Failed { status: None } => bail!("feed unreachable"),
    }

    match build_cards(board.records()) {
        CardSet::Empty => eprintln!("No games scheduled today"),
        CardSet::Cards(cards) => {
            for card in cards {
                let line = serde_json::to_string(&card).context("serialize card")?;
                println!("{line}");
            }
        }
    }
    Ok(())
}
