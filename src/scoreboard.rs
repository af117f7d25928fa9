use chrono::{Local, NaiveTime};

use crate::display::ScoreDisplay;
use crate::feed::{GameRecord, parse_csv_report};
use crate::fetch::FeedSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Rendered { games: usize },
    Failed { status: Option<u16> },
}

/// Owns the feed and the most recent successful record set.
pub struct Scoreboard<F> {
    feed: F,
    records: Vec<GameRecord>,
    cycles: u64,
    clock: fn() -> String,
}

impl<F: FeedSource> Scoreboard<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            records: Vec::new(),
            cycles: 0,
            clock: local_time_label,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn run_cycle(&mut self, display: &mut dyn ScoreDisplay) -> CycleOutcome {
        self.cycles += 1;
        display.set_loading(true);
        display.set_error(false);

        let body = match self.feed.fetch_csv() {
            Ok(body) => body,
            Err(err) => {
                display.log(format!("[WARN] Fetch failed ({}): {err}", self.feed.describe()));
                display.set_error(true);
                display.set_loading(false);
                return CycleOutcome::Failed {
                    status: err.status(),
                };
            }
        };

        let parsed = parse_csv_report(&body);
        if !parsed.dropped.is_empty() {
            let lines = parsed
                .dropped
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            display.log(format!("[WARN] Dropped malformed rows at lines {lines}"));
        }
        self.records = parsed.records;

        display.render_records(&self.records);
        display.set_updated_time(&(self.clock)());
        display.set_loading(false);
        display.log(format!("[INFO] Loaded {} games", self.records.len()));

        CycleOutcome::Rendered {
            games: self.records.len(),
        }
    }
}

pub fn local_time_label() -> String {
    updated_label(Local::now().time())
}

pub fn updated_label(time: NaiveTime) -> String {
    time.format("%I:%M:%S %p").to_string()
}
