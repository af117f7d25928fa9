use std::collections::VecDeque;

use crate::card::{CardSet, build_cards};
use crate::display::ScoreDisplay;
use crate::feed::GameRecord;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone)]
pub struct AppState {
    pub feed_label: String,
    pub loading: bool,
    pub error_visible: bool,
    // None until the first successful cycle.
    pub cards: Option<CardSet>,
    pub updated: Option<String>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub scroll: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            feed_label: String::new(),
            loading: false,
            error_visible: false,
            cards: None,
            updated: None,
            logs: VecDeque::new(),
            help_overlay: false,
            scroll: 0,
        }
    }

    pub fn with_feed_label(mut self, label: impl Into<String>) -> Self {
        self.feed_label = label.into();
        self
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.as_ref().map(CardSet::len).unwrap_or(0)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.card_count() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn clamp_scroll(&mut self) {
        let count = self.card_count();
        if count == 0 {
            self.scroll = 0;
        } else if self.scroll >= count {
            self.scroll = count - 1;
        }
    }
}

impl ScoreDisplay for AppState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_error(&mut self, visible: bool) {
        self.error_visible = visible;
    }

    fn render_records(&mut self, records: &[GameRecord]) {
        self.cards = Some(build_cards(records));
        self.clamp_scroll();
    }

    fn set_updated_time(&mut self, time: &str) {
        self.updated = Some(time.to_string());
    }

    fn log(&mut self, line: String) {
        self.push_log(line);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    SetLoading(bool),
    SetError(bool),
    SetGames(Vec<GameRecord>),
    SetUpdated(String),
    Log(String),
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetLoading(loading) => state.set_loading(loading),
        Delta::SetError(visible) => state.set_error(visible),
        Delta::SetGames(records) => state.render_records(&records),
        Delta::SetUpdated(time) => state.set_updated_time(&time),
        Delta::Log(line) => state.push_log(line),
    }
}
