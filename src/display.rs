use std::sync::mpsc::Sender;

use crate::feed::GameRecord;
use crate::state::Delta;

/// The surface a scoreboard cycle draws onto.
pub trait ScoreDisplay {
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, visible: bool);
    fn render_records(&mut self, records: &[GameRecord]);
    fn set_updated_time(&mut self, time: &str);
    fn log(&mut self, _line: String) {}
}

/// Forwards display calls from the poller thread to the UI thread.
#[derive(Debug, Clone)]
pub struct ChannelDisplay {
    tx: Sender<Delta>,
}

impl ChannelDisplay {
    pub fn new(tx: Sender<Delta>) -> Self {
        Self { tx }
    }

    fn send(&self, delta: Delta) {
        // The UI may already be gone during shutdown.
        let _ = self.tx.send(delta);
    }
}

impl ScoreDisplay for ChannelDisplay {
    fn set_loading(&mut self, loading: bool) {
        self.send(Delta::SetLoading(loading));
    }

    fn set_error(&mut self, visible: bool) {
        self.send(Delta::SetError(visible));
    }

    fn render_records(&mut self, records: &[GameRecord]) {
        self.send(Delta::SetGames(records.to_vec()));
    }

    fn set_updated_time(&mut self, time: &str) {
        self.send(Delta::SetUpdated(time.to_string()));
    }

    fn log(&mut self, line: String) {
        self.send(Delta::Log(line));
    }
}
