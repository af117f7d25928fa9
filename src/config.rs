use std::env;
use std::time::Duration;

use crate::demo_feed::DemoFeed;
use crate::fetch::{FeedSource, HttpFeed};

pub const DEFAULT_FEED_URL: &str = "http://localhost:8001/mlb.csv";
pub const DEFAULT_POLL_SECS: u64 = 30;
const MIN_POLL_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub source: SourceKind,
    pub poll_interval: Duration,
    pub demo_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            source: SourceKind::Http,
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            demo_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let feed_url = lookup("MLB_FEED_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let source = lookup("MLB_FEED_SOURCE")
            .map(|v| parse_source(&v))
            .unwrap_or(SourceKind::Http);
        let poll_secs = lookup("MLB_POLL_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_SECS)
            .max(MIN_POLL_SECS);
        let demo_seed = lookup("MLB_DEMO_SEED").and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            feed_url,
            source,
            poll_interval: Duration::from_secs(poll_secs),
            demo_seed,
        }
    }

    pub fn feed_source(&self) -> Box<dyn FeedSource + Send> {
        match self.source {
            SourceKind::Http => Box::new(HttpFeed::new(self.feed_url.clone())),
            SourceKind::Demo => Box::new(DemoFeed::new(self.demo_seed)),
        }
    }
}

fn parse_source(raw: &str) -> SourceKind {
    match raw.trim().to_ascii_lowercase().as_str() {
        "demo" | "fake" => SourceKind::Demo,
        _ => SourceKind::Http,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn poll_interval_is_clamped() {
        let cfg = Config::from_lookup(lookup_from(&[("MLB_POLL_SECS", "1")]));
        assert_eq!(cfg.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn reads_demo_source_and_seed() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("MLB_FEED_SOURCE", " Demo "),
            ("MLB_DEMO_SEED", "42"),
            ("MLB_FEED_URL", "http://example.test/scores.csv"),
        ]));
        assert_eq!(cfg.source, SourceKind::Demo);
        assert_eq!(cfg.demo_seed, Some(42));
        assert_eq!(cfg.feed_url, "http://example.test/scores.csv");
    }

    #[test]
    fn feed_source_follows_kind() {
        let cfg = Config::from_lookup(lookup_from(&[("MLB_FEED_SOURCE", "demo")]));
        assert_eq!(cfg.feed_source().describe(), "demo feed");
        assert_eq!(Config::default().feed_source().describe(), DEFAULT_FEED_URL);
    }

    #[test]
    fn blank_url_falls_back() {
        let cfg = Config::from_lookup(lookup_from(&[("MLB_FEED_URL", "   ")]));
        assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    }
}
