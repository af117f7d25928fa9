use serde::{Deserialize, Serialize};

const MIN_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub visitor: String,
    pub home: String,
    pub visitor_score: String,
    pub home_score: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub records: Vec<GameRecord>,
    // 1-based line numbers within the trimmed body.
    pub dropped: Vec<usize>,
}

/// Parse the scores feed. The first line is always treated as a header and
/// skipped. Fields are split on bare commas; quoting is not understood.
pub fn parse_csv(text: &str) -> Vec<GameRecord> {
    parse_csv_report(text).records
}

pub fn parse_csv_report(text: &str) -> ParsedFeed {
    let mut parsed = ParsedFeed::default();

    for (idx, raw) in text.trim().split('\n').enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(record) => parsed.records.push(record),
            None => parsed.dropped.push(idx + 1),
        }
    }

    parsed
}

fn parse_row(line: &str) -> Option<GameRecord> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() < MIN_FIELDS {
        return None;
    }
    Some(GameRecord {
        visitor: cols[0].trim().to_string(),
        home: cols[1].trim().to_string(),
        visitor_score: cols[2].trim().to_string(),
        home_score: cols[3].trim().to_string(),
        status: cols[4].trim().to_string(),
    })
}
