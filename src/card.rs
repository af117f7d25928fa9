use serde::Serialize;

use crate::feed::GameRecord;
use crate::status::{StatusClass, format_status, status_class};

pub const NO_GAMES_TEXT: &str = "No games scheduled today";
pub const VISITOR_LABEL: &str = "Visitor";
pub const HOME_LABEL: &str = "Home";
pub const VS_DIVIDER: &str = "VS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameCard {
    pub visitor: String,
    pub visitor_score: String,
    pub home: String,
    pub home_score: String,
    pub status_class: StatusClass,
    pub status_text: String,
}

impl GameCard {
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            visitor: record.visitor.clone(),
            visitor_score: record.visitor_score.clone(),
            home: record.home.clone(),
            home_score: record.home_score.clone(),
            status_class: status_class(&record.status),
            status_text: format_status(&record.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSet {
    Empty,
    Cards(Vec<GameCard>),
}

impl CardSet {
    pub fn len(&self) -> usize {
        match self {
            CardSet::Empty => 0,
            CardSet::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cards(&self) -> &[GameCard] {
        match self {
            CardSet::Empty => &[],
            CardSet::Cards(cards) => cards,
        }
    }
}

pub fn build_cards(records: &[GameRecord]) -> CardSet {
    if records.is_empty() {
        return CardSet::Empty;
    }
    CardSet::Cards(records.iter().map(GameCard::from_record).collect())
}
