use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fetch::{FeedSource, TransportError};

const HEADER: &str = "visitor,home,visitor_score,home_score,status";
const REGULATION_INNINGS: u8 = 9;

const MATCHUPS: [(&str, &str, &str); 6] = [
    ("Yankees", "Red Sox", "1:05 PM ET"),
    ("Mets", "Phillies", "4:10 PM ET"),
    ("Cubs", "Cardinals", "7:05 PM ET"),
    ("Dodgers", "Giants", "9:45 PM ET"),
    ("Astros", "Rangers", "8:05 PM ET"),
    ("Braves", "Marlins", "6:40 PM ET"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scheduled,
    Top(u8),
    Bottom(u8),
    Final(u8),
}

#[derive(Debug, Clone)]
struct DemoGame {
    visitor: &'static str,
    home: &'static str,
    first_pitch: &'static str,
    runs_visitor: u32,
    runs_home: u32,
    phase: Phase,
}

impl DemoGame {
    fn status(&self) -> String {
        match self.phase {
            Phase::Scheduled => self.first_pitch.to_string(),
            Phase::Top(n) => format!("Top {}", ordinal(n)),
            Phase::Bottom(n) => format!("Bot {}", ordinal(n)),
            Phase::Final(n) if n > REGULATION_INNINGS => format!("F/{n}"),
            Phase::Final(_) => "Final".to_string(),
        }
    }

    fn csv_row(&self) -> String {
        let (v, h) = match self.phase {
            Phase::Scheduled => (String::new(), String::new()),
            _ => (self.runs_visitor.to_string(), self.runs_home.to_string()),
        };
        format!("{},{},{},{},{}", self.visitor, self.home, v, h, self.status())
    }

    fn advance(&mut self, rng: &mut StdRng) {
        self.phase = match self.phase {
            Phase::Scheduled => {
                if rng.gen_bool(0.35) {
                    Phase::Top(1)
                } else {
                    Phase::Scheduled
                }
            }
            Phase::Top(n) => {
                self.runs_visitor += runs_in_half(rng);
                if n >= REGULATION_INNINGS && self.runs_home > self.runs_visitor {
                    Phase::Final(n)
                } else {
                    Phase::Bottom(n)
                }
            }
            Phase::Bottom(n) => {
                self.runs_home += runs_in_half(rng);
                if n >= REGULATION_INNINGS && self.runs_home != self.runs_visitor {
                    Phase::Final(n)
                } else {
                    Phase::Top(n + 1)
                }
            }
            done @ Phase::Final(_) => done,
        };
    }
}

/// Offline feed that plays out a synthetic slate, one half-inning per fetch.
#[derive(Debug, Clone)]
pub struct DemoFeed {
    rng: StdRng,
    games: Vec<DemoGame>,
}

impl DemoFeed {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let games = MATCHUPS
            .iter()
            .map(|&(visitor, home, first_pitch)| DemoGame {
                visitor,
                home,
                first_pitch,
                runs_visitor: 0,
                runs_home: 0,
                phase: Phase::Scheduled,
            })
            .collect();
        Self { rng, games }
    }

    pub fn render_csv(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for game in &self.games {
            out.push_str(&game.csv_row());
            out.push('\n');
        }
        out
    }

    fn tick(&mut self) {
        for game in &mut self.games {
            game.advance(&mut self.rng);
        }
    }

    fn all_final(&self) -> bool {
        self.games
            .iter()
            .all(|g| matches!(g.phase, Phase::Final(_)))
    }
}

impl FeedSource for DemoFeed {
    fn fetch_csv(&mut self) -> Result<String, TransportError> {
        let body = self.render_csv();
        if !self.all_final() {
            self.tick();
        }
        Ok(body)
    }

    fn describe(&self) -> String {
        "demo feed".to_string()
    }
}

fn runs_in_half(rng: &mut StdRng) -> u32 {
    match rng.gen_range(0..100) {
        0..=69 => 0,
        70..=86 => 1,
        87..=95 => 2,
        _ => 3,
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
