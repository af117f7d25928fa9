use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Final,
    Live,
    Upcoming,
}

impl StatusClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Final => "final",
            StatusClass::Live => "live",
            StatusClass::Upcoming => "upcoming",
        }
    }
}

const LIVE_MARKERS: [&str; 4] = ["inning", "top", "bot", "middle"];

pub fn status_class(status: &str) -> StatusClass {
    let lower = status.to_lowercase();

    if lower.contains("final") || lower.contains("f/") {
        return StatusClass::Final;
    }
    if LIVE_MARKERS.iter().any(|m| lower.contains(m)) || is_all_digits(&lower) {
        return StatusClass::Live;
    }
    StatusClass::Upcoming
}

pub fn format_status(status: &str) -> String {
    if status.contains("PM ET") || status.contains("AM ET") {
        format!("Game Time: {status}")
    } else if status.to_lowercase().contains("final") {
        "Final".to_string()
    } else {
        status.to_string()
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
