use mlb_scoreboard::status::{StatusClass, format_status, status_class};

#[test]
fn classifies_reference_statuses() {
    assert_eq!(status_class("Top 7th"), StatusClass::Live);
    assert_eq!(status_class("Final"), StatusClass::Final);
    assert_eq!(status_class("7:05 PM ET"), StatusClass::Upcoming);
    assert_eq!(status_class("7"), StatusClass::Live);
}

#[test]
fn final_takes_precedence_over_live_markers() {
    assert_eq!(status_class("F/10"), StatusClass::Final);
    assert_eq!(status_class("final - bot 9th"), StatusClass::Final);
    assert_eq!(status_class("FINAL"), StatusClass::Final);
}

#[test]
fn live_markers_are_case_insensitive() {
    assert_eq!(status_class("BOT 3RD"), StatusClass::Live);
    assert_eq!(status_class("Middle 5th"), StatusClass::Live);
    assert_eq!(status_class("End of 6th inning"), StatusClass::Live);
    assert_eq!(status_class("12"), StatusClass::Live);
}

#[test]
fn other_text_is_upcoming() {
    assert_eq!(status_class(""), StatusClass::Upcoming);
    assert_eq!(status_class("Postponed"), StatusClass::Upcoming);
    assert_eq!(status_class("7th"), StatusClass::Upcoming);
    assert_eq!(status_class("1:10 AM ET"), StatusClass::Upcoming);
}

#[test]
fn class_names_are_stable() {
    assert_eq!(StatusClass::Final.as_str(), "final");
    assert_eq!(StatusClass::Live.as_str(), "live");
    assert_eq!(StatusClass::Upcoming.as_str(), "upcoming");
}

#[test]
fn formats_game_times_and_finals() {
    assert_eq!(format_status("7:05 PM ET"), "Game Time: 7:05 PM ET");
    assert_eq!(format_status("11:35 AM ET"), "Game Time: 11:35 AM ET");
    assert_eq!(format_status("Final/10"), "Final");
    assert_eq!(format_status("final"), "Final");
}

#[test]
fn game_time_check_is_case_sensitive() {
    assert_eq!(format_status("7:05 pm et"), "7:05 pm et");
}

#[test]
fn other_statuses_pass_through() {
    assert_eq!(format_status("Top 7th inning"), "Top 7th inning");
    assert_eq!(format_status("F/10"), "F/10");
    assert_eq!(format_status("Delayed"), "Delayed");
}

#[test]
fn serialized_class_matches_display_name() {
    for class in [StatusClass::Final, StatusClass::Live, StatusClass::Upcoming] {
        let json = serde_json::to_string(&class).expect("class serializes");
        assert_eq!(json, format!("\"{}\"", class.as_str()));
    }
}
