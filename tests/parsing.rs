use mlb_scoreboard::feed::{GameRecord, parse_csv, parse_csv_report};

fn record(visitor: &str, home: &str, vs: &str, hs: &str, status: &str) -> GameRecord {
    GameRecord {
        visitor: visitor.to_string(),
        home: home.to_string(),
        visitor_score: vs.to_string(),
        home_score: hs.to_string(),
        status: status.to_string(),
    }
}

#[test]
fn parses_rows_in_feed_order() {
    let body = "visitor,home,vs,hs,status\nYankees,Red Sox,3,2,Final\nMets,Phillies,,,7:05 PM ET\nCubs,Cardinals,1,1,Top 7th\n";
    let records = parse_csv(body);
    assert_eq!(
        records,
        vec![
            record("Yankees", "Red Sox", "3", "2", "Final"),
            record("Mets", "Phillies", "", "", "7:05 PM ET"),
            record("Cubs", "Cardinals", "1", "1", "Top 7th"),
        ]
    );
}

#[test]
fn empty_and_header_only_inputs_yield_nothing() {
    assert!(parse_csv("").is_empty());
    assert!(parse_csv("header_only_line").is_empty());
    assert!(parse_csv("header_only_line\n\n\n").is_empty());
}

#[test]
fn header_is_skipped_even_when_it_looks_like_data() {
    let records = parse_csv("A,B,1,2,Final\nC,D,3,4,Final");
    assert_eq!(records, vec![record("C", "D", "3", "4", "Final")]);
}

#[test]
fn short_rows_are_dropped_without_affecting_neighbors() {
    let body = "h\nA,B,1,2,Final\nbroken,row,1\nC,D,,,1:10 PM ET\n";
    let parsed = parse_csv_report(body);
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].visitor, "A");
    assert_eq!(parsed.records[1].visitor, "C");
    assert_eq!(parsed.dropped, vec![3]);
}

#[test]
fn fields_are_trimmed_and_extra_columns_ignored() {
    let body = "h\r\n  Yankees , Red Sox ,  3 ,2 ,  Final  ,extra,more\r\n";
    let records = parse_csv(body);
    assert_eq!(records, vec![record("Yankees", "Red Sox", "3", "2", "Final")]);
}

#[test]
fn blank_lines_are_skipped_silently() {
    let parsed = parse_csv_report("h\n\nA,B,1,2,Final\n   \nC,D,3,4,Final\n");
    assert_eq!(parsed.records.len(), 2);
    assert!(parsed.dropped.is_empty());
}

#[test]
fn quoted_commas_split_fields() {
    // No quoting support: the comma inside quotes starts a new field.
    let records = parse_csv("h\n\"St. Louis, MO\",Cubs,1,2,Final\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].visitor, "\"St. Louis");
    assert_eq!(records[0].home, "MO\"");
    assert_eq!(records[0].status, "2");
}

#[test]
fn duplicate_matchups_are_kept() {
    let records = parse_csv("h\nA,B,1,0,Final\nA,B,,,7:05 PM ET\n");
    assert_eq!(records.len(), 2);
}

#[test]
fn parsing_is_repeatable() {
    let body = "h\nA,B,1,2,Final\nbad\nC,D,,,Top 1st\n";
    assert_eq!(parse_csv(body), parse_csv(body));
}
