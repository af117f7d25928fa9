use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use mlb_scoreboard::fetch::{FeedSource, HttpFeed, TransportError, fetch_games};

/// Answers exactly one request with `response` and reports the raw request.
fn one_shot_server(response: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    (format!("http://{addr}/mlb.csv"), rx)
}

#[test]
fn returns_body_on_success_and_asks_for_csv() {
    let (url, requests) = one_shot_server(
        "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: 27\r\nConnection: close\r\n\r\nh\nYankees,RedSox,3,2,Final\n",
    );

    let body = fetch_games(&url).expect("fetch should succeed");
    assert_eq!(body, "h\nYankees,RedSox,3,2,Final\n");

    let request = requests.recv().expect("request captured");
    assert!(request.starts_with("GET /mlb.csv HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("accept: text/csv"));
}

#[test]
fn non_success_status_carries_code() {
    let (url, _requests) = one_shot_server(
        "HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
    );

    let mut feed = HttpFeed::new(url.clone());
    let err = feed.fetch_csv().expect_err("404 must fail");
    assert!(matches!(err, TransportError::Status(404)));
    assert_eq!(err.status(), Some(404));
    assert_eq!(feed.describe(), url);
}

#[test]
fn connection_refused_has_no_status() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = fetch_games(&format!("http://{addr}/mlb.csv")).expect_err("nothing listening");
    assert!(matches!(err, TransportError::Network(_)));
    assert_eq!(err.status(), None);
}
