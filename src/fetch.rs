use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::http_client::http_client;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("feed returned http {0}")]
    Status(u16),
    #[error("feed request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status(code) => Some(*code),
            TransportError::Network(_) => None,
        }
    }
}

/// Anything that can hand back a raw scores CSV body.
pub trait FeedSource {
    fn fetch_csv(&mut self) -> Result<String, TransportError>;

    fn describe(&self) -> String;
}

impl<T: FeedSource + ?Sized> FeedSource for Box<T> {
    fn fetch_csv(&mut self) -> Result<String, TransportError> {
        (**self).fetch_csv()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FeedSource for HttpFeed {
    fn fetch_csv(&mut self) -> Result<String, TransportError> {
        fetch_games(&self.url)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub fn fetch_games(url: &str) -> Result<String, TransportError> {
    let client = http_client()?;
    let resp = client.get(url).header(ACCEPT, "text/csv").send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }
    Ok(resp.text()?)
}
