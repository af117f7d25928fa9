pub mod card;
pub mod config;
pub mod demo_feed;
pub mod display;
pub mod feed;
pub mod fetch;
pub mod http_client;
pub mod scheduler;
pub mod scoreboard;
pub mod state;
pub mod status;
