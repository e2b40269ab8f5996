//! GitHub-facing wrapper around the pure risk engine: settings, REST client,
//! and markdown rendering. Delivery concerns only; no scoring logic here.

pub mod config;
pub mod error;
pub mod github;
pub mod render;

pub use config::Settings;
pub use error::BotError;
pub use github::GitHubClient;
