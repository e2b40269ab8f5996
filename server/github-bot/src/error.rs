//! Structured error types for the bot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
  #[error("config: {0}")]
  Config(String),

  #[error("http: {0}")]
  Http(#[from] reqwest::Error),

  #[error("github api: {status} for {url}")]
  Api {
    status: reqwest::StatusCode,
    url: String,
  },
}

impl BotError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }
}
