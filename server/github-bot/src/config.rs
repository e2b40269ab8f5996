//! Bot settings loaded from the environment.

use crate::error::BotError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Runtime settings. The token is required; the base URL is overridable for
/// GitHub Enterprise hosts.
#[derive(Debug, Clone)]
pub struct Settings {
  pub github_token: String,
  pub base_url: String,
}

impl Settings {
  pub fn from_env() -> Result<Self, BotError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build settings from a key lookup (injectable for tests).
  pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
    let github_token = get("GITHUB_TOKEN")
      .map(|v| v.trim().to_string())
      .unwrap_or_default();
    if github_token.is_empty() {
      return Err(BotError::config("missing GITHUB_TOKEN"));
    }
    let base_url = get("GITHUB_API_BASE")
      .map(|v| v.trim().trim_end_matches('/').to_string())
      .filter(|v| !v.is_empty())
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    Ok(Self {
      github_token,
      base_url,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_token_is_a_config_error() {
    let err = Settings::from_lookup(|_| None).unwrap_err();
    assert!(err.to_string().contains("GITHUB_TOKEN"));
  }

  #[test]
  fn token_required_base_optional() {
    let settings = Settings::from_lookup(|key| match key {
      "GITHUB_TOKEN" => Some("  ghp_abc  ".to_string()),
      _ => None,
    })
    .unwrap();
    assert_eq!(settings.github_token, "ghp_abc");
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
  }

  #[test]
  fn enterprise_base_url_loses_trailing_slash() {
    let settings = Settings::from_lookup(|key| match key {
      "GITHUB_TOKEN" => Some("ghp_abc".to_string()),
      "GITHUB_API_BASE" => Some("https://ghe.example.com/api/v3/".to_string()),
      _ => None,
    })
    .unwrap();
    assert_eq!(settings.base_url, "https://ghe.example.com/api/v3");
  }
}
