//! Minimal GitHub REST client: PR metadata, changed files, issue comments.

use pr_risk_engine::{ChangeMeta, ChangedFile};
use reqwest::header;
use serde::Serialize;

use crate::config::Settings;
use crate::error::BotError;

const PAGE_SIZE: usize = 100;

pub struct GitHubClient {
  http: reqwest::Client,
  base_url: String,
}

#[derive(Serialize)]
struct CommentBody<'a> {
  body: &'a str,
}

impl GitHubClient {
  pub fn new(settings: &Settings) -> Result<Self, BotError> {
    let mut headers = header::HeaderMap::new();
    let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", settings.github_token))
      .map_err(|_| BotError::config("GITHUB_TOKEN contains invalid header characters"))?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);
    headers.insert(
      header::ACCEPT,
      header::HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
      "X-GitHub-Api-Version",
      header::HeaderValue::from_static("2022-11-28"),
    );
    headers.insert(
      header::USER_AGENT,
      header::HeaderValue::from_static("pr-risk-bot/0.1"),
    );
    let http = reqwest::Client::builder()
      .default_headers(headers)
      .build()?;
    Ok(Self {
      http,
      base_url: settings.base_url.clone(),
    })
  }

  async fn get_json<T: serde::de::DeserializeOwned>(
    &self,
    url: &str,
    query: &[(&str, String)],
  ) -> Result<T, BotError> {
    let resp = self.http.get(url).query(query).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(BotError::Api {
        status,
        url: url.to_string(),
      });
    }
    Ok(resp.json().await?)
  }

  /// PR-level metadata (additions/deletions/changed file count).
  pub async fn get_pr(&self, owner: &str, repo: &str, number: u64) -> Result<ChangeMeta, BotError> {
    let url = format!("{}/repos/{owner}/{repo}/pulls/{number}", self.base_url);
    self.get_json(&url, &[]).await
  }

  /// All changed files for the PR, following pagination.
  pub async fn list_pr_files(
    &self,
    owner: &str,
    repo: &str,
    number: u64,
  ) -> Result<Vec<ChangedFile>, BotError> {
    let url = format!("{}/repos/{owner}/{repo}/pulls/{number}/files", self.base_url);
    let mut files = Vec::new();
    let mut page = 1u32;
    loop {
      let batch: Vec<ChangedFile> = self
        .get_json(
          &url,
          &[
            ("per_page", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
          ],
        )
        .await?;
      let last_page = batch.len() < PAGE_SIZE;
      files.extend(batch);
      if last_page {
        break;
      }
      page += 1;
    }
    Ok(files)
  }

  /// Post the rendered report as an issue comment on the PR.
  pub async fn create_issue_comment(
    &self,
    owner: &str,
    repo: &str,
    number: u64,
    body: &str,
  ) -> Result<(), BotError> {
    let url = format!(
      "{}/repos/{owner}/{repo}/issues/{number}/comments",
      self.base_url
    );
    let resp = self
      .http
      .post(&url)
      .json(&CommentBody { body })
      .send()
      .await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(BotError::Api { status, url });
    }
    Ok(())
  }
}
