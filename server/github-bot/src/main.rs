//! Bot binary: fetch PR data, score it, print or post the report.

use anyhow::Context;
use clap::Parser;
use pr_risk_bot::{render, GitHubClient, Settings};
use tracing::info;

/// Assess the risk of a GitHub pull request.
#[derive(Debug, Parser)]
#[command(name = "pr-risk-bot", version, about)]
struct Cli {
  /// Repository owner (user or org).
  owner: String,
  /// Repository name.
  repo: String,
  /// Pull request number.
  number: u64,
  /// Post the report back to the PR as a comment.
  #[arg(long)]
  post: bool,
  /// Print the raw report as JSON instead of markdown.
  #[arg(long)]
  json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::from_env().context("loading settings")?;
  let client = GitHubClient::new(&settings)?;

  info!(owner = %cli.owner, repo = %cli.repo, number = cli.number, "fetching pull request");
  let meta = client.get_pr(&cli.owner, &cli.repo, cli.number).await?;
  let files = client.list_pr_files(&cli.owner, &cli.repo, cli.number).await?;
  info!(files = files.len(), "scoring change");

  let report = pr_risk_engine::assess(&files, &meta);
  let comment = render::render_comment(&report);

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!("{comment}");
  }

  if cli.post {
    client
      .create_issue_comment(&cli.owner, &cli.repo, cli.number, &comment)
      .await
      .context("posting comment")?;
    info!("report posted");
  }
  Ok(())
}
