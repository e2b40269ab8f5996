//! PR risk scoring engine — rule-based, deterministic; no AI, no DB, no network.
//!
//! A list of changed-file records plus change metadata in; a scored,
//! explainable risk report out. Used as a library by the bot crate; the
//! binary wraps it for stdin/stdout JSON.

mod classify;
mod confidence;
mod narrative;
mod patterns;
mod rank;
mod scan;
mod score;
mod types;

pub use types::{ChangeMeta, ChangedFile, Confidence, FileStatus, Input, RiskLevel, RiskResult};

/// Score one change. Pure function of its inputs: identical inputs yield
/// identical reports.
pub fn assess(files: &[ChangedFile], meta: &ChangeMeta) -> RiskResult {
  // A supplied count of zero is treated as unsupplied.
  let changed_files = meta
    .changed_file_count
    .filter(|&c| c > 0)
    .unwrap_or(files.len() as u32);

  let renamed = files
    .iter()
    .filter(|f| f.status == FileStatus::Renamed)
    .count() as u32;

  let mut totals = classify::Totals::default();
  let mut contributions = Vec::new();

  contributions.extend(score::diff_size(meta.additions, meta.deletions));
  contributions.extend(score::file_count(changed_files));
  contributions.extend(score::renames(renamed));

  for file in files {
    let facts = classify::classify(&file.path);
    totals.record(file, &facts);
    if let Some(patch) = file.patch.as_deref().filter(|p| !p.is_empty()) {
      contributions.extend(scan::scan_patch(&file.path, patch));
    }
    contributions.extend(score::big_edit(file));
    contributions.extend(score::removed(file));
  }

  contributions.extend(score::risky_paths(totals.risky_paths));
  contributions.extend(score::config_files(totals.config_files));
  contributions.extend(score::sql_files(totals.sql_files));
  contributions.extend(score::test_gap(totals.code_touched, totals.test_touched));

  let raw: i32 = contributions.iter().map(|c| c.delta).sum();
  let (score_100, score_10, level) = score::finalize(raw);

  let signals = rank::dedup(contributions.into_iter().filter_map(|c| c.signal).collect());
  let risk_drivers = rank::pick_drivers(&signals);

  let confidence = confidence::estimate(
    changed_files,
    meta.additions,
    meta.deletions,
    totals.test_touched,
    totals.patch_missing,
  );

  RiskResult {
    score_100,
    score_10,
    level,
    confidence,
    impact_map: narrative::impact_map(&totals),
    risk_drivers,
    review_focus: narrative::review_focus(&totals, level),
    operational_notes: narrative::operational_notes(&totals),
    file_summary: narrative::file_summary(changed_files, meta.additions, meta.deletions, &totals),
    signals: signals.into_iter().map(|s| s.text).collect(),
    changed_files,
    additions: meta.additions,
    deletions: meta.deletions,
    config_files: totals.config_files,
    sql_files: totals.sql_files,
    test_touched: totals.test_touched,
    risky_paths: totals.risky_paths,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn assess_returns_valid_report_shape() {
    let files = vec![ChangedFile {
      path: "src/auth/jwt.go".to_string(),
      status: FileStatus::Modified,
      additions: 50,
      deletions: 10,
      patch: Some("+client.Timeout = 30".to_string()),
    }];
    let meta = ChangeMeta {
      additions: 50,
      deletions: 10,
      changed_file_count: None,
    };
    let report = assess(&files, &meta);
    assert!(report.score_100 <= 100);
    assert!(report.score_10 <= 10);
    assert_eq!(report.changed_files, 1);
    assert_eq!(report.risky_paths, 1);
    assert!(report.signals.iter().any(|s| s.contains("resilience")));
    assert!(report.risk_drivers.len() <= 6);
  }

  #[test]
  fn changed_file_count_falls_back_to_list_length() {
    let files = vec![ChangedFile {
      path: "a.py".to_string(),
      status: FileStatus::Modified,
      additions: 1,
      deletions: 0,
      patch: None,
    }];
    let explicit_zero = ChangeMeta {
      additions: 1,
      deletions: 0,
      changed_file_count: Some(0),
    };
    assert_eq!(assess(&files, &explicit_zero).changed_files, 1);
  }
}
