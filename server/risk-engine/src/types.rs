//! Input/output types for the risk engine (JSON contract with callers).

use serde::{Deserialize, Serialize};

/// Status of one changed file, as reported by the source-control host.
/// Unknown statuses (e.g. "copied") map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  Added,
  Removed,
  Renamed,
  Modified,
  #[serde(other)]
  Other,
}

impl Default for FileStatus {
  fn default() -> Self {
    Self::Other
  }
}

/// One changed file in the reviewed change. `patch` is absent when the host
/// could not produce a diff body (binary or oversized file).
///
/// Deserializes GitHub "PR files" objects directly (`filename` alias).
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
  #[serde(alias = "filename")]
  pub path: String,
  #[serde(default)]
  pub status: FileStatus,
  #[serde(default)]
  pub additions: u32,
  #[serde(default)]
  pub deletions: u32,
  #[serde(default)]
  pub patch: Option<String>,
}

/// Change-level metadata. A missing or zero `changed_file_count` falls back
/// to the file-list length at assessment time.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ChangeMeta {
  #[serde(default)]
  pub additions: u32,
  #[serde(default)]
  pub deletions: u32,
  #[serde(default, alias = "changed_files")]
  pub changed_file_count: Option<u32>,
}

/// Input: one JSON object on stdin for the standalone binary.
#[derive(Debug, Default, Deserialize)]
pub struct Input {
  #[serde(default)]
  pub files: Vec<ChangedFile>,
  #[serde(default)]
  pub meta: ChangeMeta,
}

/// Coarse risk label from fixed score thresholds (>= 70 HIGH, >= 40 MEDIUM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "LOW",
      Self::Medium => "MEDIUM",
      Self::High => "HIGH",
    }
  }
}

/// How trustworthy the heuristic score is. Ordered so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
  Low,
  Medium,
  High,
}

impl Confidence {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }
}

/// Category of one detected risk factor. Drivers are ranked by tag weight,
/// never by re-parsing the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTag {
  LargeDiff,
  MediumDiff,
  ManyFiles,
  MultipleFiles,
  Renames,
  Resilience,
  SecurityWeakening,
  DestructiveSql,
  BigEdit,
  FileRemoved,
  RiskyPaths,
  ConfigFiles,
  SqlFiles,
  TestGap,
}

impl SignalTag {
  /// Ranking weight: higher means more decision-relevant.
  pub fn weight(self) -> u32 {
    match self {
      Self::SecurityWeakening => 100,
      Self::DestructiveSql | Self::SqlFiles => 90,
      Self::ConfigFiles => 70,
      Self::TestGap => 65,
      Self::LargeDiff | Self::BigEdit => 50,
      Self::ManyFiles => 40,
      Self::FileRemoved => 25,
      Self::MediumDiff
      | Self::MultipleFiles
      | Self::Renames
      | Self::Resilience
      | Self::RiskyPaths => 0,
    }
  }
}

/// A detected risk factor: category tag plus human-readable text.
#[derive(Debug, Clone)]
pub struct Signal {
  pub tag: SignalTag,
  pub text: String,
}

impl Signal {
  pub fn new(tag: SignalTag, text: impl Into<String>) -> Self {
    Self {
      tag,
      text: text.into(),
    }
  }
}

/// The assembled risk report. Built once per assessment, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct RiskResult {
  pub score_100: u8,
  pub score_10: u8,
  pub level: RiskLevel,
  pub confidence: Confidence,
  pub signals: Vec<String>,
  pub impact_map: Vec<String>,
  pub risk_drivers: Vec<String>,
  pub review_focus: Vec<String>,
  pub operational_notes: Vec<String>,
  pub file_summary: String,

  // Raw counters, kept for auditability and debugging.
  pub changed_files: u32,
  pub additions: u32,
  pub deletions: u32,
  pub config_files: u32,
  pub sql_files: u32,
  pub test_touched: u32,
  pub risky_paths: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn file_status_parses_github_strings() {
    let f: ChangedFile =
      serde_json::from_str(r#"{"filename": "src/a.py", "status": "removed"}"#).unwrap();
    assert_eq!(f.path, "src/a.py");
    assert_eq!(f.status, FileStatus::Removed);
    assert_eq!(f.additions, 0);
    assert!(f.patch.is_none());
  }

  #[test]
  fn unknown_status_maps_to_other() {
    let f: ChangedFile =
      serde_json::from_str(r#"{"path": "src/a.py", "status": "copied"}"#).unwrap();
    assert_eq!(f.status, FileStatus::Other);
  }

  #[test]
  fn change_meta_accepts_github_field_name() {
    let m: ChangeMeta =
      serde_json::from_str(r#"{"additions": 10, "deletions": 2, "changed_files": 3}"#).unwrap();
    assert_eq!(m.changed_file_count, Some(3));
  }

  #[test]
  fn confidence_orders_low_to_high() {
    assert!(Confidence::Low < Confidence::Medium);
    assert!(Confidence::Medium < Confidence::High);
  }
}
