//! Narrative artifacts derived from the classification totals: impact map,
//! review-focus checklist, operational notes, and the one-line file summary.

use crate::classify::Totals;
use crate::types::RiskLevel;

pub const MAX_IMPACT: usize = 8;
pub const MAX_REVIEW: usize = 5;

/// Top touched areas plus surface-area entries, capped.
pub fn impact_map(totals: &Totals) -> Vec<String> {
  let mut impact = Vec::new();
  for (dir, n) in totals.top_dirs.most_common(4) {
    impact.push(format!("{dir}/ (files: {n})"));
  }
  if totals.config_files > 0 {
    impact.push("Config touched (env defaults/overrides may change).".to_string());
  }
  if totals.sql_files > 0 || totals.touched_migrations {
    impact.push("Database schema/migrations likely affected.".to_string());
  }
  if totals.touched_api_contract {
    impact.push("API contract files touched (OpenAPI/Proto/GraphQL).".to_string());
  }
  if totals.risky_paths > 0 {
    impact.push("Sensitive subsystem paths touched (auth/security/billing/etc).".to_string());
  }
  impact.truncate(MAX_IMPACT);
  impact
}

/// Reviewer checklist, most important first, capped.
pub fn review_focus(totals: &Totals, level: RiskLevel) -> Vec<String> {
  let mut items = Vec::new();
  if totals.risky_paths > 0 {
    items.push(
      "Review auth/security/payment-related changes carefully (sensitive area touched)."
        .to_string(),
    );
  }
  if totals.sql_files > 0 {
    items.push(
      "Verify migrations are reversible; check locks/indexes and rollout/rollback plan."
        .to_string(),
    );
  }
  if totals.config_files > 0 {
    items.push("Validate config defaults and environment overrides (staging vs prod).".to_string());
  }
  if totals.test_touched == 0 {
    items.push("Request tests or a justification (touched code without test changes).".to_string());
  }
  if level != RiskLevel::Low {
    items.push(
      "Ask for monitoring/rollback notes for deploy (what to watch, how to revert).".to_string(),
    );
  }
  if level == RiskLevel::High {
    items.push("Consider splitting PR or requiring explicit sign-off (risk concentrated).".to_string());
  }
  items.truncate(MAX_REVIEW);
  items
}

/// At most two all-clear notes, each conditional on a zero count.
pub fn operational_notes(totals: &Totals) -> Vec<String> {
  let mut notes = Vec::new();
  if totals.sql_files == 0 {
    notes.push("No DB migrations detected.".to_string());
  }
  if totals.config_files == 0 {
    notes.push("No config changes detected.".to_string());
  }
  notes
}

/// One line: counts plus the most frequent extensions.
pub fn file_summary(changed_files: u32, additions: u32, deletions: u32, totals: &Totals) -> String {
  let exts = totals
    .ext_counts
    .most_common(8)
    .iter()
    .map(|(k, v)| format!("{k}:{v}"))
    .collect::<Vec<_>>()
    .join(", ");
  format!("{changed_files} files | {additions}+/{deletions}- | by extension: {exts}")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::classify::{classify, Totals};
  use crate::types::{ChangedFile, FileStatus};

  fn totals_for(paths: &[&str]) -> Totals {
    let mut totals = Totals::default();
    for p in paths {
      let file = ChangedFile {
        path: p.to_string(),
        status: FileStatus::Modified,
        additions: 1,
        deletions: 0,
        patch: None,
      };
      let facts = classify(p);
      totals.record(&file, &facts);
    }
    totals
  }

  #[test]
  fn impact_map_lists_dirs_then_surfaces() {
    let totals = totals_for(&[
      "src/a.py",
      "src/b.py",
      "db/001.sql",
      "config/app.yml",
      "auth/jwt.py",
    ]);
    let impact = impact_map(&totals);
    assert_eq!(impact[0], "src/ (files: 2)");
    assert!(impact.iter().any(|e| e.starts_with("Config touched")));
    assert!(impact.iter().any(|e| e.starts_with("Database schema")));
    assert!(impact.iter().any(|e| e.starts_with("Sensitive subsystem")));
    assert!(impact.len() <= MAX_IMPACT);
  }

  #[test]
  fn review_focus_is_capped_and_ordered() {
    let totals = totals_for(&["auth/jwt.py", "db/001.sql", "config/app.yml"]);
    let items = review_focus(&totals, RiskLevel::High);
    assert_eq!(items.len(), MAX_REVIEW);
    assert!(items[0].starts_with("Review auth/security"));
    assert!(items[1].starts_with("Verify migrations"));
  }

  #[test]
  fn operational_notes_fire_on_zero_counts() {
    let quiet = totals_for(&["src/a.py"]);
    assert_eq!(
      operational_notes(&quiet),
      ["No DB migrations detected.", "No config changes detected."]
    );
    let busy = totals_for(&["db/001.sql", "config/app.yml"]);
    assert!(operational_notes(&busy).is_empty());
  }

  #[test]
  fn file_summary_orders_extensions_by_frequency() {
    let totals = totals_for(&["src/a.py", "src/b.py", "Makefile", "deploy/run.sh"]);
    let line = file_summary(4, 40, 4, &totals);
    assert_eq!(
      line,
      "4 files | 40+/4- | by extension: .py:2, (none):1, .sh:1"
    );
  }
}
