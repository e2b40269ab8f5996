//! Per-file classification facts and the running totals they feed.

use crate::patterns;
use crate::types::ChangedFile;

/// Classification facts for a single changed file.
#[derive(Debug, Clone)]
pub struct FileFacts {
  /// Lowercased trailing extension including the dot; empty if none.
  pub ext: String,
  /// First path segment, or "(root)" for single-segment paths.
  pub top_dir: String,
  pub is_test: bool,
  pub is_code: bool,
  pub is_config: bool,
  pub is_sql: bool,
  pub is_risky_path: bool,
  pub is_migration_hint: bool,
  pub is_api_contract_hint: bool,
}

/// Classify one path. Malformed paths degrade gracefully: they simply fail
/// the pattern matches.
pub fn classify(path: &str) -> FileFacts {
  let ext = extension(path);
  let low = path.to_lowercase();
  FileFacts {
    top_dir: top_level_dir(path),
    is_test: patterns::TEST_PATH.is_match(path),
    is_code: patterns::CODE_EXTS.contains(&ext.as_str()),
    is_config: patterns::CONFIG_EXTS.contains(&ext.as_str()) || low.contains("config"),
    is_sql: ext == ".sql",
    is_risky_path: patterns::RISKY_PATH.is_match(path),
    is_migration_hint: patterns::MIGRATION_HINTS.iter().any(|h| low.contains(h)),
    is_api_contract_hint: patterns::API_CONTRACT_HINTS.iter().any(|h| low.contains(h)),
    ext,
  }
}

fn extension(path: &str) -> String {
  patterns::EXTENSION
    .find(path)
    .map(|m| m.as_str().to_lowercase())
    .unwrap_or_default()
}

fn top_level_dir(path: &str) -> String {
  let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
  if parts.len() >= 2 {
    parts[0].to_string()
  } else {
    "(root)".to_string()
  }
}

/// Counter that remembers insertion order, so equal counts keep a stable
/// first-seen tie order. Inputs are small; linear lookup is fine.
#[derive(Debug, Clone, Default)]
pub struct OrderedCounter {
  entries: Vec<(String, u32)>,
}

impl OrderedCounter {
  pub fn bump(&mut self, key: &str) {
    match self.entries.iter_mut().find(|(k, _)| k == key) {
      Some((_, n)) => *n += 1,
      None => self.entries.push((key.to_string(), 1)),
    }
  }

  /// Up to `n` entries by descending count; ties keep first-seen order.
  pub fn most_common(&self, n: usize) -> Vec<(String, u32)> {
    let mut sorted = self.entries.clone();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    sorted
  }
}

/// Running totals accumulated over the whole file list.
#[derive(Debug, Default)]
pub struct Totals {
  pub risky_paths: u32,
  pub config_files: u32,
  pub sql_files: u32,
  pub test_touched: u32,
  pub code_touched: u32,
  pub patch_missing: u32,
  pub touched_migrations: bool,
  pub touched_api_contract: bool,
  pub ext_counts: OrderedCounter,
  pub top_dirs: OrderedCounter,
}

impl Totals {
  pub fn record(&mut self, file: &ChangedFile, facts: &FileFacts) {
    let ext_key = if facts.ext.is_empty() {
      "(none)"
    } else {
      facts.ext.as_str()
    };
    self.ext_counts.bump(ext_key);
    self.top_dirs.bump(&facts.top_dir);

    // An empty patch string carries no information either.
    if file.patch.as_deref().map_or(true, str::is_empty) {
      self.patch_missing += 1;
    }
    if facts.is_test {
      self.test_touched += 1;
    }
    if facts.is_code {
      self.code_touched += 1;
    }
    if facts.is_config {
      self.config_files += 1;
    }
    if facts.is_sql {
      self.sql_files += 1;
    }
    // One increment per file no matter how many risky words match.
    if facts.is_risky_path {
      self.risky_paths += 1;
    }
    if facts.is_migration_hint {
      self.touched_migrations = true;
    }
    if facts.is_api_contract_hint {
      self.touched_api_contract = true;
    }
  }
}
