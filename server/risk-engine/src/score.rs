//! Score aggregation: independent additive detectors folded into one score.
//!
//! Each detector returns an additive delta plus zero or one signal; the
//! assembler sums the deltas and clamps once, at the end. Detectors may
//! jointly exceed 100 before the clamp; that is intentional.

use crate::types::{ChangedFile, FileStatus, RiskLevel, Signal, SignalTag};

/// One detector outcome.
#[derive(Debug)]
pub struct Contribution {
  pub delta: i32,
  pub signal: Option<Signal>,
}

impl Contribution {
  pub fn new(delta: i32, signal: Signal) -> Self {
    Self {
      delta,
      signal: Some(signal),
    }
  }
}

/// Whole-change diff size.
pub fn diff_size(additions: u32, deletions: u32) -> Option<Contribution> {
  let loc = additions.saturating_add(deletions);
  if loc > 800 {
    Some(Contribution::new(
      30,
      Signal::new(
        SignalTag::LargeDiff,
        format!("Large diff ({additions}+ / {deletions}-)."),
      ),
    ))
  } else if loc > 300 {
    Some(Contribution::new(
      18,
      Signal::new(
        SignalTag::MediumDiff,
        format!("Medium diff size ({additions}+ / {deletions}-)."),
      ),
    ))
  } else {
    None
  }
}

/// Whole-change file count.
pub fn file_count(changed_files: u32) -> Option<Contribution> {
  if changed_files > 40 {
    Some(Contribution::new(
      20,
      Signal::new(
        SignalTag::ManyFiles,
        format!("Touches many files ({changed_files})."),
      ),
    ))
  } else if changed_files > 15 {
    Some(Contribution::new(
      10,
      Signal::new(
        SignalTag::MultipleFiles,
        format!("Touches multiple files ({changed_files})."),
      ),
    ))
  } else {
    None
  }
}

/// Bulk renames often leave dangling references behind.
pub fn renames(renamed: u32) -> Option<Contribution> {
  (renamed >= 5).then(|| {
    Contribution::new(
      10,
      Signal::new(
        SignalTag::Renames,
        format!("Multiple renames ({renamed}). Review for missing references."),
      ),
    )
  })
}

/// Per-file churn above the big-edit threshold.
pub fn big_edit(file: &ChangedFile) -> Option<Contribution> {
  (file.additions.saturating_add(file.deletions) > 250).then(|| {
    Contribution::new(
      6,
      Signal::new(
        SignalTag::BigEdit,
        format!(
          "Big edit in {} ({}+/{}-).",
          file.path, file.additions, file.deletions
        ),
      ),
    )
  })
}

/// Deleted files may still have runtime consumers.
pub fn removed(file: &ChangedFile) -> Option<Contribution> {
  (file.status == FileStatus::Removed).then(|| {
    Contribution::new(
      3,
      Signal::new(
        SignalTag::FileRemoved,
        format!("File removed: {}. Confirm no runtime dependency.", file.path),
      ),
    )
  })
}

/// Sensitive-subsystem path total (capped contribution).
pub fn risky_paths(count: u32) -> Option<Contribution> {
  (count > 0).then(|| {
    Contribution::new(
      (6 + 2 * count as i32).min(20),
      Signal::new(
        SignalTag::RiskyPaths,
        format!("Touches sensitive area paths (count={count})."),
      ),
    )
  })
}

/// Config-file total (capped contribution).
pub fn config_files(count: u32) -> Option<Contribution> {
  (count > 0).then(|| {
    Contribution::new(
      (4 + 2 * count as i32).min(12),
      Signal::new(
        SignalTag::ConfigFiles,
        format!("Config changes detected (count={count})."),
      ),
    )
  })
}

/// SQL-file total (capped contribution).
pub fn sql_files(count: u32) -> Option<Contribution> {
  (count > 0).then(|| {
    Contribution::new(
      (6 + 4 * count as i32).min(18),
      Signal::new(
        SignalTag::SqlFiles,
        format!("SQL changes detected (count={count})."),
      ),
    )
  })
}

/// Code changed with no test files touched anywhere in the change.
pub fn test_gap(code_touched: u32, test_touched: u32) -> Option<Contribution> {
  (code_touched > 0 && test_touched == 0).then(|| {
    Contribution::new(
      18,
      Signal::new(
        SignalTag::TestGap,
        "Touches code but no tests appear modified. Possible test gap.",
      ),
    )
  })
}

/// Clamp the accumulated raw score once and derive the coarse score + label.
pub fn finalize(raw: i32) -> (u8, u8, RiskLevel) {
  let score = raw.clamp(0, 100) as u8;
  (score, score_to_ten(score), level_for(score))
}

/// Round score/10 to the nearest integer, half to even, clamped to [0, 10].
pub fn score_to_ten(score: u8) -> u8 {
  let quotient = score / 10;
  let remainder = score % 10;
  let rounded = if remainder > 5 || (remainder == 5 && quotient % 2 == 1) {
    quotient + 1
  } else {
    quotient
  };
  rounded.min(10)
}

pub fn level_for(score: u8) -> RiskLevel {
  if score >= 70 {
    RiskLevel::High
  } else if score >= 40 {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}
