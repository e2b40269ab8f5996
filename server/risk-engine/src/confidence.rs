//! Confidence estimation: how trustworthy the heuristic score is.
//!
//! A fixed chain of downgrade-only rules. A rule may lower confidence,
//! never raise it, so the final value is the lowest one reached.

use crate::types::Confidence;

pub fn estimate(
  changed_files: u32,
  additions: u32,
  deletions: u32,
  test_touched: u32,
  patch_missing: u32,
) -> Confidence {
  let loc = additions.saturating_add(deletions);
  let mut confidence = Confidence::High;

  if loc > 1500 || changed_files > 60 {
    confidence = Confidence::Medium;
  }
  if loc > 4000 || changed_files > 120 {
    confidence = Confidence::Low;
  }

  // Untested sizeable diffs make a "looks safe" read less trustworthy.
  if test_touched == 0 && loc > 300 && confidence == Confidence::High {
    confidence = Confidence::Medium;
  }
  if test_touched == 0 && loc > 1500 {
    confidence = Confidence::Low;
  }

  // Missing patch bodies starve the keyword detectors of data.
  if patch_missing >= 10 && confidence == Confidence::High {
    confidence = Confidence::Medium;
  }
  if patch_missing >= 30 {
    confidence = Confidence::Low;
  }

  confidence
}
