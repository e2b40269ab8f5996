//! Patch keyword scanner: literal pattern checks on raw diff text.
//!
//! Runs only when a file's patch text is present. The three pattern groups
//! fire independently; a single file can contribute all three deltas.

use crate::patterns;
use crate::score::Contribution;
use crate::types::{Signal, SignalTag};

pub fn scan_patch(path: &str, patch: &str) -> Vec<Contribution> {
  let mut out = Vec::new();
  if patterns::RESILIENCE.is_match(patch) {
    out.push(Contribution::new(
      4,
      Signal::new(
        SignalTag::Resilience,
        format!("Changes resilience behavior hinted in {path} (timeouts/retries/rate limits)."),
      ),
    ));
  }
  if patterns::SECURITY_WEAKENING.is_match(patch) {
    out.push(Contribution::new(
      8,
      Signal::new(
        SignalTag::SecurityWeakening,
        format!("Potential security weakening patterns in {path}."),
      ),
    ));
  }
  if patterns::DESTRUCTIVE_SQL.is_match(patch) {
    out.push(Contribution::new(
      10,
      Signal::new(
        SignalTag::DestructiveSql,
        format!("Potentially risky SQL pattern hinted in {path}."),
      ),
    ));
  }
  out
}
