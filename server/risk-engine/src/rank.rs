//! Signal dedup and ranking into the short risk-driver list.

use std::collections::HashSet;

use crate::types::Signal;

pub const MAX_DRIVERS: usize = 6;

/// Drop duplicate texts, keeping the first occurrence.
pub fn dedup(signals: Vec<Signal>) -> Vec<Signal> {
  let mut seen = HashSet::new();
  signals
    .into_iter()
    .filter(|s| seen.insert(s.text.clone()))
    .collect()
}

/// Rank by tag weight, descending; equal weights keep detection order.
/// Truncated to the most decision-relevant entries.
pub fn pick_drivers(signals: &[Signal]) -> Vec<String> {
  let mut ranked: Vec<&Signal> = signals.iter().collect();
  ranked.sort_by(|a, b| b.tag.weight().cmp(&a.tag.weight()));
  ranked
    .into_iter()
    .take(MAX_DRIVERS)
    .map(|s| s.text.clone())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::SignalTag;

  fn signal(tag: SignalTag, text: &str) -> Signal {
    Signal::new(tag, text)
  }

  #[test]
  fn dedup_keeps_first_occurrence() {
    let deduped = dedup(vec![
      signal(SignalTag::BigEdit, "a"),
      signal(SignalTag::BigEdit, "b"),
      signal(SignalTag::BigEdit, "a"),
    ]);
    let texts: Vec<&str> = deduped.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["a", "b"]);
  }

  #[test]
  fn drivers_sorted_by_weight_descending() {
    let signals = vec![
      signal(SignalTag::MediumDiff, "medium"),
      signal(SignalTag::ConfigFiles, "config"),
      signal(SignalTag::SecurityWeakening, "security"),
      signal(SignalTag::SqlFiles, "sql"),
    ];
    let drivers = pick_drivers(&signals);
    assert_eq!(drivers, ["security", "sql", "config", "medium"]);
  }

  #[test]
  fn equal_weights_keep_detection_order() {
    let signals = vec![
      signal(SignalTag::LargeDiff, "first"),
      signal(SignalTag::BigEdit, "second"),
      signal(SignalTag::BigEdit, "third"),
    ];
    assert_eq!(pick_drivers(&signals), ["first", "second", "third"]);
  }

  #[test]
  fn drivers_are_capped() {
    let signals: Vec<Signal> = (0..10)
      .map(|i| signal(SignalTag::BigEdit, &format!("s{i}")))
      .collect();
    assert_eq!(pick_drivers(&signals).len(), MAX_DRIVERS);
  }
}
