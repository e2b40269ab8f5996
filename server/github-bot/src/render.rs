//! Markdown rendering of a risk report for PR comments.

use pr_risk_engine::RiskResult;

/// Render the report as a GitHub comment body. Deterministic: the same
/// report always renders to the same string.
pub fn render_comment(report: &RiskResult) -> String {
  let mut out = String::new();
  out.push_str("## PR Risk Report\n\n");
  out.push_str(&format!(
    "**Risk: {}** — score {}/100 ({}/10), confidence {}\n\n",
    report.level.as_str(),
    report.score_100,
    report.score_10,
    report.confidence.as_str()
  ));
  out.push_str(&format!("{}\n", report.file_summary));

  push_list(&mut out, "Top risk drivers", &report.risk_drivers);
  push_list(&mut out, "Impact map", &report.impact_map);

  if !report.review_focus.is_empty() {
    out.push_str("\n### Review focus\n");
    for item in &report.review_focus {
      out.push_str(&format!("- [ ] {item}\n"));
    }
  }

  push_list(&mut out, "Operational notes", &report.operational_notes);
  out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
  if items.is_empty() {
    return;
  }
  out.push_str(&format!("\n### {heading}\n"));
  for item in items {
    out.push_str(&format!("- {item}\n"));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pr_risk_engine::{assess, ChangeMeta, ChangedFile, FileStatus};

  fn sample_report() -> RiskResult {
    let files = vec![ChangedFile {
      path: "auth/login.py".to_string(),
      status: FileStatus::Modified,
      additions: 40,
      deletions: 2,
      patch: None,
    }];
    let meta = ChangeMeta {
      additions: 1000,
      deletions: 0,
      changed_file_count: Some(50),
    };
    assess(&files, &meta)
  }

  #[test]
  fn comment_has_headline_and_sections() {
    let comment = render_comment(&sample_report());
    assert!(comment.starts_with("## PR Risk Report"));
    assert!(comment.contains("**Risk: HIGH** — score 76/100 (8/10), confidence Medium"));
    assert!(comment.contains("### Top risk drivers"));
    assert!(comment.contains("### Review focus"));
    assert!(comment.contains("- [ ] "));
    assert!(comment.contains("No DB migrations detected."));
  }

  #[test]
  fn empty_sections_are_omitted() {
    let report = assess(&[], &ChangeMeta::default());
    let comment = render_comment(&report);
    assert!(!comment.contains("### Top risk drivers"));
    assert!(comment.contains("### Operational notes"));
  }

  #[test]
  fn rendering_is_deterministic() {
    assert_eq!(
      render_comment(&sample_report()),
      render_comment(&sample_report())
    );
  }
}
