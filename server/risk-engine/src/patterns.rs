//! Pattern catalog: the static path/keyword tables shared by the detectors.
//!
//! Kept as data (sets and compiled regexes) rather than inline conditionals
//! so the heuristics can be tuned and tested without touching control flow.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sensitive-subsystem path words (whole-word, case-insensitive).
pub static RISKY_PATH: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)\b(auth|security|payment|billing|crypto|permission|admin)\b").unwrap()
});

/// Test or spec file paths (whole-word, case-insensitive).
pub static TEST_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(test|spec)\b").unwrap());

/// Trailing extension, e.g. ".py" in "src/app.py".
pub static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[A-Za-z0-9]+$").unwrap());

/// Resilience-behavior keywords in patch text.
pub static RESILIENCE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\b(timeout|retry|backoff|circuit|rate\s*limit)\b").unwrap());

/// Security-weakening constructs in patch text (includes a bare wildcard).
pub static SECURITY_WEAKENING: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\b(permitAll|csrf\(\)\.disable|allowedOrigins|\*)\b").unwrap());

/// Destructive SQL statements in patch text.
pub static DESTRUCTIVE_SQL: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\b(drop\s+table|truncate|delete\s+from|alter\s+table)\b").unwrap());

/// Common source-file extensions (lowercase, dot-prefixed).
pub const CODE_EXTS: &[&str] = &[
  ".py", ".js", ".ts", ".java", ".kt", ".cs", ".go", ".rb", ".php",
];

/// Structured-config extensions; any path containing "config" also counts.
pub const CONFIG_EXTS: &[&str] = &[".yml", ".yaml", ".json", ".toml", ".properties", ".ini"];

/// Path substrings hinting at database migration tooling.
pub const MIGRATION_HINTS: &[&str] = &["migrations", "flyway", "liquibase", "alembic", "schema.sql"];

/// Path substrings hinting at API contract files.
pub const API_CONTRACT_HINTS: &[&str] =
  &["openapi", "swagger", "proto", "graphql", "schema.graphql"];
