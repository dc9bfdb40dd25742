//! # Issue Key Extraction
//!
//! Finds Jira issue-key references (`ABC-123`) in free text such as commit
//! messages. Matches are raw occurrences; deduplication happens later in the
//! repository-sync path, and callers counting references want every hit.

use std::sync::LazyLock;

use regex::Regex;

static ISSUE_KEY_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[A-Z]+-[0-9]+").expect("Failed to compile issue key regex"));

/// Extract issue-key references from text, in order of appearance.
///
/// Returns `None` for empty input or when the text contains no references.
pub fn parse_issue_keys(text: &str) -> Option<Vec<String>> {
  if text.is_empty() {
    return None;
  }

  let keys: Vec<String> = ISSUE_KEY_PATTERN
    .find_iter(text)
    .map(|m| m.as_str().to_string())
    .collect();

  if keys.is_empty() { None } else { Some(keys) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_returns_raw_matches() {
    let keys = parse_issue_keys("Fixes ABC-123 and ABC-123, see DEF-9").unwrap();

    // Duplicates are kept; dedup is the sync path's job
    assert_eq!(keys, vec!["ABC-123", "ABC-123", "DEF-9"]);
  }

  #[test]
  fn test_parse_empty_input() {
    assert!(parse_issue_keys("").is_none());
  }

  #[test]
  fn test_parse_no_references() {
    assert!(parse_issue_keys("no issue refs here").is_none());
  }

  #[test]
  fn test_parse_ignores_lowercase_projects() {
    assert!(parse_issue_keys("abc-123 is not a key").is_none());
  }

  #[test]
  fn test_parse_embedded_keys() {
    let keys = parse_issue_keys("JRA-100: merge PROJ-42 into main").unwrap();

    assert_eq!(keys, vec!["JRA-100", "PROJ-42"]);
  }
}
