//! Snapshot/draft utilities: normalize a fetched record into a draft, validate
//! a draft, and compute the sparse patch between a snapshot and an edited draft.
//!
//! Every `diff_*` function returns `None` when nothing changed; callers report
//! that as [`ClientError::NoChanges`](crate::errors::ClientError::NoChanges)
//! instead of sending an empty update.

mod event;
mod member;
mod project;

pub use event::*;
pub use member::*;
pub use project::*;

/// Trim the value the way it is sent; `""`, whitespace-only and absent all
/// fold to `None`.
pub(crate) fn normalize_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Scalar text comparison with empty/absent folded together.
pub(crate) fn text_changed(snapshot: Option<&str>, draft: Option<&str>) -> bool {
    normalize_text(snapshot) != normalize_text(draft)
}

/// Order-insensitive list comparison.
pub(crate) fn list_changed(snapshot: &[String], draft: &[String]) -> bool {
    let mut before: Vec<&str> = snapshot.iter().map(String::as_str).collect();
    let mut after: Vec<&str> = draft.iter().map(String::as_str).collect();
    before.sort_unstable();
    after.sort_unstable();
    before != after
}

/// Return `value` only when `changed`.
pub(crate) fn when<T>(changed: bool, value: impl FnOnce() -> T) -> Option<T> {
    if changed {
        Some(value())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_text_changed_folds_empty() {
        assert!(!text_changed(None, Some("")));
        assert!(!text_changed(Some("  "), None));
        assert!(text_changed(Some("a"), Some("b")));
        assert!(text_changed(None, Some("b")));
    }

    #[test]
    fn test_text_changed_ignores_surrounding_whitespace() {
        assert!(!text_changed(Some("Jane Doe"), Some("Jane Doe ")));
        assert!(!text_changed(Some(" Designer"), Some("Designer\n")));
        assert!(text_changed(Some("Jane Doe"), Some("Jane  Doe")));
    }

    #[test]
    fn test_list_changed_ignores_order() {
        assert!(!list_changed(&strings(&["React", "Node"]), &strings(&["Node", "React"])));
        assert!(list_changed(&strings(&["React"]), &strings(&["React", "Node"])));
        assert!(!list_changed(&[], &[]));
    }
}
