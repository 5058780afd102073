//! View-layer controllers for the admin dashboard.
//!
//! Each controller owns the state a page renders (list, loading flag, last
//! error, form) and turns every failed action into a logged error and an
//! error notification instead of propagating it to the caller's runtime.

mod events;
mod members;
mod projects;

pub use events::*;
pub use members::*;
pub use projects::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{Event, Member, Project};
use crate::notify::Notifier;

/// Tracks whether the owning view is still mounted.
///
/// Clones share state, so an in-flight task can hold one and check it before
/// writing its result back.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Dependencies shared by every page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub client: ApiClient,
    pub notifier: Notifier,
    pub mount: MountGuard,
}

impl PageContext {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            mount: MountGuard::new(),
        }
    }

    /// Log a failed action and raise an error notification.
    pub(crate) fn report(&self, action: &str, err: &ClientError) {
        match err {
            ClientError::Validation(errors) => {
                tracing::debug!("{} blocked by validation: {:?}", action, errors);
                self.notifier.error("Please fix validation errors");
            }
            ClientError::NoChanges => {
                tracing::debug!("{} skipped: nothing changed", action);
                self.notifier.error(err.message());
            }
            _ => {
                tracing::error!("{}: {}", action, err);
                self.notifier.error(format!("{}: {}", action, err.message()));
            }
        }
    }
}

/// Records that can be matched against a page's search box.
pub trait Searchable {
    fn search_text(&self) -> &str;
}

impl Searchable for Member {
    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Searchable for Event {
    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Searchable for Project {
    fn search_text(&self) -> &str {
        &self.name
    }
}

/// List state shared by the collection pages.
#[derive(Debug, Clone)]
pub struct CollectionPage<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    search: String,
}

impl<T> Default for CollectionPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
        }
    }
}

impl<T> CollectionPage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn finish_load(&mut self, result: Result<Vec<T>, &ClientError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => {
                self.items.clear();
                self.error = Some(err.message());
            }
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn replace_where(&mut self, matches: impl Fn(&T) -> bool, item: T) -> bool {
        match self.items.iter_mut().find(|existing| matches(existing)) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_where(&mut self, matches: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.items.iter().position(matches)?;
        Some(self.items.remove(index))
    }
}

impl<T: Searchable> CollectionPage<T> {
    /// Items whose name contains the search text, case-insensitively.
    pub fn visible(&self) -> Vec<&T> {
        let query = self.search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.search_text().to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberStatus;

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            role: "Member".to_string(),
            status: MemberStatus::Active,
            year: "2024-01-01".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_visible_filters_by_name() {
        let mut page = CollectionPage::new();
        page.finish_load(Ok(vec![member("1", "Jane Doe"), member("2", "John Roe")]));
        assert_eq!(page.visible().len(), 2);

        page.set_search("  JANE ");
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_failed_load_clears_loading() {
        let mut page: CollectionPage<Member> = CollectionPage::new();
        page.begin_load();
        assert!(page.is_loading());

        page.finish_load(Err(&ClientError::Transport("connection refused".into())));
        assert!(!page.is_loading());
        assert_eq!(page.error(), Some("connection refused"));
    }

    #[test]
    fn test_replace_and_remove() {
        let mut page = CollectionPage::new();
        page.push(member("1", "Jane Doe"));
        assert!(page.replace_where(|m| m.id == "1", member("1", "Jane Smith")));
        assert!(!page.replace_where(|m| m.id == "9", member("9", "Nobody")));
        assert_eq!(page.items()[0].name, "Jane Smith");

        assert!(page.remove_where(|m| m.id == "1").is_some());
        assert!(page.items().is_empty());
    }

    #[test]
    fn test_mount_guard_shared() {
        let guard = MountGuard::new();
        let task_copy = guard.clone();
        guard.unmount();
        assert!(!task_copy.is_mounted());
    }
}
