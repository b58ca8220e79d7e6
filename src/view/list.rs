//! List page: search and client-side pagination.

use serde::Serialize;

use super::{message_or, LoadState};
use crate::error::Result;
use crate::models::Item;
use crate::pagination::{clamp_page, Page, DEFAULT_PAGE_SIZE};
use crate::repository::ItemRepository;

const LOAD_FAILED: &str = "Failed to load items.";

/// Case-insensitive substring search over name and short description.
///
/// The query is trimmed first; an empty query keeps every item.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

/// Mutable state of the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    pub items: Vec<Item>,
    pub query: String,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 1,
        }
    }
}

/// Render model for the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub status: LoadState,
    pub query: String,
    /// Items on the current page.
    pub items: Vec<Item>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// False when nothing matched; the controls are hidden, not disabled.
    pub show_pagination: bool,
    pub show_no_results: bool,
}

/// State holder for the list page.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    state: ListState,
    status: LoadState,
    page_size: usize,
}

impl Default for ListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewModel {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            status: LoadState::Idle,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size (minimum one).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.clamp();
        self
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn status(&self) -> &LoadState {
        &self.status
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch all items once and store them.
    pub async fn load<R: ItemRepository + ?Sized>(&mut self, repo: &R) {
        self.begin_load();
        let result = repo.list_items().await;
        self.finish_load(result);
    }

    pub fn begin_load(&mut self) {
        self.status = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Item>>) {
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "list loaded");
                self.state.items = items;
                self.status = LoadState::Loaded;
                self.clamp();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load items");
                self.status = LoadState::Failed(message_or(&err, LOAD_FAILED));
            }
        }
    }

    /// Replace the search query and return to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.page = 1;
    }

    pub fn go_next(&mut self) {
        if self.page_count() > self.state.page {
            self.state.page += 1;
        }
    }

    pub fn go_previous(&mut self) {
        if self.state.page > 1 {
            self.state.page -= 1;
        }
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.state.page = clamp_page(page, self.filtered_count(), self.page_size);
    }

    pub fn filtered(&self) -> Vec<&Item> {
        filter_items(&self.state.items, &self.state.query)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        crate::pagination::total_pages(self.filtered_count(), self.page_size)
    }

    /// Snapshot the current state for rendering.
    pub fn derive(&self) -> ListView {
        let filtered = self.filtered();
        let page = Page::slice(&filtered, self.state.page, self.page_size).map(Item::clone);
        let loaded = self.status.is_loaded();

        ListView {
            status: self.status.clone(),
            query: self.state.query.clone(),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            page: page.page,
            total_pages: page.total_pages,
            filtered_count: page.total,
            show_pagination: loaded && page.total > 0,
            show_no_results: loaded && page.total == 0,
            items: page.items,
        }
    }

    fn clamp(&mut self) {
        self.state.page = clamp_page(self.state.page, self.filtered_count(), self.page_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;

    fn item(id: u64, name: &str, short: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            short_description: short.to_string(),
            full_description: format!("{name} in detail"),
        }
    }

    fn loaded(items: Vec<Item>) -> ListViewModel {
        let mut vm = ListViewModel::new();
        vm.finish_load(Ok(items));
        vm
    }

    fn seven_items() -> Vec<Item> {
        (1..=7)
            .map(|i| item(i, &format!("Thing {i}"), "plain"))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_on_name_or_short_description() {
        let items = vec![
            item(1, "Wireless Mouse", "Compact mouse"),
            item(2, "Keyboard", "RGB MECHANICAL"),
            item(3, "Headphones", "Over-ear"),
        ];

        let hits: Vec<u64> = filter_items(&items, "MOUSE").iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![1]);

        let hits: Vec<u64> = filter_items(&items, "mechanical").iter().map(|i| i.id).collect();
        assert_eq!(hits, vec![2]);

        assert_eq!(filter_items(&items, "").len(), 3);
        assert_eq!(filter_items(&items, "   ").len(), 3);
        assert_eq!(filter_items(&items, "  over ").len(), 1);
    }

    #[test]
    fn test_full_description_is_not_searched() {
        let items = vec![item(1, "Widget", "A widget")];
        assert!(filter_items(&items, "in detail").is_empty());
    }

    #[test]
    fn test_pages_of_three() {
        let mut vm = loaded(seven_items());
        let view = vm.derive();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.items.len(), 3);
        assert!(view.has_next);
        assert!(!view.has_previous);

        vm.go_next();
        vm.go_next();
        let view = vm.derive();
        assert_eq!(view.page, 3);
        assert_eq!(view.items.len(), 1);
        assert!(!view.has_next);

        vm.go_next();
        assert_eq!(vm.state().page, 3);
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let mut vm = loaded(seven_items());
        vm.go_previous();
        assert_eq!(vm.state().page, 1);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut vm = loaded(seven_items());
        vm.go_next();
        assert_eq!(vm.state().page, 2);

        vm.set_query("thing");
        assert_eq!(vm.state().page, 1);
    }

    #[test]
    fn test_page_stays_in_range_for_any_count() {
        for n in 0..10u64 {
            let items: Vec<Item> = (0..n).map(|i| item(i, "x", "y")).collect();
            let mut vm = loaded(items);
            for _ in 0..5 {
                vm.go_next();
            }
            let view = vm.derive();
            let expected = std::cmp::max(1, (n as usize).div_ceil(3));
            assert_eq!(view.total_pages, expected);
            assert!(view.page >= 1 && view.page <= view.total_pages);
        }
    }

    #[test]
    fn test_go_to_clamps() {
        let mut vm = loaded(seven_items());
        vm.go_to(99);
        assert_eq!(vm.state().page, 3);
        vm.go_to(0);
        assert_eq!(vm.state().page, 1);
    }

    #[test]
    fn test_no_results_hides_pagination() {
        let mut vm = loaded(vec![item(1, "Widget", "A widget")]);
        vm.set_query("gadget");

        let view = vm.derive();
        assert!(view.items.is_empty());
        assert!(view.show_no_results);
        assert!(!view.show_pagination);
        assert_eq!(view.query, "gadget");
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let vm = loaded(vec![]);
        let view = vm.derive();
        assert_eq!(view.status, LoadState::Loaded);
        assert!(view.show_no_results);
    }

    #[test]
    fn test_failed_load_shows_error_not_empty_state() {
        let mut vm = ListViewModel::new();
        vm.begin_load();
        assert!(vm.status().is_loading());

        vm.finish_load(Err(CatalogError::ApiError {
            message: "Request failed: 503".to_string(),
            status_code: Some(503),
        }));

        let view = vm.derive();
        assert_eq!(view.status.error(), Some("Request failed: 503"));
        assert!(!view.show_no_results);
        assert!(!view.show_pagination);
    }

    #[test]
    fn test_custom_page_size() {
        let vm = loaded(seven_items()).with_page_size(5);
        assert_eq!(vm.page_count(), 2);

        let vm = ListViewModel::new().with_page_size(0);
        assert_eq!(vm.page_size(), 1);
    }
}
