//! Client-side pagination over an in-memory result set.

use serde::Serialize;

/// Items shown per page in the list view.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Number of pages needed for `total` items; never less than one.
#[must_use]
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total, page_size))
}

/// One page sliced out of a larger result set.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: usize,
    /// Current page number (1-indexed).
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Number of pages, at least one.
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slice `page` out of `all`, clamping it into range first.
    #[must_use]
    pub fn slice(all: &[T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = all.len();
        let page = clamp_page(page, total, page_size);
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);

        Self {
            items: all[start..end].to_vec(),
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
