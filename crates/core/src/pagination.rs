use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// Read-only page-at-a-time view over an ordered collection.
///
/// The only state owned here is the current 1-based page number. It is kept
/// inside `[1, total_pages]` on every navigation and whenever the source
/// collection is replaced, so a shrinking collection never leaves a stale
/// page number pointing past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    page: usize,
}

/// Serializable snapshot of a paginator's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Current 1-based page number.
    pub page: usize,
    /// Maximum items per page.
    pub page_size: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
    /// Number of items in the whole collection.
    pub total_items: usize,
    /// Zero-based index of the first item on the page.
    pub start: usize,
    /// Zero-based exclusive end index of the page.
    pub end: usize,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
}

impl<T> Paginator<T> {
    /// Creates a paginator positioned on the first page.
    ///
    /// A zero page size is a caller bug and is rejected instead of defaulted.
    pub fn new(items: Vec<T>, page_size: usize) -> AppResult<Self> {
        if page_size == 0 {
            return Err(AppError::Validation(
                "page size must be a positive integer".to_owned(),
            ));
        }

        Ok(Self {
            items,
            page_size,
            page: 1,
        })
    }

    /// Creates a paginator and moves to the requested page, clamped.
    pub fn at_page(items: Vec<T>, page_size: usize, page: usize) -> AppResult<Self> {
        let mut paginator = Self::new(items, page_size)?;
        paginator.go_to(page);
        Ok(paginator)
    }

    /// Returns the current 1-based page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the configured page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of items across all pages.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `max(1, ceil(total_items / page_size))`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Returns the zero-based slice bounds of the current page.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        start..end
    }

    /// Returns the items on the current page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items[self.range()]
    }

    /// Returns whether [`Paginator::next`] would move.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns whether [`Paginator::previous`] would move.
    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.page > 1
    }

    /// Moves to `page`, clamped into `[1, total_pages]`, and returns the
    /// page actually selected.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    /// Advances one page. Returns `false` on the last page.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Retreats one page. Returns `false` on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Swaps in a new source collection, e.g. after a filter changed.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.go_to(self.page);
    }

    /// Returns a navigation snapshot for display.
    #[must_use]
    pub fn summary(&self) -> PageSummary {
        let range = self.range();
        PageSummary {
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages(),
            total_items: self.items.len(),
            start: range.start,
            end: range.end,
            has_next: self.can_advance(),
            has_previous: self.can_retreat(),
        }
    }

    /// Consumes the paginator, returning the owned current page and its summary.
    #[must_use]
    pub fn into_page(mut self) -> (Vec<T>, PageSummary) {
        let summary = self.summary();
        let page_items = self.items.drain(summary.start..summary.end).collect();
        (page_items, summary)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Paginator;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Paginator::new(numbers(3), 0).is_err());
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let paginator = Paginator::<usize>::new(Vec::new(), 10);
        assert!(paginator.is_ok());
        let Ok(paginator) = paginator else {
            return;
        };

        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.page(), 1);
        assert!(paginator.items().is_empty());
        assert!(!paginator.can_advance());
        assert!(!paginator.can_retreat());
    }

    #[test]
    fn twenty_three_items_split_into_three_pages() {
        let Ok(mut paginator) = Paginator::new(numbers(23), 10) else {
            panic!("page size is positive");
        };

        assert_eq!(paginator.total_pages(), 3);
        assert_eq!(paginator.items(), numbers(10).as_slice());
        assert_eq!(paginator.range(), 0..10);

        assert_eq!(paginator.go_to(3), 3);
        assert_eq!(paginator.items(), &[20, 21, 22]);
        assert_eq!(paginator.range(), 20..23);

        assert_eq!(paginator.go_to(4), 3);
        assert_eq!(paginator.go_to(0), 1);
    }

    #[test]
    fn shrinking_collection_clamps_to_new_last_page() {
        let Ok(mut paginator) = Paginator::at_page(numbers(57), 10, 6) else {
            panic!("page size is positive");
        };
        assert_eq!(paginator.page(), 6);
        assert_eq!(paginator.items().len(), 7);

        paginator.replace_items(numbers(12));

        assert_eq!(paginator.total_pages(), 2);
        assert_eq!(paginator.page(), 2);
        assert_eq!(paginator.items(), &[10, 11]);
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        let Ok(mut paginator) = Paginator::new(numbers(15), 10) else {
            panic!("page size is positive");
        };

        assert!(!paginator.previous());
        assert!(paginator.next());
        assert!(!paginator.next());
        assert_eq!(paginator.page(), 2);
        assert!(paginator.previous());
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn summary_reports_display_bounds() {
        let Ok(paginator) = Paginator::at_page(numbers(57), 10, 2) else {
            panic!("page size is positive");
        };
        let summary = paginator.summary();

        assert_eq!(summary.start, 10);
        assert_eq!(summary.end, 20);
        assert_eq!(summary.total_items, 57);
        assert_eq!(summary.total_pages, 6);
        assert!(summary.has_next);
        assert!(summary.has_previous);
    }

    #[test]
    fn into_page_moves_out_only_the_current_slice() {
        let Ok(paginator) = Paginator::at_page(numbers(23), 10, 3) else {
            panic!("page size is positive");
        };
        let (items, summary) = paginator.into_page();

        assert_eq!(items, vec![20, 21, 22]);
        assert_eq!(summary.page, 3);
    }

    proptest! {
        #[test]
        fn total_pages_is_ceiling_with_minimum_one(length in 0usize..500, page_size in 1usize..50) {
            let paginator = Paginator::new(numbers(length), page_size);
            prop_assert!(paginator.is_ok());
            let Ok(paginator) = paginator else {
                return Ok(());
            };
            prop_assert_eq!(paginator.total_pages(), std::cmp::max(1, length.div_ceil(page_size)));
        }

        #[test]
        fn pages_concatenate_to_the_source(length in 0usize..300, page_size in 1usize..40) {
            let source = numbers(length);
            let Ok(mut paginator) = Paginator::new(source.clone(), page_size) else {
                return Ok(());
            };

            let mut collected = Vec::with_capacity(length);
            loop {
                prop_assert!(paginator.items().len() <= page_size);
                collected.extend_from_slice(paginator.items());
                if !paginator.next() {
                    break;
                }
            }

            prop_assert_eq!(collected, source);
        }

        #[test]
        fn page_stays_in_bounds_after_replacement(
            initial in 0usize..200,
            replacement in 0usize..200,
            page_size in 1usize..25,
            requested in 0usize..40,
        ) {
            let Ok(mut paginator) = Paginator::at_page(numbers(initial), page_size, requested) else {
                return Ok(());
            };
            paginator.replace_items(numbers(replacement));

            prop_assert!(paginator.page() >= 1);
            prop_assert!(paginator.page() <= paginator.total_pages());
        }
    }
}
