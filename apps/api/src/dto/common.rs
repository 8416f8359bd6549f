use inoxviet_core::{AppResult, PageSummary, Paginator};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Query string of back-office list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub q: Option<String>,
}

/// Query string of the public catalog.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Query string of the public news list.
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub tag: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// API representation of a page's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<PageSummary> for PageMeta {
    fn from(value: PageSummary) -> Self {
        Self {
            page: value.page,
            page_size: value.page_size,
            total_pages: value.total_pages,
            total_items: value.total_items,
            has_next: value.has_next,
            has_previous: value.has_previous,
        }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: PageMeta,
}

/// Cuts one page out of `items`. Out-of-range pages are clamped; an explicit
/// zero page size is rejected.
pub fn paginate<T>(
    items: Vec<T>,
    page: Option<usize>,
    page_size: Option<usize>,
    default_page_size: usize,
) -> AppResult<PageResponse<T>> {
    let page_size = page_size.unwrap_or(default_page_size).min(MAX_PAGE_SIZE);
    let (items, summary) =
        Paginator::at_page(items, page_size, page.unwrap_or(1))?.into_page();

    Ok(PageResponse {
        items,
        page: PageMeta::from(summary),
    })
}

#[cfg(test)]
mod tests {
    use inoxviet_core::AppError;

    use super::{MAX_PAGE_SIZE, paginate};

    #[test]
    fn defaults_to_the_first_page() {
        let Ok(page) = paginate((1..=23).collect::<Vec<u32>>(), None, None, 10) else {
            panic!("pagination should succeed");
        };

        assert_eq!(page.items, (1..=10).collect::<Vec<u32>>());
        assert_eq!(page.page.total_pages, 3);
        assert!(page.page.has_next);
        assert!(!page.page.has_previous);
    }

    #[test]
    fn pages_past_the_end_are_clamped() {
        let Ok(page) = paginate((1..=23).collect::<Vec<u32>>(), Some(9), Some(10), 10) else {
            panic!("pagination should succeed");
        };

        assert_eq!(page.page.page, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn page_size_is_capped_and_zero_is_rejected() {
        let Ok(page) = paginate(vec![0_u8; 250], None, Some(1_000), 10) else {
            panic!("pagination should succeed");
        };
        assert_eq!(page.items.len(), MAX_PAGE_SIZE);

        assert!(matches!(
            paginate(vec![1_u8], None, Some(0), 10),
            Err(AppError::Validation(_))
        ));
    }
}
