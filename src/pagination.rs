//! Page-window arithmetic for the paginated list endpoints.
//!
//! Query parameters arrive as raw strings and are re-typed here with a
//! parse-with-default step before any of them touch the repository.

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination request after re-typing the raw query input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    /// Parses raw `page` / `pageSize` query strings. Anything that is not a
    /// positive integer falls back to the default instead of failing.
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(1),
            page_size: parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Pagination metadata returned alongside every paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

/// Effective slice window for one page of results.
///
/// A requested page outside `[1, total_pages]` is clamped to the nearest
/// valid page; a listing is always satisfiable and never a not-found error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
    pub meta: PageMeta,
}

impl PageWindow {
    pub fn compute(total: usize, params: &PageParams) -> Self {
        let page_size = params.page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let current_page = params.page.clamp(1, total_pages.max(1));

        Self {
            offset: (current_page - 1) * page_size,
            limit: page_size,
            meta: PageMeta {
                total,
                total_pages,
                current_page,
                page_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uses_defaults_for_missing_input() {
        assert_eq!(PageParams::parse(None, None), PageParams::default());
    }

    #[test]
    fn parse_rejects_non_numeric_and_non_positive_input() {
        let params = PageParams::parse(Some("abc"), Some("0"));
        assert_eq!(params, PageParams::default());

        let params = PageParams::parse(Some("-3"), Some("diez"));
        assert_eq!(params, PageParams::default());
    }

    #[test]
    fn parse_accepts_positive_integers() {
        let params = PageParams::parse(Some("2"), Some(" 25 "));
        assert_eq!(
            params,
            PageParams {
                page: 2,
                page_size: 25
            }
        );
    }

    #[test]
    fn window_slices_middle_page() {
        // 25 records, page=2, pageSize=10 -> records 11..=20.
        let window = PageWindow::compute(
            25,
            &PageParams {
                page: 2,
                page_size: 10,
            },
        );
        assert_eq!(window.offset, 10);
        assert_eq!(window.limit, 10);
        assert_eq!(window.meta.total, 25);
        assert_eq!(window.meta.total_pages, 3);
        assert_eq!(window.meta.current_page, 2);
        assert_eq!(window.meta.page_size, 10);
    }

    #[test]
    fn window_clamps_page_beyond_range() {
        // 5 records, page=99 -> the only page there is.
        let window = PageWindow::compute(
            5,
            &PageParams {
                page: 99,
                page_size: 10,
            },
        );
        assert_eq!(window.offset, 0);
        assert_eq!(window.meta.current_page, 1);
        assert_eq!(window.meta.total_pages, 1);
    }

    #[test]
    fn window_clamps_page_below_range() {
        let window = PageWindow::compute(
            30,
            &PageParams {
                page: 0,
                page_size: 10,
            },
        );
        assert_eq!(window.meta.current_page, 1);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn window_on_empty_collection_has_zero_pages() {
        let window = PageWindow::compute(0, &PageParams::default());
        assert_eq!(window.meta.total, 0);
        assert_eq!(window.meta.total_pages, 0);
        assert_eq!(window.meta.current_page, 1);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_page_size() {
        for (total, page_size, expected) in [(10, 10, 1), (11, 10, 2), (20, 10, 2), (1, 10, 1)] {
            let window = PageWindow::compute(
                total,
                &PageParams {
                    page: 1,
                    page_size,
                },
            );
            assert_eq!(window.meta.total_pages, expected, "total={total}");
        }
    }
}
