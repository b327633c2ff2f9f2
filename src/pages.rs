//! Page-count derivation.
//!
//! Everything here is a pure function of its inputs so that it can be
//! re-evaluated on every render, including while a count fetch is in flight.

use serde::Serialize;

use crate::count::CountState;
use crate::query::PerPage;

/// One entry of the page selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOption {
    /// 1-based page number
    pub value: u32,
    /// Text shown in the selector
    pub label: String,
}

/// Choose the item total: an explicit override wins, then a resolved count.
///
/// Pending, idle, and failed fetches all count as zero items.
#[must_use]
pub fn resolve_total_items(items_total: Option<u64>, count: &CountState) -> u64 {
    items_total.or_else(|| count.count()).unwrap_or(0)
}

/// Number of pages needed to show `total_items`.
///
/// # Arguments
///
/// * `total_items` - Items across all pages
/// * `per_page` - Page size, never zero
///
/// Returns `ceil(total_items / per_page)`, saturating at `u32::MAX`.
#[must_use]
pub fn total_pages(total_items: u64, per_page: PerPage) -> u32 {
    let pages = total_items.div_ceil(u64::from(per_page.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Selectable pages `1..=total_pages`. Empty when there are no pages.
#[must_use]
pub fn page_options(total_pages: u32) -> Vec<PageOption> {
    (1..=total_pages)
        .map(|page| PageOption {
            value: page,
            label: page.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountError;

    fn per_page(n: u32) -> PerPage {
        PerPage::new(n).unwrap()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(101, per_page(50)), 3);
        assert_eq!(total_pages(100, per_page(50)), 2);
        assert_eq!(total_pages(1, per_page(50)), 1);
        assert_eq!(total_pages(7, per_page(1)), 7);
    }

    #[test]
    fn test_total_pages_zero_items() {
        assert_eq!(total_pages(0, per_page(50)), 0);
        assert_eq!(total_pages(0, per_page(1)), 0);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_all_sizes() {
        for size in 1..=50u32 {
            for items in [0u64, 1, 49, 50, 51, 99, 100, 101, 1234] {
                let expected = (items + u64::from(size) - 1) / u64::from(size);
                assert_eq!(u64::from(total_pages(items, per_page(size))), expected);
            }
        }
    }

    #[test]
    fn test_page_options() {
        assert!(page_options(0).is_empty());
        let options = page_options(3);
        assert_eq!(
            options.iter().map(|o| o.value).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(options[2].label, "3");
    }

    #[test]
    fn test_override_takes_precedence() {
        assert_eq!(resolve_total_items(Some(7), &CountState::Ready(99)), 7);
        assert_eq!(resolve_total_items(Some(0), &CountState::Ready(99)), 0);
    }

    #[test]
    fn test_unknown_count_is_zero() {
        assert_eq!(resolve_total_items(None, &CountState::Ready(42)), 42);
        assert_eq!(resolve_total_items(None, &CountState::Idle), 0);
        assert_eq!(resolve_total_items(None, &CountState::Pending), 0);
        assert_eq!(
            resolve_total_items(
                None,
                &CountState::Failed(CountError::Source("boom".to_string()))
            ),
            0
        );
    }
}
