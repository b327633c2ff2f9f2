//! Navigation-intent builder.
//!
//! Each user action becomes one complete [`NavigationTarget`] that replaces
//! the current query string wholesale. Nothing here touches the current
//! state; the next render re-reads the new URL.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::debug;
use urlencoding::encode;

use crate::constants::{PARAM_LIMIT, PARAM_PAGE, PARAM_PUBLIC_ONLY, PARAM_SEARCH};
use crate::query::{Location, QueryState};

/// A user action that changes the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Promote the draft to the committed search and go back to page 1.
    CommitSearch { draft: String },
    /// Jump to a page picked from the selector.
    SelectPage(u32),
    /// Set the public-only filter.
    SetPublicOnly(bool),
    Previous,
    Next,
}

/// Path plus full query string of the next URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Path the listing lives at, kept unchanged by every intent.
    pub pathname: String,
    /// Encoded query string without the leading `?`.
    pub query: String,
}

impl NavigationTarget {
    /// Create a navigation target.
    ///
    /// # Arguments
    ///
    /// * `pathname` - Path of the current listing page
    /// * `query` - Fully encoded query string, without the leading `?`
    #[must_use]
    pub fn new(pathname: &str, query: String) -> Self {
        Self {
            pathname: pathname.to_string(),
            query,
        }
    }

    /// `{pathname}?{query}`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}?{}", self.pathname, self.query)
    }

    #[must_use]
    pub fn to_location(&self) -> Location {
        Location::new(&self.pathname, &self.query)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}", self.pathname, self.query)
    }
}

/// Everything an intent may need to know about the current render.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    /// Location being rendered.
    pub location: &'a Location,
    /// State read from `location`.
    pub state: &'a QueryState,
    /// Current draft search text.
    pub draft: &'a str,
    /// Pages derived for this render; bounds `Next`.
    pub total_pages: u32,
}

impl NavContext<'_> {
    /// Build the target for `intent`.
    #[must_use]
    pub fn target(&self, intent: &Intent) -> NavigationTarget {
        let pathname = self.location.pathname.as_str();
        match intent {
            Intent::CommitSearch { draft } => commit_search(self.location, self.state, draft),
            Intent::SelectPage(page) => select_page(pathname, self.state, *page),
            Intent::SetPublicOnly(value) => set_public_only(pathname, self.state, *value),
            Intent::Previous => page_link(
                pathname,
                self.state,
                self.draft,
                previous_page(self.state.page),
            ),
            Intent::Next => page_link(
                pathname,
                self.state,
                self.draft,
                next_page(self.state.page, self.total_pages),
            ),
        }
    }
}

/// Keep every parameter of the current URL, overwrite `search` and
/// `publicOnly`, and drop `page` and `limit` so they fall back to defaults.
#[must_use]
pub fn commit_search(location: &Location, state: &QueryState, draft: &str) -> NavigationTarget {
    let mut params = location.params();
    params.set(PARAM_SEARCH, draft);
    params.set(PARAM_PUBLIC_ONLY, bool_str(state.public_only));
    params.delete(PARAM_PAGE);
    params.delete(PARAM_LIMIT);
    NavigationTarget::new(&location.pathname, params.to_query_string())
}

/// `page`, `limit`, `publicOnly`. The committed search is not carried over.
#[must_use]
pub fn select_page(pathname: &str, state: &QueryState, page: u32) -> NavigationTarget {
    NavigationTarget::new(
        pathname,
        format!(
            "{PARAM_PAGE}={page}&{PARAM_LIMIT}={}&{PARAM_PUBLIC_ONLY}={}",
            state.per_page, state.public_only
        ),
    )
}

/// Same shape as [`select_page`] on the current page, with a new filter value.
#[must_use]
pub fn set_public_only(pathname: &str, state: &QueryState, value: bool) -> NavigationTarget {
    NavigationTarget::new(
        pathname,
        format!(
            "{PARAM_PAGE}={}&{PARAM_LIMIT}={}&{PARAM_PUBLIC_ONLY}={value}",
            state.page, state.per_page
        ),
    )
}

/// Link used by the previous/next controls.
#[must_use]
pub fn page_link(pathname: &str, state: &QueryState, search: &str, page: u32) -> NavigationTarget {
    NavigationTarget::new(
        pathname,
        format!(
            "{PARAM_SEARCH}={}&{PARAM_PAGE}={page}&{PARAM_LIMIT}={}&{PARAM_PUBLIC_ONLY}={}",
            encode(search),
            state.per_page,
            state.public_only
        ),
    )
}

/// One page back, staying put on page 1.
#[must_use]
pub fn previous_page(current: u32) -> u32 {
    if current > 1 {
        current - 1
    } else {
        current
    }
}

/// One page forward, staying put once `total_pages` is reached.
#[must_use]
pub fn next_page(current: u32, total_pages: u32) -> u32 {
    if current < total_pages {
        current + 1
    } else {
        current
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Client-side routing collaborator.
pub trait Router: Send + Sync {
    /// Navigate to `target`, adding a history entry.
    fn push(&self, target: &NavigationTarget);
}

#[derive(Debug)]
struct History {
    entries: Vec<Location>,
    cursor: usize,
}

/// In-memory browser-style history.
///
/// Pushing drops any forward entries; back and forward move a cursor.
#[derive(Debug)]
pub struct HistoryRouter {
    history: Mutex<History>,
}

impl HistoryRouter {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![initial],
                cursor: 0,
            }),
        }
    }

    /// The entry the cursor points at.
    #[must_use]
    pub fn current(&self) -> Location {
        let history = self.lock();
        history.entries[history.cursor].clone()
    }

    /// Step back one entry. Returns `false` at the oldest entry.
    pub fn back(&self) -> bool {
        let mut history = self.lock();
        if history.cursor == 0 {
            return false;
        }
        history.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&self) -> bool {
        let mut history = self.lock();
        if history.cursor + 1 >= history.entries.len() {
            return false;
        }
        history.cursor += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Router for HistoryRouter {
    fn push(&self, target: &NavigationTarget) {
        let mut history = self.lock();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(target.to_location());
        history.cursor = history.entries.len() - 1;
        debug!(href = %target, entries = history.entries.len(), "History push");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_search_drops_page_and_limit() {
        let location = Location::parse("/uploads?page=4&limit=20&search=dog&publicOnly=false");
        let state = QueryState::from_location(&location, Default::default());
        let target = commit_search(&location, &state, "cat");
        assert_eq!(target.href(), "/uploads?search=cat&publicOnly=false");
    }

    #[test]
    fn test_commit_search_keeps_other_params() {
        let location = Location::parse("/uploads?sort=new&page=2&publicOnly=true");
        let state = QueryState::from_location(&location, Default::default());
        let target = commit_search(&location, &state, "red cat");
        assert_eq!(target.query, "sort=new&publicOnly=true&search=red+cat");
    }

    #[test]
    fn test_select_page_drops_search() {
        let state = QueryState::from_query("page=1&limit=20&search=dog&publicOnly=true");
        let target = select_page("/uploads", &state, 3);
        assert_eq!(target.href(), "/uploads?page=3&limit=20&publicOnly=true");
    }

    #[test]
    fn test_set_public_only() {
        let state = QueryState::from_query("page=2&limit=50");
        let target = set_public_only("/uploads", &state, true);
        assert_eq!(target.href(), "/uploads?page=2&limit=50&publicOnly=true");
    }

    #[test]
    fn test_page_link_encodes_search() {
        let state = QueryState::from_query("page=2&limit=10");
        let target = page_link("/uploads", &state, "a b&c", 3);
        assert_eq!(
            target.href(),
            "/uploads?search=a%20b%26c&page=3&limit=10&publicOnly=false"
        );
    }

    #[test]
    fn test_previous_and_next_page_bounds() {
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(5), 4);
        assert_eq!(next_page(5, 5), 5);
        assert_eq!(next_page(4, 5), 5);
        assert_eq!(next_page(1, 0), 1);
        // Past the end stays put rather than walking further.
        assert_eq!(next_page(9, 5), 9);
    }

    #[test]
    fn test_context_dispatch() {
        let location = Location::parse("/uploads?page=1&limit=50&search=dog");
        let state = QueryState::from_location(&location, Default::default());
        let ctx = NavContext {
            location: &location,
            state: &state,
            draft: "dog",
            total_pages: 3,
        };
        assert_eq!(
            ctx.target(&Intent::Previous).query,
            "search=dog&page=1&limit=50&publicOnly=false"
        );
        assert_eq!(
            ctx.target(&Intent::Next).query,
            "search=dog&page=2&limit=50&publicOnly=false"
        );
    }

    #[test]
    fn test_history_router() {
        let router = HistoryRouter::new(Location::parse("/uploads"));
        router.push(&NavigationTarget::new("/uploads", "page=2".to_string()));
        router.push(&NavigationTarget::new("/uploads", "page=3".to_string()));
        assert_eq!(router.len(), 3);
        assert_eq!(router.current().query, "page=3");

        assert!(router.back());
        assert_eq!(router.current().query, "page=2");
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current().query, "");

        assert!(router.forward());
        router.push(&NavigationTarget::new("/uploads", "page=9".to_string()));
        assert_eq!(router.len(), 3);
        assert!(!router.forward());
        assert_eq!(router.current().query, "page=9");
    }
}
