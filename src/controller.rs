//! Pagination controller.
//!
//! Ties the reader, the page-count deriver, the draft, and the intent builder
//! together. State is re-derived from the location on every call, so the
//! controller itself only owns the draft search text.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::PagerConfig;
use crate::constants::COMMIT_KEY;
use crate::count::{CountQuery, CountRequest, CountState};
use crate::draft::DraftSearch;
use crate::navigation::{Intent, NavContext, NavigationTarget, Router};
use crate::pages::{page_options, resolve_total_items, total_pages, PageOption};
use crate::query::{parse_int_prefix, Location, PageLimits, QueryState};
use crate::settings::{ViewMode, ViewSettings};

/// What the embedding listing passes in on each render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingProps {
    /// Known item total. Takes precedence over the fetched count.
    pub items_total: Option<u64>,
    /// Opaque type filter forwarded to the count source.
    pub type_filter: Option<String>,
}

/// External collaborators the controller talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub router: Arc<dyn Router>,
    pub count: CountQuery,
    pub settings: ViewSettings,
}

/// Input events from the rendered controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search box contents changed.
    SearchInput(String),
    /// A key was pressed in the search box.
    KeyDown(String),
    SearchButton,
    /// A value was picked from the page selector.
    PageSelected(String),
    PublicOnlyChanged(bool),
    Previous,
    Next,
    ToggleViewMode,
}

/// Everything needed to render the controls for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pathname: String,
    pub state: QueryState,
    pub draft: String,
    pub count: CountState,
    pub total_items: u64,
    pub total_pages: u32,
    pub page_options: Vec<PageOption>,
    pub previous: NavigationTarget,
    pub next: NavigationTarget,
    /// Where committing the current draft would go.
    pub search: NavigationTarget,
    /// Where flipping the public-only switch would go.
    pub toggle_public_only: NavigationTarget,
    pub view_mode: ViewMode,
}

impl Snapshot {
    /// Whether the page selector has anything to offer.
    #[must_use]
    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }
}

pub struct PaginationController {
    limits: PageLimits,
    collaborators: Collaborators,
    draft: DraftSearch,
}

impl PaginationController {
    /// Create a controller for a listing mounted at `location`.
    ///
    /// The draft search is seeded from the URL here and only here.
    #[must_use]
    pub fn mount(config: &PagerConfig, collaborators: Collaborators, location: &Location) -> Self {
        let limits = config.page_limits();
        let state = QueryState::from_location(location, limits);
        debug!(path = %location.pathname, page = state.page, "Mounting pagination controller");
        Self {
            limits,
            collaborators,
            draft: DraftSearch::from_query_state(&state),
        }
    }

    #[must_use]
    pub fn draft(&self) -> &DraftSearch {
        &self.draft
    }

    /// Mutable access for hosts that resynchronise the draft themselves.
    pub fn draft_mut(&mut self) -> &mut DraftSearch {
        &mut self.draft
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.collaborators.settings
    }

    #[must_use]
    pub fn query_state(&self, location: &Location) -> QueryState {
        QueryState::from_location(location, self.limits)
    }

    /// Derive the render state for `location`.
    ///
    /// Starts a count fetch if the count inputs changed since the last call.
    #[must_use]
    pub fn snapshot(&self, location: &Location, props: &ListingProps) -> Snapshot {
        let state = self.query_state(location);
        let count = self
            .collaborators
            .count
            .observe(&self.count_request(&state, props));
        let total_items = resolve_total_items(props.items_total, &count);
        let total_pages = total_pages(total_items, state.per_page);

        let ctx = NavContext {
            location,
            state: &state,
            draft: self.draft.text(),
            total_pages,
        };
        let previous = ctx.target(&Intent::Previous);
        let next = ctx.target(&Intent::Next);
        let search = ctx.target(&Intent::CommitSearch {
            draft: self.draft.text().to_string(),
        });
        let toggle_public_only = ctx.target(&Intent::SetPublicOnly(!state.public_only));

        Snapshot {
            pathname: location.pathname.clone(),
            draft: self.draft.text().to_string(),
            count,
            total_items,
            total_pages,
            page_options: page_options(total_pages),
            previous,
            next,
            search,
            toggle_public_only,
            view_mode: self.collaborators.settings.view_mode(),
            state,
        }
    }

    /// Apply a UI event. Returns the target navigated to, if any.
    pub fn handle(
        &mut self,
        location: &Location,
        props: &ListingProps,
        event: UiEvent,
    ) -> Option<NavigationTarget> {
        let intent = match event {
            UiEvent::SearchInput(text) => {
                self.draft.edit(text);
                return None;
            }
            UiEvent::KeyDown(key) if key == COMMIT_KEY => self.commit_intent(),
            UiEvent::KeyDown(_) => return None,
            UiEvent::SearchButton => self.commit_intent(),
            UiEvent::PageSelected(raw) => match parse_int_prefix(&raw) {
                Some(page) if page >= 1 => {
                    Intent::SelectPage(u32::try_from(page).unwrap_or(u32::MAX))
                }
                _ => {
                    debug!(raw = %raw, "Ignoring unusable page selection");
                    return None;
                }
            },
            UiEvent::PublicOnlyChanged(value) => Intent::SetPublicOnly(value),
            UiEvent::Previous => Intent::Previous,
            UiEvent::Next => Intent::Next,
            UiEvent::ToggleViewMode => {
                let mode = self.collaborators.settings.toggle_view_mode();
                debug!(?mode, "View mode toggled");
                return None;
            }
        };

        let target = self.target_for(location, props, &intent);
        info!(href = %target, ?intent, "Navigating");
        self.collaborators.router.push(&target);
        Some(target)
    }

    /// Build the target for `intent` without navigating.
    ///
    /// Uses the count already known; never starts a fetch.
    #[must_use]
    pub fn target_for(
        &self,
        location: &Location,
        props: &ListingProps,
        intent: &Intent,
    ) -> NavigationTarget {
        let state = self.query_state(location);
        let count = self.collaborators.count.state();
        let total_items = resolve_total_items(props.items_total, &count);
        let total_pages = total_pages(total_items, state.per_page);
        NavContext {
            location,
            state: &state,
            draft: self.draft.text(),
            total_pages,
        }
        .target(intent)
    }

    fn commit_intent(&self) -> Intent {
        Intent::CommitSearch {
            draft: self.draft.text().to_string(),
        }
    }

    fn count_request(&self, state: &QueryState, props: &ListingProps) -> CountRequest {
        CountRequest {
            current_page: state.page,
            per_page: state.per_page.get(),
            search: self.draft.text().to_string(),
            type_filter: props.type_filter.clone(),
        }
    }
}
