//! Rendering tests for the pagination bar.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use listing_pager::components::PaginationBar;
use listing_pager::{
    Collaborators, CountQuery, CountRequest, CountResponse, CountSource, HistoryRouter,
    ListingProps, Location, PagerConfig, PaginationController, Router, Snapshot, UiEvent,
    ViewSettings,
};
use maud::Render;

struct NoCount;

#[async_trait]
impl CountSource for NoCount {
    async fn count(&self, _request: &CountRequest) -> Result<CountResponse> {
        Ok(CountResponse { count: 0 })
    }
}

fn controller(href: &str) -> (PaginationController, Location) {
    let config = PagerConfig::default();
    let location = Location::parse(href);
    let collaborators = Collaborators {
        router: Arc::new(HistoryRouter::new(location.clone())) as Arc<dyn Router>,
        count: CountQuery::new(Arc::new(NoCount), config.count_timeout()),
        settings: ViewSettings::new(config.default_view_mode),
    };
    (
        PaginationController::mount(&config, collaborators, &location),
        location,
    )
}

fn snapshot(href: &str, items_total: Option<u64>) -> Snapshot {
    let (controller, location) = controller(href);
    controller.snapshot(
        &location,
        &ListingProps {
            items_total,
            type_filter: None,
        },
    )
}

#[tokio::test]
async fn test_renders_page_selector_and_total() {
    let snapshot = snapshot("/uploads?page=2&limit=50", Some(101));
    let html = PaginationBar::new(&snapshot).render().into_string();

    assert!(html.contains("<option value=\"1\">1</option>"));
    assert!(html.contains("<option value=\"2\" selected>2</option>"));
    assert!(html.contains("<option value=\"3\">3</option>"));
    assert!(html.contains("of 3"));
    assert!(html.contains("<input type=\"hidden\" name=\"limit\" value=\"50\">"));
    assert!(html.contains("<input type=\"hidden\" name=\"publicOnly\" value=\"false\">"));
}

#[tokio::test]
async fn test_prev_next_links() {
    let snapshot = snapshot("/uploads?page=2&limit=50&search=dog", Some(101));
    let html = PaginationBar::new(&snapshot).render().into_string();

    assert!(html.contains(
        "href=\"/uploads?search=dog&amp;page=1&amp;limit=50&amp;publicOnly=false\""
    ));
    assert!(html.contains(
        "href=\"/uploads?search=dog&amp;page=3&amp;limit=50&amp;publicOnly=false\""
    ));
    assert!(html.contains("rel=\"prev\""));
    assert!(html.contains("rel=\"next\""));
}

#[tokio::test]
async fn test_selector_disabled_without_pages() {
    let snapshot = snapshot("/uploads", Some(0));
    let html = PaginationBar::new(&snapshot).render().into_string();

    assert!(!html.contains("<option"));
    assert!(html.contains("disabled"));
    assert!(html.contains("of 0"));
}

#[tokio::test]
async fn test_search_form_carries_commit_params() {
    let (mut controller, location) =
        controller("/uploads?sort=new&page=2&limit=10&publicOnly=true");
    controller.handle(
        &location,
        &ListingProps::default(),
        UiEvent::SearchInput("cat".to_string()),
    );
    // Typing does not navigate, so the location is unchanged.
    let snapshot = controller.snapshot(&location, &ListingProps::default());
    let html = PaginationBar::new(&snapshot)
        .placeholder("Find files...")
        .render()
        .into_string();

    assert!(html.contains("role=\"search\""));
    assert!(html.contains("name=\"search\" value=\"cat\""));
    assert!(html.contains("placeholder=\"Find files...\""));
    assert!(html.contains("<input type=\"hidden\" name=\"sort\" value=\"new\">"));
    assert!(html.contains("<input type=\"hidden\" name=\"publicOnly\" value=\"true\">"));
    assert!(!html.contains("name=\"page\" value"));
    // Only the page selector form carries the limit.
    assert_eq!(html.matches("name=\"limit\"").count(), 1);
}

#[tokio::test]
async fn test_public_only_switch_points_at_opposite_value() {
    let snapshot = snapshot("/uploads?page=2&limit=50&publicOnly=true", Some(10));
    let html = PaginationBar::new(&snapshot).render().into_string();

    assert!(html.contains("aria-checked=\"true\""));
    assert!(html.contains("href=\"/uploads?page=2&amp;limit=50&amp;publicOnly=false\""));
    assert!(html.contains("Show anonymous files only"));
    assert!(html.contains("Anonymous only"));
}

#[tokio::test]
async fn test_view_toggle_tooltip() {
    let snapshot = snapshot("/uploads", Some(0));
    let html = PaginationBar::new(&snapshot).render().into_string();
    assert!(html.contains("title=\"Switch to table view\""));
}

#[tokio::test]
async fn test_placeholder_comes_from_config() {
    let config = PagerConfig::from_toml_str("search_placeholder = \"Find uploads...\"").unwrap();
    let snapshot = snapshot("/uploads", Some(5));
    let html = PaginationBar::from_config(&snapshot, &config)
        .render()
        .into_string();

    assert!(html.contains("placeholder=\"Find uploads...\""));
    assert!(html.contains("id=\"pagination-search-input\""));
    assert!(html.contains("id=\"pagination-page-select\""));
    assert!(html.contains("btn ghost page-prev"));
}
