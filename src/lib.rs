//! Listing pager.
//!
//! Keeps a listing view's page, page size, search, and public-only filter
//! in the URL query string. State is re-derived from the URL on every
//! render; user actions become complete navigation targets.

pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod count;
pub mod draft;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod query;
pub mod settings;
pub mod telemetry;

pub use config::PagerConfig;
pub use controller::{Collaborators, ListingProps, PaginationController, Snapshot, UiEvent};
pub use count::{CountQuery, CountRequest, CountResponse, CountSource, CountState};
pub use draft::DraftSearch;
pub use error::{ConfigError, CountError};
pub use navigation::{HistoryRouter, Intent, NavigationTarget, Router};
pub use query::{Location, PerPage, QueryParams, QueryState};
pub use settings::{ViewMode, ViewSettings};
