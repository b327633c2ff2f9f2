//! Shared constants used across the crate.

/// Query parameter holding the 1-based page number.
pub const PARAM_PAGE: &str = "page";

/// Query parameter holding the page size.
pub const PARAM_LIMIT: &str = "limit";

/// Query parameter holding the committed free-text search.
pub const PARAM_SEARCH: &str = "search";

/// Query parameter holding the public-only toggle.
///
/// Only the literal value `"true"` enables the filter.
pub const PARAM_PUBLIC_ONLY: &str = "publicOnly";

/// Page used when the URL carries no usable `page` value.
pub const DEFAULT_PAGE: u32 = 1;

/// Upper bound for the page size requested through `limit`.
pub const MAX_PER_PAGE: u32 = 50;

/// Page size used when the URL carries no usable `limit` value.
pub const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;

/// Default timeout for a single count fetch, in seconds.
pub const DEFAULT_COUNT_TIMEOUT_SECS: u64 = 30;

/// Placeholder shown in the search box.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Long label for the public-only switch (wide layouts).
pub const PUBLIC_ONLY_LABEL: &str = "Show anonymous files only";

/// Short label for the public-only switch (narrow layouts).
pub const PUBLIC_ONLY_LABEL_SHORT: &str = "Anonymous only";

/// Name of the key that commits the search draft.
pub const COMMIT_KEY: &str = "Enter";
