//! Query-state reader.
//!
//! Derives the pagination/filter tuple from the current query string. The
//! derivation is total: malformed, missing, or out-of-range values fall back
//! to defaults instead of producing errors.

mod params;

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;
use tracing::debug;

use crate::constants::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, PARAM_LIMIT, PARAM_PAGE, PARAM_PUBLIC_ONLY,
    PARAM_SEARCH,
};

pub use params::{Location, QueryParams};

/// A page size. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PerPage(NonZeroU32);

impl PerPage {
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Clamp an arbitrary parsed integer into `[1, max]`.
    ///
    /// `max` itself is capped at [`MAX_PER_PAGE`], so no bound lets a page
    /// grow past it.
    #[must_use]
    pub fn clamped(value: i64, max: u32) -> Self {
        let max = i64::from(max.clamp(1, MAX_PER_PAGE));
        let value = value.clamp(1, max);
        // In [1, MAX_PER_PAGE] after the clamp above.
        Self(NonZeroU32::new(u32::try_from(value).unwrap_or(1)).unwrap_or(NonZeroU32::MIN))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::clamped(i64::from(DEFAULT_PER_PAGE), MAX_PER_PAGE)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bounds applied to `limit` when reading it from the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

impl PageLimits {
    fn default_per_page(self) -> PerPage {
        PerPage::clamped(i64::from(self.default_per_page), self.max_per_page)
    }
}

/// Pagination and filter state read from the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// 1-based page number. Not clamped against the page count.
    pub page: u32,
    pub per_page: PerPage,
    /// Committed search text, verbatim.
    pub search: String,
    pub public_only: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: PerPage::default(),
            search: String::new(),
            public_only: false,
        }
    }
}

impl QueryState {
    /// Read state from a raw query string using the default limits.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        Self::from_params(&QueryParams::parse(raw), PageLimits::default())
    }

    #[must_use]
    pub fn from_location(location: &Location, limits: PageLimits) -> Self {
        Self::from_params(&location.params(), limits)
    }

    #[must_use]
    pub fn from_params(params: &QueryParams, limits: PageLimits) -> Self {
        Self {
            page: read_page(params.get_non_empty(PARAM_PAGE)),
            per_page: read_per_page(params.get_non_empty(PARAM_LIMIT), limits),
            search: params.get(PARAM_SEARCH).unwrap_or_default().to_string(),
            public_only: params.get(PARAM_PUBLIC_ONLY) == Some("true"),
        }
    }
}

fn read_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_PAGE;
    };
    match parse_int_prefix(raw) {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => {
            debug!(raw, "Unusable page parameter, defaulting");
            DEFAULT_PAGE
        }
    }
}

fn read_per_page(raw: Option<&str>, limits: PageLimits) -> PerPage {
    let Some(raw) = raw else {
        return limits.default_per_page();
    };
    match parse_int_prefix(raw) {
        Some(n) => {
            let per_page = PerPage::clamped(n, limits.max_per_page);
            if i64::from(per_page.get()) != n {
                debug!(raw, clamped = per_page.get(), "Limit parameter out of range");
            }
            per_page
        }
        None => {
            debug!(raw, "Unparsable limit parameter, defaulting");
            limits.default_per_page()
        }
    }
}

/// Parse the leading base-10 integer of `s`.
///
/// Leading whitespace and a single sign are accepted; anything after the
/// digits is ignored, so `"12abc"` reads as 12. Returns `None` when no digit
/// follows. Values beyond `i64` saturate.
#[must_use]
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let digit = i64::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    }

    seen.then_some(value)
}
