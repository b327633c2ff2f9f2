//! Uncommitted search text.

use crate::query::QueryState;

/// Search text being typed but not yet committed to the URL.
///
/// Seeded from the URL once at mount. After that only keystrokes change it;
/// committing leaves it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSearch {
    text: String,
}

impl DraftSearch {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn from_query_state(state: &QueryState) -> Self {
        Self::new(state.search.clone())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft with the input's current contents.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Overwrite the draft with the URL's committed search.
    ///
    /// Never called implicitly; hosts that handle back/forward navigation
    /// can use it to bring the input back in line with the address bar.
    pub fn resync(&mut self, state: &QueryState) {
        self.text.clone_from(&state.search);
    }
}
