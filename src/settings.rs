//! Shared view settings.
//!
//! The listing can be shown as a masonry grid or as a table. The choice is
//! process-wide, so it lives in a [`ViewSettings`] handle that callers pass
//! explicitly to whatever needs it.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// How listing items are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Masonry,
    Table,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masonry => Self::Table,
            Self::Table => Self::Masonry,
        }
    }

    /// Tooltip for the control that switches away from this mode.
    #[must_use]
    pub fn switch_hint(self) -> &'static str {
        match self {
            Self::Masonry => "Switch to table view",
            Self::Table => "Switch to masonry view",
        }
    }
}

/// Cloneable handle onto the process-wide view settings.
#[derive(Debug, Clone, Default)]
pub struct ViewSettings {
    view_mode: Arc<RwLock<ViewMode>>,
}

impl ViewSettings {
    #[must_use]
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode: Arc::new(RwLock::new(view_mode)),
        }
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        *self.view_mode.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_view_mode(&self, view_mode: ViewMode) {
        *self.view_mode.write().unwrap_or_else(PoisonError::into_inner) = view_mode;
    }

    /// Flip the view mode and return the new value.
    pub fn toggle_view_mode(&self) -> ViewMode {
        let mut guard = self.view_mode.write().unwrap_or_else(PoisonError::into_inner);
        *guard = guard.toggled();
        *guard
    }
}
