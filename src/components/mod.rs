//! Maud HTML components for the pagination controls.
//!
//! - `button`: link and button elements
//! - `form`: forms, inputs, selects, labels, and the on/off switch
//! - `pagination`: the assembled pagination bar
//!
//! # Example
//!
//! ```ignore
//! use listing_pager::components::PaginationBar;
//! use maud::Render;
//!
//! let snapshot = controller.snapshot(&location, &props);
//! let markup = PaginationBar::new(&snapshot).render();
//! ```

pub mod button;
pub mod form;
pub mod pagination;

pub use button::{Button, ButtonVariant};
pub use form::{Form, HiddenInput, Input, Label, Select, SelectOption, Switch};
pub use pagination::PaginationBar;

/// Re-export maud for convenience
pub use maud::{html, Markup, Render};
