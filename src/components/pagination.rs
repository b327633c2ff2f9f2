//! Pagination bar: search box, public-only switch, and page navigation.
//!
//! Every control is a plain link or GET form whose destination is the same
//! URL the controller would navigate to, so the bar also works as static
//! HTML.

use maud::{html, Markup, Render};

use crate::components::button::Button;
use crate::components::form::{Form, HiddenInput, Input, Label, Select, SelectOption, Switch};
use crate::config::PagerConfig;
use crate::constants::{
    PARAM_LIMIT, PARAM_PAGE, PARAM_PUBLIC_ONLY, PARAM_SEARCH, PUBLIC_ONLY_LABEL,
    PUBLIC_ONLY_LABEL_SHORT, SEARCH_PLACEHOLDER,
};
use crate::controller::Snapshot;
use crate::settings::ViewMode;

const PUBLIC_ONLY_ID: &str = "anonymous-only";

const SEARCH_INPUT_ID: &str = "pagination-search-input";
const PAGE_SELECT_ID: &str = "pagination-page-select";

/// Pagination bar component.
///
/// Renders the view-mode toggle, the search box, the public-only switch, and
/// the previous/page/next controls for one [`Snapshot`].
#[derive(Debug, Clone)]
pub struct PaginationBar<'a> {
    /// Derived state of the current render
    pub snapshot: &'a Snapshot,
    /// Placeholder text shown in the empty search box
    pub placeholder: &'a str,
}

impl<'a> PaginationBar<'a> {
    /// Create a pagination bar with the built-in placeholder text.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - State derived by the controller for this render
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            placeholder: SEARCH_PLACEHOLDER,
        }
    }

    /// Create a pagination bar that takes its text from `config`.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - State derived by the controller for this render
    /// * `config` - Pager configuration supplying the search placeholder
    #[must_use]
    pub fn from_config(snapshot: &'a Snapshot, config: &'a PagerConfig) -> Self {
        Self::new(snapshot).placeholder(&config.search_placeholder)
    }

    /// Override the search placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn view_toggle(&self) -> Markup {
        let mode = self.snapshot.view_mode;
        let icon = match mode {
            ViewMode::Masonry => "\u{2630}",
            ViewMode::Table => "\u{25A6}",
        };
        html! {
            div class="view-toggle" {
                (Button::icon(icon)
                    .id("view-mode-toggle")
                    .title(mode.switch_hint())
                    .aria_label(mode.switch_hint()))
            }
        }
    }

    fn search_form(&self) -> Markup {
        // Carry every other parameter the commit would keep.
        let params = self.snapshot.search.to_location().params();
        let carried: Vec<(&str, &str)> = params
            .iter()
            .filter(|(name, _)| *name != PARAM_SEARCH)
            .collect();
        let content = html! {
            (Input::search(PARAM_SEARCH)
                .id(SEARCH_INPUT_ID)
                .class("search-input")
                .value(&self.snapshot.draft)
                .placeholder(self.placeholder)
                .autocomplete("off"))
            @for (name, value) in &carried {
                (HiddenInput::new(name, value))
            }
            (Button::icon("\u{1F50D}").r#type("submit").title("Search").aria_label("Search"))
        };
        Form::get(&self.snapshot.pathname, content)
            .class("pagination-search")
            .role("search")
            .render()
    }

    fn public_only_switch(&self) -> Markup {
        let href = self.snapshot.toggle_public_only.href();
        html! {
            div class="public-only" {
                (Switch::new(PUBLIC_ONLY_ID, self.snapshot.state.public_only, &href))
                (Label::new(PUBLIC_ONLY_ID, PUBLIC_ONLY_LABEL).class("label-wide"))
                (Label::new(PUBLIC_ONLY_ID, PUBLIC_ONLY_LABEL_SHORT).class("label-narrow"))
            }
        }
    }

    fn page_selector(&self) -> Markup {
        let snapshot = self.snapshot;
        let options = snapshot
            .page_options
            .iter()
            .map(|option| SelectOption {
                value: option.value.to_string(),
                label: option.label.clone(),
            })
            .collect();
        let limit = snapshot.state.per_page.to_string();
        let public_only = snapshot.state.public_only.to_string();
        let content = html! {
            (Select::new(PARAM_PAGE)
                .options(options)
                .selected(snapshot.state.page.to_string())
                .id(PAGE_SELECT_ID)
                .class("page-select")
                .disabled(!snapshot.has_pages())
                .submit_on_change())
            (HiddenInput::new(PARAM_LIMIT, &limit))
            (HiddenInput::new(PARAM_PUBLIC_ONLY, &public_only))
        };
        Form::get(&snapshot.pathname, content).class("page-form").render()
    }
}

impl Render for PaginationBar<'_> {
    fn render(&self) -> Markup {
        let snapshot = self.snapshot;
        let previous = snapshot.previous.href();
        let next = snapshot.next.href();

        html! {
            nav class="pagination" aria-label="pagination" {
                div class="pagination-filters" {
                    (self.view_toggle())
                    (self.search_form())
                }
                (self.public_only_switch())
                div class="pagination-pages" {
                    (Button::ghost("\u{00ab} Previous").href(&previous).rel("prev").class("page-prev"))
                    span class="page-of" {
                        (self.page_selector())
                        span class="page-total" { "of " (snapshot.total_pages) }
                    }
                    (Button::ghost("Next \u{00bb}").href(&next).rel("next").class("page-next"))
                }
            }
        }
    }
}
