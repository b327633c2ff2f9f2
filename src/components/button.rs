//! Button component for the pagination controls.
//!
//! Renders as an `<a>` when an href is set (previous/next links) and as a
//! `<button>` otherwise (search submit, view-mode toggle).

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Square outline button sized for a single icon
    Icon,
    /// Borderless link-style button
    #[default]
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Icon => "btn outline btn-icon",
            Self::Ghost => "btn ghost",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Visible text
    pub label: &'a str,
    pub variant: ButtonVariant,
    /// Renders as `<a>` when present
    pub href: Option<&'a str>,
    /// `type` attribute for `<button>` elements
    pub r#type: Option<&'a str>,
    pub class: Option<&'a str>,
    pub id: Option<&'a str>,
    /// Tooltip text
    pub title: Option<&'a str>,
    pub aria_label: Option<&'a str>,
    /// `rel` attribute for links
    pub rel: Option<&'a str>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
            class: None,
            id: None,
            title: None,
            aria_label: None,
            rel: None,
        }
    }

    #[must_use]
    pub fn icon(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Icon)
    }

    #[must_use]
    pub fn ghost(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Ghost)
    }

    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the tooltip shown on hover.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn aria_label(mut self, aria_label: &'a str) -> Self {
        self.aria_label = Some(aria_label);
        self
    }

    #[must_use]
    pub fn rel(mut self, rel: &'a str) -> Self {
        self.rel = Some(rel);
        self
    }

    fn build_class(&self) -> String {
        let mut classes = self.variant.class().to_string();
        if let Some(extra) = self.class {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let classes = self.build_class();

        if let Some(href) = self.href {
            html! {
                a
                    class=(classes)
                    href=(href)
                    id=[self.id]
                    title=[self.title]
                    rel=[self.rel]
                    aria-label=[self.aria_label]
                {
                    (self.label)
                }
            }
        } else {
            html! {
                button
                    class=(classes)
                    type=(self.r#type.unwrap_or("button"))
                    id=[self.id]
                    title=[self.title]
                    aria-label=[self.aria_label]
                {
                    (self.label)
                }
            }
        }
    }
}
