//! Form components for the pagination controls.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    pub content: Markup,
    pub class: Option<&'a str>,
    /// `role` attribute, e.g. "search"
    pub role: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            role: None,
        }
    }

    /// Create a GET form. Submitting it navigates to `action?fields`.
    #[must_use]
    pub fn get(action: &'a str, content: Markup) -> Self {
        Self::new(action, "get", content)
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn role(mut self, role: &'a str) -> Self {
        self.role = Some(role);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] role=[self.role] {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    pub name: &'a str,
    /// Input type ("text", "search", "hidden", ...)
    pub r#type: &'a str,
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
    pub autocomplete: Option<&'a str>,
}

impl<'a> Input<'a> {
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            id: None,
            class: None,
            autocomplete: None,
        }
    }

    #[must_use]
    pub fn search(name: &'a str) -> Self {
        Self::new(name, "search")
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                id=[self.id]
                class=[self.class]
                autocomplete=[self.autocomplete];
        }
    }
}

/// A hidden input carrying one query parameter through a GET form.
#[derive(Debug)]
pub struct HiddenInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> HiddenInput<'a> {
    #[must_use]
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl Render for HiddenInput<'_> {
    fn render(&self) -> Markup {
        html! {
            input type="hidden" name=(self.name) value=(self.value);
        }
    }
}

/// A select element.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    /// Form field name
    pub name: &'a str,
    pub options: Vec<SelectOption>,
    /// Value of the selected option
    pub selected: Option<String>,
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
    pub disabled: bool,
    /// Submit the enclosing form when the selection changes
    pub submit_on_change: bool,
}

impl<'a> Select<'a> {
    /// Create an empty select.
    ///
    /// # Arguments
    ///
    /// * `name` - Form field name submitted with the chosen value
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
            class: None,
            disabled: false,
            submit_on_change: false,
        }
    }

    #[must_use]
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: impl Into<String>) -> Self {
        self.selected = Some(selected.into());
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn submit_on_change(mut self) -> Self {
        self.submit_on_change = true;
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select
                name=(self.name)
                id=[self.id]
                class=[self.class]
                disabled[self.disabled]
                onchange=[self.submit_on_change.then_some("this.form.submit()")]
            {
                @for opt in &self.options {
                    option
                        value=(opt.value)
                        selected[self.selected.as_deref() == Some(opt.value.as_str())]
                    {
                        (opt.label)
                    }
                }
            }
        }
    }
}

/// An option for a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value
    pub value: String,
    /// Visible text
    pub label: String,
}

/// A label element.
#[derive(Debug)]
pub struct Label<'a> {
    /// ID of the labelled control
    pub r#for: &'a str,
    pub text: &'a str,
    pub class: Option<&'a str>,
}

impl<'a> Label<'a> {
    #[must_use]
    pub fn new(r#for: &'a str, text: &'a str) -> Self {
        Self {
            r#for,
            text,
            class: None,
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Markup {
        html! {
            label for=(self.r#for) class=[self.class] {
                (self.text)
            }
        }
    }
}

/// An on/off switch.
///
/// Rendered as a link to the URL that holds the opposite value, so it works
/// without scripting.
#[derive(Debug)]
pub struct Switch<'a> {
    pub id: &'a str,
    pub checked: bool,
    /// Where activating the switch navigates
    pub href: &'a str,
}

impl<'a> Switch<'a> {
    /// Create a switch.
    ///
    /// # Arguments
    ///
    /// * `id` - Element ID, referenced by the switch's labels
    /// * `checked` - Whether the switch is currently on
    /// * `href` - URL holding the opposite value
    #[must_use]
    pub fn new(id: &'a str, checked: bool, href: &'a str) -> Self {
        Self { id, checked, href }
    }
}

impl Render for Switch<'_> {
    fn render(&self) -> Markup {
        let class = if self.checked { "switch checked" } else { "switch" };
        html! {
            a
                id=(self.id)
                class=(class)
                role="switch"
                href=(self.href)
                aria-checked=(if self.checked { "true" } else { "false" })
            {
                span class="switch-thumb" {}
            }
        }
    }
}
