//! Element selection.
//!
//! Pages are addressed through typed [`Selector`]s which compile to DOM
//! query expressions evaluated in the page. The storefront tags its
//! interactive elements with `data-test` attributes, so those get a
//! dedicated variant.

use serde::{Deserialize, Serialize};

/// Default polling interval while waiting for elements (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Selector for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g. `.inventory_item_name`)
    Css(String),
    /// `data-test` attribute selector
    DataTest(String),
    /// Text content selector (any element containing the text)
    Text(String),
    /// CSS selector filtered by text content
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
    /// Descendant of the container whose text matches.
    ///
    /// Covers "the add button inside the product card named X": find the
    /// container by text, then query the descendant within it.
    DescendantOfText {
        /// Container CSS selector
        container: String,
        /// Text the container must include
        text: String,
        /// Descendant CSS selector
        descendant: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a `data-test` attribute selector
    #[must_use]
    pub fn data_test(id: impl Into<String>) -> Self {
        Self::DataTest(id.into())
    }

    /// Create a text content selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Filter a CSS selector by text content
    #[must_use]
    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Self::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    /// Locate a descendant inside the container whose text matches
    #[must_use]
    pub fn descendant_of_text(
        container: impl Into<String>,
        text: impl Into<String>,
        descendant: impl Into<String>,
    ) -> Self {
        Self::DescendantOfText {
            container: container.into(),
            text: text.into(),
            descendant: descendant.into(),
        }
    }

    /// The CSS form of simple selectors, where one exists
    fn as_css(&self) -> Option<String> {
        match self {
            Self::Css(s) => Some(s.clone()),
            Self::DataTest(id) => Some(format!("[data-test=\"{id}\"]")),
            _ => None,
        }
    }

    /// Convert to a JavaScript expression yielding the first match (or null)
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(_) | Self::DataTest(_) => {
                // as_css is Some for these variants
                let css = self.as_css().unwrap_or_default();
                format!("document.querySelector({css:?})")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).find(el => el.textContent.includes({t:?}))")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))")
            }
            Self::DescendantOfText {
                container,
                text,
                descendant,
            } => {
                format!(
                    "(Array.from(document.querySelectorAll({container:?})).find(el => el.textContent.includes({text:?})) || document.createDocumentFragment()).querySelector({descendant:?})"
                )
            }
        }
    }

    /// Convert to a JavaScript expression yielding all matches as an array
    #[must_use]
    pub fn to_all_query(&self) -> String {
        match self {
            Self::Css(_) | Self::DataTest(_) => {
                let css = self.as_css().unwrap_or_default();
                format!("Array.from(document.querySelectorAll({css:?}))")
            }
            Self::Text(t) => {
                format!("Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({t:?}))")
            }
            Self::CssWithText { css, text } => {
                format!("Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?}))")
            }
            Self::DescendantOfText { .. } => {
                format!("[{}].filter(el => el !== null)", self.to_query())
            }
        }
    }

    /// Convert to a JavaScript expression counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        format!("{}.length", self.to_all_query())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "{s}"),
            Self::DataTest(id) => write!(f, "[data-test=\"{id}\"]"),
            Self::Text(t) => write!(f, "text={t}"),
            Self::CssWithText { css, text } => write!(f, "{css} >> text={text}"),
            Self::DescendantOfText {
                container,
                text,
                descendant,
            } => write!(f, "{container} >> text={text} >> {descendant}"),
        }
    }
}
