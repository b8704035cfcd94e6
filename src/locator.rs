use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Describes how to find one or more elements in the document.
///
/// Locators are plain values. Page objects usually declare them as constants:
///
/// ```
/// use ui_wait_helper::prelude::*;
///
/// const FILTER_TOGGLE: Locator = Locator::css(".filter-toggle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Match on the `id` attribute.
    Id(Cow<'static, str>),

    /// Match a CSS selector.
    Css(Cow<'static, str>),

    /// Match anchors by their full visible text.
    LinkText(Cow<'static, str>),

    /// Match anchors containing the given visible text.
    PartialLinkText(Cow<'static, str>),

    /// Match on the `name` attribute.
    Name(Cow<'static, str>),

    /// Match on the tag name.
    TagName(Cow<'static, str>),

    /// Match on a single class name.
    ClassName(Cow<'static, str>),

    /// Match an XPath expression.
    XPath(Cow<'static, str>),
}

impl Locator {
    /// Locate by `id`.
    #[must_use]
    pub const fn id(value: &'static str) -> Self {
        Locator::Id(Cow::Borrowed(value))
    }

    /// Locate by CSS selector.
    #[must_use]
    pub const fn css(value: &'static str) -> Self {
        Locator::Css(Cow::Borrowed(value))
    }

    /// Locate anchors by link text.
    #[must_use]
    pub const fn link_text(value: &'static str) -> Self {
        Locator::LinkText(Cow::Borrowed(value))
    }

    /// Locate anchors by partial link text.
    #[must_use]
    pub const fn partial_link_text(value: &'static str) -> Self {
        Locator::PartialLinkText(Cow::Borrowed(value))
    }

    /// Locate by `name`.
    #[must_use]
    pub const fn name(value: &'static str) -> Self {
        Locator::Name(Cow::Borrowed(value))
    }

    /// Locate by tag name.
    #[must_use]
    pub const fn tag_name(value: &'static str) -> Self {
        Locator::TagName(Cow::Borrowed(value))
    }

    /// Locate by class name.
    #[must_use]
    pub const fn class_name(value: &'static str) -> Self {
        Locator::ClassName(Cow::Borrowed(value))
    }

    /// Locate by XPath.
    #[must_use]
    pub const fn xpath(value: &'static str) -> Self {
        Locator::XPath(Cow::Borrowed(value))
    }

    /// Locate any element whose own text node equals `text` exactly.
    #[must_use]
    pub fn text_content(text: &str) -> Self {
        Locator::XPath(Cow::Owned(format!("//*[text() = {}]", xpath_literal(text))))
    }

    /// The raw selector value, without the strategy.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Locator::Id(v)
            | Locator::Css(v)
            | Locator::LinkText(v)
            | Locator::PartialLinkText(v)
            | Locator::Name(v)
            | Locator::TagName(v)
            | Locator::ClassName(v)
            | Locator::XPath(v) => v,
        }
    }

    /// Name of the lookup strategy.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Locator::Id(_) => "id",
            Locator::Css(_) => "css",
            Locator::LinkText(_) => "link text",
            Locator::PartialLinkText(_) => "partial link text",
            Locator::Name(_) => "name",
            Locator::TagName(_) => "tag name",
            Locator::ClassName(_) => "class name",
            Locator::XPath(_) => "xpath",
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.strategy(), self.value())
    }
}

/// Quote `text` as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so text containing both quote kinds is split into
/// `concat()` parts.
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        return format!("'{text}'");
    }
    if !text.contains('"') {
        return format!("\"{text}\"");
    }
    let parts = text
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect::<Vec<_>>()
        .join(", \"'\", ");
    format!("concat({parts})")
}

#[cfg(feature = "thirtyfour")]
impl From<&Locator> for thirtyfour::By {
    fn from(locator: &Locator) -> Self {
        use thirtyfour::By;

        let value = locator.value().to_owned();
        match locator {
            Locator::Id(_) => By::Id(value),
            Locator::Css(_) => By::Css(value),
            Locator::LinkText(_) => By::LinkText(value),
            Locator::PartialLinkText(_) => By::PartialLinkText(value),
            Locator::Name(_) => By::Name(value),
            Locator::TagName(_) => By::Tag(value),
            Locator::ClassName(_) => By::ClassName(value),
            Locator::XPath(_) => By::XPath(value),
        }
    }
}
