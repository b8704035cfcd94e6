use crate::error::DriverError;
use crate::locator::Locator;
use std::fmt::Debug;

/// A live document that can be queried and manipulated.
///
/// This is the seam between the wait helpers and a concrete browser driver. With the
/// `thirtyfour` feature enabled, [`crate::prelude::Session`] implements it.
#[allow(async_fn_in_trait)]
pub trait Document {
    /// Handle to a located element.
    type Element: Element;

    /// All elements currently matching `locator`, in document order. An empty result is
    /// not an error.
    async fn query_all(&self, locator: &Locator) -> Result<Vec<Self::Element>, DriverError>;

    /// The first element matching `locator`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::prelude::ErrorKind::NoSuchElement`] when nothing matches.
    async fn query(&self, locator: &Locator) -> Result<Self::Element, DriverError> {
        self.query_all(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::no_such_element(locator))
    }

    /// Click `element` by executing `arguments[0].click();` in the page.
    ///
    /// This deliberately skips native event dispatch. Use it only for elements whose click
    /// handling is intercepted by a client-side rendering framework, where a native click
    /// is swallowed or lands on an overlay.
    async fn script_click(&self, element: &Self::Element) -> Result<(), DriverError>;

    /// Move the pointer over the center of `element`.
    async fn hover(&self, element: &Self::Element) -> Result<(), DriverError>;

    /// Navigate to `url`.
    async fn navigate_to(&self, url: &str) -> Result<(), DriverError>;

    /// Reload the current page.
    async fn reload(&self) -> Result<(), DriverError>;

    /// URL of the current page.
    async fn page_url(&self) -> Result<String, DriverError>;

    /// Title of the current page.
    async fn page_title(&self) -> Result<String, DriverError>;
}

/// A handle to an element of a [`Document`]. Handles may go stale when the document
/// mutates, in which case every method fails with
/// [`crate::prelude::ErrorKind::StaleElementReference`].
#[allow(async_fn_in_trait)]
pub trait Element: Clone + Debug {
    /// Whether the element is rendered and visible.
    async fn is_visible(&self) -> Result<bool, DriverError>;

    /// Whether the element is enabled.
    async fn is_enabled(&self) -> Result<bool, DriverError>;

    /// The rendered text of the element.
    async fn visible_text(&self) -> Result<String, DriverError>;

    /// The value of attribute (or property) `name`, if set.
    async fn attribute_value(&self, name: &str) -> Result<Option<String>, DriverError>;

    /// Native click.
    async fn press(&self) -> Result<(), DriverError>;

    /// Clear an input's value.
    async fn clear_value(&self) -> Result<(), DriverError>;

    /// Select the whole content with Ctrl+A and delete it through the keyboard. Works on
    /// inputs whose framework ignores [`Element::clear_value`].
    async fn select_all_and_delete(&self) -> Result<(), DriverError>;

    /// Type `text` into the element.
    async fn type_text(&self, text: &str) -> Result<(), DriverError>;

    /// Press the Enter key while the element is focused.
    async fn press_enter(&self) -> Result<(), DriverError>;

    /// All descendants matching `locator`.
    async fn children(&self, locator: &Locator) -> Result<Vec<Self>, DriverError>;

    /// The first descendant matching `locator`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::prelude::ErrorKind::NoSuchElement`] when nothing matches.
    async fn child(&self, locator: &Locator) -> Result<Self, DriverError> {
        self.children(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::no_such_element(locator))
    }
}
