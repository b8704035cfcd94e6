use crate::condition;
use crate::document::Document;
use crate::error::WaitError;
use crate::locator::Locator;
use crate::wait::WaitSpec;
use std::time::Duration;

/// Waits and interactions against a [`Document`].
///
/// Every wait polls according to the helper's [`WaitSpec`]. Use
/// [`Helper::with_timeout`] for a one-off override:
///
/// ```no_run
/// # use std::time::Duration;
/// # use ui_wait_helper::prelude::*;
/// # async fn example<D: Document>(page: &D) -> Result<(), WaitError> {
/// let helper = Helper::new(page);
/// helper
///     .with_timeout(Duration::from_secs(30))
///     .wait_visible(&Locator::css(".tab-listing"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Helper<'d, D> {
    pub(crate) document: &'d D,
    pub(crate) wait: WaitSpec,
}

impl<'d, D: Document> Helper<'d, D> {
    /// A helper using the default [`WaitSpec`].
    pub fn new(document: &'d D) -> Self {
        Self::with_wait(document, WaitSpec::default())
    }

    /// A helper using `wait` for every wait.
    pub fn with_wait(document: &'d D, wait: WaitSpec) -> Self {
        Self { document, wait }
    }

    /// The document this helper operates on.
    pub fn document(&self) -> &'d D {
        self.document
    }

    /// The wait settings used by this helper.
    pub fn wait_spec(&self) -> &WaitSpec {
        &self.wait
    }

    /// A copy of this helper waiting up to `timeout`.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self::with_wait(self.document, self.wait.clone().with_timeout(timeout))
    }

    /// A copy of this helper polling every `poll_interval`.
    #[must_use]
    pub fn with_poll_interval(&self, poll_interval: Duration) -> Self {
        Self::with_wait(
            self.document,
            self.wait.clone().with_poll_interval(poll_interval),
        )
    }

    /// Wait for an element matching `locator` to exist in the document.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_present(&self, locator: &Locator) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("presence of {locator}"), || {
                condition::present(self.document, locator)
            })
            .await
    }

    /// Wait for a `child` element below the first `parent` match.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_nested_present(
        &self,
        parent: &Locator,
        child: &Locator,
    ) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("presence of {child} in {parent}"), || {
                condition::nested_present(self.document, parent, child)
            })
            .await
    }

    /// Wait for a `child` element below `parent`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_nested_present_in(
        &self,
        parent: &D::Element,
        child: &Locator,
    ) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("presence of {child} in {parent:?}"), || {
                condition::nested_present_in(parent, child)
            })
            .await
    }

    /// Wait for the first match of `locator` to be visible.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_visible(&self, locator: &Locator) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("visibility of {locator}"), || {
                condition::visible(self.document, locator)
            })
            .await
    }

    /// Wait for `element` to be visible.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_visible_element(
        &self,
        element: &D::Element,
    ) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("visibility of {element:?}"), || {
                condition::element_visible(element)
            })
            .await
    }

    /// Wait for the first match of `locator` to be visible and enabled.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_clickable(&self, locator: &Locator) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("element to be clickable: {locator}"), || {
                condition::clickable(self.document, locator)
            })
            .await
    }

    /// Wait for `element` to be visible and enabled.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_clickable_element(
        &self,
        element: &D::Element,
    ) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("element to be clickable: {element:?}"), || {
                condition::element_clickable(element)
            })
            .await
    }

    /// Wait for at least one match of `locator` and return all of them.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_list_present(
        &self,
        locator: &Locator,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("presence of all elements located by {locator}"), || {
                condition::all_present(self.document, locator)
            })
            .await
    }

    /// Wait for at least one match of `locator` with every match visible.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_list_visible(
        &self,
        locator: &Locator,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("visibility of all elements located by {locator}"), || {
                condition::all_visible_located(self.document, locator)
            })
            .await
    }

    /// Wait for visible `child` elements below the first `parent` match.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_nested_list_visible(
        &self,
        parent: &Locator,
        child: &Locator,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("visibility of all {child} in {parent}"), || {
                condition::nested_all_visible(self.document, parent, child)
            })
            .await
    }

    /// Wait for visible `child` elements below `parent`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_nested_list_visible_in(
        &self,
        parent: &D::Element,
        child: &Locator,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("visibility of all {child} in {parent:?}"), || {
                condition::nested_all_visible_in(parent, child)
            })
            .await
    }

    /// Wait for clickable `child` elements below `parent`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_nested_list_clickable_in(
        &self,
        parent: &D::Element,
        child: &Locator,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("element to be clickable located by {parent:?} -> {child}"), || {
                condition::nested_all_clickable_in(parent, child)
            })
            .await
    }

    /// Wait for the text of the first match of `locator` to contain `text`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_text_present(&self, locator: &Locator, text: &str) -> Result<(), WaitError> {
        self.wait
            .until(format!("text ('{text}') to be present in {locator}"), || {
                condition::text_present(self.document, locator, text)
            })
            .await
    }

    /// Wait until the first match of `locator` is hidden or absent.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_invisible(&self, locator: &Locator) -> Result<(), WaitError> {
        self.wait
            .until(format!("invisibility of {locator}"), || {
                condition::invisible(self.document, locator)
            })
            .await
    }

    /// Wait until `element` is hidden or detached.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_invisible_element(&self, element: &D::Element) -> Result<(), WaitError> {
        self.wait
            .until(format!("invisibility of {element:?}"), || {
                condition::element_invisible(element)
            })
            .await
    }

    /// Wait for an input's `value` to be non-empty.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_input_populated(&self, locator: &Locator) -> Result<D::Element, WaitError> {
        self.wait
            .until(format!("input element to be populated: {locator}"), || {
                condition::input_populated(self.document, locator)
            })
            .await
    }

    /// Wait for exactly `count` matches of `locator`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_number_of_elements(
        &self,
        locator: &Locator,
        count: usize,
    ) -> Result<Vec<D::Element>, WaitError> {
        self.wait
            .until(format!("number of elements located by {locator} to be {count}"), || {
                condition::element_count(self.document, locator, count)
            })
            .await
    }

    /// Wait for `attribute` of the first match to equal `expected`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_attribute_to_be(
        &self,
        locator: &Locator,
        attribute: &str,
        expected: &str,
    ) -> Result<(), WaitError> {
        self.wait
            .until(
                format!("{attribute} of {locator} to be \"{expected}\""),
                || condition::attribute_is(self.document, locator, attribute, expected),
            )
            .await
    }

    /// Wait for `attribute` of the first match to contain `expected`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_attribute_contains(
        &self,
        locator: &Locator,
        attribute: &str,
        expected: &str,
    ) -> Result<(), WaitError> {
        self.wait
            .until(
                format!("{attribute} of {locator} to contain \"{expected}\""),
                || condition::attribute_contains(self.document, locator, attribute, expected),
            )
            .await
    }

    /// Wait for `textContent` of the first match to equal `expected`. Useful for elements
    /// whose rendered text is not exposed.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] or a non-transient [`WaitError::Driver`] error.
    pub async fn wait_for_text_content(
        &self,
        locator: &Locator,
        expected: &str,
    ) -> Result<(), WaitError> {
        self.wait_attribute_to_be(locator, "textContent", expected)
            .await
    }
}
