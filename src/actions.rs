//! Named interactions and verifications built on the helper's waits.
//!
//! Each interaction logs what it does using the human-readable element name and turns a
//! wait timeout into [`WaitError::NotFound`] so failures point at the element.

use crate::document::{Document, Element};
use crate::error::WaitError;
use crate::helper::Helper;
use crate::locator::Locator;

const ROW: Locator = Locator::tag_name("tr");
const COLUMN: Locator = Locator::tag_name("td");

impl<D: Document> Helper<'_, D> {
    /// Wait for `locator` to be clickable, then click it natively.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the element never became clickable.
    pub async fn click(&self, name: &str, locator: &Locator) -> Result<(), WaitError> {
        tracing::info!("Clicking {name}");
        let element = self
            .wait_clickable(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        element.press().await?;
        tracing::info!("Clicked {name}");
        Ok(())
    }

    /// Wait for `element` to be clickable, then click it natively.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the element never became clickable.
    pub async fn click_element(&self, name: &str, element: &D::Element) -> Result<(), WaitError> {
        tracing::info!("Clicking {name}");
        let element = self
            .wait_clickable_element(element)
            .await
            .map_err(|err| err.into_not_found(name, format!("{element:?}")))?;
        element.press().await?;
        tracing::info!("Clicked {name}");
        Ok(())
    }

    /// Wait for `locator` to be present, then click it through a script instead of a
    /// native click.
    ///
    /// This is an escape hatch for elements whose click handling is intercepted by a
    /// client-side rendering framework. It does not require the element to be visible or
    /// enabled. Prefer [`Helper::click`] everywhere else.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the element never appeared.
    pub async fn bypass_click(&self, name: &str, locator: &Locator) -> Result<(), WaitError> {
        tracing::info!("Clicking {name} (bypassing native click)");
        let element = self
            .wait_present(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        self.document.script_click(&element).await?;
        tracing::info!("Clicked {name}");
        Ok(())
    }

    /// Empty `element` and type `text` into it.
    ///
    /// A plain clear is ignored by some client-side rendered inputs, so the value is also
    /// selected and deleted through the keyboard.
    async fn fill(&self, name: &str, text: &str, element: &D::Element) -> Result<(), WaitError> {
        element.clear_value().await?;
        element.select_all_and_delete().await?;
        element.type_text(text).await?;
        tracing::info!("Input {name}: {text}");
        Ok(())
    }

    async fn input_visible(
        &self,
        name: &str,
        text: &str,
        locator: &Locator,
    ) -> Result<D::Element, WaitError> {
        let element = self
            .wait_visible(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        self.fill(name, text, &element).await?;
        Ok(element)
    }

    /// Wait for `locator` to be visible, empty it and type `text`.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the input never became visible.
    pub async fn input(&self, name: &str, text: &str, locator: &Locator) -> Result<(), WaitError> {
        self.input_visible(name, text, locator).await?;
        Ok(())
    }

    /// Wait for `element` to be visible, empty it and type `text`.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the input never became visible.
    pub async fn input_element(
        &self,
        name: &str,
        text: &str,
        element: &D::Element,
    ) -> Result<(), WaitError> {
        let element = self
            .wait_visible_element(element)
            .await
            .map_err(|err| err.into_not_found(name, format!("{element:?}")))?;
        self.fill(name, text, &element).await
    }

    /// Like [`Helper::input`], but only requires the input to be present.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the input never appeared.
    pub async fn input_present(
        &self,
        name: &str,
        text: &str,
        locator: &Locator,
    ) -> Result<(), WaitError> {
        let element = self
            .wait_present(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        self.fill(name, text, &element).await
    }

    /// Like [`Helper::input`], then press Enter in the same input.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the input never became visible.
    pub async fn input_and_enter(
        &self,
        name: &str,
        text: &str,
        locator: &Locator,
    ) -> Result<(), WaitError> {
        let element = self.input_visible(name, text, locator).await?;
        element.press_enter().await?;
        tracing::info!("Submitted {name}");
        Ok(())
    }

    /// Click the input, then empty it.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the input never became clickable.
    pub async fn clear(&self, locator: &Locator) -> Result<(), WaitError> {
        self.click("TextBox", locator).await?;
        let element = self
            .wait_visible(locator)
            .await
            .map_err(|err| err.into_not_found("TextBox", locator))?;
        element.clear_value().await?;
        element.select_all_and_delete().await?;
        Ok(())
    }

    /// Move the pointer over the first visible match of `locator`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if the element never became visible.
    pub async fn move_to(&self, locator: &Locator) -> Result<D::Element, WaitError> {
        let element = self.wait_visible(locator).await?;
        self.document.hover(&element).await?;
        Ok(element)
    }

    /// Move to the element and read `attribute`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if the element never became visible.
    pub async fn attribute(
        &self,
        locator: &Locator,
        attribute: &str,
    ) -> Result<Option<String>, WaitError> {
        let element = self.move_to(locator).await?;
        Ok(element.attribute_value(attribute).await?)
    }

    /// The `textContent` of the element. Works for elements whose rendered text is empty.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if the element never became visible.
    pub async fn text_content(&self, locator: &Locator) -> Result<String, WaitError> {
        let text = self
            .attribute(locator, "textContent")
            .await?
            .unwrap_or_default();
        tracing::info!("Found textContent: {text}");
        Ok(text)
    }

    /// Reload the current page.
    ///
    /// # Errors
    ///
    /// Driver errors.
    pub async fn refresh(&self) -> Result<(), WaitError> {
        tracing::info!("Refreshing page");
        self.document.reload().await?;
        Ok(())
    }

    /// Navigate to `url`.
    ///
    /// # Errors
    ///
    /// Driver errors.
    pub async fn navigate(&self, url: &str) -> Result<(), WaitError> {
        tracing::info!("Navigating to: {url}");
        self.document.navigate_to(url).await?;
        Ok(())
    }

    /// Visible rows of the table located by `table`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if the table or its rows never became visible.
    pub async fn rows(&self, table: &Locator) -> Result<Vec<D::Element>, WaitError> {
        self.wait_nested_list_visible(table, &ROW).await
    }

    /// Visible cells of the table located by `table`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if the table or its cells never became visible.
    pub async fn columns(&self, table: &Locator) -> Result<Vec<D::Element>, WaitError> {
        self.wait_nested_list_visible(table, &COLUMN).await
    }

    /// The first visible element whose own text is exactly `text`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Timeout`] if no such element became visible.
    pub async fn find_by_text_content(&self, text: &str) -> Result<D::Element, WaitError> {
        self.wait_visible(&Locator::text_content(text)).await
    }

    /// Verify that `locator` becomes visible.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if it never did.
    pub async fn verify_displayed(&self, name: &str, locator: &Locator) -> Result<(), WaitError> {
        let element = self
            .wait_visible(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        if !element.is_visible().await? {
            return Err(WaitError::Verification(format!("{name} is not displayed")));
        }
        tracing::info!("{name} displayed");
        Ok(())
    }

    /// Verify that `locator` is displayed and its text contains `expected`.
    ///
    /// # Errors
    ///
    /// [`WaitError::NotFound`] if the element never became visible,
    /// [`WaitError::Verification`] if the text does not match.
    pub async fn verify_contains(
        &self,
        name: &str,
        locator: &Locator,
        expected: &str,
    ) -> Result<(), WaitError> {
        self.verify_displayed(name, locator).await?;
        let element = self
            .wait_visible(locator)
            .await
            .map_err(|err| err.into_not_found(name, locator))?;
        let text = element.visible_text().await?;
        if !text.contains(expected) {
            return Err(WaitError::Verification(format!(
                "{name} contains: {expected}, actual: {text}"
            )));
        }
        tracing::info!("{name} contains: {expected}");
        Ok(())
    }

    /// Verify that the current URL contains `fragment`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Verification`] if it does not.
    pub async fn verify_url_contains(&self, fragment: &str) -> Result<(), WaitError> {
        let url = self.document.page_url().await?;
        if !url.contains(fragment) {
            return Err(WaitError::Verification(format!(
                "URL contains: {fragment}, actual: {url}"
            )));
        }
        Ok(())
    }

    /// Verify that the page title contains `fragment`.
    ///
    /// # Errors
    ///
    /// [`WaitError::Verification`] if it does not.
    pub async fn verify_title_contains(&self, fragment: &str) -> Result<(), WaitError> {
        let title = self.document.page_title().await?;
        if !title.contains(fragment) {
            return Err(WaitError::Verification(format!(
                "Title contains: {fragment}, actual: {title}"
            )));
        }
        Ok(())
    }
}
