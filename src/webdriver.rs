use crate::document::Element;
use crate::error::{DriverError, ErrorKind};
use crate::locator::Locator;
use thirtyfour::error::{WebDriverError, WebDriverErrorInner};
use thirtyfour::{By, Key, WebElement};

impl From<WebDriverError> for DriverError {
    fn from(err: WebDriverError) -> Self {
        let kind = match err.as_inner() {
            WebDriverErrorInner::NoSuchElement(..) => ErrorKind::NoSuchElement,
            WebDriverErrorInner::StaleElementReference(..) => ErrorKind::StaleElementReference,
            WebDriverErrorInner::ElementNotInteractable(..) => ErrorKind::ElementNotInteractable,
            _ => ErrorKind::Other,
        };
        DriverError::new(kind, err.to_string())
    }
}

impl Element for WebElement {
    async fn is_visible(&self) -> Result<bool, DriverError> {
        Ok(WebElement::is_displayed(self).await?)
    }

    async fn is_enabled(&self) -> Result<bool, DriverError> {
        Ok(WebElement::is_enabled(self).await?)
    }

    async fn visible_text(&self) -> Result<String, DriverError> {
        Ok(WebElement::text(self).await?)
    }

    async fn attribute_value(&self, name: &str) -> Result<Option<String>, DriverError> {
        // Properties reflect the live state (an input's current `value`, `textContent`).
        if let Some(value) = WebElement::prop(self, name).await? {
            return Ok(Some(value));
        }
        Ok(WebElement::attr(self, name).await?)
    }

    async fn press(&self) -> Result<(), DriverError> {
        Ok(WebElement::click(self).await?)
    }

    async fn clear_value(&self) -> Result<(), DriverError> {
        Ok(WebElement::clear(self).await?)
    }

    async fn select_all_and_delete(&self) -> Result<(), DriverError> {
        // Modifiers are released at the end of every send, so Delete goes in a second one.
        WebElement::send_keys(self, Key::Control + "a").await?;
        Ok(WebElement::send_keys(self, Key::Delete).await?)
    }

    async fn type_text(&self, text: &str) -> Result<(), DriverError> {
        Ok(WebElement::send_keys(self, text).await?)
    }

    async fn press_enter(&self) -> Result<(), DriverError> {
        Ok(WebElement::send_keys(self, Key::Enter).await?)
    }

    async fn children(&self, locator: &Locator) -> Result<Vec<Self>, DriverError> {
        Ok(WebElement::find_all(self, By::from(locator)).await?)
    }
}
