use ui_wait_helper::prelude::*;

const FILTER_TOGGLE: Locator = Locator::css(".filter-toggle");
const EVENT_LISTING: Locator = Locator::css(".tab-listing");

pub struct Events<'s> {
    helper: Helper<'s, Session>,
}

impl<'s> Events<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            helper: session.helper(),
        }
    }

    pub async fn click_filter_events_button(&self) -> Result<(), WaitError> {
        self.helper.click("Filter Events", &FILTER_TOGGLE).await
    }

    /// Text of every displayed event listing.
    pub async fn events(&self) -> Result<Vec<String>, WaitError> {
        let listings = self.helper.wait_list_visible(&EVENT_LISTING).await?;
        let mut texts = Vec::with_capacity(listings.len());
        for listing in &listings {
            texts.push(listing.visible_text().await?);
        }
        tracing::info!("Found {} events", texts.len());
        Ok(texts)
    }

    pub fn verify_events_changed(initial: &[String], filtered: &[String]) -> Result<(), WaitError> {
        if initial == filtered {
            return Err(WaitError::Verification(
                "Initial events matched filtered events".to_owned(),
            ));
        }
        Ok(())
    }

    pub async fn verify_page_loads(&self) -> Result<(), WaitError> {
        tracing::info!("Validate the page loads");
        self.helper.verify_url_contains("zwift.com/events").await?;
        self.helper
            .verify_title_contains("The at Home Cycling & Running Virtual Training App")
            .await
    }
}
