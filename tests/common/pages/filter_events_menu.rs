use ui_wait_helper::prelude::*;

// The filter menu is rendered client-side and swallows native clicks.
const APPLY_FILTERS: Locator = Locator::css(".apply-button");
const CLOSE: Locator = Locator::link_text("Close");
const CYCLING: Locator = Locator::css("button[value='CYCLING']");
const GROUP_RIDE: Locator = Locator::css("button[value='GROUP_RIDE']");
const NIGHT: Locator = Locator::css("button[value='night']");

pub struct FilterEventsMenu<'s> {
    helper: Helper<'s, Session>,
}

impl<'s> FilterEventsMenu<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            helper: session.helper(),
        }
    }

    pub async fn click_apply_filters(&self) -> Result<(), WaitError> {
        self.helper.bypass_click("Apply Filters", &APPLY_FILTERS).await
    }

    pub async fn click_close(&self) -> Result<(), WaitError> {
        self.helper.bypass_click("Close", &CLOSE).await
    }

    pub async fn click_cycling(&self) -> Result<(), WaitError> {
        self.helper.bypass_click("Cycling", &CYCLING).await
    }

    pub async fn click_group_ride(&self) -> Result<(), WaitError> {
        self.helper.bypass_click("Group Ride", &GROUP_RIDE).await
    }

    pub async fn click_night(&self) -> Result<(), WaitError> {
        self.helper.bypass_click("Night", &NIGHT).await
    }
}
