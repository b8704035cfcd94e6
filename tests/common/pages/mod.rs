use ui_wait_helper::prelude::*;

pub mod events;
pub mod filter_events_menu;
pub mod home;
pub mod main_nav;

const ACCEPT_COOKIES: Locator = Locator::id("truste-consent-button");

/// Dismiss the cookie consent banner shown on first visit.
pub async fn accept_cookies(session: &Session) -> Result<(), WaitError> {
    session
        .helper()
        .click("Accept Cookies", &ACCEPT_COOKIES)
        .await
}
