use ui_wait_helper::prelude::*;

const HAMBURGER: Locator = Locator::css("button[class^='PrimaryNav-module__hamburger']");
const EVENTS_LINK: Locator = Locator::link_text("Events");

pub struct MainNav<'s> {
    helper: Helper<'s, Session>,
}

impl<'s> MainNav<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            helper: session.helper(),
        }
    }

    pub async fn click_menu_button(&self) -> Result<(), WaitError> {
        self.helper.click("Main Menu Hamburger", &HAMBURGER).await
    }

    pub async fn click_events_link(&self) -> Result<(), WaitError> {
        self.helper.click("Events Link", &EVENTS_LINK).await
    }
}
