use ui_wait_helper::prelude::*;

const HERO_VIDEO: Locator = Locator::css("video[class^='Hero-module__video']");

pub struct Home<'s> {
    helper: Helper<'s, Session>,
}

impl<'s> Home<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self {
            helper: session.helper(),
        }
    }

    pub async fn verify_page_loads(&self) -> Result<(), WaitError> {
        tracing::info!("Validate the page loads");
        self.helper.verify_url_contains("zwift.com").await?;
        self.helper
            .verify_title_contains("The at Home Cycling & Running Virtual Training App - Zwift")
            .await
    }

    pub async fn verify_video_displayed(&self) -> Result<(), WaitError> {
        self.helper.verify_displayed("Hero Video", &HERO_VIDEO).await
    }
}
