use crate::{
    configuration::{Browser, CheckerConfiguration},
    error::Error,
};
use thirtyfour::prelude::*;
use tracing::{info, warn};

/// A WebDriver session for a single test case. Cloning shares the session; `quit` ends it for
/// every clone.
#[derive(Clone)]
pub struct BrowserSession {
    driver: WebDriver,
    start_url: String,
}

impl BrowserSession {
    pub async fn start(configuration: &CheckerConfiguration) -> Result<Self, Error> {
        let server_url = configuration.webdriver_url();
        let driver = match configuration.browser() {
            Browser::Firefox => WebDriver::new(server_url, DesiredCapabilities::firefox()).await?,
            Browser::Chrome => WebDriver::new(server_url, DesiredCapabilities::chrome()).await?,
        };

        info!(server_url, browser = ?configuration.browser(), "browser session started");

        let waited = driver
            .set_implicit_wait_timeout(configuration.implicit_wait())
            .await;
        if let Err(e) = waited {
            if let Err(quit_error) = driver.quit().await {
                warn!(%quit_error, "could not quit the browser session");
            }
            return Err(e.into());
        }

        Ok(Self {
            driver,
            start_url: String::from(configuration.start_url()),
        })
    }

    pub async fn open_start_page(&self) -> Result<(), Error> {
        self.driver.goto(&self.start_url).await?;
        Ok(())
    }

    pub async fn click_link(&self, link_text: &str) -> Result<(), Error> {
        self.driver.find(By::LinkText(link_text)).await?.click().await?;
        Ok(())
    }

    pub async fn find_all(&self, by: By) -> Result<Vec<WebElement>, Error> {
        Ok(self.driver.find_all(by).await?)
    }

    pub async fn find(&self, by: By) -> Result<WebElement, Error> {
        Ok(self.driver.find(by).await?)
    }

    pub async fn quit(self) -> Result<(), Error> {
        self.driver.quit().await?;
        info!("browser session closed");
        Ok(())
    }
}

/// Text of the first element under `element` that matches `by`.
pub async fn text_within(element: &WebElement, by: By) -> Result<String, Error> {
    Ok(element.find(by).await?.text().await?)
}
