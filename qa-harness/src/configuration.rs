use crate::{
    error::Error,
    http_client::{HttpClient, ReqwestHttpClient},
};
use std::{env, sync::Arc, time::Duration};

pub const DEFAULT_BASE_URI: &str = "https://mapi.yummly.com/mapi";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_START_URL: &str = "https://www.yummly.com/";

/// How to read a response body when the server does not say.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BodyParser {
    Json,
    Text,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Browser {
    Firefox,
    Chrome,
}

#[derive(Debug, Clone)]
pub struct CheckerConfiguration {
    base_uri: String,
    request_timeout: Duration,
    default_parser: BodyParser,
    http_client: Option<Arc<dyn HttpClient + Send + Sync>>,
    webdriver_url: String,
    browser: Browser,
    start_url: String,
    implicit_wait: Duration,
}

impl CheckerConfiguration {
    pub fn new() -> Self {
        Self {
            base_uri: String::from(DEFAULT_BASE_URI),
            request_timeout: Duration::from_secs(30),
            default_parser: BodyParser::Json,
            http_client: None,
            webdriver_url: String::from(DEFAULT_WEBDRIVER_URL),
            browser: Browser::Firefox,
            start_url: String::from(DEFAULT_START_URL),
            implicit_wait: Duration::from_secs(10),
        }
    }

    /// Defaults, overridden by `YUMMLY_QA_BASE_URI`, `YUMMLY_QA_WEBDRIVER_URL` and
    /// `YUMMLY_QA_START_URL` when they are set.
    pub fn from_env() -> Self {
        let mut configuration = Self::new();

        if let Ok(base_uri) = env::var("YUMMLY_QA_BASE_URI") {
            configuration.set_base_uri(base_uri);
        }
        if let Ok(webdriver_url) = env::var("YUMMLY_QA_WEBDRIVER_URL") {
            configuration.set_webdriver_url(webdriver_url);
        }
        if let Ok(start_url) = env::var("YUMMLY_QA_START_URL") {
            configuration.set_start_url(start_url);
        }

        configuration
    }

    pub fn set_base_uri<S: Into<String>>(&mut self, base_uri: S) {
        self.base_uri = base_uri.into();
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) {
        self.request_timeout = timeout;
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn set_default_parser(&mut self, parser: BodyParser) {
        self.default_parser = parser;
    }

    pub fn default_parser(&self) -> BodyParser {
        self.default_parser
    }

    pub fn set_http_client(&mut self, http_client: Arc<dyn HttpClient + Send + Sync>) {
        self.http_client = Some(http_client);
    }

    pub fn http_client(&self) -> Option<Arc<dyn HttpClient + Send + Sync>> {
        self.http_client.clone()
    }

    /// The configured client, or a reqwest client built with the configured timeout.
    pub(crate) fn http_client_or_default(
        &self,
    ) -> Result<Arc<dyn HttpClient + Send + Sync>, Error> {
        match &self.http_client {
            Some(client) => Ok(client.clone()),
            None => Ok(Arc::new(ReqwestHttpClient::with_timeout(
                self.request_timeout,
            )?)),
        }
    }

    pub fn set_webdriver_url<S: Into<String>>(&mut self, webdriver_url: S) {
        self.webdriver_url = webdriver_url.into();
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    pub fn set_browser(&mut self, browser: Browser) {
        self.browser = browser;
    }

    pub fn browser(&self) -> Browser {
        self.browser
    }

    pub fn set_start_url<S: Into<String>>(&mut self, start_url: S) {
        self.start_url = start_url.into();
    }

    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    pub fn set_implicit_wait(&mut self, implicit_wait: Duration) {
        self.implicit_wait = implicit_wait;
    }

    pub fn implicit_wait(&self) -> Duration {
        self.implicit_wait
    }
}

impl Default for CheckerConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_live_service() {
        let configuration = CheckerConfiguration::new();

        assert_eq!(configuration.base_uri(), "https://mapi.yummly.com/mapi");
        assert_eq!(configuration.default_parser(), BodyParser::Json);
        assert_eq!(configuration.implicit_wait(), Duration::from_secs(10));
        assert_eq!(configuration.browser(), Browser::Firefox);
        assert!(configuration.http_client().is_none());
    }
}
