use crate::{configuration::BodyParser, error::Error, util, RequestData, ResponseData};
use async_trait::async_trait;
use reqwest::Url;
use std::{fmt::Debug, time::Duration};
use tracing::debug;

#[async_trait]
pub trait HttpClient: Debug {
    async fn make_request(
        &self,
        base_uri: &str,
        request_data: &RequestData,
    ) -> Result<ResponseData, Error>;
}

#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Joins the path onto the base URI without dropping the base URI's own path segments.
    fn build_url(base_uri: &str, request_data: &RequestData) -> Result<Url, Error> {
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            request_data.path.trim_start_matches('/')
        );

        let mut url = Url::parse(&url)?;
        if !request_data.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request_data
                    .query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }

        Ok(url)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn make_request(
        &self,
        base_uri: &str,
        request_data: &RequestData,
    ) -> Result<ResponseData, Error> {
        let url = Self::build_url(base_uri, request_data)?;
        let mut request = self.client.request(request_data.method.clone(), url.clone());

        let mut header_map = reqwest::header::HeaderMap::new();
        util::put_headers(&mut header_map, &request_data.headers)?;
        request = request.headers(header_map);

        debug!(method = %request_data.method, %url, "sending request");

        let response = request.send().await?;

        let status_code = response.status().as_u16();
        let headers = util::extract_headers(response.headers());
        let body = response.text().await?;

        debug!(status_code, "received response");

        Ok(ResponseData {
            status_code,
            headers,
            body,
            parser: BodyParser::Json,
        })
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}
