use crate::{
    configuration::{BodyParser, CheckerConfiguration},
    error::Error,
    http_client::HttpClient,
    RequestData, ResponseData,
};
use hyper::Method;
use std::sync::Arc;
use tracing::info;

/// Issues requests against the configured base URI. One checker lives for exactly one test case.
#[derive(Debug, Clone)]
pub struct ContractChecker {
    base_uri: String,
    default_parser: BodyParser,
    http_client: Arc<dyn HttpClient + Send + Sync>,
}

impl ContractChecker {
    pub fn new(configuration: &CheckerConfiguration) -> Result<Self, Error> {
        url::Url::parse(configuration.base_uri())?;

        Ok(Self {
            base_uri: String::from(configuration.base_uri()),
            default_parser: configuration.default_parser(),
            http_client: configuration.http_client_or_default()?,
        })
    }

    /// Starts describing a request.
    pub fn given(&self) -> RequestSpec<'_> {
        RequestSpec {
            checker: self,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    pub async fn send(&self, request_data: &RequestData) -> Result<ResponseData, Error> {
        let mut response = self
            .http_client
            .make_request(&self.base_uri, request_data)
            .await?;
        response.parser = self.default_parser;

        info!(
            method = %request_data.method,
            path = %request_data.path,
            status_code = response.status_code,
            "checked endpoint"
        );

        Ok(response)
    }
}

pub struct RequestSpec<'a> {
    checker: &'a ContractChecker,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl<'a> RequestSpec<'a> {
    pub fn header<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds the header only when a value is given; `None` leaves the request without it.
    pub fn optional_header<S: Into<String>>(self, name: S, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    pub fn query_param<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn build<S: Into<String>>(self, method: Method, path: S) -> RequestData {
        RequestData {
            method,
            path: path.into(),
            headers: self.headers,
            query: self.query,
        }
    }

    pub async fn request(self, method: Method, path: &str) -> Result<ResponseData, Error> {
        let checker = self.checker;
        let request_data = self.build(method, path);
        checker.send(&request_data).await
    }

    pub async fn get(self, path: &str) -> Result<ResponseData, Error> {
        self.request(Method::GET, path).await
    }

    pub async fn post(self, path: &str) -> Result<ResponseData, Error> {
        self.request(Method::POST, path).await
    }

    pub async fn put(self, path: &str) -> Result<ResponseData, Error> {
        self.request(Method::PUT, path).await
    }

    pub async fn delete(self, path: &str) -> Result<ResponseData, Error> {
        self.request(Method::DELETE, path).await
    }
}
