use crate::configuration::BodyParser;
use hyper::Method;
use serde_json::Value;
use std::collections::HashMap;

/// A single request against the service under test. Built fresh for every test case.
#[derive(Debug, Clone)]
pub struct RequestData {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestData {
    pub fn new<S: Into<String>>(method: Method, path: S) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            query: Vec::new(),
        }
    }
}

/// What came back from the service. Header names are stored lowercase.
#[derive(Debug, Clone)]
pub struct ResponseData {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub parser: BodyParser,
}

impl ResponseData {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .map(|value| value.as_str())
    }

    /// Parses the body with the parser the server advertised, falling back to the configured
    /// default when there is no `Content-Type`.
    pub fn json(&self) -> Option<Value> {
        let parser = match self.header("content-type") {
            Some(content_type) if content_type.contains("json") => BodyParser::Json,
            Some(_) => BodyParser::Text,
            None => self.parser,
        };

        match parser {
            BodyParser::Json => serde_json::from_str(&self.body).ok(),
            BodyParser::Text => None,
        }
    }
}
