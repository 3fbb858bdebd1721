//! Assertions on a [`ResponseData`].
//!
//! An [`Expectation`] is a list of checks built up front and verified in one go, so a failing
//! response reports every mismatch at once instead of stopping at the first.

use crate::{error::Error, ResponseData};
use serde_json::Value;
use std::fmt::Display;
use tracing::warn;

/// One expected-vs-actual difference.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub subject: String,
    pub expected: String,
    pub actual: String,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {} but was {}",
            self.subject, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone)]
enum Check {
    Status(u16),
    Header(String, String),
    BodyField(String, Value),
}

#[derive(Debug, Clone, Default)]
pub struct Expectation {
    checks: Vec<Check>,
}

impl Expectation {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn status(mut self, status_code: u16) -> Self {
        self.checks.push(Check::Status(status_code));
        self
    }

    pub fn header<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.checks
            .push(Check::Header(name.into().to_lowercase(), value.into()));
        self
    }

    /// Expects a top-level field of the JSON body to equal `value`.
    pub fn body_field<S: Into<String>, V: Into<Value>>(mut self, field: S, value: V) -> Self {
        self.checks.push(Check::BodyField(field.into(), value.into()));
        self
    }

    pub fn verify(&self, response: &ResponseData) -> Result<(), Error> {
        let mismatches = self.mismatches(response);

        if mismatches.is_empty() {
            Ok(())
        } else {
            for mismatch in &mismatches {
                warn!(%mismatch, "expectation failed");
            }
            Err(Error::ExpectationFailed(mismatches))
        }
    }

    pub fn mismatches(&self, response: &ResponseData) -> Vec<Mismatch> {
        let body = response.json();
        let mut mismatches = Vec::new();

        for check in &self.checks {
            match check {
                Check::Status(expected) => {
                    if response.status_code != *expected {
                        mismatches.push(Mismatch {
                            subject: String::from("status code"),
                            expected: expected.to_string(),
                            actual: response.status_code.to_string(),
                        });
                    }
                }
                Check::Header(name, expected) => match response.header(name) {
                    Some(actual) if actual == expected => (),
                    actual => mismatches.push(Mismatch {
                        subject: format!("header `{}`", name),
                        expected: format!("{:?}", expected),
                        actual: actual
                            .map(|value| format!("{:?}", value))
                            .unwrap_or_else(|| String::from("<absent>")),
                    }),
                },
                Check::BodyField(field, expected) => {
                    let actual = body.as_ref().and_then(|json| json.get(field));

                    if actual != Some(expected) {
                        mismatches.push(Mismatch {
                            subject: format!("body field `{}`", field),
                            expected: expected.to_string(),
                            actual: describe_field(&body, field, &response.body),
                        });
                    }
                }
            }
        }

        mismatches
    }
}

fn describe_field(body: &Option<Value>, field: &str, raw_body: &str) -> String {
    match body {
        Some(json) => json
            .get(field)
            .map(|value| value.to_string())
            .unwrap_or_else(|| String::from("<absent>")),
        None => format!("non-JSON body {:?}", raw_body),
    }
}
