use crate::expectation::Mismatch;
use std::{fmt::Display, io};
use thirtyfour::error::WebDriverError;

#[derive(Debug)]
pub enum Error {
    ExpectationFailed(Vec<Mismatch>),
    PreconditionFailed(String),
    IoError(io::Error),
    ReqwestError(reqwest::Error),
    WebDriverError(WebDriverError),
    InvalidHeaderName,
    InvalidHeaderValue,
    InvalidBaseUri(url::ParseError),
    StubUnavailable,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ExpectationFailed(mismatches) => {
                write!(f, "{} expectation(s) failed", mismatches.len())?;
                for mismatch in mismatches {
                    write!(f, "\n  {}", mismatch)?;
                }
                Ok(())
            }
            Error::PreconditionFailed(message) => write!(f, "{}", message),
            Error::IoError(e) => write!(f, "IoError: {}", e),
            Error::ReqwestError(e) => write!(f, "reqwest error: {}", e),
            Error::WebDriverError(e) => write!(f, "WebDriver error: {}", e),
            Error::InvalidHeaderName => write!(f, "Invalid header name"),
            Error::InvalidHeaderValue => write!(f, "Invalid header value"),
            Error::InvalidBaseUri(e) => write!(f, "Invalid base URI: {}", e),
            Error::StubUnavailable => write!(f, "The stub server could not be started"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ReqwestError(e)
    }
}

impl From<WebDriverError> for Error {
    fn from(e: WebDriverError) -> Self {
        Error::WebDriverError(e)
    }
}

impl From<hyper::header::InvalidHeaderName> for Error {
    fn from(_: hyper::header::InvalidHeaderName) -> Self {
        Error::InvalidHeaderName
    }
}

impl From<hyper::header::InvalidHeaderValue> for Error {
    fn from(_: hyper::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidBaseUri(e)
    }
}
