mod browser;
mod checker;
mod configuration;
mod data;
mod error;
mod expectation;
#[cfg(test)]
mod fake_webdriver;
mod http_client;
mod logging;
pub mod stub_server;
mod test_session;
mod util;

pub use browser::{text_within, BrowserSession};
pub use checker::{ContractChecker, RequestSpec};
pub use configuration::{BodyParser, Browser, CheckerConfiguration};
pub use data::{RequestData, ResponseData};
pub use error::Error;
pub use expectation::{Expectation, Mismatch};
pub use http_client::{HttpClient, ReqwestHttpClient};
pub use hyper::Method;
pub use qa_harness_codegen::{browser_test, contract_test};
pub use test_session::TestSession;
pub use thirtyfour::By;
