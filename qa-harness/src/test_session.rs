use crate::{
    browser::BrowserSession, checker::ContractChecker, error::Error, logging,
    CheckerConfiguration,
};
use futures::FutureExt;
use lazy_static::lazy_static;
use std::{
    future::Future,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Condvar, Mutex, PoisonError},
};
use tokio::runtime::Builder;
use tracing::{error, warn};

lazy_static! {
    static ref TEST_LOCK: Arc<(Mutex<bool>, Condvar)> =
        Arc::new((Mutex::new(false), Condvar::new()));
}

/// Admits one test case at a time. The slot is released when the session is dropped, which
/// also happens while unwinding out of a failed assertion.
pub struct TestSession {
    _slot: (),
}

impl TestSession {
    pub fn enter() -> Self {
        logging::init();

        let (lock, cond) = &**TEST_LOCK;
        let mut is_test_running = cond
            .wait_while(
                lock.lock().unwrap_or_else(PoisonError::into_inner),
                |is_test_running| *is_test_running,
            )
            .unwrap_or_else(PoisonError::into_inner);
        *is_test_running = true;

        Self { _slot: () }
    }

    fn exit(&self) {
        let (lock, cond) = &**TEST_LOCK;
        let mut is_test_running = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *is_test_running = false;

        cond.notify_one();
    }

    /// Runs one HTTP contract case: configures, builds a checker, runs `body` and fails the
    /// test if it returns an error.
    pub fn run_contract<C, F, Fut>(configure: C, body: F)
    where
        C: FnOnce(&mut CheckerConfiguration),
        F: FnOnce(ContractChecker) -> Fut,
        Fut: Future<Output = Result<(), Error>>,
    {
        let session = Self::enter();
        let mut configuration = CheckerConfiguration::from_env();
        configure(&mut configuration);

        let outcome = block_on(async {
            let checker = ContractChecker::new(&configuration)?;
            body(checker).await
        });

        drop(session);
        report(outcome);
    }

    /// Runs one browser case. The browser session is quit whether `body` returns, fails or
    /// panics; a panic is re-raised afterwards.
    pub fn run_browser<C, F, Fut>(configure: C, body: F)
    where
        C: FnOnce(&mut CheckerConfiguration),
        F: FnOnce(BrowserSession) -> Fut,
        Fut: Future<Output = Result<(), Error>>,
    {
        let session = Self::enter();
        let mut configuration = CheckerConfiguration::from_env();
        configure(&mut configuration);

        let outcome = block_on(async {
            let browser = BrowserSession::start(&configuration).await?;
            let result = AssertUnwindSafe(body(browser.clone()))
                .catch_unwind()
                .await;

            let quit = browser.quit().await;
            if let Err(e) = &quit {
                warn!(error = %e, "could not quit the browser session");
            }

            match result {
                Ok(result) => result.and(quit),
                Err(cause) => panic::resume_unwind(cause),
            }
        });

        drop(session);
        report(outcome);
    }
}

impl Drop for TestSession {
    fn drop(&mut self) {
        self.exit();
    }
}

fn block_on<Fut: Future<Output = Result<(), Error>>>(future: Fut) -> Result<(), Error> {
    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(future)
}

fn report(outcome: Result<(), Error>) {
    if let Err(e) = outcome {
        error!(error = %e, "test case failed");
        panic!("{}", e);
    }
}
