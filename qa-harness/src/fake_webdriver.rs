//! Just enough of the W3C WebDriver protocol to open, configure and delete a session, so the
//! browser session lifecycle can be tested without geckodriver.

use hyper::{
    header::CONTENT_TYPE,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use serde_json::json;
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    },
    thread,
};
use tokio::runtime::Runtime;

pub const SESSION_ID: &str = "fake-session";

pub struct FakeWebDriver {
    address: SocketAddr,
    deleted_sessions: Arc<AtomicUsize>,
}

impl FakeWebDriver {
    pub fn start() -> Self {
        let deleted_sessions = Arc::new(AtomicUsize::new(0));
        let counter = deleted_sessions.clone();
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let runtime = Runtime::new().expect("fake webdriver runtime");
            runtime.block_on(async move {
                let address = SocketAddr::from(([127, 0, 0, 1], 0));
                let server = Server::try_bind(&address)
                    .expect("fake webdriver bind")
                    .serve(make_service_fn(move |_| {
                        let counter = counter.clone();
                        async move {
                            Ok::<_, Infallible>(service_fn(move |request| {
                                handle_request(request, counter.clone())
                            }))
                        }
                    }));

                let _ = sender.send(server.local_addr());
                let _ = server.await;
            });
        });

        Self {
            address: receiver.recv().expect("fake webdriver address"),
            deleted_sessions,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// How many `DELETE /session/{id}` requests have been answered.
    pub fn deleted_sessions(&self) -> usize {
        self.deleted_sessions.load(Ordering::SeqCst)
    }
}

async fn handle_request(
    request: Request<Body>,
    deleted_sessions: Arc<AtomicUsize>,
) -> Result<Response<Body>, Infallible> {
    let session_path = format!("/session/{}", SESSION_ID);
    let path = request.uri().path();

    let (status, value) = if *request.method() == Method::POST && path == "/session" {
        (
            StatusCode::OK,
            json!({
                "sessionId": SESSION_ID,
                "capabilities": { "browserName": "firefox" },
            }),
        )
    } else if *request.method() == Method::DELETE && path == session_path {
        deleted_sessions.fetch_add(1, Ordering::SeqCst);
        (StatusCode::OK, json!(null))
    } else if path.starts_with(&session_path) {
        (StatusCode::OK, json!(null))
    } else {
        (
            StatusCode::NOT_FOUND,
            json!({
                "error": "invalid session id",
                "message": "unknown session",
                "stacktrace": "",
            }),
        )
    };

    let mut response = Response::new(Body::from(json!({ "value": value }).to_string()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json; charset=utf-8"),
    );

    Ok(response)
}
