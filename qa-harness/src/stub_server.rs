//! A local stand-in for the is-registered endpoint.
//!
//! The stub answers exactly the way the live service has been observed to answer, including
//! leaving out `Content-Type`, so contract cases can run without network access. It is started
//! once per test process on an ephemeral port.

use crate::error::Error;
use hyper::{
    header::ALLOW,
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode, Uri,
};
use lazy_static::lazy_static;
use serde_json::json;
use std::{convert::Infallible, net::SocketAddr, sync::mpsc, thread};
use tokio::runtime::Runtime;
use tracing::{error, info};

pub const IS_REGISTERED_PATH: &str = "/mapi/v16/user/is-registered";

/// Addresses the stub treats as registered, with their `id-index`.
const REGISTERED_USERS: &[(&str, u64)] = &[("john.m.lee@gmail.com", 1)];

lazy_static! {
    static ref STUB_ADDRESS: Option<SocketAddr> = start();
}

/// Base URI of the running stub, equivalent to `https://mapi.yummly.com/mapi`.
pub fn base_uri() -> Result<String, Error> {
    STUB_ADDRESS
        .map(|address| format!("http://{}/mapi", address))
        .ok_or(Error::StubUnavailable)
}

fn start() -> Option<SocketAddr> {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let runtime = match Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = %e, "stub server runtime could not be created");
                return;
            }
        };

        runtime.block_on(async move {
            let address = SocketAddr::from(([127, 0, 0, 1], 0));
            let builder = match Server::try_bind(&address) {
                Ok(builder) => builder,
                Err(e) => {
                    error!(error = %e, "stub server could not bind");
                    return;
                }
            };

            let server = builder.serve(make_service_fn(|_| async {
                Ok::<_, Infallible>(service_fn(handle_request))
            }));

            let _ = sender.send(server.local_addr());
            info!(address = %server.local_addr(), "stub server listening");

            if let Err(e) = server.await {
                error!(error = %e, "stub server error");
            }
        });
    });

    receiver.recv().ok()
}

async fn handle_request(request: Request<Body>) -> Result<Response<Body>, Infallible> {
    Ok(
        respond(request.method(), request.uri()).unwrap_or_else(|e| {
            error!(error = %e, "stub response could not be built");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        }),
    )
}

fn respond(method: &Method, uri: &Uri) -> Result<Response<Body>, hyper::http::Error> {
    if uri.path() != IS_REGISTERED_PATH {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty());
    }

    if *method != Method::GET {
        return Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(ALLOW, "GET")
            .body(Body::empty());
    }

    let email = uri.query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value.into_owned())
    });

    // only the status of a 400 has been observed
    let email = match email {
        Some(email) => email,
        None => {
            return Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .body(Body::empty())
        }
    };

    let (status, body) = match REGISTERED_USERS
        .iter()
        .find(|(registered, _)| *registered == email)
    {
        Some((_, id_index)) => (StatusCode::OK, json!({ "id-index": id_index })),
        None => (
            StatusCode::NOT_FOUND,
            json!({
                "code": "E_NO_SUCH_ENTITY",
                "description": "Entity does not exist",
                "entity": "User",
            }),
        ),
    };

    Response::builder()
        .status(status)
        .body(Body::from(body.to_string()))
}
