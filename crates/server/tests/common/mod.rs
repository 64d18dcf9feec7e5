#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, auth::AdminAuth};
use server::state::ServerState;
use service::address::repository::mock::MockAddressRepository;
use service::prompt::repository::mock::MockPromptRepository;

/// In-memory sink for log lines emitted through an injected dispatcher.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn dispatch(&self) -> tracing::Dispatch {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        tracing::Dispatch::new(subscriber)
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub addresses: Arc<MockAddressRepository>,
    pub prompts: Arc<MockPromptRepository>,
    pub logs: LogBuffer,
}

pub fn build_app(
    addresses: MockAddressRepository,
    prompts: MockPromptRepository,
    admin_token: Option<&str>,
) -> TestApp {
    let logs = LogBuffer::default();
    let addresses = Arc::new(addresses);
    let prompts = Arc::new(prompts);
    let auth = AdminAuth::new(admin_token.map(str::to_string)).with_logger(logs.dispatch());
    let state = ServerState::new(addresses.clone(), prompts.clone(), auth);
    TestApp {
        router: routes::build_router(state, CorsLayer::very_permissive()),
        addresses,
        prompts,
        logs,
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let resp = router.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

pub fn get(uri: &str, authorization: Option<&str>) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    Ok(builder.body(Body::empty())?)
}

pub fn post_json(uri: &str, authorization: Option<&str>, body: &str) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    Ok(builder.body(Body::from(body.to_string()))?)
}
