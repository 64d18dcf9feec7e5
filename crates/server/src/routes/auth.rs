use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{dispatcher, warn, Dispatch};

use common::types::ErrorBody;

/// Tag carried by every rejection log line.
pub const AUTH_LOG_PREFIX: &str = "[ADMIN_AUTH]";

const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was turned away. Every variant answers 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    MissingHeader,
    InvalidHeader,
    InvalidToken,
}

impl AuthRejection {
    pub fn classification(self) -> &'static str {
        match self {
            AuthRejection::MissingHeader => "Invalid request",
            AuthRejection::InvalidHeader => "Invalid header",
            AuthRejection::InvalidToken => "Invalid token",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AuthRejection::MissingHeader => "Authorization header required.",
            AuthRejection::InvalidHeader => "Authorization header format must be Bearer {token}",
            AuthRejection::InvalidToken => "Invalid token",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ErrorBody::new(self.message()))).into_response()
    }
}

/// Admin credential gate.
///
/// With a configured token the presented bearer token must match it exactly.
/// Without one, any non-empty bearer token is accepted. Rejections are logged
/// through `logger` when set, otherwise through the ambient subscriber; a
/// passing request logs nothing.
#[derive(Clone, Default)]
pub struct AdminAuth {
    token: Option<Arc<str>>,
    logger: Option<Dispatch>,
}

impl AdminAuth {
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.map(Arc::from), logger: None }
    }

    pub fn with_logger(mut self, logger: Dispatch) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Whether a shared secret is configured.
    pub fn verifies_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<(), AuthRejection> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthRejection::MissingHeader)?
            .to_str()
            .map_err(|_| AuthRejection::InvalidHeader)?;
        // the token is everything after the prefix, untrimmed
        let presented = value
            .strip_prefix(BEARER_PREFIX)
            .filter(|t| !t.trim().is_empty())
            .ok_or(AuthRejection::InvalidHeader)?;

        match &self.token {
            Some(expected) if !ct_eq(presented.as_bytes(), expected.as_bytes()) => {
                Err(AuthRejection::InvalidToken)
            }
            _ => Ok(()),
        }
    }

    fn log_rejection(&self, rejection: AuthRejection, path: &str) {
        let emit = || {
            warn!(
                tag = AUTH_LOG_PREFIX,
                classification = rejection.classification(),
                reason = rejection.message(),
                path,
                "{} {}: {}",
                AUTH_LOG_PREFIX,
                rejection.classification(),
                rejection.message()
            )
        };
        match &self.logger {
            Some(logger) => dispatcher::with_default(logger, emit),
            None => emit(),
        }
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Middleware: require `Authorization: Bearer <token>` on admin routes.
pub async fn require_admin_token(State(auth): State<AdminAuth>, req: Request, next: Next) -> Response {
    match auth.check(req.headers()) {
        Ok(()) => next.run(req).await,
        Err(rejection) => {
            auth.log_rejection(rejection, req.uri().path());
            rejection.into_response()
        }
    }
}
