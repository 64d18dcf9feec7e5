use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Success envelope: every admin endpoint answers `{"data": ...}`.
#[derive(Serialize, Debug)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Failure envelope shared by handlers and the auth gate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
