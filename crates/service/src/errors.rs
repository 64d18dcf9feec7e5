use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    /// A storage call failed inside a service operation; `context` names the operation.
    #[error("{context}: {source}")]
    Retrieval {
        context: &'static str,
        #[source]
        source: Box<ServiceError>,
    },
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn retrieval(context: &'static str, source: ServiceError) -> Self {
        Self::Retrieval { context, source: Box::new(source) }
    }

    /// True when the failure, possibly wrapped, is a missing row.
    pub fn is_not_found(&self) -> bool {
        match self {
            ServiceError::NotFound(_) => true,
            ServiceError::Retrieval { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieval_message_prefixes_context() {
        let err = ServiceError::retrieval("failed to get addresses", ServiceError::Db("connection reset".into()));
        assert_eq!(err.to_string(), "failed to get addresses: database error: connection reset");
    }

    #[test]
    fn not_found_is_visible_through_wrapping() {
        let err = ServiceError::retrieval("failed to get address", ServiceError::not_found("address"));
        assert!(err.is_not_found());
        assert!(!ServiceError::retrieval("x", ServiceError::Db("boom".into())).is_not_found());
    }

    #[test]
    fn source_chain_is_preserved() {
        use std::error::Error as _;
        let err = ServiceError::retrieval("failed to get address", ServiceError::Db("boom".into()));
        let source = err.source().expect("wrapped source");
        assert_eq!(source.to_string(), "database error: boom");
    }
}
