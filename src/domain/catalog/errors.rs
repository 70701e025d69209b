//! Catalog error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised when resolving catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown unit type: '{key}'")]
    UnknownType { key: String },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::UnknownType { key } => {
                DomainError::new(ErrorCode::UnknownUnitType, err.to_string())
                    .with_detail("key", key.clone())
            }
        }
    }
}
