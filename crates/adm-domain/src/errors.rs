//! Errores del dominio de admisiones.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
