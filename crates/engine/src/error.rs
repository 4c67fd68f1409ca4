//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidInput`] thrown when a required field is missing or unusable.
//! - [`InvalidType`] thrown when a transaction type is not `income`/`outcome`.
//! - [`UserNotFound`] thrown when no user matches the given id.
//! - [`TransactionNotFound`] thrown when the user owns no transaction with the
//!   given id.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`InvalidType`]: EngineError::InvalidType
//!  [`UserNotFound`]: EngineError::UserNotFound
//!  [`TransactionNotFound`]: EngineError::TransactionNotFound
use thiserror::Error;

/// Engine custom errors.
///
/// The payload carries the detail (field name, offending value or id) for
/// logging; the `Display` output is the message returned to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Dados inválidos")]
    InvalidInput(String),
    #[error("Tipo inválido")]
    InvalidType(String),
    #[error("Usuário não encontrado")]
    UserNotFound(String),
    #[error("Transação não encontrada")]
    TransactionNotFound(String),
}

impl EngineError {
    /// Detail attached to the error, never shown to API callers.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidInput(detail)
            | Self::InvalidType(detail)
            | Self::UserNotFound(detail)
            | Self::TransactionNotFound(detail) => detail,
        }
    }
}
