use thiserror::Error;

#[cfg(doc)]
use crate::context::Context;
#[cfg(doc)]
use crate::decision::DecisionStrategy;

/// Errors signalled when the embedding search engine misuses the protocol.
///
/// None of these are recoverable conditions; they indicate a bug in the caller and are surfaced
/// immediately so that integration tests catch them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FmfError {
    /// An operation was performed in the wrong order or in the wrong scope, e.g. asking a
    /// [`DecisionStrategy`] for a literal before it is initialized, or writing to a context-scoped
    /// value below the current level of its [`Context`].
    #[error("contract violation: {0}")]
    ContractViolation(String),
    /// A caller-supplied argument violates a documented precondition.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}

impl FmfError {
    pub(crate) fn contract_violation(message: impl Into<String>) -> Self {
        FmfError::ContractViolation(message.into())
    }

    pub(crate) fn illegal_argument(message: impl Into<String>) -> Self {
        FmfError::IllegalArgument(message.into())
    }
}
