use crate::types::TransactionIdentifier;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("TransactionIdentifier is nil")]
    NilTransactionIdentifier,

    #[error("TransactionIdentifier.Hash is missing")]
    MissingHash,
}

/// Validate a transaction identifier
/// Returns Ok(()) if present with a non-empty hash
pub fn transaction_identifier(
    identifier: Option<&TransactionIdentifier>,
) -> Result<(), IdentifierError> {
    let identifier = identifier.ok_or(IdentifierError::NilTransactionIdentifier)?;

    if identifier.hash.is_empty() {
        return Err(IdentifierError::MissingHash);
    }

    Ok(())
}
