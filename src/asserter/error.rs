use super::identifier::IdentifierError;
use crate::types::SignatureType;
use std::fmt;
use thiserror::Error;

/// Broad class of an assertion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required value missing or zero-length
    NilOrEmpty,
    /// Hex decode failure
    InvalidEncoding,
    /// Curve or signature type outside the supported set
    UnsupportedEnum,
    /// Requested and returned signature types disagree
    Mismatch,
    /// Failure surfaced unchanged from the transaction identifier check
    DelegatedFailure,
}

/// Part of a `Signature` that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignaturePart {
    SigningPayload,
    PublicKey,
    SignatureType,
    HexBytes,
}

impl fmt::Display for SignaturePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignaturePart::SigningPayload => write!(f, "signing payload"),
            SignaturePart::PublicKey => write!(f, "public key"),
            SignaturePart::SignatureType => write!(f, "signature type"),
            SignaturePart::HexBytes => write!(f, "hex"),
        }
    }
}

/// Construction response validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    #[error("hex string cannot be empty")]
    EmptyHex,

    #[error("{value} is not a valid hex string: {source}")]
    InvalidHex {
        value: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("{0} is not a supported CurveType")]
    UnsupportedCurveType(String),

    #[error("{0} is not a supported SignatureType")]
    UnsupportedSignatureType(String),

    #[error("public key cannot be nil")]
    NilPublicKey,

    #[error("public key does not have valid hex: {0}")]
    InvalidPublicKeyBytes(#[source] Box<AssertionError>),

    #[error("public key curve type is not supported: {0}")]
    UnsupportedPublicKeyCurve(#[source] Box<AssertionError>),

    #[error("signing payload cannot be nil")]
    NilSigningPayload,

    #[error("signing payload address cannot be empty")]
    EmptyAddress,

    #[error("signing payload is not a valid hex string: {0}")]
    InvalidSigningPayloadBytes(#[source] Box<AssertionError>),

    #[error("signing payload signature type is not valid: {0}")]
    InvalidSigningPayloadSignatureType(#[source] Box<AssertionError>),

    #[error("signatures cannot be empty")]
    EmptySignatures,

    #[error("signature {index} has invalid {part}: {source}")]
    InvalidSignature {
        index: usize,
        part: SignaturePart,
        #[source]
        source: Box<AssertionError>,
    },

    #[error(
        "signature {index} requested signature type {requested} does not match returned signature type {returned}"
    )]
    SignatureTypeMismatch {
        index: usize,
        requested: SignatureType,
        returned: SignatureType,
    },

    #[error("metadata is nil")]
    NilMetadata,

    #[error("unsigned transaction cannot be empty")]
    EmptyUnsignedTransaction,

    #[error("payloads cannot be empty")]
    EmptyPayloads,

    #[error("payload {index} is invalid: {source}")]
    InvalidPayload {
        index: usize,
        #[source]
        source: Box<AssertionError>,
    },

    #[error("derived address cannot be empty")]
    EmptyDerivedAddress,

    #[error(transparent)]
    TransactionIdentifier(#[from] IdentifierError),
}

impl AssertionError {
    /// Classifies the innermost failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssertionError::EmptyHex
            | AssertionError::NilPublicKey
            | AssertionError::NilSigningPayload
            | AssertionError::EmptyAddress
            | AssertionError::EmptySignatures
            | AssertionError::NilMetadata
            | AssertionError::EmptyUnsignedTransaction
            | AssertionError::EmptyPayloads
            | AssertionError::EmptyDerivedAddress => ErrorKind::NilOrEmpty,
            AssertionError::InvalidHex { .. } => ErrorKind::InvalidEncoding,
            AssertionError::UnsupportedCurveType(_) | AssertionError::UnsupportedSignatureType(_) => {
                ErrorKind::UnsupportedEnum
            }
            AssertionError::SignatureTypeMismatch { .. } => ErrorKind::Mismatch,
            AssertionError::TransactionIdentifier(_) => ErrorKind::DelegatedFailure,
            AssertionError::InvalidPublicKeyBytes(source)
            | AssertionError::UnsupportedPublicKeyCurve(source)
            | AssertionError::InvalidSigningPayloadBytes(source)
            | AssertionError::InvalidSigningPayloadSignatureType(source)
            | AssertionError::InvalidSignature { source, .. }
            | AssertionError::InvalidPayload { source, .. } => source.kind(),
        }
    }

    /// Position of the offending element for list-valued checks
    pub fn index(&self) -> Option<usize> {
        match self {
            AssertionError::InvalidSignature { index, .. }
            | AssertionError::SignatureTypeMismatch { index, .. }
            | AssertionError::InvalidPayload { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn in_signature(self, index: usize, part: SignaturePart) -> Self {
        AssertionError::InvalidSignature {
            index,
            part,
            source: Box::new(self),
        }
    }
}
