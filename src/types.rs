//! Construction API wire types
//!
//! Decoded request/response entities for the construction endpoints.
//! Enumerations keep any unrecognised tag in an `Unsupported` variant so the
//! asserter, not the decoder, decides whether a response is acceptable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Untyped key/value metadata attached to a response
pub type Metadata = Map<String, Value>;

/// Elliptic curve family of a public key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurveType {
    Secp256k1,
    Edwards25519,
    /// Any tag outside the protocol's curve set, kept verbatim
    Unsupported(String),
}

impl CurveType {
    pub fn as_str(&self) -> &str {
        match self {
            CurveType::Secp256k1 => "secp256k1",
            CurveType::Edwards25519 => "edwards25519",
            CurveType::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for CurveType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "secp256k1" => CurveType::Secp256k1,
            "edwards25519" => CurveType::Edwards25519,
            _ => CurveType::Unsupported(tag),
        }
    }
}

impl From<&str> for CurveType {
    fn from(tag: &str) -> Self {
        CurveType::from(tag.to_string())
    }
}

impl From<CurveType> for String {
    fn from(curve: CurveType) -> Self {
        match curve {
            CurveType::Unsupported(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signing algorithm used (or requested) for a signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignatureType {
    Ecdsa,
    EcdsaRecovery,
    Ed25519,
    /// Any tag outside the protocol's signature set, kept verbatim
    Unsupported(String),
}

impl SignatureType {
    pub fn as_str(&self) -> &str {
        match self {
            SignatureType::Ecdsa => "ecdsa",
            SignatureType::EcdsaRecovery => "ecdsa_recovery",
            SignatureType::Ed25519 => "ed25519",
            SignatureType::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for SignatureType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ecdsa" => SignatureType::Ecdsa,
            "ecdsa_recovery" => SignatureType::EcdsaRecovery,
            "ed25519" => SignatureType::Ed25519,
            _ => SignatureType::Unsupported(tag),
        }
    }
}

impl From<&str> for SignatureType {
    fn from(tag: &str) -> Self {
        SignatureType::from(tag.to_string())
    }
}

impl From<SignatureType> for String {
    fn from(signature_type: SignatureType) -> Self {
        match signature_type {
            SignatureType::Unsupported(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public key as hex-encoded bytes tagged with its curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(default, alias = "bytes")]
    pub hex_bytes: String,
    pub curve_type: CurveType,
}

/// Bytes a signer is asked to sign, plus who signs and (optionally) how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningPayload {
    #[serde(default)]
    pub address: String,
    #[serde(default, alias = "bytes")]
    pub hex_bytes: String,
    #[serde(
        default,
        deserialize_with = "empty_tag_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub signature_type: Option<SignatureType>,
}

impl SigningPayload {
    /// The signature type the caller asked for, if any
    ///
    /// An empty tag counts as "not requested".
    pub fn requested_signature_type(&self) -> Option<&SignatureType> {
        self.signature_type
            .as_ref()
            .filter(|requested| !requested.as_str().is_empty())
    }
}

/// Signature returned by a signer for one signing payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub signing_payload: Option<SigningPayload>,
    #[serde(default)]
    pub public_key: Option<PublicKey>,
    pub signature_type: SignatureType,
    #[serde(default, alias = "bytes")]
    pub hex_bytes: String,
}

/// Identifier of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIdentifier {
    #[serde(default)]
    pub hash: String,
}

/// Response of `/construction/metadata`
///
/// `metadata` distinguishes "absent" (`None`, including JSON `null`) from an
/// empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionMetadataResponse {
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Response of `/construction/submit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionSubmitResponse {
    #[serde(default)]
    pub transaction_identifier: Option<TransactionIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Response of `/construction/payloads`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionPayloadsResponse {
    #[serde(default)]
    pub unsigned_transaction: String,
    #[serde(default)]
    pub payloads: Vec<SigningPayload>,
}

/// Response of `/construction/derive`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionDeriveResponse {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Maps a missing, `null` or empty signature type tag to `None`.
fn empty_tag_as_none<'de, D>(deserializer: D) -> Result<Option<SignatureType>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.filter(|tag| !tag.is_empty()).map(SignatureType::from))
}
