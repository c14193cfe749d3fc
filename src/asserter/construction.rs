use super::error::{AssertionError, SignaturePart};
use super::identifier::transaction_identifier;
use crate::types::{
    ConstructionDeriveResponse, ConstructionMetadataResponse, ConstructionPayloadsResponse,
    ConstructionSubmitResponse, CurveType, PublicKey, Signature, SignatureType, SigningPayload,
};
use tracing::{debug, warn};

/// Check that a string is non-empty, decodable hex
pub fn check_hex(hex_string: &str) -> Result<(), AssertionError> {
    if hex_string.is_empty() {
        return Err(AssertionError::EmptyHex);
    }

    hex::decode(hex_string).map_err(|source| AssertionError::InvalidHex {
        value: hex_string.to_string(),
        source,
    })?;

    Ok(())
}

pub fn curve_type(curve: &CurveType) -> Result<(), AssertionError> {
    match curve {
        CurveType::Secp256k1 | CurveType::Edwards25519 => Ok(()),
        CurveType::Unsupported(tag) => Err(AssertionError::UnsupportedCurveType(tag.clone())),
    }
}

pub fn signature_type(signature_type: &SignatureType) -> Result<(), AssertionError> {
    match signature_type {
        SignatureType::Ecdsa | SignatureType::EcdsaRecovery | SignatureType::Ed25519 => Ok(()),
        SignatureType::Unsupported(tag) => {
            Err(AssertionError::UnsupportedSignatureType(tag.clone()))
        }
    }
}

/// Validate a public key
///
/// Fails if the key is absent, its bytes are not valid hex, or its curve is
/// not supported. The first failure wins.
pub fn public_key(public_key: Option<&PublicKey>) -> Result<(), AssertionError> {
    let public_key = public_key.ok_or(AssertionError::NilPublicKey)?;

    check_hex(&public_key.hex_bytes)
        .map_err(|e| AssertionError::InvalidPublicKeyBytes(Box::new(e)))?;

    curve_type(&public_key.curve_type)
        .map_err(|e| AssertionError::UnsupportedPublicKeyCurve(Box::new(e)))?;

    Ok(())
}

/// Validate a signing payload
///
/// The signature type is optional; it is only checked when requested.
pub fn signing_payload(signing_payload: Option<&SigningPayload>) -> Result<(), AssertionError> {
    let signing_payload = signing_payload.ok_or(AssertionError::NilSigningPayload)?;

    if signing_payload.address.is_empty() {
        return Err(AssertionError::EmptyAddress);
    }

    check_hex(&signing_payload.hex_bytes)
        .map_err(|e| AssertionError::InvalidSigningPayloadBytes(Box::new(e)))?;

    let Some(requested) = signing_payload.requested_signature_type() else {
        return Ok(());
    };

    signature_type(requested)
        .map_err(|e| AssertionError::InvalidSigningPayloadSignatureType(Box::new(e)))
}

/// Validate the signatures returned by a signer
///
/// At least one signature is required. Signatures are checked in order and
/// the first invalid one aborts the check with its index attached.
pub fn signatures(signatures: &[Signature]) -> Result<(), AssertionError> {
    debug!("Validating {} signatures", signatures.len());

    if signatures.is_empty() {
        return Err(AssertionError::EmptySignatures);
    }

    for (index, signature) in signatures.iter().enumerate() {
        check_signature(index, signature)?;
    }

    Ok(())
}

fn check_signature(index: usize, signature: &Signature) -> Result<(), AssertionError> {
    signing_payload(signature.signing_payload.as_ref())
        .map_err(|e| e.in_signature(index, SignaturePart::SigningPayload))?;

    public_key(signature.public_key.as_ref())
        .map_err(|e| e.in_signature(index, SignaturePart::PublicKey))?;

    signature_type(&signature.signature_type)
        .map_err(|e| e.in_signature(index, SignaturePart::SignatureType))?;

    // Only compared when the payload asked for a specific type
    let requested = signature
        .signing_payload
        .as_ref()
        .and_then(SigningPayload::requested_signature_type);
    if let Some(requested) = requested {
        if *requested != signature.signature_type {
            warn!(
                "Signature {} type mismatch: requested {}, returned {}",
                index, requested, signature.signature_type
            );
            return Err(AssertionError::SignatureTypeMismatch {
                index,
                requested: requested.clone(),
                returned: signature.signature_type.clone(),
            });
        }
    }

    check_hex(&signature.hex_bytes).map_err(|e| e.in_signature(index, SignaturePart::HexBytes))
}

/// Validate a `/construction/metadata` response
///
/// An empty metadata object is accepted; an absent one is not.
pub fn construction_metadata(
    response: &ConstructionMetadataResponse,
) -> Result<(), AssertionError> {
    if response.metadata.is_none() {
        return Err(AssertionError::NilMetadata);
    }

    Ok(())
}

/// Validate a `/construction/submit` response
pub fn construction_submit(response: &ConstructionSubmitResponse) -> Result<(), AssertionError> {
    transaction_identifier(response.transaction_identifier.as_ref())?;

    Ok(())
}

/// Validate a `/construction/payloads` response
pub fn construction_payloads(
    response: &ConstructionPayloadsResponse,
) -> Result<(), AssertionError> {
    if response.unsigned_transaction.is_empty() {
        return Err(AssertionError::EmptyUnsignedTransaction);
    }

    if response.payloads.is_empty() {
        return Err(AssertionError::EmptyPayloads);
    }

    for (index, payload) in response.payloads.iter().enumerate() {
        signing_payload(Some(payload)).map_err(|source| AssertionError::InvalidPayload {
            index,
            source: Box::new(source),
        })?;
    }

    Ok(())
}

/// Validate a `/construction/derive` response
pub fn construction_derive(response: &ConstructionDeriveResponse) -> Result<(), AssertionError> {
    if response.address.is_empty() {
        return Err(AssertionError::EmptyDerivedAddress);
    }

    Ok(())
}
