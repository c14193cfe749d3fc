//! Construction Asserter Module
//!
//! This module validates responses from the construction endpoints before a
//! caller trusts them for signing or broadcast.
//! Checks are pure functions over decoded wire types; none of them verify
//! signatures cryptographically.

mod construction;
mod error;
mod identifier;


pub use construction::{
    check_hex,
    construction_derive,
    construction_metadata,
    construction_payloads,
    construction_submit,
    curve_type,
    public_key,
    signature_type,
    signatures,
    signing_payload,
};
pub use error::{AssertionError, ErrorKind, SignaturePart};
pub use identifier::{IdentifierError, transaction_identifier};
