//! # Address display format
//!
//! An address is a 32-byte public key. Its display form is the unpadded base32 encoding of
//!
//! ```text
//! struct AddressDisplayBody {
//!     public_key:     [u8; 32],
//!     checksum:       [u8; 4],    // The last 4 bytes of SHA-512/256(public_key).
//! }
//! ```
//!
//! which is always 58 characters long.

use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};
use thiserror::Error;

pub const PUBLIC_KEY_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 4;
pub const ADDRESS_STR_LEN: usize = 58;

pub type PublicKey = [u8; PUBLIC_KEY_LEN];

#[derive(Error, PartialEq, Eq, Debug)]
pub enum AddressError {
    #[error("address must be 58 characters long but was {0}")]
    Length(usize),

    #[error("address is not valid base32: {0}")]
    Charset(#[from] data_encoding::DecodeError),

    #[error("address checksum mismatch")]
    Checksum,
}

fn checksum(pk: &PublicKey) -> [u8; CHECKSUM_LEN] {
    let digest = Sha512_256::digest(pk);
    let mut chk = [0u8; CHECKSUM_LEN];
    chk.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    chk
}

/// Parses the display form into the raw public key.
pub fn decode_address(addr: &str) -> Result<PublicKey, AddressError> {
    if addr.len() != ADDRESS_STR_LEN {
        return Err(AddressError::Length(addr.len()));
    }

    let body = BASE32_NOPAD.decode(addr.as_bytes())?;
    if body.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(AddressError::Length(addr.len()));
    }

    let mut pk = [0u8; PUBLIC_KEY_LEN];
    pk.copy_from_slice(&body[..PUBLIC_KEY_LEN]);
    if body[PUBLIC_KEY_LEN..] != checksum(&pk) {
        return Err(AddressError::Checksum);
    }

    Ok(pk)
}

/// Renders the raw public key in display form.
pub fn encode_address(pk: &PublicKey) -> String {
    let mut body = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
    body.extend_from_slice(pk);
    body.extend_from_slice(&checksum(pk));
    BASE32_NOPAD.encode(&body)
}

pub fn is_valid_address(addr: &str) -> bool {
    decode_address(addr).is_ok()
}
