use super::{fixed_len_decode_err, mismatched_value_err, AbiCodec, AbiType, ByteType, TupleType};
use crate::{AbiError, AbiValue, Result};
use abi_address::{PublicKey, PUBLIC_KEY_LEN};
use derive_more::Display;
use tracing::debug;

/// `address`: a 32-byte public key.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug, Display)]
#[display(fmt = "address")]
pub struct AddressType;

impl AddressType {
    /// The equivalent `(byte,byte,...)` tuple of 32 bytes.
    pub fn to_tuple_type(&self) -> Result<TupleType> {
        TupleType::new(vec![AbiType::from(ByteType); PUBLIC_KEY_LEN])
    }
}

impl AbiCodec for AddressType {
    fn byte_len(&self) -> Result<usize> {
        Ok(PUBLIC_KEY_LEN)
    }

    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        match value {
            AbiValue::Str(addr) => match abi_address::decode_address(addr) {
                Ok(pk) => Ok(pk.to_vec()),
                Err(e) => {
                    debug!("Rejected address {addr:?}: {e}");
                    Err(AbiError::Encoding(format!(
                        "cannot encode the following address: {addr}: {e}"
                    )))
                }
            },
            AbiValue::Bytes(pk) if pk.len() == PUBLIC_KEY_LEN => Ok(pk.clone()),
            AbiValue::Bytes(pk) => Err(AbiError::Encoding(format!(
                "cannot encode the following public key of {} bytes: {pk:?}",
                pk.len()
            ))),
            _ => Err(mismatched_value_err(self, value)),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        let pk = PublicKey::try_from(bytes)
            .map_err(|_| fixed_len_decode_err(self, PUBLIC_KEY_LEN, bytes))?;
        Ok(AbiValue::Str(abi_address::encode_address(&pk)))
    }
}
