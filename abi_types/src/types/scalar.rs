use super::{fixed_len_decode_err, mismatched_value_err, AbiCodec};
use crate::{AbiError, AbiValue, Result};
use derive_more::Display;
use num_traits::ToPrimitive;

pub const BOOL_TRUE: u8 = 0x80;
pub const BOOL_FALSE: u8 = 0x00;

/// `bool`. Alone it takes one byte; inside a tuple, runs of bools are packed 8 per byte.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug, Display)]
#[display(fmt = "bool")]
pub struct BoolType;

impl AbiCodec for BoolType {
    fn byte_len(&self) -> Result<usize> {
        Ok(1)
    }

    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        match value {
            AbiValue::Bool(true) => Ok(vec![BOOL_TRUE]),
            AbiValue::Bool(false) => Ok(vec![BOOL_FALSE]),
            _ => Err(mismatched_value_err(self, value)),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        match bytes {
            [BOOL_TRUE] => Ok(AbiValue::Bool(true)),
            [BOOL_FALSE] => Ok(AbiValue::Bool(false)),
            [_] => Err(AbiError::Decoding(format!(
                "boolean value could not be decoded: {bytes:?}"
            ))),
            _ => Err(fixed_len_decode_err(self, 1, bytes)),
        }
    }
}

/// `byte`.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug, Display)]
#[display(fmt = "byte")]
pub struct ByteType;

impl AbiCodec for ByteType {
    fn byte_len(&self) -> Result<usize> {
        Ok(1)
    }

    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        let byte = match value {
            AbiValue::Byte(b) => *b,
            AbiValue::Uint(u) => u.to_u8().ok_or_else(|| {
                AbiError::Encoding(format!("value {u} cannot be encoded as a byte"))
            })?,
            _ => return Err(mismatched_value_err(self, value)),
        };
        Ok(vec![byte])
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        match bytes {
            [b] => Ok(AbiValue::Byte(*b)),
            _ => Err(fixed_len_decode_err(self, 1, bytes)),
        }
    }
}
