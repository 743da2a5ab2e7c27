use super::{dynamic_len_err, mismatched_value_err, AbiCodec, ABI_LENGTH_SIZE, MAX_ABI_LENGTH};
use crate::{AbiError, AbiValue, Result};
use derive_more::Display;

/// `string`: UTF-8 bytes prefixed with their count.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug, Display)]
#[display(fmt = "string")]
pub struct StringType;

impl AbiCodec for StringType {
    fn byte_len(&self) -> Result<usize> {
        Err(dynamic_len_err(self))
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        let s = match value {
            AbiValue::Str(s) => s,
            _ => return Err(mismatched_value_err(self, value)),
        };
        let len = u16::try_from(s.len()).map_err(|_| {
            AbiError::Encoding(format!(
                "string byte length {} should not exceed {MAX_ABI_LENGTH}",
                s.len()
            ))
        })?;

        let mut buf = Vec::with_capacity(ABI_LENGTH_SIZE + s.len());
        buf.extend_from_slice(&len.to_be_bytes());
        buf.extend_from_slice(s.as_bytes());
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        if bytes.len() < ABI_LENGTH_SIZE {
            return Err(AbiError::Decoding(format!(
                "string must contain a two-byte length specifier: {bytes:?}"
            )));
        }
        let (len, body) = bytes.split_at(ABI_LENGTH_SIZE);
        let len = usize::from(u16::from_be_bytes([len[0], len[1]]));
        if len != body.len() {
            return Err(AbiError::Decoding(format!(
                "string length specifier {len} does not match body length {}: {bytes:?}",
                body.len()
            )));
        }

        let s = String::from_utf8(body.to_vec())
            .map_err(|e| AbiError::Decoding(format!("string is not valid UTF-8: {e}")))?;
        Ok(AbiValue::Str(s))
    }
}
