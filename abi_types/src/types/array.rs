use super::{dynamic_len_err, len_overflow_err, mismatched_value_err, AbiCodec, AbiType, TupleType};
use super::{ABI_LENGTH_SIZE, MAX_ABI_LENGTH};
use crate::{AbiError, AbiValue, Result};
use derive_more::Display;
use std::borrow::Cow;

/// Arrays of `byte` accept a raw buffer in place of a list of `Byte`s.
fn array_members<'a>(
    child_type: &AbiType,
    array_type: &impl std::fmt::Display,
    value: &'a AbiValue,
) -> Result<Cow<'a, [AbiValue]>> {
    match value {
        AbiValue::Array(members) => Ok(Cow::Borrowed(&members[..])),
        AbiValue::Bytes(buf) if matches!(child_type, AbiType::Byte(_)) => Ok(Cow::Owned(
            buf.iter().map(|b| AbiValue::Byte(*b)).collect(),
        )),
        _ => Err(mismatched_value_err(array_type, value)),
    }
}

/// `T[N]`: exactly `N` members of `T`, laid out like a tuple of `N` `T`s.
#[derive(PartialEq, Eq, Clone, Debug, Display)]
#[display(fmt = "{}[{}]", child_type, array_len)]
pub struct StaticArrayType {
    child_type: Box<AbiType>,
    array_len: u16,
}

impl StaticArrayType {
    pub fn new(child_type: AbiType, array_len: u16) -> Self {
        Self {
            child_type: Box::new(child_type),
            array_len,
        }
    }

    pub fn child_type(&self) -> &AbiType {
        &self.child_type
    }

    pub fn array_len(&self) -> u16 {
        self.array_len
    }

    pub fn to_tuple_type(&self) -> Result<TupleType> {
        TupleType::new(vec![(*self.child_type).clone(); usize::from(self.array_len)])
    }
}

impl AbiCodec for StaticArrayType {
    fn byte_len(&self) -> Result<usize> {
        let array_len = usize::from(self.array_len);
        if self.child_type.is_bool() {
            return Ok((array_len + 7) / 8);
        }
        array_len
            .checked_mul(self.child_type.byte_len()?)
            .ok_or_else(|| len_overflow_err(self))
    }

    fn is_dynamic(&self) -> bool {
        self.child_type.is_dynamic()
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        let members = array_members(&self.child_type, self, value)?;
        if members.len() != usize::from(self.array_len) {
            return Err(AbiError::Encoding(format!(
                "{self} requires {} members but {} were given",
                self.array_len,
                members.len()
            )));
        }
        self.to_tuple_type()?.encode_values(&members)
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        self.to_tuple_type()?.decode(bytes)
    }
}

/// `T[]`: a count of members, followed by the members laid out like a tuple.
#[derive(PartialEq, Eq, Clone, Debug, Display)]
#[display(fmt = "{}[]", child_type)]
pub struct DynamicArrayType {
    child_type: Box<AbiType>,
}

impl DynamicArrayType {
    pub fn new(child_type: AbiType) -> Self {
        Self {
            child_type: Box::new(child_type),
        }
    }

    pub fn child_type(&self) -> &AbiType {
        &self.child_type
    }

    pub fn to_tuple_type(&self, array_len: usize) -> Result<TupleType> {
        TupleType::new(vec![(*self.child_type).clone(); array_len])
    }
}

impl AbiCodec for DynamicArrayType {
    fn byte_len(&self) -> Result<usize> {
        Err(dynamic_len_err(self))
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        let members = array_members(&self.child_type, self, value)?;
        let count = u16::try_from(members.len()).map_err(|_| {
            AbiError::Encoding(format!(
                "{self} cannot hold more than {MAX_ABI_LENGTH} members: {}",
                members.len()
            ))
        })?;

        let body = self.to_tuple_type(members.len())?.encode_values(&members)?;
        let mut buf = Vec::with_capacity(ABI_LENGTH_SIZE + body.len());
        buf.extend_from_slice(&count.to_be_bytes());
        buf.extend(body);
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        if bytes.len() < ABI_LENGTH_SIZE {
            return Err(AbiError::Decoding(format!(
                "{self} must contain a two-byte length specifier: {bytes:?}"
            )));
        }
        let (count, body) = bytes.split_at(ABI_LENGTH_SIZE);
        let count = usize::from(u16::from_be_bytes([count[0], count[1]]));
        self.to_tuple_type(count)?.decode(body)
    }
}
