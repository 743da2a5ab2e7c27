use crate::{AbiError, AbiValue, Result};
use derive_more::{Display, From};

mod address;
mod array;
mod parse;
mod scalar;
mod string;
mod tuple;
mod uint;

pub use address::*;
pub use array::*;
pub use parse::*;
pub use scalar::*;
pub use string::*;
pub use tuple::*;
pub use uint::*;

/// Byte width of every length prefix and tail offset.
pub const ABI_LENGTH_SIZE: usize = 2;

/// Largest tuple arity, and largest dynamic element count or tail offset.
pub const MAX_ABI_LENGTH: usize = u16::MAX as usize;

/// The capabilities every type variant provides.
///
/// The canonical type name is the [`std::fmt::Display`] output.
pub trait AbiCodec {
    /// Only static types have a byte length. Asking a dynamic type is an [`AbiError::InvalidType`].
    fn byte_len(&self) -> Result<usize>;

    fn is_dynamic(&self) -> bool;

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue>;
}

/// The closed set of type variants.
///
/// Equality is structural, and agrees with equality of the canonical names.
#[derive(PartialEq, Eq, Clone, Debug, Display, From)]
pub enum AbiType {
    Uint(UintType),
    Ufixed(UfixedType),
    Byte(ByteType),
    Bool(BoolType),
    Address(AddressType),
    String(StringType),
    StaticArray(StaticArrayType),
    DynamicArray(DynamicArrayType),
    Tuple(TupleType),
}

impl AbiType {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    fn as_codec(&self) -> &dyn AbiCodec {
        match self {
            Self::Uint(t) => t,
            Self::Ufixed(t) => t,
            Self::Byte(t) => t,
            Self::Bool(t) => t,
            Self::Address(t) => t,
            Self::String(t) => t,
            Self::StaticArray(t) => t,
            Self::DynamicArray(t) => t,
            Self::Tuple(t) => t,
        }
    }
}

impl AbiCodec for AbiType {
    fn byte_len(&self) -> Result<usize> {
        self.as_codec().byte_len()
    }
    fn is_dynamic(&self) -> bool {
        self.as_codec().is_dynamic()
    }
    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        self.as_codec().encode(value)
    }
    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        self.as_codec().decode(bytes)
    }
}

/* Error message helpers shared by the variants. */

fn dynamic_len_err(typ: &impl std::fmt::Display) -> AbiError {
    AbiError::InvalidType(format!("cannot get length of a dynamic type: {typ}"))
}

fn len_overflow_err(typ: &impl std::fmt::Display) -> AbiError {
    AbiError::InvalidType(format!("byte length of {typ} overflows usize"))
}

fn mismatched_value_err(typ: &impl std::fmt::Display, value: &AbiValue) -> AbiError {
    AbiError::Encoding(format!(
        "cannot encode {} value as {typ}: {value:?}",
        value.variant_name()
    ))
}

fn fixed_len_decode_err(typ: &impl std::fmt::Display, exp_len: usize, bytes: &[u8]) -> AbiError {
    AbiError::Decoding(format!(
        "{typ} must be {exp_len} bytes but was {}: {bytes:?}",
        bytes.len()
    ))
}
