use derive_more::From;
use itertools::Itertools;
use num_bigint::BigUint;
use std::fmt;

/// A native value, positionally aligned with an [`crate::AbiType`].
///
/// - Tuples and arrays encode from, and decode to, [`AbiValue::Array`].
/// - `address` encodes from [`AbiValue::Str`] (display form) or [`AbiValue::Bytes`] (raw key),
///   and decodes to [`AbiValue::Str`].
/// - `uint<N>` and `ufixed<N>x<M>` use [`AbiValue::Uint`]. For `ufixed` it is the raw,
///   unscaled integer.
/// - Arrays of `byte` additionally encode from [`AbiValue::Bytes`].
#[derive(PartialEq, Eq, Clone, Debug, From)]
pub enum AbiValue {
    Bool(bool),
    Byte(u8),
    Uint(BigUint),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<AbiValue>),
}

impl From<u64> for AbiValue {
    fn from(int: u64) -> Self {
        Self::Uint(BigUint::from(int))
    }
}
impl From<&str> for AbiValue {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

impl AbiValue {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Byte(_) => "Byte",
            Self::Uint(_) => "Uint",
            Self::Str(_) => "Str",
            Self::Bytes(_) => "Bytes",
            Self::Array(_) => "Array",
        }
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Byte(b) => write!(f, "{b}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::Array(members) => write!(f, "[{}]", members.iter().join(", ")),
        }
    }
}
