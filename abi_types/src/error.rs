use thiserror::Error;

/// None of these are transient. Retrying the same call yields the same error.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum AbiError {
    /// A type could not be constructed with the given parameters.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// A type string is malformed.
    #[error("malformed type string: {0}")]
    TypeSyntax(String),

    /// A value does not conform to the type it is being encoded as.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A byte string is not a valid encoding of the type it is being decoded as.
    #[error("decoding error: {0}")]
    Decoding(String),
}

pub type Result<T, E = AbiError> = std::result::Result<T, E>;
