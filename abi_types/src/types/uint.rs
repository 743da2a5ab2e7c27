use super::{fixed_len_decode_err, mismatched_value_err, AbiCodec};
use crate::{AbiError, AbiValue, Result};
use derive_more::Display;
use num_bigint::BigUint;

pub const MAX_UINT_BIT_SIZE: u16 = 512;
pub const MAX_UFIXED_PRECISION: u8 = 160;

fn check_bit_size(bit_size: u16) -> Result<()> {
    if bit_size < 8 || bit_size > MAX_UINT_BIT_SIZE || bit_size % 8 != 0 {
        return Err(AbiError::InvalidType(format!(
            "uint/ufixed bit size must be a multiple of 8 in [8, {MAX_UINT_BIT_SIZE}]: {bit_size}"
        )));
    }
    Ok(())
}

/// Big-endian, left-padded to `bit_size / 8` bytes.
fn encode_biguint(bit_size: u16, int: &BigUint) -> Result<Vec<u8>> {
    if int.bits() > u64::from(bit_size) {
        return Err(AbiError::Encoding(format!(
            "value {int} does not fit in {bit_size} bits"
        )));
    }
    let byte_len = usize::from(bit_size / 8);
    let digits = int.to_bytes_be();
    let mut buf = vec![0u8; byte_len];
    buf[byte_len - digits.len()..].copy_from_slice(&digits);
    Ok(buf)
}

/// `uint<N>`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
#[display(fmt = "uint{}", bit_size)]
pub struct UintType {
    bit_size: u16,
}

impl UintType {
    pub fn new(bit_size: u16) -> Result<Self> {
        check_bit_size(bit_size)?;
        Ok(Self { bit_size })
    }

    pub fn bit_size(&self) -> u16 {
        self.bit_size
    }
}

impl AbiCodec for UintType {
    fn byte_len(&self) -> Result<usize> {
        Ok(usize::from(self.bit_size / 8))
    }

    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        match value {
            AbiValue::Uint(int) => encode_biguint(self.bit_size, int),
            AbiValue::Byte(b) => encode_biguint(self.bit_size, &BigUint::from(*b)),
            _ => Err(mismatched_value_err(self, value)),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        let exp_len = self.byte_len()?;
        if bytes.len() != exp_len {
            return Err(fixed_len_decode_err(self, exp_len, bytes));
        }
        Ok(AbiValue::Uint(BigUint::from_bytes_be(bytes)))
    }
}

/// `ufixed<N>x<M>`: an unsigned decimal `value / 10^M`, carried as its raw integer `value`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
#[display(fmt = "ufixed{}x{}", bit_size, precision)]
pub struct UfixedType {
    bit_size: u16,
    precision: u8,
}

impl UfixedType {
    pub fn new(bit_size: u16, precision: u8) -> Result<Self> {
        check_bit_size(bit_size)?;
        if precision < 1 || precision > MAX_UFIXED_PRECISION {
            return Err(AbiError::InvalidType(format!(
                "ufixed precision must be in [1, {MAX_UFIXED_PRECISION}]: {precision}"
            )));
        }
        Ok(Self {
            bit_size,
            precision,
        })
    }

    pub fn bit_size(&self) -> u16 {
        self.bit_size
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }
}

impl AbiCodec for UfixedType {
    fn byte_len(&self) -> Result<usize> {
        Ok(usize::from(self.bit_size / 8))
    }

    fn is_dynamic(&self) -> bool {
        false
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        match value {
            AbiValue::Uint(int) => encode_biguint(self.bit_size, int),
            _ => Err(mismatched_value_err(self, value)),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        let exp_len = self.byte_len()?;
        if bytes.len() != exp_len {
            return Err(fixed_len_decode_err(self, exp_len, bytes));
        }
        Ok(AbiValue::Uint(BigUint::from_bytes_be(bytes)))
    }
}
