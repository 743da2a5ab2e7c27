use super::{len_overflow_err, AbiCodec, AbiType, MAX_ABI_LENGTH};
use crate::{AbiError, AbiValue, Result};
use itertools::Itertools;
use std::fmt;

mod deser;
mod ser;

/// `(T0,T1,...)`: an ordered, fixed-length sequence of member types.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TupleType {
    child_types: Box<[AbiType]>,
}

impl TupleType {
    pub fn new(child_types: Vec<AbiType>) -> Result<Self> {
        if child_types.len() > MAX_ABI_LENGTH {
            return Err(AbiError::InvalidType(format!(
                "tuple args cannot exceed a uint16: {}",
                child_types.len()
            )));
        }
        Ok(Self {
            child_types: child_types.into_boxed_slice(),
        })
    }

    pub fn child_types(&self) -> &[AbiType] {
        &self.child_types
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.child_types.iter().join(","))
    }
}

/* Boolean runs. */

/// How many of the (at most `limit`) members immediately following `idx` are bools.
fn bools_after(types: &[AbiType], idx: usize, limit: usize) -> usize {
    types[idx + 1..]
        .iter()
        .take(limit)
        .take_while(|t| t.is_bool())
        .count()
}

/// The count of bools packed into the byte that starts at bool member `idx`, minus one.
///
/// `run_pos` is how many bools of the same run precede `idx`, as tracked by the caller.
/// A packed byte must start at a multiple of 8 into its run.
fn packed_bools_after(types: &[AbiType], idx: usize, run_pos: usize) -> Result<usize, String> {
    let run_start = idx.checked_sub(run_pos);
    let aligned = run_pos % 8 == 0
        && run_start.is_some_and(|start| start == 0 || !types[start - 1].is_bool());
    if !aligned {
        return Err(format!(
            "bool at member {idx} is preceded by {run_pos} bools of its run, which is not a multiple of 8"
        ));
    }
    Ok(bools_after(types, idx, 7))
}

impl AbiCodec for TupleType {
    fn byte_len(&self) -> Result<usize> {
        let mut size = 0usize;
        let mut i = 0;
        while i < self.child_types.len() {
            let child = &self.child_types[i];
            let child_len = if child.is_bool() {
                let after = bools_after(&self.child_types, i, usize::MAX);
                i += after;
                let bool_num = after + 1;
                (bool_num + 7) / 8
            } else {
                child.byte_len()?
            };
            size = size
                .checked_add(child_len)
                .ok_or_else(|| len_overflow_err(self))?;
            i += 1;
        }
        Ok(size)
    }

    fn is_dynamic(&self) -> bool {
        self.child_types.iter().any(|child| child.is_dynamic())
    }

    fn encode(&self, value: &AbiValue) -> Result<Vec<u8>> {
        match value {
            AbiValue::Array(values) => self.encode_values(values),
            _ => Err(AbiError::Encoding(format!(
                "cannot encode {} value as tuple {self}: {value:?}",
                value.variant_name()
            ))),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<AbiValue> {
        let values = self.decode_values(bytes)?;
        Ok(AbiValue::Array(values))
    }
}
