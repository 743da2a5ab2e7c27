use super::{packed_bools_after, TupleType};
use crate::types::{AbiCodec, ABI_LENGTH_SIZE, MAX_ABI_LENGTH};
use crate::{AbiError, AbiValue, Result};
use tracing::trace;

/// A head slot that awaits the offset of its member's tail.
struct PendingOffset {
    head_pos: usize,
    /// Total length of the tails preceding this member's tail.
    tail_pos: usize,
}

/// Packs up to 8 bools into one byte, MSB first.
fn pack_bools(values: &[AbiValue]) -> Result<u8> {
    if values.len() > 8 {
        return Err(AbiError::Encoding(format!(
            "cannot pack {} bools into one byte",
            values.len()
        )));
    }
    let mut packed = 0u8;
    for (i, value) in values.iter().enumerate() {
        match value {
            AbiValue::Bool(true) => packed |= 1 << (7 - i),
            AbiValue::Bool(false) => {}
            _ => {
                return Err(AbiError::Encoding(format!(
                    "cannot encode {} value as bool: {value:?}",
                    value.variant_name()
                )))
            }
        }
    }
    Ok(packed)
}

impl TupleType {
    pub(crate) fn encode_values(&self, values: &[AbiValue]) -> Result<Vec<u8>> {
        let child_types = &self.child_types[..];
        if child_types.len() > MAX_ABI_LENGTH {
            return Err(AbiError::Encoding(format!(
                "length of tuple array should not exceed a uint16: {}",
                child_types.len()
            )));
        }
        if values.len() != child_types.len() {
            return Err(AbiError::Encoding(format!(
                "tuple {self} has {} members but {} values were given",
                child_types.len(),
                values.len()
            )));
        }

        let mut heads = vec![];
        let mut tails = vec![];
        let mut pending_offsets = vec![];

        /* Bools of the current run already consumed. */
        let mut run_pos = 0;
        let mut i = 0;
        while i < child_types.len() {
            let child = &child_types[i];
            if child.is_dynamic() {
                run_pos = 0;
                pending_offsets.push(PendingOffset {
                    head_pos: heads.len(),
                    tail_pos: tails.len(),
                });
                heads.extend_from_slice(&[0u8; ABI_LENGTH_SIZE]);
                tails.extend(child.encode(&values[i])?);
            } else if child.is_bool() {
                let after =
                    packed_bools_after(child_types, i, run_pos).map_err(AbiError::Encoding)?;
                run_pos += after + 1;
                heads.push(pack_bools(&values[i..=i + after])?);
                i += after;
            } else {
                run_pos = 0;
                heads.extend(child.encode(&values[i])?);
            }
            i += 1;
        }

        let head_len = heads.len();
        trace!(
            "Encoding tuple of {} members: head {head_len} bytes, tail {} bytes, {} dynamic",
            child_types.len(),
            tails.len(),
            pending_offsets.len()
        );

        for PendingOffset { head_pos, tail_pos } in pending_offsets {
            let offset = head_len + tail_pos;
            let offset = u16::try_from(offset).map_err(|_| {
                AbiError::Encoding(format!("byte length {offset} should not exceed a uint16"))
            })?;
            heads[head_pos..head_pos + ABI_LENGTH_SIZE].copy_from_slice(&offset.to_be_bytes());
        }

        heads.extend(tails);
        Ok(heads)
    }
}
