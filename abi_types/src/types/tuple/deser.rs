use super::{packed_bools_after, TupleType};
use crate::types::{AbiCodec, ABI_LENGTH_SIZE, BOOL_FALSE, BOOL_TRUE};
use crate::{AbiError, AbiValue, Result};
use tracing::trace;

/// Where a dynamic member's tail lies in the tuple's byte string.
struct DynamicSegment {
    member_idx: usize,
    start: usize,
    end: usize,
}

fn not_long_enough(bytes: &[u8]) -> AbiError {
    AbiError::Decoding(format!(
        "input string is not long enough to be decoded: {bytes:?}"
    ))
}

impl TupleType {
    pub(crate) fn decode_values(&self, bytes: &[u8]) -> Result<Vec<AbiValue>> {
        let child_types = &self.child_types[..];

        let mut segments: Vec<DynamicSegment> = vec![];
        /* One slice per member. Dynamic members get theirs after the head is walked. */
        let mut partitions: Vec<&[u8]> = Vec::with_capacity(child_types.len());
        let mut cursor = 0;

        /* Bools of the current run already consumed. */
        let mut run_pos = 0;
        let mut i = 0;
        while i < child_types.len() {
            let child = &child_types[i];
            if child.is_dynamic() {
                run_pos = 0;
                let offset_bytes = bytes.get(cursor..cursor + ABI_LENGTH_SIZE).ok_or_else(|| {
                    AbiError::Decoding(format!(
                        "malformed value: dynamically typed values must contain a two-byte length specifier: {bytes:?}"
                    ))
                })?;
                let offset = usize::from(u16::from_be_bytes([offset_bytes[0], offset_bytes[1]]));

                if let Some(prev) = segments.last_mut() {
                    if offset <= prev.start {
                        return Err(AbiError::Decoding(format!(
                            "dynamic offset {offset} of member {i} does not exceed the preceding dynamic offset {}: {bytes:?}",
                            prev.start
                        )));
                    }
                    prev.end = offset;
                }
                segments.push(DynamicSegment {
                    member_idx: i,
                    start: offset,
                    end: bytes.len(),
                });
                partitions.push(&[]);
                cursor += ABI_LENGTH_SIZE;
            } else if child.is_bool() {
                let after =
                    packed_bools_after(child_types, i, run_pos).map_err(AbiError::Decoding)?;
                run_pos += after + 1;
                let bits = *bytes.get(cursor).ok_or_else(|| not_long_enough(bytes))?;
                for bool_i in 0..=after {
                    let mask = 0x80u8 >> bool_i;
                    if bits & mask != 0 {
                        partitions.push(&[BOOL_TRUE]);
                    } else {
                        partitions.push(&[BOOL_FALSE]);
                    }
                }
                i += after;
                cursor += 1;
            } else {
                run_pos = 0;
                let len = child.byte_len()?;
                let part = bytes
                    .get(cursor..cursor.saturating_add(len))
                    .ok_or_else(|| not_long_enough(bytes))?;
                partitions.push(part);
                cursor += len;
            }
            i += 1;
        }

        trace!(
            "Decoding tuple of {} members: head {cursor} bytes, input {} bytes, {} dynamic",
            child_types.len(),
            bytes.len(),
            segments.len()
        );

        if let Some(first) = segments.first() {
            if first.start != cursor {
                return Err(AbiError::Decoding(format!(
                    "first dynamic offset {} does not point at the end of the tuple head {cursor}: {bytes:?}",
                    first.start
                )));
            }
            cursor = bytes.len();
        }
        if cursor != bytes.len() {
            return Err(AbiError::Decoding(format!(
                "input string was not fully consumed: {bytes:?}"
            )));
        }

        for DynamicSegment {
            member_idx,
            start,
            end,
        } in segments
        {
            partitions[member_idx] = bytes.get(start..end).ok_or_else(|| {
                AbiError::Decoding(format!(
                    "dynamic segment [{start}, {end}) of member {member_idx} is out of bounds: {bytes:?}"
                ))
            })?;
        }

        child_types
            .iter()
            .zip(partitions)
            .map(|(child, part)| child.decode(part))
            .collect()
    }
}
