//! # Wire format
//!
//! Encoded values carry no type information. The decoder must be handed the same
//! [`AbiType`] that the encoder used.
//!
//! Static types occupy a fixed number of bytes. Dynamic types (`string`, `T[]`, and any
//! tuple or static array containing one) occupy a value-dependent number of bytes.
//!
//! A tuple is laid out as all its heads followed by all its tails:
//!
//! ```text
//! struct Tuple {
//!     heads:  {
//!         head_0:     [u8; byte_len(T0)],     // Static member: its encoding.
//!         head_1:     u16 (big-endian),       // Dynamic member: offset of tail_1 from the tuple start.
//!         head_2:     u8,                     // Up to 8 consecutive bool members, packed MSB first.
//!         ...
//!     },
//!     tails:  {
//!         tail_1:     [u8; _],                // Dynamic member: its encoding.
//!         ...
//!     },
//! }
//!
//! struct DynamicArray<T> {
//!     element_count:  u16 (big-endian),
//!     elements:       Tuple<T, T, ...>,
//! }
//!
//! struct String {
//!     byte_count:     u16 (big-endian),
//!     utf8:           [u8; byte_count],
//! }
//! ```

mod error;
pub mod types;
mod value;

pub use error::*;
pub use types::{AbiCodec, AbiType};
pub use value::*;
