//! Type strings
//!
//! A type string names exactly one type, in the same form as its canonical name:
//!
//! ```text
//! uint<N>  ufixed<N>x<M>  byte  bool  address  string
//! <T>[<N>]  <T>[]  (<T>,<T>,...)
//! ```
//!
//! Whitespace is not permitted anywhere.

use super::{
    AbiType, AddressType, BoolType, ByteType, DynamicArrayType, StaticArrayType, StringType,
    TupleType, UfixedType, UintType,
};
use crate::{AbiError, Result};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;


fn static_array_regex() -> &'static Regex {
    static REG: OnceLock<Regex> = OnceLock::new();
    REG.get_or_init(|| Regex::new(r"^(?P<elem>.+)\[(?P<len>[1-9][0-9]*|0)\]$").unwrap())
}
fn uint_regex() -> &'static Regex {
    static REG: OnceLock<Regex> = OnceLock::new();
    REG.get_or_init(|| Regex::new(r"^uint(?P<size>[1-9][0-9]*)$").unwrap())
}
fn ufixed_regex() -> &'static Regex {
    static REG: OnceLock<Regex> = OnceLock::new();
    REG.get_or_init(|| {
        Regex::new(r"^ufixed(?P<size>[1-9][0-9]*)x(?P<precision>[1-9][0-9]*)$").unwrap()
    })
}

fn syntax_err(s: &str, what: &str) -> AbiError {
    AbiError::TypeSyntax(format!("{what}: {s}"))
}

/// Splits one layer of a tuple's inner text into its member type strings.
///
/// `s` is the text between the tuple's outer parentheses.
/// Commas nested inside parentheses do not separate members.
///
/// ```text
/// "x,(y,(z))" => ["x", "(y,(z))"]
/// ""          => []
/// ```
pub fn parse_tuple(s: &str) -> Result<Vec<&str>> {
    if s.is_empty() {
        return Ok(vec![]);
    }

    if s.starts_with(',') || s.ends_with(',') {
        return Err(syntax_err(s, "cannot have leading or trailing commas"));
    }
    if s.contains(",,") {
        return Err(syntax_err(s, "cannot have consecutive commas"));
    }

    let mut tokens = vec![];
    let mut depth = 0usize;
    let mut token_start = 0;
    for (pos, chr) in s.char_indices() {
        match chr {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| syntax_err(s, "parenthesis mismatch"))?;
            }
            ',' if depth == 0 => {
                tokens.push(&s[token_start..pos]);
                token_start = pos + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(syntax_err(s, "parenthesis mismatch"));
    }
    if token_start < s.len() {
        tokens.push(&s[token_start..]);
    }

    Ok(tokens)
}

fn parse_num<T: FromStr>(s: &str, num: &str) -> Result<T> {
    num.parse::<T>()
        .map_err(|_| syntax_err(s, "numeric parameter out of range"))
}

impl FromStr for AbiType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(elem) = s.strip_suffix("[]") {
            let elem = Self::from_str(elem)?;
            return Ok(DynamicArrayType::new(elem).into());
        }

        if s.ends_with(']') {
            let caps = static_array_regex()
                .captures(s)
                .ok_or_else(|| syntax_err(s, "malformed static array"))?;
            let array_len = parse_num::<u16>(s, &caps["len"])?;
            let elem = Self::from_str(&caps["elem"])?;
            return Ok(StaticArrayType::new(elem, array_len).into());
        }

        if s.starts_with("uint") {
            let caps = uint_regex()
                .captures(s)
                .ok_or_else(|| syntax_err(s, "malformed uint"))?;
            let bit_size = parse_num::<u16>(s, &caps["size"])?;
            return Ok(UintType::new(bit_size)?.into());
        }

        if s.starts_with("ufixed") {
            let caps = ufixed_regex()
                .captures(s)
                .ok_or_else(|| syntax_err(s, "malformed ufixed"))?;
            let bit_size = parse_num::<u16>(s, &caps["size"])?;
            let precision = parse_num::<u8>(s, &caps["precision"])?;
            return Ok(UfixedType::new(bit_size, precision)?.into());
        }

        if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
            let child_types = parse_tuple(&s[1..s.len() - 1])?
                .into_iter()
                .map(Self::from_str)
                .collect::<Result<Vec<_>>>()?;
            return Ok(TupleType::new(child_types)?.into());
        }

        match s {
            "byte" => Ok(ByteType.into()),
            "bool" => Ok(BoolType.into()),
            "address" => Ok(AddressType.into()),
            "string" => Ok(StringType.into()),
            _ => Err(syntax_err(s, "cannot convert to an ABI type")),
        }
    }
}
