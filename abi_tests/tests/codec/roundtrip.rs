use abi_types::types::TupleType;
use abi_types::{AbiCodec, AbiType, AbiValue};
use anyhow::Result;
use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::One;
use rand::seq::SliceRandom;
use std::str::FromStr;

type Member = (AbiType, AbiValue);

fn typ(s: &str) -> AbiType {
    AbiType::from_str(s).unwrap()
}

fn gen_uint64() -> Member {
    let max = (BigUint::one() << 64u32) - BigUint::one();
    (typ("uint64"), AbiValue::Uint(max))
}
fn gen_ufixed() -> Member {
    (typ("ufixed32x3"), AbiValue::from(12_345u64))
}
fn gen_bool() -> Member {
    (typ("bool"), AbiValue::Bool(true))
}
fn gen_bools() -> Member {
    (
        typ("bool[10]"),
        AbiValue::Array((0..10).map(|i| AbiValue::Bool(i % 3 == 0)).collect()),
    )
}
fn gen_string() -> Member {
    (typ("string"), AbiValue::from("asdf"))
}
fn gen_address() -> Member {
    let addr = abi_address::encode_address(&[7u8; 32]);
    (typ("address"), AbiValue::Str(addr))
}
fn gen_byte_slice() -> Member {
    (
        typ("byte[]"),
        AbiValue::Array(vec![AbiValue::Byte(1), AbiValue::Byte(2)]),
    )
}
fn gen_nested() -> Member {
    (
        typ("(string[],(bool,uint8))"),
        AbiValue::Array(vec![
            AbiValue::Array(vec!["zxcv".into(), "".into()]),
            AbiValue::Array(vec![false.into(), 9u64.into()]),
        ]),
    )
}

fn verify(members: &[Member]) -> Result<()> {
    let (child_types, values): (Vec<_>, Vec<_>) = members.iter().cloned().unzip();
    let tup = TupleType::new(child_types)?;
    let val = AbiValue::Array(values);

    let encoded = tup.encode(&val)?;
    if !tup.is_dynamic() {
        assert_eq!(tup.byte_len()?, encoded.len(), "\n{tup}\n{encoded:?}\n");
    }

    let decoded = tup.decode(&encoded)?;
    assert_eq!(val, decoded, "\n{tup}\n{encoded:?}\n");

    let reencoded = tup.encode(&decoded)?;
    assert_eq!(encoded, reencoded, "\n{tup}\n{decoded:?}\n");

    Ok(())
}

pub fn tuples_of_every_member_combination() -> Result<()> {
    let mut rand_rng = rand::thread_rng();

    let gen_fns = [
        gen_uint64,
        gen_ufixed,
        gen_bool,
        gen_bools,
        gen_string,
        gen_address,
        gen_byte_slice,
        gen_nested,
    ];

    for mut gen_fns in gen_fns.iter().powerset() {
        let members = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&members)?;

        gen_fns.shuffle(&mut rand_rng);
        let members = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&members)?;
    }

    Ok(())
}

pub fn type_strings() -> Result<()> {
    let t = AbiType::from_str("(uint16,byte[],uint16)")?;
    let val = AbiValue::Array(vec![
        1u64.into(),
        AbiValue::Array(vec![1u8.into(), 2u8.into(), 3u8.into()]),
        2u64.into(),
    ]);
    let encoded = t.encode(&val)?;
    assert_eq!(vec![0, 1, 0, 6, 0, 2, 0, 3, 1, 2, 3], encoded);
    assert_eq!(val, t.decode(&encoded)?);

    /* A buffer is accepted for byte arrays, and decodes to a list of bytes. */
    let buf_encoded = t.encode(&AbiValue::Array(vec![
        1u64.into(),
        AbiValue::Bytes(vec![1, 2, 3]),
        2u64.into(),
    ]))?;
    assert_eq!(encoded, buf_encoded);

    Ok(())
}
