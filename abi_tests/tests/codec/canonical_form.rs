use abi_types::{AbiCodec, AbiError, AbiType};
use anyhow::Result;
use rand::Rng;
use std::str::FromStr;

/// Well-formed encodings decode and re-encode to themselves.
pub fn reencode_decoded_bytes() -> Result<()> {
    #[rustfmt::skip]
    let cases: [(&str, Vec<u8>); 6] = [
        ("(uint16,byte[],uint16)", vec![0, 1, 0, 6, 0, 2, 0, 3, 1, 2, 3]),
        ("(bool,bool,bool,bool,bool,bool,bool,bool,bool)", vec![0b1010_1010, 0b1000_0000]),
        ("(string,bool,string)", vec![0, 5, 0x80, 0, 7, 0, 0, 0, 1, b'q']),
        ("uint8[]", vec![0, 3, 9, 8, 7]),
        ("(bool[3],ufixed16x1)", vec![0b0110_0000, 0x12, 0x34]),
        ("((uint8,string),bool)", vec![0, 3, 0x80, 5, 0, 3, 0, 1, b'x']),
    ];

    for (type_str, bytes) in cases {
        let t = AbiType::from_str(type_str)?;
        let val = t.decode(&bytes)?;
        assert_eq!(bytes, t.encode(&val)?, "\n{type_str}\n{val:?}\n");
    }

    Ok(())
}

/// Static types reject input one byte short or one byte long.
pub fn reject_off_by_one_lengths() -> Result<()> {
    let mut rng = rand::thread_rng();

    for type_str in [
        "(uint64,bool)",
        "(bool,bool,bool,bool,bool,bool,bool,bool,bool)",
        "(address,byte[4],ufixed64x2)",
        "((uint8,uint16),bool[9])",
        "uint32[3]",
    ] {
        let t = AbiType::from_str(type_str)?;
        assert!(!t.is_dynamic());
        let len = t.byte_len()?;

        /* Any bytes of the exact length decode, save bit padding in bool bytes. */
        let bytes = (0..len).map(|_| rng.gen::<u8>()).collect::<Vec<_>>();
        let masked = t.encode(&t.decode(&bytes)?)?;
        assert_eq!(len, masked.len());

        let res = t.decode(&masked[..len - 1]);
        assert!(matches!(res, Err(AbiError::Decoding(_))), "{type_str}");

        let mut long = masked.clone();
        long.push(0);
        let res = t.decode(&long);
        assert!(matches!(res, Err(AbiError::Decoding(_))), "{type_str}");
    }

    Ok(())
}
