use abi_address::PublicKey;
use abi_types::types::AddressType;
use abi_types::{AbiCodec, AbiError, AbiType, AbiValue};
use anyhow::Result;
use rand::Rng;
use std::str::FromStr;

pub fn addresses_in_tuple() -> Result<()> {
    let mut rng = rand::thread_rng();
    let tup = AbiType::from_str("(address,string,address[2])")?;

    for _ in 0..16 {
        let pks: [PublicKey; 3] = rng.gen();
        let addrs = pks.map(|pk| abi_address::encode_address(&pk));

        /* Display strings and raw keys are interchangeable on the way in. */
        let by_str = AbiValue::Array(vec![
            AbiValue::Str(addrs[0].clone()),
            "memo".into(),
            AbiValue::Array(vec![
                AbiValue::Str(addrs[1].clone()),
                AbiValue::Str(addrs[2].clone()),
            ]),
        ]);
        let by_key = AbiValue::Array(vec![
            AbiValue::Bytes(pks[0].to_vec()),
            "memo".into(),
            AbiValue::Array(vec![
                AbiValue::Bytes(pks[1].to_vec()),
                AbiValue::Bytes(pks[2].to_vec()),
            ]),
        ]);

        let encoded = tup.encode(&by_str)?;
        assert_eq!(encoded, tup.encode(&by_key)?);
        assert_eq!(&pks[0][..], &encoded[..32]);

        /* Always decodes to display strings. */
        assert_eq!(by_str, tup.decode(&encoded)?);
    }

    Ok(())
}

pub fn address_rejections() -> Result<()> {
    let pk = [3u8; 32];
    assert_eq!(pk.to_vec(), AddressType.encode(&AbiValue::Bytes(pk.to_vec()))?);

    let res = AddressType.encode(&AbiValue::Bytes(vec![3u8; 31]));
    assert!(matches!(res, Err(AbiError::Encoding(_))));

    let mut addr = abi_address::encode_address(&pk);
    let last = addr.pop().unwrap();
    addr.push(if last == 'A' { 'B' } else { 'A' });
    let res = AddressType.encode(&AbiValue::Str(addr));
    assert!(matches!(res, Err(AbiError::Encoding(_))));

    let res = AddressType.decode(&[3u8; 33]);
    assert!(matches!(res, Err(AbiError::Decoding(_))));

    Ok(())
}
