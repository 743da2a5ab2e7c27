use abi_types::types::{BoolType, TupleType, UintType};
use abi_types::{AbiCodec, AbiType, AbiValue};
use anyhow::Result;
use rand::Rng;

fn pack_msb_first(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, bit)| byte | (u8::from(*bit) << (7 - i)))
        })
        .collect()
}

pub fn random_bool_runs() -> Result<()> {
    let mut rng = rand::thread_rng();

    for run_len in 0..=40 {
        let tup = TupleType::new(vec![BoolType.into(); run_len])?;
        assert_eq!((run_len + 7) / 8, tup.byte_len()?);

        for _ in 0..8 {
            let bits = (0..run_len).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
            let val = AbiValue::Array(bits.iter().map(|b| AbiValue::Bool(*b)).collect());

            let encoded = tup.encode(&val)?;
            assert_eq!(pack_msb_first(&bits), encoded, "\n{bits:?}\n");
            assert_eq!(val, tup.decode(&encoded)?);
        }
    }

    Ok(())
}

/// `(bool*a, uint8, bool*b)`: each run packs on its own.
pub fn bool_runs_between_other_members() -> Result<()> {
    let mut rng = rand::thread_rng();

    for (run_a, run_b) in [(1, 1), (7, 9), (8, 8), (16, 3), (0, 17)] {
        let mut child_types: Vec<AbiType> = vec![BoolType.into(); run_a];
        child_types.push(UintType::new(8)?.into());
        child_types.extend(vec![AbiType::from(BoolType); run_b]);
        let tup = TupleType::new(child_types)?;

        let bits_a = (0..run_a).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
        let bits_b = (0..run_b).map(|_| rng.gen::<bool>()).collect::<Vec<_>>();
        let mut values = bits_a.iter().map(|b| AbiValue::Bool(*b)).collect::<Vec<_>>();
        values.push(AbiValue::from(0xabu64));
        values.extend(bits_b.iter().map(|b| AbiValue::Bool(*b)));
        let val = AbiValue::Array(values);

        let mut exp = pack_msb_first(&bits_a);
        exp.push(0xab);
        exp.extend(pack_msb_first(&bits_b));

        let encoded = tup.encode(&val)?;
        assert_eq!(exp, encoded, "\n{tup}\n{val:?}\n");
        assert_eq!(exp.len(), tup.byte_len()?);
        assert_eq!(val, tup.decode(&encoded)?);
    }

    Ok(())
}
