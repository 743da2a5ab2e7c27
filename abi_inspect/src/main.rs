use abi_types::{AbiCodec, AbiType};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const ENV_VAR_LOG_FILTER: &str = "ABI_INSPECT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

const USAGE: &str = "Usage: abi_inspect <type-string> [hex-bytes]";

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_VAR_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = env::args().skip(1);
    let type_str = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let hex_str = args.next();
    if args.next().is_some() {
        return Err(anyhow!(USAGE));
    }

    let abi_type = AbiType::from_str(&type_str)
        .with_context(|| format!("Failed to parse type string {type_str:?}"))?;
    debug!("Parsed {type_str:?} as {abi_type:?}");

    println!("type:   {abi_type}");
    if abi_type.is_dynamic() {
        println!("length: dynamic");
    } else {
        println!("length: {} bytes", abi_type.byte_len()?);
    }

    if let Some(hex_str) = hex_str {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(&hex_str);
        let bytes = hex::decode(hex_str).context("Failed to parse hex bytes")?;

        let value = abi_type
            .decode(&bytes)
            .with_context(|| format!("Failed to decode {} bytes as {abi_type}", bytes.len()))?;
        println!("value:  {value}");

        let reencoded = abi_type.encode(&value)?;
        if reencoded != bytes {
            warn!(
                "Input is not in canonical form. Canonical: 0x{}",
                hex::encode(&reencoded)
            );
        }
    }

    Ok(())
}
