use std::path::Path;

use cardano_serialization_lib::address::Address;
use serde_json::Value as JsonValue;

use crate::artifact::read_artifact;
use crate::error::{ResolveError, Result};
use crate::network::{Network, NetworkTag};

/// A counterparty address artifact resolved from disk: the bech32 text as
/// found in the file plus its decoded form.
#[derive(Debug)]
pub struct CounterpartyAddress {
    pub bech32: String,
    pub address: Address,
}

/// Resolves an address artifact that is stored either as a bare bech32
/// string or as a JSON object with an `address` field.
///
/// JSON parsing is attempted first; if the file is not JSON at all, the
/// trimmed file content is taken as the bech32 string directly.
pub fn resolve_address_file(path: &Path, network: Network) -> Result<CounterpartyAddress> {
    let content = read_artifact(path)?;

    let bech32 = match serde_json::from_str::<JsonValue>(&content) {
        Ok(value) => value
            .get("address")
            .and_then(JsonValue::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                ResolveError::malformed(path, "JSON address artifact has no `address` field")
            })?,
        Err(_) => content.trim().to_owned(),
    };

    resolve_address_str(path, &bech32, network)
}

/// Decodes the bech32 string and checks its embedded network tag against the
/// active network. A mismatch is a hard failure: an address for the wrong
/// network means the artifact set is inconsistent.
pub fn resolve_address_str(
    path: &Path,
    bech32: &str,
    network: Network,
) -> Result<CounterpartyAddress> {
    let address = Address::from_bech32(bech32)
        .map_err(|err| ResolveError::malformed(path, format!("not a bech32 address: {}", err)))?;

    let found_id = address
        .network_id()
        .map_err(|err| ResolveError::malformed(path, format!("address has no network id: {}", err)))?;

    if found_id != network.network_id() {
        let found = if found_id == 1 {
            NetworkTag::Mainnet
        } else {
            NetworkTag::Testnet
        };
        return Err(ResolveError::NetworkMismatch {
            path: path.to_path_buf(),
            expected: network.tag(),
            found,
        });
    }

    Ok(CounterpartyAddress {
        bech32: bech32.to_owned(),
        address,
    })
}
