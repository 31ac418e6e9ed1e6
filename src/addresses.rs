use cardano_serialization_lib::address::{Address, EnterpriseAddress, StakeCredential};
use cardano_serialization_lib::crypto::ScriptHash;
use cardano_serialization_lib::plutus::PlutusScript;

use crate::network::Network;
use crate::script::{PlutusVersion, ScriptArtifact};

/// Hashes the script under its inferred Plutus version.
///
/// The language version is part of the hash domain: the same bytes tagged V1
/// and V2 are two different scripts on-chain, so the version must be decided
/// before hashing, never after.
pub fn script_hash(artifact: &ScriptArtifact) -> ScriptHash {
    let plutus_script = match artifact.version {
        PlutusVersion::V1 => PlutusScript::new(artifact.bytes.clone()),
        PlutusVersion::V2 => PlutusScript::new_v2(artifact.bytes.clone()),
    };
    plutus_script.hash()
}

/// Enterprise address holding funds controlled by the script, for the given
/// network. Pure encoding; cannot fail for a well-formed hash.
pub fn script_address(hash: &ScriptHash, network: Network) -> Address {
    EnterpriseAddress::new(
        network.network_id(),
        &StakeCredential::from_scripthash(hash),
    )
    .to_address()
}
