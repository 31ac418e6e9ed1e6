use std::io::Cursor;
use std::path::Path;

use cardano_serialization_lib::address::{Address, EnterpriseAddress, StakeCredential};
use cardano_serialization_lib::crypto::{PrivateKey, PublicKey};
use data_encoding::HEXLOWER_PERMISSIVE;
use serde::Deserialize;

use crate::artifact::read_artifact;
use crate::error::{ResolveError, Result};
use crate::network::Network;

/// Cardano key files are TextEnvelope JSON: a `type` tag, a free-form
/// description and a hex-encoded CBOR byte string holding the key material.
#[derive(Deserialize)]
struct TextEnvelope {
    #[serde(rename(deserialize = "type"))]
    _data_type: String,
    #[serde(default, rename(deserialize = "description"))]
    _description: String,
    #[serde(rename(deserialize = "cborHex"))]
    cbor_hex: String,
}

/// A payment signing key and its paired verification key, loaded once from
/// disk and never written back.
pub struct KeyPair {
    signing_key: PrivateKey,
    verification_key: PublicKey,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // PrivateKey has no Debug impl, and the secret bytes must not be
        // printed anyway.
        f.debug_struct("KeyPair").finish_non_exhaustive()
    }
}

impl KeyPair {
    /// Loads both halves of the key pair and checks that the verification
    /// key file actually belongs to the signing key.
    pub fn load(skey_path: &Path, vkey_path: &Path) -> Result<KeyPair> {
        let signing_key = load_signing_key(skey_path)?;
        let verification_key = load_verification_key(vkey_path)?;

        if signing_key.to_public().as_bytes() != verification_key.as_bytes() {
            return Err(ResolveError::malformed(
                vkey_path,
                "verification key does not match the signing key",
            ));
        }

        Ok(KeyPair {
            signing_key,
            verification_key,
        })
    }

    pub fn verification_key(&self) -> &PublicKey {
        &self.verification_key
    }

    pub fn signing_key(&self) -> &PrivateKey {
        &self.signing_key
    }

    /// Enterprise address owned by this key pair on the given network.
    pub fn derive_address(&self, network: Network) -> Address {
        EnterpriseAddress::new(
            network.network_id(),
            &StakeCredential::from_keyhash(&self.verification_key.hash()),
        )
        .to_address()
    }
}

fn load_signing_key(path: &Path) -> Result<PrivateKey> {
    let bytes = envelope_payload(path)?;
    match bytes.len() {
        32 => PrivateKey::from_normal_bytes(&bytes)
            .map_err(|err| ResolveError::malformed(path, format!("invalid signing key: {}", err))),
        64 => PrivateKey::from_extended_bytes(&bytes)
            .map_err(|err| ResolveError::malformed(path, format!("invalid signing key: {}", err))),
        n => Err(ResolveError::malformed(
            path,
            format!("unexpected signing key length: {} bytes", n),
        )),
    }
}

fn load_verification_key(path: &Path) -> Result<PublicKey> {
    let bytes = envelope_payload(path)?;
    PublicKey::from_bytes(&bytes)
        .map_err(|err| ResolveError::malformed(path, format!("invalid verification key: {}", err)))
}

/// Unwraps the TextEnvelope down to the raw key bytes: JSON envelope, then
/// hex, then the CBOR byte-string wrapper.
fn envelope_payload(path: &Path) -> Result<Vec<u8>> {
    let content = read_artifact(path)?;

    let envelope: TextEnvelope = serde_json::from_str(&content)
        .map_err(|err| ResolveError::malformed(path, format!("not a TextEnvelope: {}", err)))?;

    let cbor = HEXLOWER_PERMISSIVE
        .decode(envelope.cbor_hex.trim().as_bytes())
        .map_err(|err| ResolveError::malformed(path, format!("cborHex is not hex: {}", err)))?;

    let mut raw = cbor_event::de::Deserializer::from(Cursor::new(cbor));
    raw.bytes()
        .map_err(|err| ResolveError::malformed(path, format!("cborHex is not CBOR bytes: {}", err)))
}
