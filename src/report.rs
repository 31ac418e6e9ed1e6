use std::fmt;
use std::path::Path;

use data_encoding::HEXLOWER;
use tracing::info;

use crate::address::resolve_address_file;
use crate::addresses::{script_address, script_hash};
use crate::chain::ChainContext;
use crate::error::{ResolveError, Result};
use crate::keys::KeyPair;
use crate::script::ScriptArtifact;

/// Everything the utility resolves, in human-readable form.
pub struct Report {
    pub network: String,
    pub buyer_address: String,
    pub seller_address: String,
    pub script_hash: String,
    pub script_address: String,
}

impl Report {
    /// Resolves the four local artifacts against the context's network.
    /// Strictly sequential and read-only; any failure aborts the whole
    /// resolution rather than producing a partial report.
    pub fn resolve(
        ctx: &impl ChainContext,
        skey_path: &Path,
        vkey_path: &Path,
        seller_address_path: &Path,
        script_path: &Path,
    ) -> Result<Report> {
        let network = ctx.network();

        let keys = KeyPair::load(skey_path, vkey_path)?;
        let buyer_address = keys.derive_address(network);
        info!(path = %skey_path.display(), "buyer key pair loaded");

        let seller = resolve_address_file(seller_address_path, network)?;
        info!(path = %seller_address_path.display(), "seller address resolved");

        let artifact = ScriptArtifact::load(script_path)?;
        info!(
            path = %script_path.display(),
            version = ?artifact.version,
            bytes = artifact.bytes.len(),
            "script artifact parsed"
        );

        let hash = script_hash(&artifact);
        let contract_address = script_address(&hash, network);

        Ok(Report {
            network: network.to_string(),
            buyer_address: bech32_of(&buyer_address, skey_path)?,
            seller_address: seller.bech32,
            script_hash: HEXLOWER.encode(&hash.to_bytes()),
            script_address: bech32_of(&contract_address, script_path)?,
        })
    }
}

fn bech32_of(
    address: &cardano_serialization_lib::address::Address,
    artifact: &Path,
) -> Result<String> {
    address
        .to_bech32(None)
        .map_err(|err| ResolveError::malformed(artifact, format!("unencodable address: {}", err)))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "network:        {}", self.network)?;
        writeln!(f, "buyer address:  {}", self.buyer_address)?;
        writeln!(f, "seller address: {}", self.seller_address)?;
        writeln!(f, "script hash:    {}", self.script_hash)?;
        write!(f, "script address: {}", self.script_address)
    }
}
