use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{ResolveError, Result};
use crate::network::Network;

/// The subset of protocol parameters this utility cares about: the values
/// that affect address/output encoding, not fee calculation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProtocolParams {
    #[serde(default)]
    pub min_fee_a: u64,
    #[serde(default)]
    pub min_fee_b: u64,
    #[serde(default)]
    pub max_tx_size: u64,
    #[serde(default)]
    pub key_deposit: String,
    #[serde(default)]
    pub coins_per_utxo_size: Option<String>,
}

/// Read-only handle to a chain indexing service. The resolution core only
/// ever reads the active network and its parameters from it; anything that
/// submits or mutates lives elsewhere.
pub trait ChainContext {
    fn network(&self) -> Network;
    fn protocol_params(&self) -> &ProtocolParams;
}

/// Chain context backed by the Blockfrost HTTP API.
pub struct BlockfrostContext {
    network: Network,
    params: ProtocolParams,
}

impl BlockfrostContext {
    /// One-shot construction: probes the endpoint for the latest protocol
    /// parameters. Failures are surfaced, never retried here.
    pub async fn open(network: Network, project_id: &str) -> Result<BlockfrostContext> {
        let url = Url::parse(network.blockfrost_base_url())
            .and_then(|base| base.join("epochs/latest/parameters"))
            .map_err(|err| ResolveError::ServiceUnavailable {
                reason: format!("invalid endpoint url: {}", err),
            })?;
        debug!(%network, %url, "fetching protocol parameters");

        let response = reqwest::Client::new()
            .get(url.clone())
            .header("project_id", project_id)
            .send()
            .await
            .map_err(|err| ResolveError::ServiceUnavailable {
                reason: err.to_string(),
            })?;

        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::PAYMENT_REQUIRED => {
                return Err(ResolveError::AuthRejected)
            }
            status if !status.is_success() => {
                return Err(ResolveError::ServiceUnavailable {
                    reason: format!("{} returned {}", url, status),
                })
            }
            _ => {}
        }

        let params: ProtocolParams =
            response
                .json()
                .await
                .map_err(|err| ResolveError::ServiceUnavailable {
                    reason: format!("unreadable protocol parameters: {}", err),
                })?;

        debug!(?params, "protocol parameters fetched");
        Ok(BlockfrostContext { network, params })
    }
}

impl ChainContext for BlockfrostContext {
    fn network(&self) -> Network {
        self.network
    }

    fn protocol_params(&self) -> &ProtocolParams {
        &self.params
    }
}

/// Fixed-parameter context for offline runs and tests.
pub struct StaticContext {
    network: Network,
    params: ProtocolParams,
}

impl StaticContext {
    pub fn new(network: Network, params: ProtocolParams) -> StaticContext {
        StaticContext { network, params }
    }
}

impl ChainContext for StaticContext {
    fn network(&self) -> Network {
        self.network
    }

    fn protocol_params(&self) -> &ProtocolParams {
        &self.params
    }
}
