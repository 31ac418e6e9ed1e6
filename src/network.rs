use std::fmt;
use std::str::FromStr;

/// The chain environment the whole run is pinned to. Selected once at
/// startup; every address and hash derivation uses this single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet(TestnetVariant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestnetVariant {
    Preprod,
    Preview,
}

/// The network discriminant actually embedded in addresses. Preprod and
/// preview share the testnet tag, so an address alone cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkTag {
    Mainnet,
    Testnet,
}

impl Network {
    // Recall `1` is the mainnet and `0` is a testnet.
    pub fn network_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Testnet(_) => 0,
        }
    }

    pub fn tag(&self) -> NetworkTag {
        match self {
            Network::Mainnet => NetworkTag::Mainnet,
            Network::Testnet(_) => NetworkTag::Testnet,
        }
    }

    /// Base URL of the Blockfrost instance serving this network. Keeps the
    /// trailing slash so relative endpoint paths join underneath `/api/v0/`.
    pub fn blockfrost_base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://cardano-mainnet.blockfrost.io/api/v0/",
            Network::Testnet(TestnetVariant::Preprod) => {
                "https://cardano-preprod.blockfrost.io/api/v0/"
            }
            Network::Testnet(TestnetVariant::Preview) => {
                "https://cardano-preview.blockfrost.io/api/v0/"
            }
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet(TestnetVariant::Preprod) => write!(f, "preprod"),
            Network::Testnet(TestnetVariant::Preview) => write!(f, "preview"),
        }
    }
}

impl fmt::Display for NetworkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkTag::Mainnet => write!(f, "mainnet"),
            NetworkTag::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "preprod" => Ok(Network::Testnet(TestnetVariant::Preprod)),
            "preview" => Ok(Network::Testnet(TestnetVariant::Preview)),
            other => Err(format!(
                "unknown network '{}', use preview|preprod|mainnet",
                other
            )),
        }
    }
}
