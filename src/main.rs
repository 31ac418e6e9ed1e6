use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use escrow_resolve::chain::{BlockfrostContext, ChainContext, ProtocolParams, StaticContext};
use escrow_resolve::network::Network;
use escrow_resolve::report::Report;

/// Resolve local escrow artifacts (keys, counterparty address, contract
/// script) into addressable on-chain identifiers without submitting
/// anything.
#[derive(Debug, Clone, Parser)]
#[command(name = "escrow-resolve")]
struct Opts {
    /// Network to use (preview | preprod | mainnet)
    #[arg(
        long,
        env = "CARDANO_NETWORK",
        default_value = "preprod",
        value_parser = Network::from_str
    )]
    network: Network,

    /// Blockfrost project credential
    #[arg(long, env = "BLOCKFROST_PROJECT_ID")]
    project_id: Option<String>,

    /// Skip the Blockfrost probe and resolve against fixed parameters
    #[arg(long)]
    offline: bool,

    /// Payment signing key file (TextEnvelope JSON)
    #[arg(long)]
    signing_key_file: PathBuf,

    /// Payment verification key file (TextEnvelope JSON)
    #[arg(long)]
    verification_key_file: PathBuf,

    /// Seller address file (bare bech32 or JSON with an `address` field)
    #[arg(long)]
    seller_address_file: PathBuf,

    /// Contract script file (bare hex or JSON with a `cborHex` field)
    #[arg(long)]
    script_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    if opts.offline {
        let ctx = StaticContext::new(opts.network, ProtocolParams::default());
        run(&ctx, &opts)
    } else {
        let project_id = opts
            .project_id
            .as_deref()
            .ok_or_else(|| anyhow!("set BLOCKFROST_PROJECT_ID or pass --project-id (or use --offline)"))?;

        info!(network = %opts.network, "opening Blockfrost chain context");
        let ctx = BlockfrostContext::open(opts.network, project_id)
            .await
            .context("could not open the chain context")?;
        info!(
            max_tx_size = ctx.protocol_params().max_tx_size,
            key_deposit = %ctx.protocol_params().key_deposit,
            "chain context ready"
        );

        run(&ctx, &opts)
    }
}

fn run(ctx: &impl ChainContext, opts: &Opts) -> anyhow::Result<()> {
    let report = Report::resolve(
        ctx,
        &opts.signing_key_file,
        &opts.verification_key_file,
        &opts.seller_address_file,
        &opts.script_file,
    )?;

    println!("{}", report);
    Ok(())
}
