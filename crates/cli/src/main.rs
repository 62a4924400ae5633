pub(crate) mod error;
pub(crate) mod log_args;

use error::Error;
use log_args::LogArgs;

use clap::{Parser, Subcommand};

use slotmint_cache::{cache, store_cache, CacheArgs};
use slotmint_common::{ether::rpc::is_dev_node, utils::hex::ToLowerHex};
use slotmint_config::{config, ConfigArgs, Configuration};
use slotmint_core::{
    slotmint_funder::{fund, FundArgs},
    slotmint_minter::{mint, MintArgs},
};
use tracing::warn;

#[derive(Debug, Parser)]
#[clap(name = "slotmint", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "Slotmint forges ERC20 balances on development chains by discovering and writing balance storage slots."
)]
#[allow(clippy::large_enum_variant)]
pub enum Subcommands {
    #[clap(
        name = "mint",
        about = "Forge an ERC20 balance by writing the token's balance storage slot directly"
    )]
    Mint(MintArgs),

    #[clap(name = "fund", about = "Set the native balance of test accounts")]
    Fund(FundArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),

    #[clap(name = "cache", about = "Manage slotmint's cached files")]
    Cache(CacheArgs),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _ = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Mint(mut cmd) => {
            // privileged operations default to the local development node
            if cmd.rpc_url.as_str() == "" {
                cmd.rpc_url = configuration.local_rpc_url;
            }

            if !is_dev_node(&cmd.rpc_url).await {
                warn!(
                    "'{}' does not look like a development node. privileged calls may be rejected.",
                    &cmd.rpc_url
                );
            }

            let result = mint(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to mint: {}", e)))?;

            // persist the discovered slot record. the mint core itself only
            // ever reads the cache; persistence is the caller's job.
            if !cmd.no_cache {
                let key = format!("slot.{}", result.token.to_lower_hex());
                if let Err(e) = store_cache(&key, result.slot, None) {
                    warn!("failed to persist slot record: {}", e);
                }
            }

            result.display()
        }

        Subcommands::Fund(mut cmd) => {
            // privileged operations default to the local development node
            if cmd.rpc_url.as_str() == "" {
                cmd.rpc_url = configuration.local_rpc_url;
            }

            if !is_dev_node(&cmd.rpc_url).await {
                warn!(
                    "'{}' does not look like a development node. privileged calls may be rejected.",
                    &cmd.rpc_url
                );
            }

            let result = fund(cmd)
                .await
                .map_err(|e| Error::Generic(format!("failed to fund accounts: {}", e)))?;

            result.display()
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }

        Subcommands::Cache(cmd) => {
            cache(cmd).map_err(|e| Error::Generic(format!("failed to manage cache: {}", e)))?;
        }
    };

    Ok(())
}
