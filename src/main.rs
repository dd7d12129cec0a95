use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use color_eyre::Result;
use stake_nft_deploy::deploy::{self, DeployOpts, NetworkTarget};

/// Deployment CLI for the StakeNFT staking contract
#[derive(Parser)]
#[clap(
    name = "stake-nft-deploy",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the StakeNFT contract and print its address
    Deploy {
        /// HTTP RPC endpoint of the target network
        #[arg(long, env = "STAKE_RPC_URL", default_value = "http://127.0.0.1:8545")]
        rpc_url: String,
        /// The target network for deployment
        #[arg(long, value_enum, default_value_t = NetworkTarget::Local)]
        network: NetworkTarget,
        /// Address of the ERC20 contract paid out as staking rewards
        #[arg(long, env = "ERC20_TOKEN_ADDRESS")]
        token_address: Address,
        /// Address of the ERC721/ERC1155 contract whose tokens can be staked
        #[arg(long, env = "NFT_TOKEN_ADDRESS")]
        nft_address: Address,
        /// Directory holding the compiled contract artifacts
        #[arg(long, default_value = "contracts/out")]
        artifacts_dir: PathBuf,
        /// Name of the staking contract artifact
        #[arg(long, default_value = "StakeNFT")]
        contract_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenv::dotenv();
    init_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Deploy {
            rpc_url,
            network,
            token_address,
            nft_address,
            artifacts_dir,
            contract_name,
        } => {
            let opts = DeployOpts {
                network,
                rpc_url,
                token_address,
                nft_address,
                artifacts_dir,
                contract_name,
            };
            let name = opts.contract_name.clone();
            let address = deploy::run(opts).await?;
            println!("{name} deployed to: {address}");
        }
    }
    Ok(())
}

fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}
