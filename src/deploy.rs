use std::path::PathBuf;
use std::str::FromStr;

use alloy_network::ReceiptResponse;
use alloy_primitives::Address;
use alloy_provider::network::{Ethereum, EthereumWallet};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolValue;
use alloy_transport::Transport;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::artifact::ContractFactory;
use crate::error::DeploymentError;

/// Default Anvil private key, used for local deployments only.
pub const DEFAULT_ANVIL_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum NetworkTarget {
    Local,
    Testnet,
    Mainnet,
}

#[derive(Debug, Clone)]
pub struct DeployOpts {
    /// The target network for deployment
    pub network: NetworkTarget,
    /// The RPC URL to connect to
    pub rpc_url: String,
    /// Address of the ERC20 contract paid out as staking rewards
    pub token_address: Address,
    /// Address of the ERC721/ERC1155 contract whose tokens can be staked
    pub nft_address: Address,
    /// Directory holding the compiled contract artifacts
    pub artifacts_dir: PathBuf,
    /// Name of the staking contract artifact
    pub contract_name: String,
}

impl DeployOpts {
    fn get_signer(&self) -> Result<PrivateKeySigner> {
        match self.network {
            NetworkTarget::Local => Ok(PrivateKeySigner::from_str(DEFAULT_ANVIL_KEY)
                .expect("the default Anvil key is valid")),
            _ => crate::signer::load_evm_signer_from_env(),
        }
    }
}

/// Resolves the contract factory, connects to the network, and deploys the
/// staking contract. Returns the deployed contract address.
pub async fn run(opts: DeployOpts) -> Result<Address> {
    // Resolve the artifact before touching the network, so a missing or
    // malformed artifact never costs an RPC round trip.
    let factory = ContractFactory::load(&opts.artifacts_dir, &opts.contract_name)?;

    let signer = opts.get_signer()?;
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(opts.rpc_url.parse()?);

    let chain_id = provider.get_chain_id().await?;
    info!("Connected to {} (chain id: {chain_id})", opts.rpc_url);

    let address =
        deploy_staking_contract(&provider, &factory, opts.token_address, opts.nft_address).await?;
    Ok(address)
}

/// Deploys the staking contract through the given provider, suspending until
/// the creation transaction is confirmed.
///
/// The constructor argument order is fixed: the reward-token address first,
/// the stakeable-NFT address second.
pub async fn deploy_staking_contract<T, P>(
    provider: &P,
    factory: &ContractFactory,
    token_address: Address,
    nft_address: Address,
) -> Result<Address, DeploymentError>
where
    T: Transport + Clone,
    P: Provider<T, Ethereum>,
{
    let constructor_args = (token_address, nft_address).abi_encode_params();
    let tx = factory.deploy_request(&constructor_args)?;

    info!("Deploying contract: {} ...", factory.name());
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;

    if !receipt.status() {
        return Err(DeploymentError::Reverted {
            transaction_hash: receipt.transaction_hash,
        });
    }

    let contract_address = ReceiptResponse::contract_address(&receipt).ok_or(
        DeploymentError::NoContractAddress {
            transaction_hash: receipt.transaction_hash,
        },
    )?;
    info!("Contract {} deployed at: {contract_address}", factory.name());

    Ok(contract_address)
}
