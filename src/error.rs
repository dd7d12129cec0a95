use std::path::PathBuf;

use alloy_primitives::B256;

/// Everything that can go wrong between "resolve the contract artifact" and
/// "the creation transaction is confirmed on chain".
#[derive(thiserror::Error, Debug)]
pub enum DeploymentError {
    #[error("no contract artifact named `{0}` under {1}")]
    ArtifactNotFound(String, PathBuf),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse contract artifact: {0}")]
    InvalidArtifact(#[from] serde_json::Error),
    #[error("artifact for `{0}` has no creation bytecode")]
    MissingBytecode(String),
    #[error("{0}")]
    Rpc(#[from] alloy_transport::TransportError),
    #[error("failed to confirm the deployment transaction: {0}")]
    Confirmation(#[from] alloy_provider::PendingTransactionError),
    #[error("deployment transaction {transaction_hash} reverted")]
    Reverted { transaction_hash: B256 },
    #[error("deployment transaction {transaction_hash} was confirmed without a contract address")]
    NoContractAddress { transaction_hash: B256 },
}
