use std::path::Path;

use alloy_json_abi::ContractObject;
use alloy_primitives::Bytes;
use alloy_provider::network::TransactionBuilder;
use alloy_rpc_types::TransactionRequest;

use crate::error::DeploymentError;

/// A deployable contract, resolved by name from a directory of compiled
/// artifacts.
///
/// Both the `forge` output layout (`<dir>/<Name>.sol/<Name>.json`) and a flat
/// `<dir>/<Name>.json` are accepted. The artifact must carry the creation
/// bytecode; the ABI alone is not enough to deploy.
pub struct ContractFactory {
    name: String,
    contract: ContractObject,
}

impl ContractFactory {
    /// Resolves the artifact for `name` under `artifacts_dir`.
    ///
    /// This is a purely local operation; no network access happens until the
    /// returned factory's transaction is actually sent.
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, DeploymentError> {
        let candidates = [
            artifacts_dir
                .join(format!("{name}.sol"))
                .join(format!("{name}.json")),
            artifacts_dir.join(format!("{name}.json")),
        ];
        let Some(path) = candidates.iter().find(|path| path.exists()) else {
            return Err(DeploymentError::ArtifactNotFound(
                name.to_string(),
                artifacts_dir.to_path_buf(),
            ));
        };

        let json = std::fs::read_to_string(path)?;
        let contract = serde_json::from_str::<ContractObject>(&json)?;
        Ok(Self {
            name: name.to_string(),
            contract,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The creation bytecode from the artifact, if present.
    pub fn bytecode(&self) -> Option<&Bytes> {
        self.contract.bytecode.as_ref()
    }

    /// Builds the contract-creation transaction: creation bytecode with the
    /// ABI-encoded constructor arguments appended.
    pub fn deploy_request(
        &self,
        constructor_args: &[u8],
    ) -> Result<TransactionRequest, DeploymentError> {
        let Some(bytecode) = self.contract.bytecode.clone() else {
            return Err(DeploymentError::MissingBytecode(self.name.clone()));
        };
        let mut code = bytecode.to_vec();
        code.extend_from_slice(constructor_args);
        Ok(TransactionRequest::default().with_deploy_code(Bytes::from(code)))
    }
}
