use std::str::FromStr;

use alloy_signer_local::PrivateKeySigner;
use bip39::Mnemonic;
use color_eyre::{eyre::Context, Result, Section};

pub const EVM_SIGNER_ENV: &str = "EVM_SIGNER";

const SIGNER_HELP_MSG: &str = r#"
The signer is either:
- a `0x`-prefixed 64-digit hex string, treated as a raw secp256k1 private key, or
- a valid BIP-39 mnemonic phrase, whose entropy is used as the private key.
"#;

/// Loads the EVM signer from the environment.
pub fn load_evm_signer_from_env() -> Result<PrivateKeySigner> {
    let secret = std::env::var(EVM_SIGNER_ENV)
        .with_suggestion(|| {
            format!(
                "Please set the EVM signer in the environment using the `{EVM_SIGNER_ENV}` variable.",
            )
        })
        .note(SIGNER_HELP_MSG)?;
    parse_signer(&secret)
}

/// Parses a hex private key or BIP-39 mnemonic phrase into a signer.
pub fn parse_signer(secret: &str) -> Result<PrivateKeySigner> {
    let key = if let Some(hex_str) = secret.strip_prefix("0x") {
        PrivateKeySigner::from_str(hex_str)
            .context("Parsing the hex string into a PrivateKeySigner")?
    } else {
        let phrase = Mnemonic::from_str(secret)
            .context("Parsing the mnemonic phrase")
            .note(SIGNER_HELP_MSG)?;
        let secret_bytes = phrase.to_entropy();
        PrivateKeySigner::from_slice(secret_bytes.as_slice())
            .context("Creating a PrivateKeySigner from the mnemonic phrase")?
    };

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_evm_signer_from_env() -> color_eyre::Result<()> {
        color_eyre::install().unwrap_or(());
        let s = [1u8; 32];
        let secret = Mnemonic::from_entropy(&s[..])?.to_string();
        // Test with a valid mnemonic phrase
        env::set_var(EVM_SIGNER_ENV, secret);
        load_evm_signer_from_env()?;

        // Test with a valid hex string
        env::set_var(
            EVM_SIGNER_ENV,
            "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
        );
        load_evm_signer_from_env()?;

        // Test with an invalid mnemonic phrase
        env::set_var(EVM_SIGNER_ENV, "invalid mnemonic phrase");
        assert!(load_evm_signer_from_env().is_err());

        // Test with an invalid hex string
        env::set_var(EVM_SIGNER_ENV, "0xinvalidhexstring");
        assert!(load_evm_signer_from_env().is_err());

        // Test when the EVM_SIGNER environment variable is not set
        env::remove_var(EVM_SIGNER_ENV);
        assert!(load_evm_signer_from_env().is_err());

        Ok(())
    }
}
