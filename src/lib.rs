pub mod artifact;
pub mod deploy;
pub mod error;
pub mod signer;
