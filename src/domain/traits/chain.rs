use async_trait::async_trait;

use crate::application::errors::AwakenError;
use crate::domain::entities::MintAddress;

/// Chain lookup trait - abstraction over the blockchain RPC node
#[async_trait]
pub trait ChainLookup: Send + Sync {
    /// Check whether an account exists on chain for the given address.
    ///
    /// Returns `Ok(false)` when the node answers but reports no account.
    /// Transport failures, timeouts and malformed responses surface as
    /// `AwakenError::RpcUnavailable`.
    async fn account_exists(&self, address: &MintAddress) -> Result<bool, AwakenError>;
}
