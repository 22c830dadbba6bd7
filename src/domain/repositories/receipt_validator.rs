use async_trait::async_trait;

use crate::{domain::entities::verification_result::VerificationResult, errors::IapError};

#[async_trait]
pub trait ReceiptValidator: Send + Sync {
    /// Verifies a single receipt with Amazon RVS.
    ///
    /// Exactly one network call is made, bounded by the client's timeout.
    /// Failures are returned as-is and never retried.
    async fn verify(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, IapError>;
}
