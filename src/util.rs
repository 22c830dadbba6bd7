use crate::{
    config::{IapEnvironment, ValidatorConfig},
    data::{
        datasources::amazon_rvs_datasource::AmazonRvsDatasourceImpl,
        repositories::receipt_validator_impl::ReceiptValidatorImpl,
    },
    domain::{
        entities::verification_result::VerificationResult,
        repositories::receipt_validator::ReceiptValidator,
    },
    errors::IapError,
};

/// Amazon Appstore receipt validator.
///
/// Holds no mutable state; build once and share (it is cheap to clone, and
/// clones reuse the same connection pool).
#[derive(Debug, Clone)]
pub struct AmazonIapUtil<R: ReceiptValidator> {
    receipt_validator: R,
}

impl<R: ReceiptValidator> AmazonIapUtil<R> {
    pub async fn verify(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, IapError> {
        self.receipt_validator.verify(user_id, receipt_id).await
    }
}

impl AmazonIapUtil<ReceiptValidatorImpl<AmazonRvsDatasourceImpl>> {
    /// Client with the default 5 second timeout, pointed at the sandbox
    /// unless `environment` is `Production`. Use `IapEnvironment::from_env()`
    /// at startup to honour `IAP_ENVIRONMENT`.
    pub fn new_default(
        secret: impl Into<String>,
        environment: IapEnvironment,
    ) -> Result<Self, IapError> {
        Self::new_with_config((secret.into(), environment).into())
    }

    pub fn new_with_config(config: ValidatorConfig) -> Result<Self, IapError> {
        Ok(Self {
            receipt_validator: ReceiptValidatorImpl::new(config)?,
        })
    }

    /// The RVS endpoint this client sends requests to.
    pub fn base_url(&self) -> &str {
        self.receipt_validator.base_url()
    }
}
