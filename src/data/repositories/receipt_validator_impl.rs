use async_trait::async_trait;

use crate::{
    config::ValidatorConfig,
    data::{
        datasources::amazon_rvs_datasource::{
            AmazonRvsDatasource, AmazonRvsDatasourceImpl, RvsResponse,
        },
        models::amazon_rvs::receipt_verification_response_model::ReceiptVerificationResponseModel,
    },
    domain::{
        entities::verification_result::VerificationResult,
        repositories::receipt_validator::ReceiptValidator,
    },
    errors::IapError,
};

#[derive(Debug, Clone)]
pub struct ReceiptValidatorImpl<D: AmazonRvsDatasource> {
    amazon_rvs_datasource: D,
}

#[async_trait]
impl<D: AmazonRvsDatasource> ReceiptValidator for ReceiptValidatorImpl<D> {
    async fn verify(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<VerificationResult, IapError> {
        let outcome = self
            .amazon_rvs_datasource
            .verify_receipt_id(user_id, receipt_id)
            .await;
        match outcome {
            Ok(RvsResponse::Verified(m)) => {
                tracing::debug!(user_id, receipt_id, product_id = %m.product_id, "receipt verified");
                Ok(m.into())
            }
            Ok(RvsResponse::Rejected { status, body }) => {
                tracing::debug!(user_id, receipt_id, status, message = %body.message, "receipt rejected");
                Err(IapError::Rejected {
                    status,
                    message: body.message,
                })
            }
            Err(e) => {
                tracing::debug!(user_id, receipt_id, error = %e, "receipt verification failed");
                Err(e)
            }
        }
    }
}

impl ReceiptValidatorImpl<AmazonRvsDatasourceImpl> {
    pub(crate) fn new(config: ValidatorConfig) -> Result<Self, IapError> {
        let settings = config.resolve();
        tracing::debug!(
            base_url = %settings.base_url,
            timeout = ?settings.timeout,
            "building Amazon RVS client"
        );
        Ok(Self {
            amazon_rvs_datasource: AmazonRvsDatasourceImpl::new(settings)?,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        self.amazon_rvs_datasource.base_url()
    }
}

impl From<ReceiptVerificationResponseModel> for VerificationResult {
    fn from(m: ReceiptVerificationResponseModel) -> Self {
        VerificationResult {
            receipt_id: m.receipt_id,
            product_type: m.product_type,
            product_id: m.product_id,
            purchase_date: m.purchase_date,
            cancel_date: m.cancel_date.unwrap_or(0),
            test_transaction: m.test_transaction,
        }
    }
}
