use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::{
    config::ResolvedSettings,
    data::models::amazon_rvs::{
        error_response_model::ErrorResponseModel,
        receipt_verification_response_model::ReceiptVerificationResponseModel,
    },
    errors::IapError,
};

/// Outcome of a callout that produced an HTTP response. Transport and decode
/// failures are reported through the `Err` arm instead.
#[derive(Debug)]
pub enum RvsResponse {
    Verified(ReceiptVerificationResponseModel),
    Rejected {
        status: u16,
        body: ErrorResponseModel,
    },
}

#[async_trait]
pub trait AmazonRvsDatasource: Send + Sync {
    /// Receipt Verification Service, verifyReceiptId (v1.0):
    /// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
    ///
    /// userId:
    ///   The Amazon user ID returned to the app by the purchase flow.
    /// receiptId:
    ///   The receipt ID returned to the app by the purchase flow.
    async fn verify_receipt_id(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<RvsResponse, IapError>;
}

#[derive(Clone)]
pub struct AmazonRvsDatasourceImpl {
    http: reqwest::Client,
    base_url: String,
    secret: Zeroizing<String>,
}

impl std::fmt::Debug for AmazonRvsDatasourceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmazonRvsDatasourceImpl")
            .field("base_url", &self.base_url)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl AmazonRvsDatasource for AmazonRvsDatasourceImpl {
    async fn verify_receipt_id(
        &self,
        user_id: &str,
        receipt_id: &str,
    ) -> Result<RvsResponse, IapError> {
        let url = Zeroizing::new(build_verify_url(
            &self.base_url,
            &self.secret,
            user_id,
            receipt_id,
        ));
        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| IapError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IapError::Transport(e.without_url()))?;

        if !status.is_success() {
            return Ok(RvsResponse::Rejected {
                status: status.as_u16(),
                body: ErrorResponseModel::parse_lenient(&body),
            });
        }

        serde_json::from_str(&body)
            .map(RvsResponse::Verified)
            .map_err(IapError::Decode)
    }
}

impl AmazonRvsDatasourceImpl {
    pub(crate) fn new(settings: ResolvedSettings) -> Result<Self, IapError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(IapError::ClientInit)?;
        Ok(Self {
            http,
            base_url: settings.base_url,
            secret: settings.secret,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builds the verifyReceiptId URL by plain substitution. Identifiers are not
/// percent-encoded; RVS receipt and user IDs are URL-safe as issued.
pub(crate) fn build_verify_url(
    base_url: &str,
    secret: &str,
    user_id: &str,
    receipt_id: &str,
) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base_url}/version/1.0/verifyReceiptId/developer/{secret}/user/{user_id}/receiptId/{receipt_id}")
}
