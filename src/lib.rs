//! Server-side verification of Amazon Appstore in-app purchase receipts,
//! via the Receipt Verification Service (RVS).

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod amazon_rvs_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amazon_rvs {
            pub(crate) mod error_response_model;
            pub(crate) mod receipt_verification_response_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod receipt_validator_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod verification_result;
    }
    pub mod repositories {
        pub mod receipt_validator;
    }
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod util;

pub use config::{IapEnvironment, ValidatorConfig};
pub use domain::{
    entities::verification_result::VerificationResult,
    repositories::receipt_validator::ReceiptValidator,
};
pub use errors::IapError;
pub use util::AmazonIapUtil;

/// The concrete client returned by `AmazonIapUtil::new_default` and
/// `AmazonIapUtil::new_with_config`.
pub type AmazonIapClient = AmazonIapUtil<
    data::repositories::receipt_validator_impl::ReceiptValidatorImpl<
        data::datasources::amazon_rvs_datasource::AmazonRvsDatasourceImpl,
    >,
>;
