use std::time::Duration;

/// Amazon's local Receipt Verification Service sandbox (RVS Sandbox), as
/// served by the App Tester tooling.
pub const AMAZON_RVS_SANDBOX_URL: &str = "http://localhost:8080/RVSSandbox";
pub const AMAZON_RVS_PRODUCTION_URL: &str = "https://appstore-sdk.amazon.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable consulted by `IapEnvironment::from_env`.
pub const IAP_ENVIRONMENT_VAR: &str = "IAP_ENVIRONMENT";
/// The only value of `IAP_ENVIRONMENT_VAR` that selects production.
pub const IAP_ENVIRONMENT_PRODUCTION: &str = "production";
