use std::time::Duration;

use zeroize::Zeroizing;

use crate::constants::{
    AMAZON_RVS_PRODUCTION_URL, AMAZON_RVS_SANDBOX_URL, DEFAULT_TIMEOUT,
    IAP_ENVIRONMENT_PRODUCTION, IAP_ENVIRONMENT_VAR,
};

/// Which Amazon RVS instance to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IapEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl IapEnvironment {
    /// Reads `IAP_ENVIRONMENT` from the process environment. Meant to be
    /// called once at startup, with the result passed into the client.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(IAP_ENVIRONMENT_VAR).ok().as_deref())
    }

    /// Only the exact value `"production"` selects production.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(IAP_ENVIRONMENT_PRODUCTION) => IapEnvironment::Production,
            _ => IapEnvironment::Sandbox,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, IapEnvironment::Production)
    }
}

/// Explicit client configuration.
///
/// A zero `timeout` means "use the default" (5 seconds). `base_url`, when
/// set, takes precedence over `is_production`.
#[derive(Clone, Default)]
pub struct ValidatorConfig {
    pub is_production: bool,
    pub secret: Zeroizing<String>,
    pub timeout: Duration,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("is_production", &self.is_production)
            .field("secret", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ValidatorConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            ..Default::default()
        }
    }

    pub fn production(mut self, is_production: bool) -> Self {
        self.is_production = is_production;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Applies the endpoint-selection and timeout-default policy. Every
    /// constructor goes through here.
    pub(crate) fn resolve(self) -> ResolvedSettings {
        let base_url = match self.base_url {
            Some(url) => url,
            None if self.is_production => AMAZON_RVS_PRODUCTION_URL.to_string(),
            None => AMAZON_RVS_SANDBOX_URL.to_string(),
        };
        let timeout = if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        };
        ResolvedSettings {
            base_url,
            secret: self.secret,
            timeout,
        }
    }
}

impl From<(String, IapEnvironment)> for ValidatorConfig {
    fn from((secret, environment): (String, IapEnvironment)) -> Self {
        ValidatorConfig::new(secret).production(environment.is_production())
    }
}

pub(crate) struct ResolvedSettings {
    pub(crate) base_url: String,
    pub(crate) secret: Zeroizing<String>,
    pub(crate) timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_only_accepts_exact_production_value() {
        assert_eq!(
            IapEnvironment::from_value(Some("production")),
            IapEnvironment::Production
        );
        for other in ["Production", "PRODUCTION", "prod", "sandbox", "", " production"] {
            assert_eq!(
                IapEnvironment::from_value(Some(other)),
                IapEnvironment::Sandbox,
                "{other:?} should select sandbox"
            );
        }
        assert_eq!(IapEnvironment::from_value(None), IapEnvironment::Sandbox);
    }

    #[test]
    fn environment_from_env_reads_variable() {
        std::env::set_var(IAP_ENVIRONMENT_VAR, "production");
        let production = IapEnvironment::from_env();
        std::env::set_var(IAP_ENVIRONMENT_VAR, "staging");
        let staging = IapEnvironment::from_env();
        std::env::remove_var(IAP_ENVIRONMENT_VAR);
        let unset = IapEnvironment::from_env();

        assert_eq!(production, IapEnvironment::Production);
        assert_eq!(staging, IapEnvironment::Sandbox);
        assert_eq!(unset, IapEnvironment::Sandbox);
    }

    #[test]
    fn zero_timeout_resolves_to_default() {
        let zero = ValidatorConfig::new("s").resolve();
        let five = ValidatorConfig::new("s")
            .timeout(Duration::from_secs(5))
            .resolve();
        assert_eq!(zero.timeout, DEFAULT_TIMEOUT);
        assert_eq!(zero.timeout, five.timeout);
        assert_eq!(zero.base_url, five.base_url);
    }

    #[test]
    fn explicit_timeout_is_kept() {
        let settings = ValidatorConfig::new("s")
            .timeout(Duration::from_millis(250))
            .resolve();
        assert_eq!(settings.timeout, Duration::from_millis(250));
    }

    #[test]
    fn endpoint_follows_production_flag() {
        assert_eq!(
            ValidatorConfig::new("s").resolve().base_url,
            AMAZON_RVS_SANDBOX_URL
        );
        assert_eq!(
            ValidatorConfig::new("s").production(true).resolve().base_url,
            AMAZON_RVS_PRODUCTION_URL
        );
    }

    #[test]
    fn environment_and_flag_converge() {
        let from_env: ValidatorConfig =
            ("s".to_string(), IapEnvironment::Production).into();
        let explicit = ValidatorConfig::new("s").production(true);
        assert_eq!(from_env.resolve().base_url, explicit.resolve().base_url);
    }

    #[test]
    fn base_url_override_wins() {
        let settings = ValidatorConfig::new("s")
            .production(true)
            .base_url("http://127.0.0.1:9000")
            .resolve();
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ValidatorConfig::new("2:smXBjZkWCxDMSBvQ8HBGsUS1PK3jvVc8tuTjLNfPHfYAga6WaDzXJPoWpfemXaHg:iEzHzPjJ-XwRdZ4b4e7Hxw==");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("smXBjZkWCxDMSBvQ8HBGsUS1PK3jvVc8"));
    }
}
