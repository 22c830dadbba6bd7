/// Errors returned by the Amazon receipt validator.
///
/// Nothing is retried internally. `Transport` failures may be transient and
/// worth retrying by the caller; `Rejected` is a definitive answer from the
/// Receipt Verification Service.
#[derive(Debug, thiserror::Error)]
pub enum IapError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// Network-level failure: timeout, connection refused, DNS, TLS, or the
    /// response body could not be read.
    #[error("callout to Amazon RVS failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// RVS responded with a non-2xx status. `message` is taken from the
    /// error body when it could be parsed, and is empty otherwise.
    #[error("Amazon RVS rejected the receipt ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// RVS responded with a 2xx status, but the body did not have the
    /// expected shape.
    #[error("failed to parse Amazon RVS response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IapError {
    pub fn is_transport(&self) -> bool {
        matches!(self, IapError::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, IapError::Transport(e) if e.is_timeout())
    }

    /// Message supplied by RVS, if this is a rejection.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            IapError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
