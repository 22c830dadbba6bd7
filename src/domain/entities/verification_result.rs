use chrono::{DateTime, Utc};

/// A receipt as confirmed by the Amazon Receipt Verification Service.
///
/// Fields are returned exactly as RVS reported them. In particular, a
/// cancelled purchase is still a successful verification; check
/// `is_cancelled` before granting the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub receipt_id: String,
    /// CONSUMABLE, ENTITLED, or SUBSCRIPTION.
    pub product_type: String,
    pub product_id: String,
    /// Milliseconds since the epoch.
    pub purchase_date: i64,
    /// Milliseconds since the epoch, or 0 if the purchase was not cancelled.
    pub cancel_date: i64,
    pub test_transaction: bool,
}

impl VerificationResult {
    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.purchase_date)
    }

    pub fn cancel_time(&self) -> Option<DateTime<Utc>> {
        if self.is_cancelled() {
            DateTime::from_timestamp_millis(self.cancel_date)
        } else {
            None
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_date != 0
    }
}
