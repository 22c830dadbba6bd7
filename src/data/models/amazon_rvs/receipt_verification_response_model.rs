#![allow(dead_code)]

use serde::Deserialize;

/// Data structure returned by the Amazon Receipt Verification Service when a
/// receipt is successfully verified.
///
/// https://developer.amazon.com/docs/in-app-purchasing/iap-rvs-for-android-apps.html
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptVerificationResponseModel {
    /// Unique identifier for the purchase.
    pub(crate) receipt_id: String,
    /// Type of product purchased (CONSUMABLE, ENTITLED, or SUBSCRIPTION).
    pub(crate) product_type: String,
    /// SKU of the purchased item, as defined in the developer portal.
    pub(crate) product_id: String,
    /// Date of purchase, in milliseconds since the epoch.
    pub(crate) purchase_date: i64,
    /// Date the purchase was cancelled, in milliseconds since the epoch.
    /// Absent or null if the purchase was never cancelled.
    #[serde(default)]
    pub(crate) cancel_date: Option<i64>,
    /// Whether this purchase was made with App Tester or Live App Testing.
    pub(crate) test_transaction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_body() {
        let m: ReceiptVerificationResponseModel = serde_json::from_str(
            r#"{
                "receiptId": "q1YqVrJSSs7P1UvMTazKz9PLTEwpVbIy0FEqSy0qzszPAyoyMjIwtDAyNjcwMTI0NjMzAQpaDg0A",
                "productType": "CONSUMABLE",
                "productId": "com.amazon.iapsamplev2.gold_medal",
                "purchaseDate": 1402008634018,
                "cancelDate": 1402008700000,
                "testTransaction": true
            }"#,
        )
        .unwrap();
        assert_eq!(m.product_type, "CONSUMABLE");
        assert_eq!(m.purchase_date, 1402008634018);
        assert_eq!(m.cancel_date, Some(1402008700000));
        assert!(m.test_transaction);
    }

    #[test]
    fn cancel_date_may_be_null_or_absent() {
        let null: ReceiptVerificationResponseModel = serde_json::from_str(
            r#"{"receiptId":"r","productType":"ENTITLED","productId":"p","purchaseDate":1,"cancelDate":null,"testTransaction":false}"#,
        )
        .unwrap();
        let absent: ReceiptVerificationResponseModel = serde_json::from_str(
            r#"{"receiptId":"r","productType":"ENTITLED","productId":"p","purchaseDate":1,"testTransaction":false}"#,
        )
        .unwrap();
        assert_eq!(null.cancel_date, None);
        assert_eq!(absent.cancel_date, None);
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(serde_json::from_str::<ReceiptVerificationResponseModel>(
            r#"{"receiptId":"r","purchaseDate":"yesterday"}"#
        )
        .is_err());
    }
}
