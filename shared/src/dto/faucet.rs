use serde::{Deserialize, Serialize};

/// Faucet request body.
///
/// The devnet faucet expects an externally tagged request, so serialization
/// produces `{"FixedAmountRequest": {"recipient": "0x..."}}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum FaucetRequest {
    FixedAmountRequest(FixedAmountRequest),
}

/// Request a fixed amount of test coins for one recipient address.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FixedAmountRequest {
    pub recipient: String,
}

impl FaucetRequest {
    pub fn fixed_amount(recipient: &str) -> Self {
        Self::FixedAmountRequest(FixedAmountRequest {
            recipient: recipient.to_string(),
        })
    }
}

/// Faucet response.
///
/// A successful dispense lists the gas objects transferred to the recipient;
/// a failed one carries an error message instead.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FaucetResponse {
    #[serde(default)]
    pub transferred_gas_objects: Vec<CoinInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One gas coin transferred by the faucet.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CoinInfo {
    pub amount: u64,
    pub id: String,
    pub transfer_tx_digest: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_external_tag() {
        let request = FaucetRequest::fixed_amount("0xabc");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "FixedAmountRequest": { "recipient": "0xabc" } })
        );
    }

    #[test]
    fn response_with_gas_objects_parses() {
        let body = json!({
            "transferred_gas_objects": [
                { "amount": 10_000_000, "id": "0x5", "transfer_tx_digest": "digest1" }
            ],
            "error": null
        });
        let response: FaucetResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transferred_gas_objects.len(), 1);
        assert_eq!(response.transferred_gas_objects[0].amount, 10_000_000);
        assert!(response.error.is_none());
    }

    #[test]
    fn response_with_error_parses() {
        let body = json!({
            "transferred_gas_objects": [],
            "error": "rate limited"
        });
        let response: FaucetResponse = serde_json::from_value(body).unwrap();
        assert!(response.transferred_gas_objects.is_empty());
        assert_eq!(response.error.as_deref(), Some("rate limited"));
    }

    #[test]
    fn response_with_missing_fields_parses() {
        let response: FaucetResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.transferred_gas_objects.is_empty());
        assert!(response.error.is_none());
    }
}
