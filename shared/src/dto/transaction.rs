use serde::{Deserialize, Serialize};

/// Transaction descriptor handed to the wallet's `signAndExecuteTransaction`.
///
/// The only kind this app submits is `moveCall`; use
/// [`MoveCallTransaction::move_call`] to build one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MoveCallTransaction {
    pub kind: String,
    pub data: MoveCallData,
}

/// The `moveCall` payload. Field names are camelCase on the wire, matching
/// the wallet connector's JavaScript API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveCallData {
    pub package_object_id: String,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
    pub gas_budget: u64,
}

impl MoveCallTransaction {
    pub fn move_call(data: MoveCallData) -> Self {
        Self {
            kind: "moveCall".to_string(),
            data,
        }
    }
}

/// Transaction response as returned by the wallet. Only the fields this app
/// consumes are modeled; everything else is ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TransactionResponse {
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TransactionEffects {
    #[serde(default)]
    pub events: Vec<TransactionEvent>,
}

/// One chain event. Events that are not move events deserialize with
/// `move_event: None` and are skipped during the creation-event search.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TransactionEvent {
    #[serde(rename = "moveEvent", default)]
    pub move_event: Option<MoveEvent>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveEvent {
    pub fields: MoveEventFields,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveEventFields {
    pub object_id: String,
}

impl TransactionResponse {
    /// Id of the newly created object, taken from the first move event in the
    /// response. Returns `None` when the response carries no effects, no
    /// events, or no event of the expected shape.
    pub fn created_object_id(&self) -> Option<&str> {
        self.effects
            .as_ref()?
            .events
            .iter()
            .find_map(|event| event.move_event.as_ref())
            .map(|move_event| move_event.fields.object_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: serde_json::Value) -> TransactionResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn move_call_descriptor_serializes_camel_case() {
        let tx = MoveCallTransaction::move_call(MoveCallData {
            package_object_id: "0x2".to_string(),
            module: "devnet_nft".to_string(),
            function: "mint".to_string(),
            type_arguments: vec![],
            arguments: vec!["name".to_string()],
            gas_budget: 10_000,
        });
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["kind"], "moveCall");
        assert_eq!(value["data"]["packageObjectId"], "0x2");
        assert_eq!(value["data"]["typeArguments"], json!([]));
        assert_eq!(value["data"]["gasBudget"], 10_000);
    }

    #[test]
    fn created_object_id_found_in_first_move_event() {
        let response = response(json!({
            "effects": {
                "events": [
                    { "newObject": { "sender": "0x1" } },
                    { "moveEvent": { "fields": { "object_id": "0xABC" } } }
                ]
            }
        }));
        assert_eq!(response.created_object_id(), Some("0xABC"));
    }

    #[test]
    fn created_object_id_none_without_move_event() {
        let response = response(json!({
            "effects": {
                "events": [
                    { "newObject": { "sender": "0x1" } }
                ]
            }
        }));
        assert_eq!(response.created_object_id(), None);
    }

    #[test]
    fn created_object_id_none_for_empty_events() {
        let response = response(json!({ "effects": { "events": [] } }));
        assert_eq!(response.created_object_id(), None);
    }

    #[test]
    fn created_object_id_none_without_effects() {
        let response = response(json!({}));
        assert_eq!(response.created_object_id(), None);
    }
}
