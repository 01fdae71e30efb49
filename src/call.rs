use serde::{Deserialize, Serialize};

use crate::codec::CallArg;

/// A dApp function invocation: the function name and its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeCall {
    /// Callable function name as declared in the dApp script.
    pub function: String,
    /// Arguments in declaration order, each in the explicit `{"type", "value"}` shape.
    #[serde(default)]
    pub args: Vec<CallArg>,
}

impl InvokeCall {
    pub fn new(function: impl Into<String>, args: Vec<CallArg>) -> Self {
        Self {
            function: function.into(),
            args,
        }
    }
}

/// Payment attached to an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Amount in the asset's smallest unit.
    pub amount: i64,
    /// `None` pays in the native token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec::CallArgValue;

    #[test]
    fn call_serializes_args_in_explicit_shape() {
        let call = InvokeCall::new(
            "deposit",
            vec![
                CallArg::new(CallArgValue::Integer(100)),
                CallArg::new(CallArgValue::Binary("base64:AQID".into())),
            ],
        );
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "function": "deposit",
                "args": [
                    {"type": "integer", "value": 100},
                    {"type": "binary", "value": "base64:AQID"}
                ]
            })
        );
    }

    #[test]
    fn call_rejects_mistyped_argument() {
        let raw = json!({
            "function": "withdraw",
            "args": [{"type": "integer", "value": "100"}]
        });
        assert!(serde_json::from_value::<InvokeCall>(raw).is_err());
    }

    #[test]
    fn call_without_args_decodes_empty() {
        let call: InvokeCall = serde_json::from_value(json!({"function": "ping"})).unwrap();
        assert!(call.args.is_empty());
    }

    #[test]
    fn payment_uses_camel_case_and_omits_native_asset() {
        let native = Payment {
            amount: 500,
            asset_id: None,
        };
        assert_eq!(serde_json::to_value(&native).unwrap(), json!({"amount": 500}));

        let token: Payment =
            serde_json::from_value(json!({"amount": 1, "assetId": "8LQW8f7P5d5P"})).unwrap();
        assert_eq!(token.asset_id.as_deref(), Some("8LQW8f7P5d5P"));
    }
}
