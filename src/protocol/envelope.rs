//! The `{ok, payload}` response envelope shared by every operation.

use serde_json::Value;

use crate::errors::{Result, RpcError};
use crate::protocol::call::RpcCall;

/// Parses a raw response body and decodes it into the call's result type.
///
/// Every response is wrapped in a JSON envelope `{"ok": bool, "payload": ...}`
/// independent of the operation. Classification:
///
/// - body is not valid JSON, or the envelope shape is wrong →
///   [`RpcError::Decode`]
/// - `ok` is false and the payload is a plain string → [`RpcError::Protocol`]
///   carrying that string
/// - `ok` is false and the payload is anything else → [`RpcError::Decode`]
///   with the payload rendered verbatim
/// - `ok` is true → the call's own [`decode`](RpcCall::decode) runs on the
///   payload
pub fn decode_response<C: RpcCall>(call: &C, raw: &str) -> Result<C::Output> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| RpcError::Decode(format!("invalid response body: {e}")))?;

    let envelope = value
        .as_object()
        .ok_or_else(|| RpcError::Decode(format!("response is not an envelope object: {value}")))?;

    let ok = envelope
        .get("ok")
        .and_then(Value::as_bool)
        .ok_or_else(|| RpcError::Decode("envelope is missing a boolean 'ok' field".to_string()))?;

    let payload = envelope.get("payload").cloned().unwrap_or(Value::Null);

    if !ok {
        return Err(match payload {
            Value::String(message) => RpcError::Protocol(message),
            other => RpcError::Decode(other.to_string()),
        });
    }

    call.decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calls::Version;

    #[test]
    fn test_malformed_json_yields_decode_error() {
        let result = decode_response(&Version, "{not json");
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_non_object_body_yields_decode_error() {
        let result = decode_response(&Version, "[1, 2, 3]");
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_missing_ok_field_yields_decode_error() {
        let result = decode_response(&Version, r#"{"payload": 42}"#);
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_failure_with_string_payload_is_protocol_error() {
        let result = decode_response(&Version, r#"{"ok": false, "payload": "disk full"}"#);
        match result {
            Err(RpcError::Protocol(message)) => assert_eq!(message, "disk full"),
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_with_structured_payload_is_decode_error() {
        let result = decode_response(&Version, r#"{"ok": false, "payload": {"errno": 28}}"#);
        match result {
            Err(RpcError::Decode(message)) => assert!(message.contains("errno")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_dispatches_to_call_decoder() {
        let version = decode_response(&Version, r#"{"ok": true, "payload": 2070000}"#).unwrap();
        assert_eq!(version, 2070000);
    }
}
