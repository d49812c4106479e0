//! Success envelope shared by every endpoint.
//!
//! ```text
//! { "msg": "ok", "inf": <payload> }   // reads, creates, updates
//! { "msg": "ok" }                     // deletes
//! ```

use serde::Serialize;

const OK: &str = "ok";

/// Success response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    inf: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap `inf` in an `"ok"` envelope.
    pub fn ok(inf: T) -> Self {
        Self {
            msg: OK,
            inf: Some(inf),
        }
    }
}

impl Envelope<()> {
    /// An `"ok"` envelope without payload.
    pub fn done() -> Self {
        Self { msg: OK, inf: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn payload_is_carried_under_inf() {
        let value = serde_json::to_value(Envelope::ok(vec![1, 2])).expect("serialise");
        assert_eq!(value, json!({ "msg": "ok", "inf": [1, 2] }));
    }

    #[rstest]
    fn done_omits_inf() {
        let value = serde_json::to_value(Envelope::done()).expect("serialise");
        assert_eq!(value, json!({ "msg": "ok" }));
    }
}
