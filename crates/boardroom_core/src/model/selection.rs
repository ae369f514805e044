//! Selection and click-signal model.
//!
//! # Responsibility
//! - Define the transient selection value shared by renderer and mutators.
//! - Encode/decode the click identity carried by every interactive node.
//!
//! # Invariants
//! - A selection is a weak `(kind, id)` reference; the node may be gone.
//! - Decoding a click identity never panics; failures are typed errors.

use crate::model::node::{NodeId, NodeKind, UnknownNodeKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Prefix of the `type` field in click identities (`playground-row`, ...).
pub const PLAYGROUND_TYPE_PREFIX: &str = "playground-";

/// Currently selected node reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: NodeId,
}

impl SelectedNode {
    pub fn new(kind: NodeKind, id: NodeId) -> Self {
        Self { kind, id }
    }
}

/// Selection state: `None` means nothing is highlighted.
pub type Selection = Option<SelectedNode>;

/// Click identity metadata attached to each rendered interactive node.
///
/// Wire shape: `{"type": "playground-row", "inner-type": "row", "id": "...", "depth": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickIdentity {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(rename = "inner-type")]
    pub inner_type: NodeKind,
    pub id: NodeId,
    pub depth: u32,
}

impl ClickIdentity {
    pub fn new(kind: NodeKind, id: NodeId, depth: u32) -> Self {
        Self {
            element_type: format!("{PLAYGROUND_TYPE_PREFIX}{}", kind.as_str()),
            inner_type: kind,
            id,
            depth,
        }
    }

    /// Encodes this identity as the compact JSON string the UI echoes back.
    pub fn encode(&self) -> String {
        // Why: all fields are plain strings/integers, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a raw identity string.
    ///
    /// The `inner-type` field is authoritative; when it is missing the kind is
    /// derived from the `playground-<kind>` type tag.
    pub fn decode(raw: &str) -> Result<Self, IdentityDecodeError> {
        let value: Value = serde_json::from_str(raw.trim())
            .map_err(|err| IdentityDecodeError::InvalidJson(err.to_string()))?;
        let object = value.as_object().ok_or(IdentityDecodeError::NotAnObject)?;

        let element_type = object.get("type").and_then(Value::as_str);
        let (element_type, inner_type) = match object.get("inner-type").and_then(Value::as_str) {
            Some(inner) => {
                let kind = NodeKind::parse(inner)?;
                let element_type = element_type
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{PLAYGROUND_TYPE_PREFIX}{}", kind.as_str()));
                (element_type, kind)
            }
            None => {
                let element_type = element_type.ok_or(IdentityDecodeError::MissingField("type"))?;
                let tag = element_type
                    .strip_prefix(PLAYGROUND_TYPE_PREFIX)
                    .ok_or_else(|| UnknownNodeKind(element_type.to_string()))?;
                (element_type.to_string(), NodeKind::parse(tag)?)
            }
        };

        let raw_id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or(IdentityDecodeError::MissingField("id"))?;
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| IdentityDecodeError::InvalidId(raw_id.to_string()))?;

        let depth = object
            .get("depth")
            .and_then(Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(1);

        Ok(Self {
            element_type,
            inner_type,
            id,
            depth,
        })
    }

    /// Selection candidate named by this identity.
    pub fn as_selection(&self) -> SelectedNode {
        SelectedNode::new(self.inner_type, self.id)
    }
}

/// Click identity decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityDecodeError {
    /// Identity payload is not valid JSON.
    InvalidJson(String),
    /// Identity payload is JSON but not an object.
    NotAnObject,
    /// Required field missing or not a string.
    MissingField(&'static str),
    /// Kind tag is not a known node kind.
    UnknownKind(UnknownNodeKind),
    /// `id` is not a valid UUID.
    InvalidId(String),
}

impl Display for IdentityDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(message) => write!(f, "click identity is not valid JSON: {message}"),
            Self::NotAnObject => write!(f, "click identity must be a JSON object"),
            Self::MissingField(field) => write!(f, "click identity missing field `{field}`"),
            Self::UnknownKind(err) => write!(f, "{err}"),
            Self::InvalidId(value) => write!(f, "click identity id is not a uuid: {value}"),
        }
    }
}

impl Error for IdentityDecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownKind(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownNodeKind> for IdentityDecodeError {
    fn from(value: UnknownNodeKind) -> Self {
        Self::UnknownKind(value)
    }
}

/// One per-node click report gathered by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickSignal {
    /// Raw identity metadata, as emitted by the render description.
    pub identity: String,
    /// Last click timestamp; `None`, null or non-numeric values count as 0.
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl ClickSignal {
    /// Wraps a raw identity string and timestamp value.
    pub fn raw(identity: impl Into<String>, timestamp: Option<Value>) -> Self {
        Self {
            identity: identity.into(),
            timestamp,
        }
    }

    /// Builds a signal for a known node.
    pub fn for_node(kind: NodeKind, id: NodeId, depth: u32, timestamp: Option<f64>) -> Self {
        Self {
            identity: ClickIdentity::new(kind, id, depth).encode(),
            timestamp: timestamp
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
        }
    }

    /// Numeric ordering key; anything absent or non-numeric is `0`.
    pub fn timestamp_value(&self) -> f64 {
        let value = match &self.timestamp {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|value| value.is_finite()).unwrap_or(0.0)
    }

    /// Decodes the identity metadata of this signal.
    pub fn decode_identity(&self) -> Result<ClickIdentity, IdentityDecodeError> {
        ClickIdentity::decode(&self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClickIdentity, ClickSignal, IdentityDecodeError};
    use crate::model::node::NodeKind;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn identity_encode_matches_playground_shape() {
        let id = Uuid::new_v4();
        let encoded = ClickIdentity::new(NodeKind::Row, id, 1).encode();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["type"], "playground-row");
        assert_eq!(value["inner-type"], "row");
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["depth"], 1);
    }

    #[test]
    fn decode_falls_back_to_type_prefix() {
        let id = Uuid::new_v4();
        let raw = json!({"type": "playground-col", "id": id.to_string()}).to_string();
        let identity = ClickIdentity::decode(&raw).unwrap();
        assert_eq!(identity.inner_type, NodeKind::Column);
        assert_eq!(identity.depth, 1);
    }

    #[test]
    fn decode_accepts_inner_type_without_type_tag() {
        let id = Uuid::new_v4();
        let raw = json!({"inner-type": "row", "id": id.to_string(), "depth": 2}).to_string();
        let identity = ClickIdentity::decode(&raw).unwrap();
        assert_eq!(identity, ClickIdentity::new(NodeKind::Row, id, 2));

        let missing_both = json!({"id": id.to_string()}).to_string();
        assert_eq!(
            ClickIdentity::decode(&missing_both),
            Err(IdentityDecodeError::MissingField("type"))
        );
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert!(matches!(
            ClickIdentity::decode("not json"),
            Err(IdentityDecodeError::InvalidJson(_))
        ));
        assert_eq!(
            ClickIdentity::decode("[1, 2]"),
            Err(IdentityDecodeError::NotAnObject)
        );
        assert_eq!(
            ClickIdentity::decode(r#"{"type": "playground-row"}"#),
            Err(IdentityDecodeError::MissingField("id"))
        );
        assert!(matches!(
            ClickIdentity::decode(r#"{"type": "playground-text", "id": "x"}"#),
            Err(IdentityDecodeError::UnknownKind(_))
        ));
        assert_eq!(
            ClickIdentity::decode(r#"{"type": "playground-row", "id": "nope"}"#),
            Err(IdentityDecodeError::InvalidId("nope".to_string()))
        );
    }

    #[test]
    fn timestamp_value_treats_non_numeric_as_zero() {
        assert_eq!(ClickSignal::raw("{}", None).timestamp_value(), 0.0);
        assert_eq!(ClickSignal::raw("{}", Some(json!(null))).timestamp_value(), 0.0);
        assert_eq!(ClickSignal::raw("{}", Some(json!("soon"))).timestamp_value(), 0.0);
        assert_eq!(ClickSignal::raw("{}", Some(json!("12.5"))).timestamp_value(), 12.5);
        assert_eq!(ClickSignal::raw("{}", Some(json!(7))).timestamp_value(), 7.0);
    }
}
