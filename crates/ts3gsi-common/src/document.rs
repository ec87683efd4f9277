//! The state document posted to the receiver.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PROVIDER_NAME: &str = "TeamSpeak";
pub const PROVIDER_APPID: i64 = -1;

/// Identity stanza carried by every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub appid: i64,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            name: PROVIDER_NAME.into(),
            appid: PROVIDER_APPID,
        }
    }
}

/// Which of the two mutually exclusive sections a document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// `data.<eventKind>.<field>`
    Raw,
    /// `state.<signal>`
    Derived,
}

/// Canonical payload: `provider` plus exactly one of `data` or `state`.
///
/// Constructed only through [`StateDocument::raw`] and
/// [`StateDocument::derived`], so a locally built document never mixes
/// the two shapes. Deserialized documents may, see [`StateDocument::shape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<Map<String, Value>>,
}

impl StateDocument {
    pub fn raw(data: Map<String, Value>) -> Self {
        Self {
            provider: Provider::default(),
            data: Some(data),
            state: None,
        }
    }

    pub fn derived(state: Map<String, Value>) -> Self {
        Self {
            provider: Provider::default(),
            data: None,
            state: Some(state),
        }
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub fn state(&self) -> Option<&Map<String, Value>> {
        self.state.as_ref()
    }

    /// `None` when neither or both sections are present.
    pub fn shape(&self) -> Option<DocumentShape> {
        match (&self.data, &self.state) {
            (Some(_), None) => Some(DocumentShape::Raw),
            (None, Some(_)) => Some(DocumentShape::Derived),
            _ => None,
        }
    }

    /// Compact JSON body as sent over the wire.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
