//! Encoding policy selection.

use serde::{Deserialize, Serialize};

/// How events are turned into state documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum EncodingPolicy {
    /// Interpret events into a few `state.*` signals.
    #[default]
    Derived,
    /// Pass every event field through under `data.<event>.<field>`.
    Raw,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EncodingConfig {
    pub policy: EncodingPolicy,
}
