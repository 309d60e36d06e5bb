//! Response types for the NeuronLab REST API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::types::DocumentType;

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// One row of a formatted export. Returned as-is.
pub type FormattedRecord = Value;

/// Result of a batch lookup: the `data` object of the response, left unparsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentDataset(Map<String, Value>);

impl DocumentDataset {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of documents the service reports for this batch
    /// (`totalCNPJs` / `totalCPFs`).
    pub fn total_documents(&self, document_type: DocumentType) -> Option<u64> {
        self.0
            .get(document_type.count_field())
            .and_then(Value::as_u64)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for DocumentDataset {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
