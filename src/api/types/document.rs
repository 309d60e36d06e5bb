//! Document type tag for the NeuronLab REST API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Kind of Brazilian tax identifier looked up by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Legal entity (Cadastro Nacional da Pessoa Jurídica)
    Cnpj,
    /// Individual (Cadastro de Pessoas Físicas)
    Cpf,
}

impl DocumentType {
    /// Wire tag used in endpoint paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cnpj => "cnpj",
            DocumentType::Cpf => "cpf",
        }
    }

    /// Query key carrying the comma-joined document list.
    pub fn query_key(&self) -> &'static str {
        match self {
            DocumentType::Cnpj => "cnpjs",
            DocumentType::Cpf => "cpfs",
        }
    }

    /// Dataset field holding the number of documents in a batch answer.
    pub fn count_field(&self) -> &'static str {
        match self {
            DocumentType::Cnpj => "totalCNPJs",
            DocumentType::Cpf => "totalCPFs",
        }
    }

    /// Path of the batch lookup endpoint, e.g. `/api/cnpj/search-cnpjs`.
    pub fn search_path(&self) -> String {
        format!("/api/{0}/search-{0}s", self.as_str())
    }

    /// Path of the formatted export endpoint, e.g. `/api/cpf/cpf-data-formatted`.
    pub fn formatted_path(&self) -> String {
        format!("/api/{0}/{0}-data-formatted", self.as_str())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cnpj" => Ok(DocumentType::Cnpj),
            "cpf" => Ok(DocumentType::Cpf),
            other => Err(ApiError::InvalidArgument(format!(
                "Unknown document type '{}', expected 'cnpj' or 'cpf'",
                other
            ))),
        }
    }
}
