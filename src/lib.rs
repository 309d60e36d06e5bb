//! # NeuronLab Rust SDK
//!
//! A Rust SDK for the NeuronLab document enrichment API, which looks up
//! Brazilian tax-identifier records (CNPJ for legal entities, CPF for
//! individuals).
//!
//! ## Modules
//!
//! - [`api`]: REST API client, request/response types and errors
//! - [`config`]: client configuration, loadable from the environment
//! - [`network`]: service constants (defaults, environment variable names)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use neuronlab_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads NEURONLAB_AUTH_TOKEN, NEURONLAB_URL and SERASA_API_PROXY
//!     let config = ClientConfig::from_env()?;
//!     let api = NeuronLabApiClient::from_config(&config)?;
//!
//!     let dataset = api.fetch_by_cpf(["12345678909"]).await?;
//!     println!("{:?}", dataset.total_documents(DocumentType::Cpf));
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Service constants (defaults and environment variable names).
pub mod network;

/// Client configuration.
pub mod config;

/// REST API client module for batch lookups and formatted exports.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use neuronlab_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, ErrorKind, NeuronLabApiClient, NeuronLabApiClientBuilder,
        RetryConfig, ScoredLookup, ServiceError,
        // Types
        DocumentBatchRequest, DocumentDataset, DocumentType, FormattedExportParams,
        FormattedRecord, RequestPayload,
    };

    pub use crate::config::ClientConfig;

    pub use crate::network::{DEFAULT_MAX_TRIES, PROXY_ENV_VAR};
}
