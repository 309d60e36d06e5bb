//! REST API client module for NeuronLab.
//!
//! This module provides a typed HTTP client for the NeuronLab document
//! enrichment service: batch lookup of CNPJ / CPF records and formatted
//! exports by date range.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use neuronlab_sdk::api::NeuronLabApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NeuronLabApiClient::new("auth_token", "https://api.neuronlab.io")?;
//!
//!     let dataset = client.fetch_by_cnpj(["11222333000181", "19131243000197"]).await?;
//!     println!("{:?}", dataset.get("totalCNPJs"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use neuronlab_sdk::api::{NeuronLabApiClient, RetryConfig};
//! use std::time::Duration;
//!
//! let client = NeuronLabApiClient::builder("auth_token", "https://api.neuronlab.io")
//!     .timeout(Duration::from_secs(60))
//!     .proxy("http://proxy.internal:3128")
//!     .with_retry(RetryConfig::new(3).with_jitter())
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use neuronlab_sdk::api::ApiError;
//!
//! match client.fetch_by_cpf(["12345678909"]).await {
//!     Ok(dataset) => println!("{} fields", dataset.len()),
//!     Err(ApiError::BadRequest(e)) => println!("Rejected: {}", e.message),
//!     Err(ApiError::UserNotFound(_)) => println!("Token has no account"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Score Enrichment
//!
//! Score enrichment is a per-call option. The handle returned by
//! [`NeuronLabApiClient::with_score_enrichment`] is consumed by its fetch:
//!
//! ```rust,ignore
//! let scored = client.with_score_enrichment().fetch_by_cnpj(["11222333000181"]).await?;
//! let plain = client.fetch_by_cnpj(["11222333000181"]).await?; // no useScore
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{NeuronLabApiClient, NeuronLabApiClientBuilder, RetryConfig, ScoredLookup};
pub use error::{
    ApiError, ApiResult, ErrorDetail, ErrorKind, ErrorResponse, ServiceError, UNKNOWN_ERROR_MESSAGE,
};
pub use types::*;
