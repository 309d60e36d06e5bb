//! Request types for the NeuronLab REST API.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::DocumentType;

/// Query key enabling score enrichment.
pub const USE_SCORE_PARAM: &str = "useScore";

/// Query key for the first day of a formatted export.
pub const START_DATE_PARAM: &str = "startDate";

/// Query key for the last day of a formatted export.
pub const END_DATE_PARAM: &str = "endDate";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered query parameters of one request.
///
/// Every service error carries the payload of the request that triggered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload(Vec<(String, String)>);

impl RequestPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// URL-encoded form, e.g. `cnpjs=1%2C2&useScore=true`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for RequestPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// A batch lookup for one document type.
///
/// The document list is never empty. The score flag belongs to this request
/// only and is never remembered by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentBatchRequest {
    document_type: DocumentType,
    documents: Vec<String>,
    use_score: bool,
}

impl DocumentBatchRequest {
    /// Create a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `documents` is empty.
    pub fn new<I, S>(document_type: DocumentType, documents: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents: Vec<String> = documents.into_iter().map(Into::into).collect();
        if documents.is_empty() {
            return Err(ApiError::InvalidArgument(
                "Empty document list, at least one document expected".to_string(),
            ));
        }
        Ok(Self {
            document_type,
            documents,
            use_score: false,
        })
    }

    /// Batch lookup of CNPJs.
    pub fn cnpj<I, S>(documents: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(DocumentType::Cnpj, documents)
    }

    /// Batch lookup of CPFs.
    pub fn cpf<I, S>(documents: I) -> ApiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(DocumentType::Cpf, documents)
    }

    /// Ask the service for score enrichment on this request.
    pub fn with_score(mut self) -> Self {
        self.use_score = true;
        self
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn use_score(&self) -> bool {
        self.use_score
    }

    /// Query parameters: `{type}s=<csv>` and, if requested, `useScore=true`.
    pub fn to_payload(&self) -> RequestPayload {
        let mut payload = RequestPayload::new();
        payload.push(self.document_type.query_key(), self.documents.join(","));
        if self.use_score {
            payload.push(USE_SCORE_PARAM, "true");
        }
        payload
    }
}

/// Query for the formatted export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedExportParams {
    /// Document type (required)
    pub document_type: DocumentType,
    /// First day included
    pub start_date: Option<NaiveDate>,
    /// Last day included
    pub end_date: Option<NaiveDate>,
}

impl FormattedExportParams {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set both ends of the range.
    pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start_date(start).with_end_date(end)
    }

    /// Query parameters; absent dates are omitted entirely.
    pub fn to_payload(&self) -> RequestPayload {
        let mut payload = RequestPayload::new();
        if let Some(start) = self.start_date {
            payload.push(START_DATE_PARAM, start.format(DATE_FORMAT).to_string());
        }
        if let Some(end) = self.end_date {
            payload.push(END_DATE_PARAM, end.format(DATE_FORMAT).to_string());
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_is_rejected() {
        let err = DocumentBatchRequest::cnpj(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));

        let err = DocumentBatchRequest::cpf(std::iter::empty::<&str>()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_document_is_accepted() {
        let request = DocumentBatchRequest::cpf(["12345678909"]).unwrap();
        assert_eq!(request.documents(), ["12345678909"]);
        assert_eq!(request.document_type(), DocumentType::Cpf);
        assert!(!request.use_score());
    }

    #[test]
    fn test_batch_payload() {
        let request =
            DocumentBatchRequest::cnpj(["11222333000181", "19131243000197"]).unwrap();
        let payload = request.to_payload();

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("cnpjs"), Some("11222333000181,19131243000197"));
        assert!(!payload.contains_key(USE_SCORE_PARAM));
    }

    #[test]
    fn test_batch_payload_with_score() {
        let payload = DocumentBatchRequest::cpf(["1", "2"])
            .unwrap()
            .with_score()
            .to_payload();

        assert_eq!(payload.get("cpfs"), Some("1,2"));
        assert_eq!(payload.get(USE_SCORE_PARAM), Some("true"));
        assert_eq!(payload.to_query_string(), "cpfs=1%2C2&useScore=true");
    }

    #[test]
    fn test_formatted_payload_without_dates() {
        let payload = FormattedExportParams::new(DocumentType::Cnpj).to_payload();
        assert!(payload.is_empty());
        assert_eq!(payload.to_string(), "");
    }

    #[test]
    fn test_formatted_payload_with_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let payload = FormattedExportParams::new(DocumentType::Cpf)
            .with_date_range(start, end)
            .to_payload();

        assert_eq!(payload.get(START_DATE_PARAM), Some("2024-01-05"));
        assert_eq!(payload.get(END_DATE_PARAM), Some("2024-12-31"));
    }

    #[test]
    fn test_formatted_payload_only_end_date() {
        let end = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        let payload = FormattedExportParams::new(DocumentType::Cpf)
            .with_end_date(end)
            .to_payload();

        assert_eq!(payload.len(), 1);
        assert!(!payload.contains_key(START_DATE_PARAM));
        assert_eq!(payload.get(END_DATE_PARAM), Some("2023-07-01"));
    }
}
