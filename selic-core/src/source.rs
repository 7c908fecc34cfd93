//! Series source: the provider trait and the central bank SGS implementation.
//!
//! The SGS endpoint returns the full history in a single JSON array of
//! `{"data": "dd/mm/yyyy", "valor": "decimal"}` objects. There is no
//! pagination and no authentication.

use crate::config::RefreshConfig;
use crate::error::RefreshError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// One observation exactly as published, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Date as `dd/mm/yyyy`.
    pub data: String,
    /// Rate as a decimal string.
    pub valor: String,
}

impl RawRecord {
    pub fn new(data: impl Into<String>, valor: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            valor: valor.into(),
        }
    }
}

/// Anything that can hand back the full series in one call.
///
/// Providers return records in whatever order the source uses; sorting is
/// the normalizer's job.
pub trait SeriesProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the full series.
    fn fetch(&self) -> Result<Vec<RawRecord>, RefreshError>;
}

/// Blocking client for the SGS JSON endpoint.
pub struct BcbProvider {
    client: reqwest::blocking::Client,
    url: String,
}

impl BcbProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RefreshError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RefreshError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &RefreshConfig) -> Result<Self, RefreshError> {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SeriesProvider for BcbProvider {
    fn name(&self) -> &str {
        "bcb_sgs"
    }

    fn fetch(&self) -> Result<Vec<RawRecord>, RefreshError> {
        debug!(url = %self.url, "requesting series");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| RefreshError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RefreshError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| RefreshError::Transport(format!("failed to read response body: {e}")))?;

        parse_payload(&body)
    }
}

/// Decode an SGS response body.
pub fn parse_payload(body: &str) -> Result<Vec<RawRecord>, RefreshError> {
    let records: Vec<RawRecord> =
        serde_json::from_str(body).map_err(|e| RefreshError::Payload(e.to_string()))?;

    if records.is_empty() {
        return Err(RefreshError::EmptySeries);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sgs_array() {
        let body = r#"[{"data":"01/01/2024","valor":"0.97"},{"data":"01/02/2024","valor":"0.80"}]"#;
        let records = parse_payload(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], RawRecord::new("01/01/2024", "0.97"));
        assert_eq!(records[1].valor, "0.80");
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_payload("<html>maintenance</html>").unwrap_err();
        assert!(matches!(err, RefreshError::Payload(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_payload(r#"{"data":"01/01/2024","valor":"0.97"}"#).unwrap_err();
        assert!(matches!(err, RefreshError::Payload(_)));

        let err = parse_payload(r#"[{"date":"01/01/2024","value":"0.97"}]"#).unwrap_err();
        assert!(matches!(err, RefreshError::Payload(_)));
    }

    #[test]
    fn rejects_numeric_valor() {
        let err = parse_payload(r#"[{"data":"01/01/2024","valor":0.97}]"#).unwrap_err();
        assert!(matches!(err, RefreshError::Payload(_)));
    }

    #[test]
    fn rejects_empty_array() {
        let err = parse_payload("[]").unwrap_err();
        assert!(matches!(err, RefreshError::EmptySeries));
    }

    #[test]
    fn provider_keeps_configured_url() {
        let config = RefreshConfig::default();
        let provider = BcbProvider::from_config(&config).unwrap();
        assert_eq!(provider.url(), config.url);
        assert_eq!(provider.name(), "bcb_sgs");
    }
}
