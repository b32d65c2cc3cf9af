//! HTTP implementation of RiskOracle
//!
//! REST client for the external risk-scoring firm.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use cupo::{DomainError, IdType, RiskCategory, RiskOracle};

use crate::config::RiskOracleConfig;

/// The core defines no deadline of its own; a stalled firm call would stall
/// the whole evaluation, so the boundary imposes one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the risk firm's `/risk` endpoint.
pub struct HttpRiskOracle {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct RiskResponse {
    risk: RiskCategory,
}

impl HttpRiskOracle {
    pub fn new(config: RiskOracleConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client construction"),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    fn parse_response(body: &str) -> Result<RiskCategory, DomainError> {
        let response: RiskResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::ExternalService(format!("undecodable risk response: {}", e))
        })?;
        Ok(response.risk)
    }
}

#[async_trait]
impl RiskOracle for HttpRiskOracle {
    async fn risk_by_client(
        &self,
        id_type: IdType,
        id_value: &str,
    ) -> Result<RiskCategory, DomainError> {
        let mut request = self
            .client
            .get(format!("{}/risk", self.base_url))
            .query(&[("id_type", id_type.as_str()), ("id_value", id_value)]);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::ExternalService(format!(
                "risk firm returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_category_token() {
        let cases = [
            ("NONE", RiskCategory::None),
            ("IN_ARREARS_3_MONTHS", RiskCategory::InArrears3Months),
            ("IN_ARREARS_6_MONTHS", RiskCategory::InArrears6Months),
            ("PLEDGE", RiskCategory::Pledge),
            ("SEIZED", RiskCategory::Seized),
        ];

        for (token, expected) in cases {
            let body = format!("{{\"risk\": \"{}\"}}", token);
            assert_eq!(HttpRiskOracle::parse_response(&body).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_token_is_an_external_service_fault() {
        let err = HttpRiskOracle::parse_response("{\"risk\": \"BANKRUPT\"}").unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[test]
    fn test_garbage_body_is_an_external_service_fault() {
        let err = HttpRiskOracle::parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }
}
