//! RiskCategory - Creditworthiness classification from the risk firm

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Risk category reported by the external risk-scoring firm.
///
/// The serde representation uses the firm's wire tokens. Categories are
/// supplied per evaluation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// No risk on record.
    #[serde(rename = "NONE")]
    None,
    /// A debt in arrears was paid after 3 months.
    #[serde(rename = "IN_ARREARS_3_MONTHS")]
    InArrears3Months,
    /// A debt in arrears was paid after 6 months.
    #[serde(rename = "IN_ARREARS_6_MONTHS")]
    InArrears6Months,
    /// An amount of money is held in pledge.
    #[serde(rename = "PLEDGE")]
    Pledge,
    /// A loan was defaulted and the debtor's goods were seized.
    #[serde(rename = "SEIZED")]
    Seized,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            RiskCategory::None => "NONE",
            RiskCategory::InArrears3Months => "IN_ARREARS_3_MONTHS",
            RiskCategory::InArrears6Months => "IN_ARREARS_6_MONTHS",
            RiskCategory::Pledge => "PLEDGE",
            RiskCategory::Seized => "SEIZED",
        };
        f.write_str(token)
    }
}

impl std::str::FromStr for RiskCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(RiskCategory::None),
            "IN_ARREARS_3_MONTHS" => Ok(RiskCategory::InArrears3Months),
            "IN_ARREARS_6_MONTHS" => Ok(RiskCategory::InArrears6Months),
            "PLEDGE" => Ok(RiskCategory::Pledge),
            "SEIZED" => Ok(RiskCategory::Seized),
            _ => Err(DomainError::Validation(format!(
                "Unknown risk category: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tokens_round_trip() {
        for category in [
            RiskCategory::None,
            RiskCategory::InArrears3Months,
            RiskCategory::InArrears6Months,
            RiskCategory::Pledge,
            RiskCategory::Seized,
        ] {
            let token = serde_json::to_string(&category).unwrap();
            assert_eq!(serde_json::from_str::<RiskCategory>(&token).unwrap(), category);
            assert_eq!(category.to_string().parse::<RiskCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_tokens_match_firm_contract() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::InArrears3Months).unwrap(),
            "\"IN_ARREARS_3_MONTHS\""
        );
        assert_eq!(
            serde_json::to_string(&RiskCategory::Seized).unwrap(),
            "\"SEIZED\""
        );
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert!("BANKRUPT".parse::<RiskCategory>().is_err());
    }
}
