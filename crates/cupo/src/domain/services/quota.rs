//! Quota evaluation - how much credit a client may be granted
//!
//! Pure function over the client's financial history, declared salary, and
//! the risk category reported by the external firm.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::RiskCategory;

/// Inputs to one quota evaluation. Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaInput {
    /// Largest amount the client ever fully repaid.
    pub max_past_credit: Decimal,
    /// Sum of the client's currently outstanding grants.
    pub total_current_credit: Decimal,
    /// Salary declared in the request.
    pub current_salary: Decimal,
    pub risk: RiskCategory,
}

/// Evaluate the quota for one request.
///
/// `SEIZED` always yields zero. Every other category takes the greater of a
/// risk-scaled salary and the best repaid amount, minus what is still owed:
///
/// `max(salary * multiplier, max_past_credit) - total_current_credit`
///
/// The result is returned exactly as computed; a negative quota is a valid
/// outcome and is not floored. Callers decide what a non-positive quota
/// means.
pub fn evaluate_quota(input: &QuotaInput) -> Result<Decimal, DomainError> {
    ensure_not_negative("max_past_credit", input.max_past_credit)?;
    ensure_not_negative("total_current_credit", input.total_current_credit)?;
    ensure_not_negative("current_salary", input.current_salary)?;

    let multiplier = match input.risk {
        RiskCategory::None => Decimal::from(3),
        RiskCategory::InArrears3Months => Decimal::new(35, 1),
        RiskCategory::InArrears6Months => Decimal::from(4),
        RiskCategory::Pledge => Decimal::ONE,
        RiskCategory::Seized => return Ok(Decimal::ZERO),
    };

    let base = (input.current_salary * multiplier).max(input.max_past_credit);
    Ok(base - input.total_current_credit)
}

fn ensure_not_negative(field: &'static str, value: Decimal) -> Result<(), DomainError> {
    if value < Decimal::ZERO {
        return Err(DomainError::invalid_quota_input(field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(
        salary: Decimal,
        max_past: Decimal,
        outstanding: Decimal,
        risk: RiskCategory,
    ) -> QuotaInput {
        QuotaInput {
            max_past_credit: max_past,
            total_current_credit: outstanding,
            current_salary: salary,
            risk,
        }
    }

    #[test]
    fn test_no_risk_takes_max_of_tripled_salary_and_past_credit() {
        let quota = evaluate_quota(&input(
            dec!(2000000),
            dec!(6500000),
            dec!(200000),
            RiskCategory::None,
        ))
        .unwrap();
        assert_eq!(quota, dec!(6300000));
    }

    #[test]
    fn test_three_months_arrears_scales_salary_by_three_and_a_half() {
        let quota = evaluate_quota(&input(
            dec!(2000000),
            dec!(5000000),
            dec!(200000),
            RiskCategory::InArrears3Months,
        ))
        .unwrap();
        assert_eq!(quota, dec!(6800000));
    }

    #[test]
    fn test_six_months_arrears_scales_salary_by_four() {
        let quota = evaluate_quota(&input(
            dec!(2000000),
            dec!(5000000),
            dec!(200000),
            RiskCategory::InArrears6Months,
        ))
        .unwrap();
        assert_eq!(quota, dec!(7800000));
    }

    #[test]
    fn test_pledge_uses_plain_salary() {
        let quota = evaluate_quota(&input(
            dec!(2000000),
            dec!(5000000),
            dec!(200000),
            RiskCategory::Pledge,
        ))
        .unwrap();
        assert_eq!(quota, dec!(4800000));
    }

    #[test]
    fn test_seized_always_yields_zero() {
        let quota = evaluate_quota(&input(
            dec!(2000000),
            dec!(6500000),
            dec!(200000),
            RiskCategory::Seized,
        ))
        .unwrap();
        assert_eq!(quota, Decimal::ZERO);

        // Even with extreme inputs the category alone decides.
        let quota = evaluate_quota(&input(
            dec!(99999999),
            dec!(99999999),
            Decimal::ZERO,
            RiskCategory::Seized,
        ))
        .unwrap();
        assert_eq!(quota, Decimal::ZERO);
    }

    #[test]
    fn test_negative_result_is_preserved() {
        // Outstanding debt larger than the base leaves a negative quota.
        let quota = evaluate_quota(&input(
            dec!(1000000),
            Decimal::ZERO,
            dec!(5000000),
            RiskCategory::Pledge,
        ))
        .unwrap();
        assert_eq!(quota, dec!(-4000000));
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let err = evaluate_quota(&input(
            dec!(-1),
            dec!(5000000),
            dec!(200000),
            RiskCategory::None,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidQuotaInput {
                field: "current_salary",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_past_credit_is_rejected() {
        let err = evaluate_quota(&input(
            dec!(2000000),
            dec!(-100),
            dec!(200000),
            RiskCategory::None,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidQuotaInput {
                field: "max_past_credit",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_outstanding_total_is_rejected() {
        let err = evaluate_quota(&input(
            dec!(2000000),
            dec!(5000000),
            dec!(-1),
            RiskCategory::Seized,
        ))
        .unwrap_err();
        // Validation runs before the seized short-circuit.
        assert!(matches!(
            err,
            DomainError::InvalidQuotaInput {
                field: "total_current_credit",
                ..
            }
        ));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let fixture = input(
            dec!(1500000),
            dec!(4000000),
            dec!(350000),
            RiskCategory::InArrears3Months,
        );
        let first = evaluate_quota(&fixture).unwrap();
        let second = evaluate_quota(&fixture).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fractional_multiplier_is_exact() {
        // 3.5 * 333333 must not drift the way binary floats would.
        let quota = evaluate_quota(&input(
            dec!(333333),
            Decimal::ZERO,
            Decimal::ZERO,
            RiskCategory::InArrears3Months,
        ))
        .unwrap();
        assert_eq!(quota, dec!(1166665.5));
    }
}
