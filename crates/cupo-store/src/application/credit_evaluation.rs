//! Credit Evaluation Service (Use Case)
//!
//! Processes one credit request end-to-end: ensure the client exists,
//! gather risk inputs, evaluate the quota, and record the grant.

use std::sync::Arc;

use rust_decimal::Decimal;

use cupo::{
    evaluate_quota, Client, ClientDirectory, CreditGrant, CreditHistory, CreditRequest,
    DomainError, GrantLedger, NewCreditGrant, QuotaInput, RiskOracle,
};

/// Application service for credit evaluation
pub struct CreditEvaluationService<D, H, L, O>
where
    D: ClientDirectory,
    H: CreditHistory,
    L: GrantLedger,
    O: RiskOracle,
{
    directory: Arc<D>,
    history: Arc<H>,
    ledger: Arc<L>,
    oracle: Arc<O>,
}

impl<D, H, L, O> CreditEvaluationService<D, H, L, O>
where
    D: ClientDirectory,
    H: CreditHistory,
    L: GrantLedger,
    O: RiskOracle,
{
    pub fn new(directory: Arc<D>, history: Arc<H>, ledger: Arc<L>, oracle: Arc<O>) -> Self {
        Self {
            directory,
            history,
            ledger,
            oracle,
        }
    }

    /// Process one credit request.
    ///
    /// Returns the recorded grant, or `None` when the evaluation completed
    /// without side effects beyond client creation: the client vanished
    /// between creation and re-fetch, or the quota came out non-positive.
    /// Any other failure aborts the remaining steps and propagates.
    pub async fn evaluate_credit_request(
        &self,
        request: CreditRequest,
    ) -> Result<Option<CreditGrant>, DomainError> {
        let person = &request.person;

        // The existence check and the create are not serialized against
        // concurrent requests for the same pair; the loser of that race
        // gets AlreadyExists here and this evaluation aborts.
        if !self
            .directory
            .exists(person.id_type, &person.id_value)
            .await?
        {
            self.directory.create(person).await?;
            tracing::info!(
                "Created client [{}, {}]",
                person.id_type,
                person.id_value
            );
        }

        let client = match self
            .directory
            .find(person.id_type, &person.id_value)
            .await?
        {
            Some(client) => client,
            // Store inconsistency: act-only-if-present, not an error.
            None => return Ok(None),
        };

        let input = self
            .gather_risk_inputs(&client, request.current_salary)
            .await?;
        let quota = evaluate_quota(&input)?;
        tracing::debug!(client_id = client.id, "Evaluated quota: {}", quota);

        if quota <= Decimal::ZERO {
            return Ok(None);
        }

        let grant = self
            .ledger
            .record(&NewCreditGrant::granted_today(client.id, quota))
            .await?;
        tracing::info!(
            client_id = client.id,
            grant_id = grant.id,
            "Recorded credit grant of {}",
            grant.amount
        );

        Ok(Some(grant))
    }

    /// Gather the quota inputs: financial history from the store, risk
    /// category from the external firm.
    async fn gather_risk_inputs(
        &self,
        client: &Client,
        current_salary: Decimal,
    ) -> Result<QuotaInput, DomainError> {
        let max_past_credit = self.history.max_repaid_amount(client.id).await?;
        let total_current_credit = self.history.current_outstanding_total(client.id).await?;
        let risk = self
            .oracle
            .risk_by_client(client.id_type, &client.id_value)
            .await?;

        Ok(QuotaInput {
            max_past_credit,
            total_current_credit,
            current_salary,
            risk,
        })
    }
}
