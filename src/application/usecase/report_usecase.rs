// src/application/usecase/report_usecase.rs
// In-memory purchase report for an existing customer

use std::sync::Arc;

use rand::Rng;
use serde_json::Value;

use crate::application::synthesizer;
use crate::domain::errors::{AppError, AppResult, LedgerError};
use crate::domain::models::PurchaseReport;
use crate::domain::repository::LedgerApi;

/// Generates synthetic purchase data attributed to an existing customer.
/// Purely generative: the upstream is only consulted to look the customer
/// up, and nothing is written back.
pub struct PurchaseReporter {
    ledger: Arc<dyn LedgerApi>,
}

impl PurchaseReporter {
    pub fn new(ledger: Arc<dyn LedgerApi>) -> Self {
        Self { ledger }
    }

    pub async fn generate_purchase_data<R: Rng + Send>(
        &self,
        rng: &mut R,
        customer_id: &str,
    ) -> AppResult<PurchaseReport> {
        // Any upstream rejection of the lookup is reported as not-found,
        // never as the raw upstream status.
        let customer = match self.ledger.get_customer(customer_id).await {
            Ok(record) => record,
            Err(LedgerError::UpstreamRejected { .. }) => {
                return Err(AppError::NotFound(format!(
                    "Customer {customer_id} not found"
                )))
            }
            Err(e) => return Err(e.into()),
        };

        let first_name = field_str(&customer, "first_name")?;
        let last_name = field_str(&customer, "last_name")?;

        let num_purchases = synthesizer::random_purchase_count(rng);
        log::info!(
            "Generating {} fake purchases for customer {}",
            num_purchases,
            customer_id
        );
        let purchases = synthesizer::synthesize_reported_purchases(rng, num_purchases);

        Ok(PurchaseReport {
            customer_id: customer_id.to_string(),
            customer_name: format!("{} {}", first_name, last_name),
            num_purchases,
            purchases,
        })
    }
}

fn field_str<'a>(record: &'a Value, field: &str) -> AppResult<&'a str> {
    record[field].as_str().ok_or_else(|| {
        AppError::Ledger(LedgerError::Payload(format!(
            "customer record missing {field}"
        )))
    })
}
