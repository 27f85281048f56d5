// src/application/usecase/materialize_usecase.rs
// Materialize-fake-user use case

use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use crate::application::catalog;
use crate::application::identity::{self, IdentityGenerator};
use crate::application::synthesizer;
use crate::domain::errors::AppResult;
use crate::domain::models::{Account, FakeUserResult, FakeUserSummary};
use crate::domain::repository::LedgerApi;

/// Materializes a full fake customer upstream: customer, then a credit
/// card account, then 10-30 purchases, strictly in sequence. A failure at
/// any step aborts the remaining steps; entities already created upstream
/// stay as they are (no compensating deletes).
pub struct FakeUserOrchestrator {
    ledger: Arc<dyn LedgerApi>,
    identity: Arc<Mutex<dyn IdentityGenerator>>,
}

impl FakeUserOrchestrator {
    pub fn new(ledger: Arc<dyn LedgerApi>, identity: Arc<Mutex<dyn IdentityGenerator>>) -> Self {
        Self { ledger, identity }
    }

    pub async fn materialize_fake_user<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> AppResult<FakeUserResult> {
        let customer = {
            let mut identity = self.identity.lock().await;
            identity::generate_customer(&mut *identity, rng)
        };
        let created_customer = self.ledger.create_customer(&customer).await?;
        log::info!("Created fake customer {}", created_customer.id);

        // The nickname uses a fresh first name; it is cosmetic and
        // deliberately not tied to the customer's own name.
        let nickname = {
            let mut identity = self.identity.lock().await;
            format!("{}'s Credit Card", identity.first_name())
        };
        let account = Account::credit_card(nickname, rng.gen_range(0..=500));
        let created_account = self
            .ledger
            .create_account(&created_customer.id, &account)
            .await?;
        log::info!(
            "Created account {} for customer {}",
            created_account.id,
            created_customer.id
        );

        let target = synthesizer::random_purchase_count(rng);
        log::info!("Generating {} fake purchases", target);
        let mut purchases = Vec::with_capacity(target);
        for _ in 0..target {
            let category = catalog::random_category(rng);
            let purchase = synthesizer::synthesize_purchase(rng, category);
            let persisted = self
                .ledger
                .create_purchase(&created_account.id, &purchase)
                .await?;
            purchases.push(persisted);
        }

        let summary = FakeUserSummary {
            customer_id: created_customer.id,
            account_id: created_account.id,
            num_purchases: purchases.len(),
        };
        Ok(FakeUserResult {
            customer: created_customer.record,
            account: created_account.record,
            purchases,
            summary,
        })
    }
}
