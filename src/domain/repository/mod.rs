// src/domain/repository/mod.rs
// Repository interface for the upstream Ledger API collaborator

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::LedgerResult;
use crate::domain::models::{Account, CreatedEntity, Customer, Purchase, UpdateAddress};

/// The external banking sandbox that is the system of record for
/// customers, accounts, and purchases. All persistence lives behind this
/// seam; the service keeps no state of its own.
///
/// Read operations return the upstream JSON verbatim so pass-through
/// endpoints can relay it unchanged.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn create_customer(&self, customer: &Customer) -> LedgerResult<CreatedEntity>;

    async fn get_customer(&self, customer_id: &str) -> LedgerResult<Value>;

    async fn get_all_customers(&self) -> LedgerResult<Value>;

    async fn update_customer_address(
        &self,
        customer_id: &str,
        address: &UpdateAddress,
    ) -> LedgerResult<Value>;

    async fn create_account(
        &self,
        customer_id: &str,
        account: &Account,
    ) -> LedgerResult<CreatedEntity>;

    async fn get_accounts(&self, customer_id: &str) -> LedgerResult<Value>;

    async fn create_purchase(&self, account_id: &str, purchase: &Purchase)
        -> LedgerResult<Value>;

    async fn get_purchases(&self, account_id: &str) -> LedgerResult<Value>;
}
