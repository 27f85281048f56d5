// tests/common/mod.rs
// Scripted in-memory stand-in for the upstream sandbox
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use ledger_proxy::application::identity::IdentityGenerator;
use ledger_proxy::domain::errors::{LedgerError, LedgerResult};
use ledger_proxy::domain::models::{Account, CreatedEntity, Customer, Purchase, UpdateAddress};
use ledger_proxy::domain::repository::LedgerApi;

#[derive(Default)]
pub struct Calls {
    pub create_customer: usize,
    pub get_customer: usize,
    pub update_address: usize,
    pub create_account: usize,
    pub create_purchase: usize,
    pub persisted_purchases: usize,
}

/// Ledger API double with injectable per-operation failures and call
/// counters.
#[derive(Default)]
pub struct ScriptedLedger {
    pub fail_create_customer: Option<u16>,
    pub fail_create_account: Option<u16>,
    /// 1-based index of the purchase-creation call that should fail.
    pub fail_purchase_at: Option<usize>,
    /// When set, get_customer fails with this upstream status.
    pub missing_customer_status: Option<u16>,
    pub calls: Mutex<Calls>,
}

fn rejected(operation: &'static str, status: u16) -> LedgerError {
    LedgerError::UpstreamRejected {
        operation,
        status,
        body: json!({ "message": "scripted failure" }),
    }
}

fn created(kind: &str, n: usize) -> CreatedEntity {
    let id = format!("{kind}-{n}");
    let record = json!({ "_id": id });
    CreatedEntity {
        id,
        record: record.clone(),
        raw: json!({ "code": 201, "objectCreated": record }),
    }
}

#[async_trait]
impl LedgerApi for ScriptedLedger {
    async fn create_customer(&self, _customer: &Customer) -> LedgerResult<CreatedEntity> {
        let mut calls = self.calls.lock().unwrap();
        calls.create_customer += 1;
        if let Some(status) = self.fail_create_customer {
            return Err(rejected("create_customer", status));
        }
        Ok(created("customer", calls.create_customer))
    }

    async fn get_customer(&self, customer_id: &str) -> LedgerResult<Value> {
        self.calls.lock().unwrap().get_customer += 1;
        if let Some(status) = self.missing_customer_status {
            return Err(rejected("get_customer", status));
        }
        Ok(json!({
            "_id": customer_id,
            "first_name": "Ada",
            "last_name": "Lovelace",
        }))
    }

    async fn get_all_customers(&self) -> LedgerResult<Value> {
        Ok(json!([]))
    }

    async fn update_customer_address(
        &self,
        _customer_id: &str,
        _address: &UpdateAddress,
    ) -> LedgerResult<Value> {
        self.calls.lock().unwrap().update_address += 1;
        Ok(json!({ "code": 202, "message": "Accepted" }))
    }

    async fn create_account(
        &self,
        _customer_id: &str,
        _account: &Account,
    ) -> LedgerResult<CreatedEntity> {
        let mut calls = self.calls.lock().unwrap();
        calls.create_account += 1;
        if let Some(status) = self.fail_create_account {
            return Err(rejected("create_account", status));
        }
        Ok(created("account", calls.create_account))
    }

    async fn get_accounts(&self, _customer_id: &str) -> LedgerResult<Value> {
        Ok(json!([]))
    }

    async fn create_purchase(
        &self,
        _account_id: &str,
        _purchase: &Purchase,
    ) -> LedgerResult<Value> {
        let mut calls = self.calls.lock().unwrap();
        calls.create_purchase += 1;
        if self.fail_purchase_at == Some(calls.create_purchase) {
            return Err(rejected("create_purchase", 400));
        }
        calls.persisted_purchases += 1;
        Ok(json!({
            "code": 201,
            "objectCreated": { "_id": format!("purchase-{}", calls.persisted_purchases) },
        }))
    }

    async fn get_purchases(&self, _account_id: &str) -> LedgerResult<Value> {
        Ok(json!([]))
    }
}

/// Fixed-output identity source so orchestrator tests stay deterministic.
pub struct StubIdentity;

impl IdentityGenerator for StubIdentity {
    fn first_name(&mut self) -> String {
        "Grace".to_string()
    }

    fn last_name(&mut self) -> String {
        "Hopper".to_string()
    }

    fn street_name(&mut self) -> String {
        "Main Street".to_string()
    }

    fn city(&mut self) -> String {
        "Arlington".to_string()
    }

    fn state_abbr(&mut self) -> String {
        "VA".to_string()
    }

    fn zipcode(&mut self) -> String {
        "22201".to_string()
    }
}
