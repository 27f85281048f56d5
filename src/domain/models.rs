// src/domain/models.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// US-style postal address, as expected by the Ledger API customer schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
}

/// Partial address for customer updates. Unset fields are omitted from the
/// upstream request body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl UpdateAddress {
    /// True when no field is set. Such a request is rejected locally
    /// before any upstream call is made.
    pub fn is_empty(&self) -> bool {
        self.street_number.is_none()
            && self.street_name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub account_type: String,
    pub nickname: String,
    pub rewards: u32,
    pub balance: i64,
}

impl Account {
    /// Zero-balance credit card account, the only kind the synthesizer
    /// materializes.
    pub fn credit_card(nickname: String, rewards: u32) -> Self {
        Self {
            account_type: "Credit Card".to_string(),
            nickname,
            rewards,
            balance: 0,
        }
    }
}

/// Purchase record in the shape the Ledger API persists. The upstream
/// schema has no merchant name or category fields; those only appear on
/// [`ReportedPurchase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub merchant_id: String,
    pub medium: String,
    pub purchase_date: String,
    pub amount: Decimal,
    pub status: String,
    pub description: String,
}

/// Report-mode purchase: same synthesized fields plus the merchant name
/// and category, which the report surfaces but the upstream schema drops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedPurchase {
    pub merchant_id: String,
    pub merchant_name: String,
    pub category: String,
    pub medium: String,
    pub purchase_date: String,
    pub amount: Decimal,
    pub status: String,
    pub description: String,
}

/// An entity created upstream. `record` is the created object itself,
/// `raw` the full response body (the upstream wraps creations in an
/// `objectCreated` envelope).
#[derive(Debug, Clone)]
pub struct CreatedEntity {
    pub id: String,
    pub record: Value,
    pub raw: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FakeUserSummary {
    pub customer_id: String,
    pub account_id: String,
    pub num_purchases: usize,
}

/// Aggregate result of a materialize-fake-user run: everything that was
/// persisted upstream, plus a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FakeUserResult {
    pub customer: Value,
    pub account: Value,
    pub purchases: Vec<Value>,
    pub summary: FakeUserSummary,
}

/// In-memory purchase report for an existing customer. Nothing in it is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReport {
    pub customer_id: String,
    pub customer_name: String,
    pub num_purchases: usize,
    pub purchases: Vec<ReportedPurchase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_address_is_detected() {
        assert!(UpdateAddress::default().is_empty());

        let partial = UpdateAddress {
            city: Some("Austin".to_string()),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }

    #[test]
    fn unset_update_fields_are_omitted_from_json() {
        let partial = UpdateAddress {
            zip: Some("78701".to_string()),
            ..Default::default()
        };
        let v = serde_json::to_value(&partial).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["zip"], "78701");
    }

    #[test]
    fn account_type_serializes_as_type() {
        let account = Account::credit_card("Ava's Credit Card".to_string(), 120);
        let v = serde_json::to_value(&account).unwrap();
        assert_eq!(v["type"], "Credit Card");
        assert_eq!(v["balance"], 0);
    }
}
