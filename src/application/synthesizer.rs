// src/application/synthesizer.rs
// Randomized purchase synthesis

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::application::catalog;
use crate::domain::models::{Purchase, ReportedPurchase};

pub const PURCHASE_MEDIUM: &str = "balance";
pub const PURCHASE_STATUS: &str = "completed";

/// Purchase dates fall within the past 30 days, inclusive of today.
const DATE_WINDOW_DAYS: i64 = 30;

/// Amount bounds in cents: [5.00, 500.00].
const MIN_AMOUNT_CENTS: i64 = 500;
const MAX_AMOUNT_CENTS: i64 = 50_000;

/// Bounds for the per-customer purchase count, inclusive.
pub const MIN_PURCHASES: usize = 10;
pub const MAX_PURCHASES: usize = 30;

/// How many purchases to synthesize for one customer.
pub fn random_purchase_count<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(MIN_PURCHASES..=MAX_PURCHASES)
}

/// ISO-8601 date a uniform 0..=30 days before today.
fn random_recent_date<R: Rng>(rng: &mut R) -> String {
    let days_ago = rng.gen_range(0..=DATE_WINDOW_DAYS);
    (Utc::now().date_naive() - Duration::days(days_ago)).to_string()
}

/// Uniform amount on the two-decimal grid in [5.00, 500.00]. Drawn as
/// integer cents so the value is exact for a given RNG draw.
fn random_amount<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS), 2)
}

/// Synthesize one purchase attributed to a random merchant of `category`.
pub fn synthesize_purchase<R: Rng>(rng: &mut R, category: &str) -> Purchase {
    let (merchant_id, merchant_name) = catalog::pick_merchant(rng, category);
    Purchase {
        merchant_id: merchant_id.to_string(),
        medium: PURCHASE_MEDIUM.to_string(),
        purchase_date: random_recent_date(rng),
        amount: random_amount(rng),
        status: PURCHASE_STATUS.to_string(),
        description: format!("{} - {}", merchant_name, category),
    }
}

/// Report-mode variant: carries the merchant name and category that the
/// upstream purchase schema has no fields for.
pub fn synthesize_reported_purchase<R: Rng>(rng: &mut R, category: &str) -> ReportedPurchase {
    let (merchant_id, merchant_name) = catalog::pick_merchant(rng, category);
    ReportedPurchase {
        merchant_id: merchant_id.to_string(),
        merchant_name: merchant_name.to_string(),
        category: category.to_string(),
        medium: PURCHASE_MEDIUM.to_string(),
        purchase_date: random_recent_date(rng),
        amount: random_amount(rng),
        status: PURCHASE_STATUS.to_string(),
        description: format!("{} - {}", merchant_name, category),
    }
}

/// `count` independent purchases, each over an independently random
/// category. Repeated categories and merchants are expected.
pub fn synthesize_purchases<R: Rng>(rng: &mut R, count: usize) -> Vec<Purchase> {
    (0..count)
        .map(|_| {
            let category = catalog::random_category(rng);
            synthesize_purchase(rng, category)
        })
        .collect()
}

/// Batch variant of [`synthesize_reported_purchase`].
pub fn synthesize_reported_purchases<R: Rng>(rng: &mut R, count: usize) -> Vec<ReportedPurchase> {
    (0..count)
        .map(|_| {
            let category = catalog::random_category(rng);
            synthesize_reported_purchase(rng, category)
        })
        .collect()
}
