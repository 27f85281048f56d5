// src/domain/mod.rs
pub mod errors;
pub mod models;
pub mod repository;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, LedgerError, LedgerResult};
pub use models::{
    Account, Address, CreatedEntity, Customer, FakeUserResult, FakeUserSummary, Purchase,
    PurchaseReport, ReportedPurchase, UpdateAddress,
};
pub use repository::LedgerApi;
