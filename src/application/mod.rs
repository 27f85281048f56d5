// src/application/mod.rs
pub mod catalog;
pub mod identity;
pub mod synthesizer;
pub mod usecase;

// Re-export public API
pub use usecase::{FakeUserOrchestrator, PurchaseReporter};
