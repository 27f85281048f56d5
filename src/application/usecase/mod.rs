pub mod materialize_usecase;
pub mod report_usecase;

// Re-export public API
pub use materialize_usecase::FakeUserOrchestrator;
pub use report_usecase::PurchaseReporter;
