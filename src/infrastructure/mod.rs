// src/infrastructure/mod.rs
pub mod http;
pub mod ledger;
