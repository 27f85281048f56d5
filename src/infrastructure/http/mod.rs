// src/infrastructure/http/mod.rs
// Service surface: pass-through routes plus the two synthesis endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::application::usecase::{FakeUserOrchestrator, PurchaseReporter};
use crate::domain::errors::{AppError, LedgerError};
use crate::domain::models::{Account, Customer, FakeUserResult, Purchase, PurchaseReport, UpdateAddress};
use crate::domain::repository::LedgerApi;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn LedgerApi>,
    pub orchestrator: Arc<FakeUserOrchestrator>,
    pub reporter: Arc<PurchaseReporter>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/customers", post(create_customer).get(get_all_customers))
        .route("/customers/:customer_id", get(get_customer).put(update_customer))
        .route(
            "/customers/:customer_id/accounts",
            post(create_account).get(get_accounts),
        )
        .route(
            "/accounts/:account_id/purchases",
            post(create_purchase).get(get_purchases),
        )
        .route("/customers/:customer_id/purchase_data", get(purchase_data))
        .route("/generate_fake_user", post(generate_fake_user))
        .with_state(state)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            // Pass-through endpoints relay the upstream status and body
            // verbatim.
            AppError::Ledger(LedgerError::UpstreamRejected { status, body, .. }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Value::String(msg)),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, Value::String(msg)),
            AppError::Ledger(LedgerError::Network(msg)) => {
                log::error!("Upstream unreachable: {}", msg);
                (StatusCode::BAD_GATEWAY, Value::String(msg))
            }
            other => {
                log::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String(other.to_string()),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// ============================================================================
// Pass-through handlers
// ============================================================================

async fn create_customer(
    State(state): State<AppState>,
    Json(customer): Json<Customer>,
) -> Result<Json<Value>, AppError> {
    let created = state.ledger.create_customer(&customer).await?;
    Ok(Json(created.raw))
}

async fn get_all_customers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.ledger.get_all_customers().await?))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.ledger.get_customer(&customer_id).await?))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(address): Json<UpdateAddress>,
) -> Result<Json<Value>, AppError> {
    // Rejected locally; an all-unset body never reaches the upstream.
    if address.is_empty() {
        return Err(AppError::Validation(
            "No fields provided for update".to_string(),
        ));
    }
    Ok(Json(
        state
            .ledger
            .update_customer_address(&customer_id, &address)
            .await?,
    ))
}

async fn create_account(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(account): Json<Account>,
) -> Result<Json<Value>, AppError> {
    let created = state.ledger.create_account(&customer_id, &account).await?;
    Ok(Json(created.raw))
}

async fn get_accounts(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.ledger.get_accounts(&customer_id).await?))
}

async fn create_purchase(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(purchase): Json<Purchase>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(
        state.ledger.create_purchase(&account_id, &purchase).await?,
    ))
}

async fn get_purchases(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.ledger.get_purchases(&account_id).await?))
}

// ============================================================================
// Synthesis handlers
// ============================================================================

async fn purchase_data(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<PurchaseReport>, AppError> {
    let mut rng = StdRng::from_entropy();
    let report = state
        .reporter
        .generate_purchase_data(&mut rng, &customer_id)
        .await?;
    Ok(Json(report))
}

async fn generate_fake_user(
    State(state): State<AppState>,
) -> Result<Json<FakeUserResult>, AppError> {
    let mut rng = StdRng::from_entropy();
    let result = state.orchestrator.materialize_fake_user(&mut rng).await?;
    Ok(Json(result))
}
