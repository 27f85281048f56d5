// tests/http.rs
// Routing and error mapping on the service surface

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tokio::sync::Mutex;
use tower::ServiceExt;

use common::{ScriptedLedger, StubIdentity};
use ledger_proxy::application::usecase::{FakeUserOrchestrator, PurchaseReporter};
use ledger_proxy::domain::repository::LedgerApi;
use ledger_proxy::infrastructure::http::{router, AppState};

fn app(ledger: Arc<ScriptedLedger>) -> Router {
    let ledger: Arc<dyn LedgerApi> = ledger;
    router(AppState {
        orchestrator: Arc::new(FakeUserOrchestrator::new(
            ledger.clone(),
            Arc::new(Mutex::new(StubIdentity)),
        )),
        reporter: Arc::new(PurchaseReporter::new(ledger.clone())),
        ledger,
    })
}

#[tokio::test]
async fn empty_address_update_is_rejected_without_an_upstream_call() {
    let ledger = Arc::new(ScriptedLedger::default());
    let response = app(ledger.clone())
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/customers/abc")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ledger.calls.lock().unwrap().update_address, 0);
}

#[tokio::test]
async fn partial_address_update_reaches_the_upstream() {
    let ledger = Arc::new(ScriptedLedger::default());
    let response = app(ledger.clone())
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/customers/abc")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"city": "Austin"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ledger.calls.lock().unwrap().update_address, 1);
}

#[tokio::test]
async fn purchase_data_for_a_missing_customer_is_a_404() {
    let ledger = Arc::new(ScriptedLedger {
        missing_customer_status: Some(500),
        ..Default::default()
    });
    let response = app(ledger)
        .oneshot(
            Request::builder()
                .uri("/customers/ghost/purchase_data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn purchase_data_for_an_existing_customer_succeeds() {
    let ledger = Arc::new(ScriptedLedger::default());
    let response = app(ledger)
        .oneshot(
            Request::builder()
                .uri("/customers/cust-42/purchase_data")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_fake_user_succeeds_end_to_end() {
    let ledger = Arc::new(ScriptedLedger::default());
    let response = app(ledger.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate_fake_user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!((10..=30).contains(&ledger.calls.lock().unwrap().create_purchase));
}

#[tokio::test]
async fn generate_fake_user_relays_the_failing_steps_status() {
    let ledger = Arc::new(ScriptedLedger {
        fail_create_account: Some(409),
        ..Default::default()
    });
    let response = app(ledger.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate_fake_user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(ledger.calls.lock().unwrap().create_purchase, 0);
}
