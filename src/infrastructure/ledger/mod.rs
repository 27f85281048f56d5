// src/infrastructure/ledger/mod.rs
// HTTP implementation of the Ledger API repository

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request};
use hyper_tls::HttpsConnector;
use serde_json::Value;

use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::models::{Account, CreatedEntity, Customer, Purchase, UpdateAddress};
use crate::domain::repository::LedgerApi;

/// Client for the banking sandbox REST API. The API key is passed as a
/// `key` query parameter on every request, per the upstream's auth scheme.
pub struct HttpLedgerClient {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: String,
    api_key: String,
}

impl HttpLedgerClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let https = HttpsConnector::new();
        let client = Client::builder().build::<_, Body>(https);
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}?key={}", self.base_url, path, self.api_key)
    }

    /// Issue one request and check the status against `expect`. Success
    /// bodies are parsed as JSON; rejection bodies are carried verbatim
    /// (as JSON when they parse, as a raw string otherwise).
    async fn send(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> LedgerResult<(u16, Value)> {
        let builder = Request::builder().method(method).uri(self.url(path));
        let request = match body {
            Some(v) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(v)?)),
            None => builder.body(Body::empty()),
        }
        .map_err(|e| LedgerError::Network(format!("{operation}: failed to build request: {e}")))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| LedgerError::Network(format!("{operation}: {e}")))?;

        let status = response.status().as_u16();
        let bytes = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| LedgerError::Network(format!("{operation}: failed to read body: {e}")))?;
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        Ok((status, value))
    }

    async fn request_json(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&Value>,
        expect: &[u16],
    ) -> LedgerResult<Value> {
        let (status, value) = self.send(operation, method, path, body).await?;
        if expect.contains(&status) {
            Ok(value)
        } else {
            log::error!("{} rejected upstream: status {}", operation, status);
            Err(LedgerError::UpstreamRejected {
                operation,
                status,
                body: value,
            })
        }
    }
}

/// Unwrap the `objectCreated` envelope the upstream returns for creations.
fn extract_created(operation: &'static str, raw: Value) -> LedgerResult<CreatedEntity> {
    let record = raw
        .get("objectCreated")
        .cloned()
        .ok_or_else(|| LedgerError::Payload(format!("{operation}: response missing objectCreated")))?;
    let id = record
        .get("_id")
        .and_then(Value::as_str)
        .ok_or_else(|| LedgerError::Payload(format!("{operation}: created object missing _id")))?
        .to_string();
    Ok(CreatedEntity { id, record, raw })
}

#[async_trait]
impl LedgerApi for HttpLedgerClient {
    async fn create_customer(&self, customer: &Customer) -> LedgerResult<CreatedEntity> {
        let body = serde_json::to_value(customer)?;
        let raw = self
            .request_json("create_customer", Method::POST, "/customers", Some(&body), &[201])
            .await?;
        extract_created("create_customer", raw)
    }

    async fn get_customer(&self, customer_id: &str) -> LedgerResult<Value> {
        self.request_json(
            "get_customer",
            Method::GET,
            &format!("/customers/{customer_id}"),
            None,
            &[200],
        )
        .await
    }

    async fn get_all_customers(&self) -> LedgerResult<Value> {
        self.request_json("get_all_customers", Method::GET, "/customers", None, &[200])
            .await
    }

    async fn update_customer_address(
        &self,
        customer_id: &str,
        address: &UpdateAddress,
    ) -> LedgerResult<Value> {
        // Only the fields that are set go upstream, nested under "address".
        let body = serde_json::json!({ "address": serde_json::to_value(address)? });
        self.request_json(
            "update_customer_address",
            Method::PUT,
            &format!("/customers/{customer_id}"),
            Some(&body),
            &[202],
        )
        .await
    }

    async fn create_account(
        &self,
        customer_id: &str,
        account: &Account,
    ) -> LedgerResult<CreatedEntity> {
        let body = serde_json::to_value(account)?;
        let raw = self
            .request_json(
                "create_account",
                Method::POST,
                &format!("/customers/{customer_id}/accounts"),
                Some(&body),
                &[201],
            )
            .await?;
        extract_created("create_account", raw)
    }

    async fn get_accounts(&self, customer_id: &str) -> LedgerResult<Value> {
        self.request_json(
            "get_accounts",
            Method::GET,
            &format!("/customers/{customer_id}/accounts"),
            None,
            &[200],
        )
        .await
    }

    async fn create_purchase(
        &self,
        account_id: &str,
        purchase: &Purchase,
    ) -> LedgerResult<Value> {
        let body = serde_json::to_value(purchase)?;
        // The sandbox answers purchase creation with either 200 or 201.
        self.request_json(
            "create_purchase",
            Method::POST,
            &format!("/accounts/{account_id}/purchases"),
            Some(&body),
            &[200, 201],
        )
        .await
    }

    async fn get_purchases(&self, account_id: &str) -> LedgerResult<Value> {
        self.request_json(
            "get_purchases",
            Method::GET,
            &format!("/accounts/{account_id}/purchases"),
            None,
            &[200],
        )
        .await
    }
}
