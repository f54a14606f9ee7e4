use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, Url};
use tokio::time::timeout;

use crate::domain::{InventoryItem, LogEntry};

use super::error::SyncError;
use super::wire::{decode_push_response, decode_stock_response, PushReceipt, PushRequest};

/// Plain text keeps the POST a "simple" request for the sheet service.
const PUSH_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

pub const STOCK_QUERY_KEY: &str = "action";
pub const STOCK_QUERY_VALUE: &str = "getInventory";

/// One-shot exchanges with the remote sheet endpoint. No retries.
pub struct SyncClient {
    client: Client,
    endpoint: Option<Url>,
    push_timeout: Duration,
}

impl SyncClient {
    pub fn new(endpoint: Option<Url>, push_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint,
            push_timeout,
        })
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// Send the full log list. Abandoned after the push timeout.
    pub async fn push_logs(&self, logs: &[LogEntry]) -> Result<PushReceipt, SyncError> {
        let endpoint = self.endpoint.as_ref().ok_or(SyncError::MissingEndpoint)?;
        let body = serde_json::to_string(&PushRequest { logs }).map_err(SyncError::Encode)?;

        let started = Instant::now();
        let exchange = async {
            let response = self
                .client
                .post(endpoint.clone())
                .header(CONTENT_TYPE, PUSH_CONTENT_TYPE)
                .body(body)
                .send()
                .await
                .map_err(SyncError::Connection)?;
            read_success_body(response).await
        };

        let result = match timeout(self.push_timeout, exchange).await {
            Ok(result) => result.and_then(|text| decode_push_response(&text)),
            Err(_) => Err(SyncError::Timeout {
                seconds: self.push_timeout.as_secs(),
            }),
        };

        let latency_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(
                host = endpoint.host_str().unwrap_or(""),
                entries = logs.len(),
                latency_ms,
                "Pushed activity log"
            ),
            Err(err) => tracing::warn!(
                host = endpoint.host_str().unwrap_or(""),
                kind = err.kind(),
                latency_ms,
                error = %err,
                "Activity log push failed"
            ),
        }
        result
    }

    /// Fetch the warehouse stock snapshot.
    pub async fn pull_stock(&self) -> Result<Vec<InventoryItem>, SyncError> {
        let endpoint = self.endpoint.as_ref().ok_or(SyncError::MissingEndpoint)?;
        let url = stock_url(endpoint);

        let started = Instant::now();
        let result = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(SyncError::Connection)?;
            let text = read_success_body(response).await?;
            decode_stock_response(&text)
        }
        .await;

        let latency_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(rows) => tracing::info!(
                host = endpoint.host_str().unwrap_or(""),
                rows = rows.len(),
                latency_ms,
                "Pulled warehouse stock"
            ),
            Err(err) => tracing::warn!(
                host = endpoint.host_str().unwrap_or(""),
                kind = err.kind(),
                latency_ms,
                error = %err,
                "Warehouse stock pull failed"
            ),
        }
        result
    }
}

/// Base URL plus the inventory-read selector, keeping any existing query.
pub fn stock_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair(STOCK_QUERY_KEY, STOCK_QUERY_VALUE);
    url
}

async fn read_success_body(response: Response) -> Result<String, SyncError> {
    let status = response.status();
    let text = response.text().await.map_err(SyncError::Connection)?;
    tracing::debug!(status = status.as_u16(), bytes = text.len(), "Remote response");
    if !status.is_success() {
        return Err(SyncError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: text,
        });
    }
    Ok(text)
}
