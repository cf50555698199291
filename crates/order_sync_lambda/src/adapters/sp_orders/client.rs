use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use order_sync_core::config::SyncConfig;
use order_sync_core::window::DateWindow;

use super::error::SpOrdersError;
use super::parser::parse_orders_page;
use super::response::{OrdersPage, OrdersResponse};
use crate::handlers::paginate::OrdersPageSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the order listing endpoint of the configured region.
///
/// The job credential travels per call rather than per client, so one
/// client instance serves every job in a batch.
#[derive(Debug, Clone)]
pub struct SpOrdersClient {
    http: Client,
    base_url: String,
    marketplace_id: String,
    page_size: u32,
}

impl SpOrdersClient {
    pub fn new(config: &SyncConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build listing client");
        Self {
            http,
            base_url: config.region.base_url().trim_end_matches('/').to_string(),
            marketplace_id: config.marketplace_id.clone(),
            page_size: config.page_size,
        }
    }

    /// Fetch one listing page, passing the continuation token from the
    /// previous page when there is one.
    pub fn fetch_page(
        &self,
        access_token: &str,
        window: &DateWindow,
        next_token: Option<&str>,
    ) -> Result<OrdersPage, SpOrdersError> {
        let url = format!("{}/orders/v0/orders", self.base_url);
        let mut query = vec![
            ("MarketplaceIds", self.marketplace_id.clone()),
            ("CreatedAfter", window.created_after.clone()),
            ("CreatedBefore", window.created_before.clone()),
            ("MaxResultsPerPage", self.page_size.to_string()),
        ];
        if let Some(token) = next_token {
            query.push(("NextToken", token.to_string()));
        }

        let request = self
            .http
            .get(url)
            .query(&query)
            .bearer_auth(access_token)
            .header("x-amz-access-token", access_token);

        let response: OrdersResponse = block_on_request(async move {
            let response = request.send().await.map_err(SpOrdersError::Http)?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SpOrdersError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            response.json().await.map_err(SpOrdersError::Json)
        })?;

        parse_orders_page(response)
    }

    /// Fetch the raw detail payload for a single order.
    pub fn fetch_order(&self, access_token: &str, order_id: &str) -> Result<Value, SpOrdersError> {
        let url = format!("{}/orders/v0/orders/{}", self.base_url, order_id);
        let request = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header("x-amz-access-token", access_token);

        block_on_request(async move {
            let response = request.send().await.map_err(SpOrdersError::Http)?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SpOrdersError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            response.json().await.map_err(SpOrdersError::Json)
        })
    }
}

impl OrdersPageSource for SpOrdersClient {
    fn fetch_page(
        &self,
        access_token: &str,
        window: &DateWindow,
        next_token: Option<&str>,
    ) -> Result<OrdersPage, SpOrdersError> {
        SpOrdersClient::fetch_page(self, access_token, window, next_token)
    }
}

// Handler logic is synchronous; requests run on the Lambda runtime's
// multi-threaded executor via block_in_place.
fn block_on_request<T>(
    request: impl Future<Output = Result<T, SpOrdersError>>,
) -> Result<T, SpOrdersError> {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(request))
}
