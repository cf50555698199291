use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::handlers::forward::NormalizeSink;

/// Internal sink that receives forwarded order identifiers.
pub const DEFAULT_NORMALIZE_ENDPOINT: &str =
    "https://integraciones.infrastructure-t1.com/amazon/orders/normalize";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors encountered while handing one order to the normalization sink.
#[derive(Debug)]
pub enum NormalizeError {
    Http(reqwest::Error),
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for NormalizeError {
    fn from(err: reqwest::Error) -> Self {
        NormalizeError::Http(err)
    }
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Http(err) => write!(f, "normalization request failed: {err}"),
            NormalizeError::Status { status, body } => {
                write!(f, "normalization request returned status {status}: {body}")
            }
        }
    }
}

#[derive(Serialize)]
struct NormalizeRequest<'a> {
    seller_id: &'a str,
    order_id: &'a str,
}

/// HTTP adapter for the internal normalization endpoint.
#[derive(Debug, Clone)]
pub struct HttpNormalizeSink {
    http: Client,
    endpoint: String,
}

impl HttpNormalizeSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build normalization client");
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

impl NormalizeSink for HttpNormalizeSink {
    fn forward_order(&self, seller_id: &str, order_id: &str) -> Result<(), NormalizeError> {
        let request = self.http.post(&self.endpoint).json(&NormalizeRequest {
            seller_id,
            order_id,
        });

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = request.send().await.map_err(NormalizeError::Http)?;
                let status = response.status().as_u16();
                // Success is strictly 200; the sink treats anything else
                // as a failed normalization.
                if status == 200 {
                    Ok(())
                } else {
                    let body = response.text().await.unwrap_or_default();
                    Err(NormalizeError::Status { status, body })
                }
            })
        })
    }
}
