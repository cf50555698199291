/// One decoded listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersPage {
    pub order_ids: Vec<String>,
    pub next_token: Option<String>,
}

#[derive(serde::Deserialize)]
pub(super) struct OrdersResponse {
    pub(super) payload: Option<OrdersPayload>,
    pub(super) errors: Option<Vec<ApiError>>,
}

#[derive(serde::Deserialize)]
pub(super) struct OrdersPayload {
    #[serde(rename = "Orders", default)]
    pub(super) orders: Vec<OrderSummary>,
    #[serde(rename = "NextToken")]
    pub(super) next_token: Option<String>,
}

#[derive(serde::Deserialize)]
pub(super) struct OrderSummary {
    #[serde(rename = "AmazonOrderId")]
    pub(super) amazon_order_id: Option<String>,
}

#[derive(serde::Deserialize)]
pub(super) struct ApiError {
    pub(super) code: Option<String>,
    pub(super) message: Option<String>,
}
