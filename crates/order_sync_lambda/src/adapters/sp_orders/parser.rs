use super::error::SpOrdersError;
use super::response::{OrdersPage, OrdersResponse};

pub(super) fn parse_orders_page(resp: OrdersResponse) -> Result<OrdersPage, SpOrdersError> {
    if let Some(errors) = resp.errors.filter(|errors| !errors.is_empty()) {
        let rendered = errors
            .iter()
            .map(|error| {
                format!(
                    "{}: {}",
                    error.code.as_deref().unwrap_or("unknown"),
                    error.message.as_deref().unwrap_or("no message"),
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SpOrdersError::Api(rendered));
    }

    let Some(payload) = resp.payload else {
        return Ok(OrdersPage {
            order_ids: Vec::new(),
            next_token: None,
        });
    };

    let order_ids = payload
        .orders
        .into_iter()
        .filter_map(|order| order.amazon_order_id)
        .filter(|id| !id.is_empty())
        .collect();

    Ok(OrdersPage {
        order_ids,
        next_token: payload.next_token,
    })
}
