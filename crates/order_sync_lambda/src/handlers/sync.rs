use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use order_sync_core::config::SyncConfig;
use order_sync_core::contract::{BatchSummary, SyncJobPayload};
use order_sync_core::window::DateWindow;

use crate::adapters::throttle::Throttle;
use crate::handlers::forward::{forward_all, NormalizeSink};
use crate::handlers::paginate::{collect_order_ids, OrdersPageSource};
use crate::observer::{SyncEvent, SyncObserver};

/// Collaborators for one handler invocation.
pub struct SyncDependencies<'a> {
    pub orders: &'a dyn OrdersPageSource,
    pub sink: &'a dyn NormalizeSink,
    pub throttle: &'a dyn Throttle,
    pub observer: &'a dyn SyncObserver,
    pub config: &'a SyncConfig,
}

/// Lambda-style response envelope returned to the trigger mechanism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Process one SQS event: one sync job per record.
///
/// A record that fails to decode or validate is skipped; the rest of the
/// batch still runs. Only a structurally invalid event (no `Records` at
/// all) fails the invocation as a whole.
pub fn handle_sync_event(
    event: &Value,
    now: DateTime<Utc>,
    deps: &SyncDependencies<'_>,
) -> SyncResponse {
    let records = match event.get("Records").and_then(Value::as_array) {
        Some(records) if !records.is_empty() => records,
        _ => return structural_failure("No SQS records found in event"),
    };

    let mut summary = BatchSummary::default();
    for record in records {
        match decode_job(record) {
            Ok(job) => {
                run_job(&job, now, deps);
                summary.jobs_processed += 1;
            }
            Err(reason) => {
                deps.observer.record(SyncEvent::JobSkipped { reason });
                summary.jobs_skipped += 1;
            }
        }
    }

    success_response(summary)
}

fn decode_job(record: &Value) -> Result<SyncJobPayload, String> {
    let body = record
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| "record body must be a string".to_string())?;
    let payload: SyncJobPayload =
        serde_json::from_str(body).map_err(|error| format!("malformed job payload: {error}"))?;
    payload
        .validate()
        .map_err(|error| error.message().to_string())?;
    Ok(payload)
}

fn run_job(job: &SyncJobPayload, now: DateTime<Utc>, deps: &SyncDependencies<'_>) {
    deps.observer.record(SyncEvent::JobStarted {
        seller_id: job.seller_id.clone(),
    });

    let window = DateWindow::trailing(now);
    let order_ids = collect_order_ids(
        deps.orders,
        deps.throttle,
        deps.observer,
        deps.config,
        &job.access_token,
        &window,
    );

    if order_ids.is_empty() {
        deps.observer.record(SyncEvent::NoOrdersFound {
            seller_id: job.seller_id.clone(),
        });
        return;
    }

    let tally = forward_all(
        deps.sink,
        deps.throttle,
        deps.observer,
        deps.config,
        &job.seller_id,
        &order_ids,
    );
    deps.observer.record(SyncEvent::JobCompleted {
        seller_id: job.seller_id.clone(),
        tally,
    });
}

fn structural_failure(message: &str) -> SyncResponse {
    SyncResponse {
        status_code: 400,
        body: json!({ "error": message }).to_string(),
    }
}

fn success_response(summary: BatchSummary) -> SyncResponse {
    SyncResponse {
        status_code: 200,
        body: json!({
            "message": "order sync batch completed",
            "jobs_processed": summary.jobs_processed,
            "jobs_skipped": summary.jobs_skipped,
        })
        .to_string(),
    }
}
