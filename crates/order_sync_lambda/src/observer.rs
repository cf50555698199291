use tracing::{info, warn};

use order_sync_core::contract::ForwardTally;

/// Why a pagination walk came to an end.
#[derive(Debug, Clone, PartialEq)]
pub enum PaginationEndReason {
    /// The listing API returned a page with no orders.
    Exhausted,
    /// The last page carried no continuation token.
    NoContinuation,
    /// A page-level failure; the identifiers collected so far are kept.
    Failed(String),
}

/// Structured record of one observable step of a sync run.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    JobStarted {
        seller_id: String,
    },
    JobSkipped {
        reason: String,
    },
    PageFetched {
        page: usize,
        order_count: usize,
    },
    PaginationEnded {
        pages: usize,
        total_ids: usize,
        reason: PaginationEndReason,
    },
    NoOrdersFound {
        seller_id: String,
    },
    OrderForwardFailed {
        order_id: String,
        reason: String,
    },
    ForwardProgress {
        processed: usize,
        successful: usize,
        failed: usize,
    },
    ForwardCompleted {
        successful: usize,
        failed: usize,
        success_rate: f64,
    },
    JobCompleted {
        seller_id: String,
        tally: ForwardTally,
    },
}

/// Sink for sync events, injected into every component so tests can
/// assert on what was emitted.
pub trait SyncObserver {
    fn record(&self, event: SyncEvent);
}

/// Production observer: maps events onto the `tracing` subscriber with
/// structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn record(&self, event: SyncEvent) {
        match event {
            SyncEvent::JobStarted { seller_id } => {
                info!(seller_id = %seller_id, "starting order sync job");
            }
            SyncEvent::JobSkipped { reason } => {
                warn!(reason = %reason, "skipping job");
            }
            SyncEvent::PageFetched { page, order_count } => {
                info!(page, order_count, "fetched listing page");
            }
            SyncEvent::PaginationEnded {
                pages,
                total_ids,
                reason,
            } => match reason {
                PaginationEndReason::Failed(detail) => {
                    warn!(pages, total_ids, detail = %detail, "pagination stopped early, keeping partial results");
                }
                PaginationEndReason::Exhausted => {
                    info!(pages, total_ids, "no more orders");
                }
                PaginationEndReason::NoContinuation => {
                    info!(pages, total_ids, "no more pages");
                }
            },
            SyncEvent::NoOrdersFound { seller_id } => {
                info!(seller_id = %seller_id, "no orders found in window");
            }
            SyncEvent::OrderForwardFailed { order_id, reason } => {
                warn!(order_id = %order_id, reason = %reason, "failed to forward order");
            }
            SyncEvent::ForwardProgress {
                processed,
                successful,
                failed,
            } => {
                info!(processed, successful, failed, "forwarding progress");
            }
            SyncEvent::ForwardCompleted {
                successful,
                failed,
                success_rate,
            } => {
                info!(successful, failed, success_rate, "forwarding finished");
            }
            SyncEvent::JobCompleted { seller_id, tally } => {
                info!(
                    seller_id = %seller_id,
                    successful = tally.successful,
                    failed = tally.failed,
                    "order sync job completed"
                );
            }
        }
    }
}
