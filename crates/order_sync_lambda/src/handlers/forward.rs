use order_sync_core::config::SyncConfig;
use order_sync_core::contract::{ForwardTally, PROGRESS_SNAPSHOT_INTERVAL};

use crate::adapters::normalize::NormalizeError;
use crate::adapters::throttle::Throttle;
use crate::observer::{SyncEvent, SyncObserver};

/// Sink for normalization requests, one call per order identifier.
pub trait NormalizeSink {
    fn forward_order(&self, seller_id: &str, order_id: &str) -> Result<(), NormalizeError>;
}

/// Forward every identifier to the normalization sink.
///
/// Best effort: an individual failure is counted and the loop moves on.
/// Postcondition: `successful + failed == order_ids.len()`.
pub fn forward_all(
    sink: &dyn NormalizeSink,
    throttle: &dyn Throttle,
    observer: &dyn SyncObserver,
    config: &SyncConfig,
    seller_id: &str,
    order_ids: &[String],
) -> ForwardTally {
    let mut tally = ForwardTally::default();

    for (index, order_id) in order_ids.iter().enumerate() {
        throttle.pause(config.pre_forward_delay);
        match sink.forward_order(seller_id, order_id) {
            Ok(()) => tally.record_success(),
            Err(error) => {
                tally.record_failure();
                observer.record(SyncEvent::OrderForwardFailed {
                    order_id: order_id.clone(),
                    reason: error.to_string(),
                });
            }
        }
        throttle.pause(config.post_forward_delay);

        let processed = index + 1;
        if processed % PROGRESS_SNAPSHOT_INTERVAL == 0 {
            observer.record(SyncEvent::ForwardProgress {
                processed,
                successful: tally.successful,
                failed: tally.failed,
            });
        }
    }

    observer.record(SyncEvent::ForwardCompleted {
        successful: tally.successful,
        failed: tally.failed,
        success_rate: tally.success_rate(),
    });
    tally
}
