use order_sync_core::config::SyncConfig;
use order_sync_core::window::DateWindow;

use crate::adapters::sp_orders::{OrdersPage, SpOrdersError};
use crate::adapters::throttle::Throttle;
use crate::observer::{PaginationEndReason, SyncEvent, SyncObserver};

/// Source of listing pages, keyed by the job credential.
pub trait OrdersPageSource {
    fn fetch_page(
        &self,
        access_token: &str,
        window: &DateWindow,
        next_token: Option<&str>,
    ) -> Result<OrdersPage, SpOrdersError>;
}

/// Accumulate order identifiers across listing pages.
///
/// Identifiers keep their page arrival order and are not deduplicated.
/// Any page-level failure ends the walk and returns whatever was
/// collected so far; a partial list is a result, not an error. There is
/// no retry.
pub fn collect_order_ids(
    source: &dyn OrdersPageSource,
    throttle: &dyn Throttle,
    observer: &dyn SyncObserver,
    config: &SyncConfig,
    access_token: &str,
    window: &DateWindow,
) -> Vec<String> {
    let mut order_ids: Vec<String> = Vec::new();
    let mut next_token: Option<String> = None;
    let mut page = 1usize;

    loop {
        let current = match source.fetch_page(access_token, window, next_token.as_deref()) {
            Ok(value) => value,
            Err(error) => {
                observer.record(SyncEvent::PaginationEnded {
                    pages: page,
                    total_ids: order_ids.len(),
                    reason: PaginationEndReason::Failed(error.to_string()),
                });
                return order_ids;
            }
        };

        if current.order_ids.is_empty() {
            observer.record(SyncEvent::PaginationEnded {
                pages: page,
                total_ids: order_ids.len(),
                reason: PaginationEndReason::Exhausted,
            });
            return order_ids;
        }

        observer.record(SyncEvent::PageFetched {
            page,
            order_count: current.order_ids.len(),
        });
        order_ids.extend(current.order_ids);

        match current.next_token {
            Some(token) => next_token = Some(token),
            None => {
                observer.record(SyncEvent::PaginationEnded {
                    pages: page,
                    total_ids: order_ids.len(),
                    reason: PaginationEndReason::NoContinuation,
                });
                return order_ids;
            }
        }

        page += 1;
        throttle.pause(config.inter_page_delay);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    struct ScriptedSource {
        pages: Mutex<VecDeque<Result<OrdersPage, SpOrdersError>>>,
        seen_tokens: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<OrdersPage, SpOrdersError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                seen_tokens: Mutex::new(Vec::new()),
            }
        }

        fn seen_tokens(&self) -> Vec<Option<String>> {
            self.seen_tokens.lock().expect("poisoned mutex").clone()
        }
    }

    impl OrdersPageSource for ScriptedSource {
        fn fetch_page(
            &self,
            _access_token: &str,
            _window: &DateWindow,
            next_token: Option<&str>,
        ) -> Result<OrdersPage, SpOrdersError> {
            self.seen_tokens
                .lock()
                .expect("poisoned mutex")
                .push(next_token.map(str::to_string));
            self.pages
                .lock()
                .expect("poisoned mutex")
                .pop_front()
                .expect("source exhausted")
        }
    }

    struct CapturingObserver {
        events: Mutex<Vec<SyncEvent>>,
    }

    impl CapturingObserver {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<SyncEvent> {
            self.events.lock().expect("poisoned mutex").clone()
        }
    }

    impl SyncObserver for CapturingObserver {
        fn record(&self, event: SyncEvent) {
            self.events.lock().expect("poisoned mutex").push(event);
        }
    }

    struct CapturingThrottle {
        pauses: Mutex<Vec<Duration>>,
    }

    impl CapturingThrottle {
        fn new() -> Self {
            Self {
                pauses: Mutex::new(Vec::new()),
            }
        }

        fn pauses(&self) -> Vec<Duration> {
            self.pauses.lock().expect("poisoned mutex").clone()
        }
    }

    impl Throttle for CapturingThrottle {
        fn pause(&self, delay: Duration) {
            self.pauses.lock().expect("poisoned mutex").push(delay);
        }
    }

    fn page(ids: &[&str], next_token: Option<&str>) -> Result<OrdersPage, SpOrdersError> {
        Ok(OrdersPage {
            order_ids: ids.iter().map(|id| id.to_string()).collect(),
            next_token: next_token.map(str::to_string),
        })
    }

    fn window() -> DateWindow {
        DateWindow::custom("2023-01-01", "2023-12-31")
    }

    #[test]
    fn walks_pages_until_token_runs_out() {
        let source = ScriptedSource::new(vec![
            page(&["order-1", "order-2"], Some("token-2")),
            page(&["order-3"], None),
        ]);
        let observer = CapturingObserver::new();
        let throttle = CapturingThrottle::new();
        let config = SyncConfig::default();

        let ids = collect_order_ids(&source, &throttle, &observer, &config, "token", &window());

        assert_eq!(ids, vec!["order-1", "order-2", "order-3"]);
        assert_eq!(throttle.pauses(), vec![config.inter_page_delay]);
        assert!(observer.events().contains(&SyncEvent::PaginationEnded {
            pages: 2,
            total_ids: 3,
            reason: PaginationEndReason::NoContinuation,
        }));
    }

    #[test]
    fn passes_continuation_token_between_requests() {
        let source = ScriptedSource::new(vec![
            page(&["order-1"], Some("token-2")),
            page(&["order-2"], None),
        ]);
        let observer = CapturingObserver::new();
        let throttle = CapturingThrottle::new();

        collect_order_ids(
            &source,
            &throttle,
            &observer,
            &SyncConfig::default(),
            "token",
            &window(),
        );

        assert_eq!(
            source.seen_tokens(),
            vec![None, Some("token-2".to_string())]
        );
    }

    #[test]
    fn stops_on_empty_page() {
        let source = ScriptedSource::new(vec![page(&["order-1"], Some("token-2")), page(&[], None)]);
        let observer = CapturingObserver::new();
        let throttle = CapturingThrottle::new();

        let ids = collect_order_ids(
            &source,
            &throttle,
            &observer,
            &SyncConfig::default(),
            "token",
            &window(),
        );

        assert_eq!(ids, vec!["order-1"]);
        assert!(observer.events().contains(&SyncEvent::PaginationEnded {
            pages: 2,
            total_ids: 1,
            reason: PaginationEndReason::Exhausted,
        }));
    }

    #[test]
    fn keeps_partial_results_when_a_page_fails() {
        let source = ScriptedSource::new(vec![
            page(&["order-1", "order-2"], Some("token-2")),
            Err(SpOrdersError::Status {
                status: 429,
                body: "slow down".to_string(),
            }),
        ]);
        let observer = CapturingObserver::new();
        let throttle = CapturingThrottle::new();

        let ids = collect_order_ids(
            &source,
            &throttle,
            &observer,
            &SyncConfig::default(),
            "token",
            &window(),
        );

        assert_eq!(ids, vec!["order-1", "order-2"]);
        let failed = observer.events().into_iter().any(|event| {
            matches!(
                event,
                SyncEvent::PaginationEnded {
                    pages: 2,
                    total_ids: 2,
                    reason: PaginationEndReason::Failed(_),
                }
            )
        });
        assert!(failed);
    }

    #[test]
    fn single_page_walk_never_pauses() {
        let source = ScriptedSource::new(vec![page(&["order-1"], None)]);
        let observer = CapturingObserver::new();
        let throttle = CapturingThrottle::new();

        collect_order_ids(
            &source,
            &throttle,
            &observer,
            &SyncConfig::default(),
            "token",
            &window(),
        );

        assert!(throttle.pauses().is_empty());
    }
}
