/*!
 * Tracing Setup
 * Subscriber initialisation for the queue's structured events
 *
 * The queue emits `trace` events per insert/pop and `debug` events when heap
 * storage is resized or cleared.
 */

use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MAXPQ_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("MAXPQ_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, PriorityQueue};

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();

        // Events from queue operations must not panic with a subscriber installed
        let queue = PriorityQueue::new();
        queue.insert(Node::new(1, 1.0));
        queue.pop().unwrap();
        queue.clear();
    }
}
