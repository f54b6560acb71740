//! Injected diagnostic sink for tracing engine internals.
//!
//! The signer takes an optional sink at construction instead of a
//! process-wide logging toggle. Key generation, signing, and verification
//! report their intermediate steps through it; with no sink attached the
//! engine stays silent and pays no formatting cost.

use std::sync::Arc;

/// Receiver for diagnostic events emitted by [`crate::RlweSigner`].
pub trait TraceSink: Send + Sync {
    fn event(&self, message: &str);
}

/// Adapts a plain closure into a sink.
///
/// ```
/// use rlwe_sig::trace::{FnSink, TraceSink};
///
/// let sink = FnSink(|msg: &str| eprintln!("engine: {}", msg));
/// sink.event("hello");
/// ```
pub struct FnSink<F>(pub F);

impl<F> TraceSink for FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn event(&self, message: &str) {
        (self.0)(message)
    }
}

/// Forwards engine events to the `tracing` ecosystem at DEBUG level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn event(&self, message: &str) {
        tracing::debug!(target: "rlwe_sig", "{}", message);
    }
}

/// Collects events into memory; intended for tests.
#[derive(Default)]
pub struct CollectingSink {
    events: std::sync::Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl TraceSink for CollectingSink {
    fn event(&self, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(message.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fn_sink() {
        let count = AtomicUsize::new(0);
        let sink = FnSink(|_: &str| {
            count.fetch_add(1, Ordering::SeqCst);
        });
        sink.event("one");
        sink.event("two");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.event("one");
        sink.event("two");
        assert_eq!(sink.events(), vec!["one".to_owned(), "two".to_owned()]);
    }
}
