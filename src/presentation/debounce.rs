//! Timer-based event coalescing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Collapses bursts of events into a single deferred action.
///
/// Every [`Debouncer::call`] takes a new ticket and schedules its action
/// one window later. When the timer fires, the action runs only if its
/// ticket is still the newest, so of any burst whose events are closer
/// together than the window only the last one survives.
///
/// Timers run on the current tokio runtime.
pub struct Debouncer {
    window: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record an event and schedule `action` for when the burst ends.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let window = self.window;

        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if latest.load(Ordering::SeqCst) == ticket {
                action();
            }
        });
    }

    /// Drop whatever is pending.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce() + Send>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let make = move |n: u32| {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().unwrap().push(n)) as Box<dyn FnOnce() + Send>
        };
        (fired, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_keeps_only_last_event() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let (fired, action) = recorder();

        debouncer.call(action(1));
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call(action(2));
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call(action(3));
        tokio::time::sleep(Duration::from_millis(1000)).await;

        assert_eq!(*fired.lock().unwrap(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_further_apart_than_window_all_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let (fired, action) = recorder();

        debouncer.call(action(1));
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.call(action(2));
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(*fired.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_waits_for_full_window() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        debouncer.call(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let (fired, action) = recorder();

        debouncer.call(action(1));
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(fired.lock().unwrap().is_empty());
    }
}
