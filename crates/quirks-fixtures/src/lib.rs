//! Shared test support for the quirks suites.
//!
//! Every suite in this workspace is a sequence of small, self-contained
//! assertions about observable behavior. The helpers here exist so the
//! suites can observe things that plain `assert_eq!` cannot reach: call
//! order across threads, drop order, panic payloads, and floating point
//! comparison with a sane epsilon.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Once};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

mod error;

pub use error::RunError;

/// Thread-safe event recorder.
///
/// The corpus uses a `Recorder` wherever the question is "what was
/// observed, and in what order" rather than "what is the final value":
/// callback invocations, stream emissions, drop notifications. Handles
/// are cheap to clone and all share the same event log.
pub struct Recorder<T> {
    events: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append one event to the log.
    pub fn push(&self, event: T) {
        self.events.lock().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl<T: Clone> Recorder<T> {
    /// Copy of the event log in arrival order.
    pub fn snapshot(&self) -> Vec<T> {
        self.events.lock().clone()
    }
}

// Manual impl: a handle is clonable even when `T` is not.
impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable atomic counter for call-count assertions.
#[derive(Clone, Default)]
pub struct Counter {
    count: Arc<AtomicUsize>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the updated count.
    pub fn incr(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn add(&self, n: usize) {
        self.count.fetch_add(n, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Records the order in which [`DropToken`]s are dropped.
///
/// Used by the ownership suites to turn drop order into data that can be
/// asserted on after the fact.
#[derive(Clone, Default)]
pub struct DropTracker {
    order: Arc<Mutex<Vec<String>>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that reports `name` back to this tracker when dropped.
    pub fn token(&self, name: &str) -> DropToken {
        DropToken {
            name: name.to_string(),
            order: Arc::clone(&self.order),
        }
    }

    /// Names of dropped tokens, in drop order.
    pub fn order(&self) -> Vec<String> {
        self.order.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.order.lock().len()
    }
}

/// See [`DropTracker::token`]. Deliberately not `Clone`: one token, one drop.
pub struct DropToken {
    name: String,
    order: Arc<Mutex<Vec<String>>>,
}

impl DropToken {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for DropToken {
    fn drop(&mut self) {
        tracing::trace!(token = %self.name, "dropped");
        self.order.lock().push(self.name.clone());
    }
}

// The panic hook is process-global; swapping it from parallel tests would
// interleave. All panic capture goes through this lock.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Run `f`, capturing a panic and returning its payload as a string.
///
/// Returns `None` when `f` completes normally. The default panic hook is
/// silenced for the duration so expected panics do not spam test output.
pub fn panic_message<R>(f: impl FnOnce() -> R) -> Option<String> {
    let _guard = HOOK_LOCK.lock();
    let prev = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(prev);

    match result {
        Ok(_) => None,
        Err(payload) => Some(payload_to_string(payload.as_ref())),
    }
}

fn payload_to_string(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Assert two floats are equal within `1e-10`.
pub fn assert_approx(actual: f64, expected: f64) {
    assert_approx_eps(actual, expected, 1e-10);
}

/// Assert two floats are equal within `eps`.
pub fn assert_approx_eps(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {}, got {} (eps {})",
        expected,
        actual,
        eps
    );
}

/// Run `f` on a fresh thread, waiting at most `timeout` for its result.
///
/// The thread suites use this as a liveness backstop: a deadlocked or
/// runaway test fails with [`RunError::Timeout`] instead of hanging the
/// whole run.
pub fn run_within<T, F>(f: F, timeout: Duration) -> Result<T, RunError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(f());
    });
    rx.recv_timeout(timeout).map_err(|e| match e {
        RecvTimeoutError::Timeout => {
            tracing::debug!(?timeout, "worker timed out");
            RunError::Timeout(timeout)
        }
        // Sender dropped without sending: the closure panicked.
        RecvTimeoutError::Disconnected => RunError::Panicked,
    })
}

/// Install the test tracing subscriber once per process.
///
/// Suites that want execution traces under `--nocapture` call this at the
/// top of a test; repeat calls are no-ops.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .compact()
            .with_test_writer()
            .try_init();
    });
}
