//! Stream fixtures for the async suites.

use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};

/// A cold timed stream: each value arrives one `period` after the previous
/// one was consumed. Deterministic under tokio's paused clock.
pub fn timed<T>(values: Vec<T>, period: Duration) -> impl Stream<Item = T> {
    stream::iter(values).then(move |value| async move {
        tokio::time::sleep(period).await;
        value
    })
}

/// A finite counter stream `0..n`.
pub fn counter(n: usize) -> impl Stream<Item = usize> {
    stream::iter(0..n)
}
