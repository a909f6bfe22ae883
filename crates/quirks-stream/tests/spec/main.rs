//! Executable suites on async and reactive-stream semantics.
//!
//! These modules exercise the documented behavior of `futures`,
//! `tokio-stream`, and `tokio::sync` — the combinators are all theirs,
//! never reimplemented here. Timer-driven tests run under tokio's paused
//! clock so nothing depends on the wall clock.
