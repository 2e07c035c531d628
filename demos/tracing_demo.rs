//! Show the debug-level delay logging emitted by `back_off`.
//!
//! Run with: `cargo run --example tracing_demo --features tracing`

use slackwater::ExponentialBackoff;
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let policy = ExponentialBackoff::new()
        .with_initial_interval(Duration::from_millis(5))
        .with_max_interval(Duration::from_millis(40));

    let state = policy.start();
    for _ in 0..6 {
        policy.back_off(&state).await.expect("pause interrupted");
    }
}
