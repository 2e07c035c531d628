//! Substitute the waiter and interrupt a pause from another task.

use slackwater::{ExponentialBackoff, InterruptibleWaiter};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let waiter = InterruptibleWaiter::new();
    let handle = waiter.handle();

    let policy = ExponentialBackoff::new()
        .with_initial_interval(Duration::from_secs(30))
        .with_max_interval(Duration::from_secs(60))
        .with_waiter(waiter);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        println!("interrupting the pause...");
        handle.interrupt();
    });

    let state = policy.start();
    match policy.back_off(&state).await {
        Ok(()) => println!("paused the full interval"),
        Err(err) => println!("gave up early: {err}"),
    }
}
