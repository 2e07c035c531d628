//! Walk through the growth and saturation of one retry sequence.

use slackwater::ExponentialBackoff;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let policy = ExponentialBackoff::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_multiplier(2.0)
        .with_max_interval(Duration::from_millis(160));

    let state = policy.start();
    println!("pausing through one retry sequence:");
    for attempt in 1..=7 {
        let before = Instant::now();
        policy.back_off(&state).await.expect("pause interrupted");
        println!("  attempt {attempt}: paused {:?}", before.elapsed());
    }
}
