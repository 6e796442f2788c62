//! Pre-capture countdown timer
//!
//! Blocks the run for N one-second intervals, logging the remaining time
//! each second. A zero-second countdown is skipped entirely: no delay, no
//! log output. There is no cancellation; once started the countdown runs to
//! completion.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

/// Waits out a countdown of `seconds` seconds
pub async fn countdown(seconds: u64) {
    if seconds == 0 {
        return;
    }

    for remaining in (1..=seconds).rev() {
        info!("Time remaining: {remaining} seconds");
        sleep(Duration::from_secs(1)).await;
    }
    info!("Countdown finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_zero_seconds_returns_immediately() {
        let start = tokio::time::Instant::now();
        countdown(0).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_waits_one_second_per_tick() {
        let start = tokio::time::Instant::now();
        countdown(3).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_does_not_overshoot() {
        let start = tokio::time::Instant::now();
        countdown(5).await;
        // Paused clock advances exactly by the sleeps we issued
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }
}
