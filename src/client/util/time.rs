use std::time::Duration;

use chrono::Utc;

/// Milliseconds since the Unix epoch, used to time card clicks.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Waits for `duration` on both the browser and native event loops.
pub async fn sleep(duration: Duration) {
    futures_timer::Delay::new(duration).await
}
