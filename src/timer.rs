//! Scheduled-task plumbing for the countdown display and the simulated
//! payment delay. Timers carry explicit cancellable handles so component
//! teardown is a visible operation, not an implicit cleanup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Time left until a target instant, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Compute the time left from `now` until `target`, saturating at zero once
/// the target has passed.
pub fn time_remaining(now: DateTime<Utc>, target: DateTime<Utc>) -> Remaining {
    let delta = target - now;
    if delta <= chrono::Duration::zero() {
        return Remaining::ZERO;
    }
    Remaining {
        days: delta.num_days(),
        hours: delta.num_hours() % 24,
        minutes: delta.num_minutes() % 60,
        seconds: delta.num_seconds() % 60,
    }
}

/// An interval-driven countdown toward a fixed instant.
///
/// Each tick recomputes [`Remaining`] and publishes it over a watch
/// channel. Recomputation is idempotent and cheap, so a missed tick is
/// harmless. Dropping the countdown (or calling [`cancel`](Self::cancel))
/// stops the background task.
pub struct Countdown {
    rx: watch::Receiver<Remaining>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking toward `target`, publishing every `period`.
    pub fn spawn(target: DateTime<Utc>, period: std::time::Duration) -> Self {
        let (tx, rx) = watch::channel(time_remaining(Utc::now(), target));
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(time_remaining(Utc::now(), target)).is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// A receiver for the latest published value. Clones observe the same
    /// stream.
    pub fn subscribe(&self) -> watch::Receiver<Remaining> {
        self.rx.clone()
    }

    /// Stop the ticker. Subscribers see the channel close after the last
    /// published value.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Confirmation returned by the simulated payment processor.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub amount: u32,
    pub processed_at: DateTime<Utc>,
}

/// Pretend to process a payment: wait the fixed delay, then confirm.
///
/// There is no gateway behind this; it stands in for the network call the
/// real site would make and always succeeds.
pub async fn simulate_payment(amount: u32, delay: std::time::Duration) -> PaymentReceipt {
    debug!(amount, ?delay, "simulating payment");
    tokio::time::sleep(delay).await;
    let processed_at = Utc::now();
    PaymentReceipt {
        reference: format!("VRN-{}", processed_at.timestamp_millis()),
        amount,
        processed_at,
    }
}
