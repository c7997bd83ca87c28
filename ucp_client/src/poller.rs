//! Bounded fixed-interval polling of a settlement until it resolves.
//!
//! The loop reads the settlement, returns on `completed`, fails on `failed`, and
//! otherwise sleeps for the poll interval. Once the elapsed time reaches the
//! deadline it gives up with `UcpError::Timeout`. There is no backoff and no
//! jitter, and a wait cannot be cancelled from another thread.
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use ucp_common::{Result, Settlement, SettlementStatus, UcpError};

/// Time source used by the polling loop.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `Instant::now` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Calls `fetch` every `interval` until the settlement reaches a terminal status
/// or `max_wait` has elapsed on `clock`.
///
/// Errors returned by `fetch` are propagated as-is without another attempt.
pub fn poll_until_terminal<F>(
    id: &str,
    max_wait: Duration,
    interval: Duration,
    clock: &dyn Clock,
    mut fetch: F,
) -> Result<Settlement>
where
    F: FnMut() -> Result<Settlement>,
{
    let started = clock.now();
    let mut polls: u32 = 0;

    while clock.now().duration_since(started) < max_wait {
        let settlement = fetch()?;
        polls += 1;

        if settlement.status.is_terminal() {
            return resolve(id, polls, settlement);
        }
        debug!("Settlement {} is {} (poll #{})", id, settlement.status, polls);

        clock.sleep(interval);
    }

    let waited = clock.now().duration_since(started);
    warn!("Settlement {} still unresolved after {:?}", id, waited);
    Err(UcpError::Timeout {
        id: id.to_string(),
        waited,
    })
}

// Turns a terminal record into the caller-facing outcome.
fn resolve(id: &str, polls: u32, settlement: Settlement) -> Result<Settlement> {
    if settlement.status == SettlementStatus::Completed {
        info!("Settlement {} completed after {} poll(s)", id, polls);
        return Ok(settlement);
    }
    warn!(
        "Settlement {} failed: {}",
        id,
        settlement.failure_reason.as_deref().unwrap_or("no reason given")
    );
    Err(UcpError::SettlementFailed {
        id: settlement.id,
        reason: settlement.failure_reason,
    })
}
