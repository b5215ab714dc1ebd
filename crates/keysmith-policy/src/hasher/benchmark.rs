//! bcrypt cost calibration.
//!
//! This blocks for as long as the hashes it times, typically seconds. Run it
//! at deployment or calibration time, never on a request path.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use keysmith_core::error::{AppError, ErrorKind};
use keysmith_core::result::AppResult;

use super::{BCRYPT_MAX_COST, BCRYPT_MIN_COST};

/// Fixed input hashed at every step.
const BENCHMARK_SAMPLE: &str = "test";

/// Default target duration per hash.
pub const DEFAULT_TARGET: Duration = Duration::from_millis(50);

/// Default starting cost.
pub const DEFAULT_INITIAL_COST: u32 = 8;

/// Finds the smallest bcrypt cost above `initial_cost` whose hash takes at
/// least `target` on this machine.
///
/// The cost is incremented before each timing, so the result is always
/// greater than `initial_cost`. Starting points below the bcrypt minimum are
/// raised to it. If the bcrypt maximum is reached without meeting the
/// target, the maximum is returned.
pub fn estimate_cost(target: Duration, initial_cost: u32) -> AppResult<u32> {
    if initial_cost >= BCRYPT_MAX_COST {
        return Err(AppError::configuration(format!(
            "Initial cost {initial_cost} leaves no room below the bcrypt maximum of {BCRYPT_MAX_COST}"
        )));
    }

    let mut cost = initial_cost.max(BCRYPT_MIN_COST - 1);
    loop {
        cost += 1;

        let started = Instant::now();
        bcrypt::hash(BENCHMARK_SAMPLE, cost).map_err(|e| {
            AppError::with_source(
                ErrorKind::Hashing,
                format!("bcrypt benchmark failed at cost {cost}: {e}"),
                e,
            )
        })?;
        let elapsed = started.elapsed();

        debug!(
            cost,
            elapsed_ms = elapsed.as_millis() as u64,
            target_ms = target.as_millis() as u64,
            "Benchmarked bcrypt cost"
        );

        if elapsed >= target {
            return Ok(cost);
        }
        if cost >= BCRYPT_MAX_COST {
            warn!(cost, "Reached the bcrypt maximum cost before meeting the target duration");
            return Ok(cost);
        }
    }
}

/// [`estimate_cost`] with the target given in milliseconds.
pub fn estimate_cost_ms(target_ms: u64, initial_cost: u32) -> AppResult<u32> {
    estimate_cost(Duration::from_millis(target_ms), initial_cost)
}
