//! Session loop: pulls frames from the input channel, decodes, executes.
//!
//! Two modes share the same codec + executor pair:
//!
//! - **One-shot** – [`process_frame`] handles a single frame supplied as a
//!   process argument; any failure propagates to the caller (nonzero exit).
//! - **Persistent** – [`run_persistent`] loops over newline-delimited frames
//!   until the channel closes.  Every per-frame failure is logged and
//!   suppressed at this boundary; only an I/O failure of the channel itself
//!   terminates the loop abnormally.
//!
//! The loop is single-flow and strictly sequential: exactly one event is
//! being decoded or executed at any instant, and the only suspension points
//! are the next-line read and the inter-event delay.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

use inputsim_core::protocol::codec::{decode_frame, DecodeError};

use crate::application::execute_input::{ExecuteInputUseCase, InjectionError};

/// Failure of one frame, from either pipeline stage.
///
/// The persistent loop inspects this per iteration instead of relying on any
/// catch-all control flow.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Inject(#[from] InjectionError),
}

/// Decodes and executes exactly one frame.
///
/// # Errors
///
/// Returns [`FrameError`] if the frame fails to decode or an OS primitive
/// reports failure.
pub fn process_frame(frame: &str, use_case: &ExecuteInputUseCase) -> Result<(), FrameError> {
    let event = decode_frame(frame)?;
    use_case.execute(&event)?;
    Ok(())
}

/// Runtime settings for the persistent session loop.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Pause after each handled line before the next read.
    pub event_delay: Duration,
    /// Frames admitted to decode+execute per rolling second; `0` disables
    /// the limit.
    pub max_events_per_second: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            event_delay: Duration::from_millis(1),
            max_events_per_second: 100,
        }
    }
}

/// Counts of how each line of a session was handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frames decoded and executed without error (including `Ignored` kinds).
    pub executed: u64,
    /// Frames that failed to decode or execute.
    pub failed: u64,
    /// Empty lines skipped without decoding.
    pub skipped: u64,
    /// Frames dropped by the rate limiter.
    pub dropped: u64,
}

/// Rolling one-second event budget.
///
/// Mirrors the upstream sender's flood protection on the receiving end: a
/// misbehaving source cannot force more than `max_per_second` injections.
pub struct RateLimiter {
    max_per_second: u32,
    window_start: Instant,
    count: u32,
}

impl RateLimiter {
    /// Creates a limiter admitting `max_per_second` events per window.
    /// `0` means unlimited.
    pub fn new(max_per_second: u32) -> Self {
        Self {
            max_per_second,
            window_start: Instant::now(),
            count: 0,
        }
    }

    /// Admits or rejects one event occurring now.
    pub fn allow(&mut self) -> bool {
        self.allow_at(Instant::now())
    }

    /// Admits or rejects one event occurring at `now`.
    ///
    /// Separated from [`RateLimiter::allow`] so tests can drive the clock.
    fn allow_at(&mut self, now: Instant) -> bool {
        if self.max_per_second == 0 {
            return true;
        }
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.window_start = now;
            self.count = 0;
        }
        self.count += 1;
        self.count <= self.max_per_second
    }
}

/// Runs the persistent session loop until the input channel closes.
///
/// Per iteration: read one line; on end of input, return the summary (clean
/// termination); trim; skip empty lines; apply the rate limiter; decode and
/// execute; log and suppress any per-frame error.  After each handled line
/// the loop sleeps for `config.event_delay`, bounding CPU under a
/// tight-looping source.
///
/// # Errors
///
/// Returns the underlying `std::io::Error` only if reading from the channel
/// itself fails; per-frame errors never surface here.
pub async fn run_persistent<R>(
    reader: R,
    use_case: &ExecuteInputUseCase,
    config: &SessionConfig,
) -> std::io::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut limiter = RateLimiter::new(config.max_events_per_second);
    let mut summary = SessionSummary::default();

    while let Some(line) = lines.next_line().await? {
        let frame = line.trim();
        if frame.is_empty() {
            summary.skipped += 1;
        } else if !limiter.allow() {
            warn!("input event rate limit exceeded; dropping frame");
            summary.dropped += 1;
        } else {
            match process_frame(frame, use_case) {
                Ok(()) => summary.executed += 1,
                Err(e) => {
                    error!("failed to handle input frame: {e}");
                    summary.failed += 1;
                }
            }
        }
        tokio::time::sleep(config.event_delay).await;
    }

    info!(
        executed = summary.executed,
        failed = summary.failed,
        skipped = summary.skipped,
        dropped = summary.dropped,
        "input channel closed; session complete"
    );
    Ok(summary)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
