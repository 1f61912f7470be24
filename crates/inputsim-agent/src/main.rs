//! Input-Sim agent — entry point.
//!
//! This binary replays forwarded input events as real system input.  It is
//! the terminal stage of a remote-control pipeline: an upstream component
//! captures input intent and ships it here as base64-encoded JSON frames.
//!
//! # Usage
//!
//! ```text
//! inputsim-agent [FRAME] [OPTIONS]
//!
//! Arguments:
//!   [FRAME]  Base64-encoded event frame to execute once
//!
//! Options:
//!   --persistent               Read newline-delimited frames from stdin until EOF
//!   --event-delay-ms <MS>      Pause between handled lines [default: 1]
//!   --max-events-per-sec <N>   Executed-events budget per second, 0 = unlimited [default: 100]
//! ```
//!
//! One-shot mode executes the single `FRAME` argument and exits; any decode
//! or injection failure is a nonzero exit.  Persistent mode loops over stdin
//! and exits zero when the channel closes; per-frame failures are logged to
//! stderr and the loop continues.
//!
//! # Environment variable overrides
//!
//! | Variable                     | Default | Description                  |
//! |------------------------------|---------|------------------------------|
//! | `INPUTSIM_EVENT_DELAY_MS`    | `1`     | Inter-event pause (ms)       |
//! | `INPUTSIM_MAX_EVENTS_PER_SEC`| `100`   | Rate budget (0 = unlimited)  |
//!
//! Log verbosity follows `RUST_LOG` (default `info`); all diagnostics go to
//! stderr so stdin/stdout remain pure data channels.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inputsim_agent::application::execute_input::ExecuteInputUseCase;
use inputsim_agent::application::session::{process_frame, run_persistent, SessionConfig};
use inputsim_agent::infrastructure::input_injection::NativeInputInjector;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Input-Sim agent.
///
/// Executes forwarded input events (mouse motion, buttons, wheel, keys)
/// against the host OS input subsystem.
#[derive(Debug, Parser)]
#[command(
    name = "inputsim-agent",
    about = "Replays forwarded input events as real system input",
    version
)]
struct Cli {
    /// Base64-encoded event frame to execute once.
    #[arg(required_unless_present = "persistent", conflicts_with = "persistent")]
    frame: Option<String>,

    /// Read newline-delimited frames from stdin until end of input.
    #[arg(long)]
    persistent: bool,

    /// Pause between handled lines in persistent mode, in milliseconds.
    #[arg(long, default_value_t = 1, env = "INPUTSIM_EVENT_DELAY_MS")]
    event_delay_ms: u64,

    /// Maximum executed events per second in persistent mode (0 = unlimited).
    #[arg(long, default_value_t = 100, env = "INPUTSIM_MAX_EVENTS_PER_SEC")]
    max_events_per_sec: u32,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            event_delay: Duration::from_millis(self.event_delay_ms),
            max_events_per_second: self.max_events_per_sec,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdin carries the event frames.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The OS capability is constructed once here and handed to the use case;
    // nothing else in the process touches the platform input APIs.
    let injector = Arc::new(NativeInputInjector::new());
    let use_case = ExecuteInputUseCase::new(injector);

    if cli.persistent {
        info!("input simulation agent started (persistent mode)");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        run_persistent(stdin, &use_case, &cli.session_config())
            .await
            .context("reading input frames from stdin")?;
    } else {
        info!("input simulation agent started (one-shot mode)");
        let frame = cli
            .frame
            .as_deref()
            .context("a frame argument is required in one-shot mode")?;
        process_frame(frame.trim(), &use_case).context("executing input frame")?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_one_shot_takes_a_positional_frame() {
        let cli = Cli::parse_from(["inputsim-agent", "eyJ0eXBlIjoiY2xpY2sifQ=="]);

        assert_eq!(cli.frame.as_deref(), Some("eyJ0eXBlIjoiY2xpY2sifQ=="));
        assert!(!cli.persistent);
    }

    #[test]
    fn test_cli_persistent_mode_needs_no_frame() {
        let cli = Cli::parse_from(["inputsim-agent", "--persistent"]);

        assert!(cli.persistent);
        assert_eq!(cli.frame, None);
    }

    #[test]
    fn test_cli_without_frame_or_persistent_is_a_usage_error() {
        let result = Cli::try_parse_from(["inputsim-agent"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_frame_and_persistent_conflict() {
        let result = Cli::try_parse_from(["inputsim-agent", "FRAME", "--persistent"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli_default_event_delay_is_one_millisecond() {
        let cli = Cli::parse_from(["inputsim-agent", "--persistent"]);

        assert_eq!(cli.event_delay_ms, 1);
        assert_eq!(cli.session_config().event_delay, Duration::from_millis(1));
    }

    #[test]
    fn test_cli_default_rate_budget_is_one_hundred() {
        let cli = Cli::parse_from(["inputsim-agent", "--persistent"]);

        assert_eq!(cli.max_events_per_sec, 100);
    }

    #[test]
    fn test_cli_event_delay_override() {
        let cli = Cli::parse_from(["inputsim-agent", "--persistent", "--event-delay-ms", "5"]);

        assert_eq!(cli.session_config().event_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_cli_rate_budget_override() {
        let cli =
            Cli::parse_from(["inputsim-agent", "--persistent", "--max-events-per-sec", "0"]);

        assert_eq!(cli.session_config().max_events_per_second, 0);
    }
}
