//! inputsim-agent library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the agent do?
//!
//! The agent is the terminal stage of a remote-control pipeline.  An upstream
//! component captures input intent on the controlling side and forwards it as
//! base64-encoded JSON frames; the agent decodes each frame and replays it as
//! real system input, so the host machine behaves as if a physical mouse and
//! keyboard produced the events.
//!
//! 1. Frames arrive either once as a process argument or continuously as
//!    newline-delimited lines on stdin.
//! 2. `inputsim_core` decodes each frame into a typed `InputEvent`.
//! 3. The application layer dispatches the event to a platform injector,
//!    which calls the OS synthetic-input primitives (`SetCursorPos`,
//!    `mouse_event`, `keybd_event` on Windows).
//!
//! Per-frame failures are contained at the session loop: a malformed or
//! unexecutable event is logged and the next frame is processed.

/// Application layer: event execution and the session loop.
pub mod application;

/// Infrastructure layer: platform input injection backends.
pub mod infrastructure;
