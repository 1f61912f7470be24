//! ExecuteInputUseCase: dispatches decoded events to OS input primitives.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformInputInjector`] trait object for OS-level event injection.  The
//! platform-specific implementations live in the infrastructure layer; the
//! injector is constructed once at startup and passed in — there is no
//! ambient global OS handle.

use std::sync::Arc;

use inputsim_core::keymap::KeyMapper;
use inputsim_core::protocol::events::{ButtonKind, InputEvent, KeyIdentifier};
use thiserror::Error;
use tracing::trace;

/// Error type for input injection operations.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The underlying OS primitive reported failure.
    #[error("platform call failed: {0}")]
    PlatformCall(String),
}

/// Platform-agnostic input injection trait.
///
/// One implementation per supported OS, plus a recording mock for tests.
/// Methods map one-to-one onto the host's synthetic-input primitives.
pub trait PlatformInputInjector: Send + Sync {
    /// Returns the current primary-display extent as `(width, height)` in
    /// pixels.  Queried per call, never cached by implementors.
    fn display_extent(&self) -> Result<(u32, u32), InjectionError>;

    /// Moves the cursor to an absolute pixel position on the primary display.
    fn place_cursor(&self, x: i32, y: i32) -> Result<(), InjectionError>;

    /// Emits a single mouse button transition (down or up).
    fn mouse_button(&self, button: ButtonKind, pressed: bool) -> Result<(), InjectionError>;

    /// Emits wheel rotation.  Deltas arrive in DOM orientation (positive
    /// `delta_y` scrolls content down); implementors convert sign and units.
    fn mouse_scroll(&self, delta_x: i32, delta_y: i32) -> Result<(), InjectionError>;

    /// Emits a key-down pulse immediately followed by a key-up pulse for the
    /// given virtual-key code.
    fn key_pulse(&self, vk: u8) -> Result<(), InjectionError>;

    /// Translates a printable character to a virtual-key code via the OS
    /// facility, masked to its low byte.  `None` when untranslatable on the
    /// active layout.
    fn char_to_vk(&self, ch: char) -> Option<u8>;
}

/// The Execute Input use case.
///
/// Receives one decoded [`InputEvent`] at a time and performs the
/// corresponding platform calls.  Holds no state between events.
pub struct ExecuteInputUseCase {
    injector: Arc<dyn PlatformInputInjector>,
}

impl ExecuteInputUseCase {
    /// Creates a new use case with the given platform injector.
    pub fn new(injector: Arc<dyn PlatformInputInjector>) -> Self {
        Self { injector }
    }

    /// Executes one event against the OS.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] if an OS primitive reports failure.
    pub fn execute(&self, event: &InputEvent) -> Result<(), InjectionError> {
        match event {
            InputEvent::MouseMove { x, y } => self.move_cursor(*x, *y),
            InputEvent::MouseButton { button, pressed } => {
                self.injector.mouse_button(*button, *pressed)
            }
            InputEvent::Click { button } => self.click(*button),
            InputEvent::DoubleClick { button } => {
                self.click(*button)?;
                self.click(*button)
            }
            InputEvent::Scroll { delta_x, delta_y } => self.scroll(*delta_x, *delta_y),
            InputEvent::KeyEvent { key } => self.key_tap(key),
            InputEvent::Ignored => Ok(()),
        }
    }

    /// Scales normalized coordinates against the current display extent and
    /// places the cursor.
    fn move_cursor(&self, x: f64, y: f64) -> Result<(), InjectionError> {
        // Out-of-range coordinates clamp to the screen edge.
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        // The extent is re-queried per event so placement stays correct
        // across resolution changes between events.
        let (width, height) = self.injector.display_extent()?;
        let px = (x * f64::from(width)).round() as i32;
        let py = (y * f64::from(height)).round() as i32;
        self.injector.place_cursor(px, py)
    }

    /// Press immediately followed by release.
    fn click(&self, button: ButtonKind) -> Result<(), InjectionError> {
        self.injector.mouse_button(button, true)?;
        self.injector.mouse_button(button, false)
    }

    fn scroll(&self, delta_x: f64, delta_y: f64) -> Result<(), InjectionError> {
        let dx = delta_x.round() as i32;
        let dy = delta_y.round() as i32;
        if dx == 0 && dy == 0 {
            return Ok(());
        }
        self.injector.mouse_scroll(dx, dy)
    }

    /// Resolves a virtual-key code and emits one complete tap.
    ///
    /// Keys that resolve to no code perform zero platform calls.
    fn key_tap(&self, key: &KeyIdentifier) -> Result<(), InjectionError> {
        let vk = match key {
            KeyIdentifier::Named(named) => Some(KeyMapper::named_to_windows_vk(*named)),
            KeyIdentifier::Char(ch) => self.injector.char_to_vk(*ch),
            KeyIdentifier::Unrecognized(raw) => {
                trace!(key = raw.as_str(), "unrecognized key; ignoring");
                None
            }
        };
        match vk {
            Some(vk) => self.injector.key_pulse(vk),
            None => Ok(()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
