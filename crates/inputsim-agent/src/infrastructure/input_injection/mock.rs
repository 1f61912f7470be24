//! Mock platform input injector for unit testing.
//!
//! The real injector moves the cursor and presses keys on the machine running
//! the tests, and its effects cannot be observed from Rust test code.  The
//! mock replaces every OS call with in-memory recording: each injection is
//! pushed into a `Mutex<Vec<RecordedCall>>` so assertions can inspect exactly
//! what was emitted and in what order.
//!
//! # `should_fail` flag
//!
//! Construct with `should_fail: true` to make every injection return
//! [`InjectionError::PlatformCall`], for exercising error-handling paths:
//!
//! ```ignore
//! let injector = Arc::new(MockInputInjector { should_fail: true, ..Default::default() });
//! ```

use std::sync::Mutex;

use inputsim_core::protocol::events::ButtonKind;

use crate::application::execute_input::{InjectionError, PlatformInputInjector};

/// One recorded platform call, in emission order.
///
/// Display-extent queries are reads, not injections, and are not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedCall {
    PlaceCursor { x: i32, y: i32 },
    MouseButton { button: ButtonKind, pressed: bool },
    MouseScroll { delta_x: i32, delta_y: i32 },
    KeyPulse { vk: u8 },
}

/// A mock injector that records all calls without touching the OS.
pub struct MockInputInjector {
    /// Extent returned by `display_extent`.  Behind a `Mutex` so tests can
    /// simulate a resolution change between events.
    pub extent: Mutex<(u32, u32)>,
    /// Every injection, in order.
    pub calls: Mutex<Vec<RecordedCall>>,
    /// When `true`, every injection returns `InjectionError::PlatformCall`.
    pub should_fail: bool,
}

impl MockInputInjector {
    /// Creates a mock with a single 1920×1080 primary display and
    /// `should_fail = false`.
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::PlatformCall("mock failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockInputInjector {
    fn default() -> Self {
        Self {
            extent: Mutex::new((1920, 1080)),
            calls: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }
}

impl PlatformInputInjector for MockInputInjector {
    fn display_extent(&self) -> Result<(u32, u32), InjectionError> {
        self.check()?;
        Ok(*self.extent.lock().unwrap())
    }

    fn place_cursor(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        self.check()?;
        self.calls.lock().unwrap().push(RecordedCall::PlaceCursor { x, y });
        Ok(())
    }

    fn mouse_button(&self, button: ButtonKind, pressed: bool) -> Result<(), InjectionError> {
        self.check()?;
        self.calls.lock().unwrap().push(RecordedCall::MouseButton { button, pressed });
        Ok(())
    }

    fn mouse_scroll(&self, delta_x: i32, delta_y: i32) -> Result<(), InjectionError> {
        self.check()?;
        self.calls.lock().unwrap().push(RecordedCall::MouseScroll { delta_x, delta_y });
        Ok(())
    }

    fn key_pulse(&self, vk: u8) -> Result<(), InjectionError> {
        self.check()?;
        self.calls.lock().unwrap().push(RecordedCall::KeyPulse { vk });
        Ok(())
    }

    /// US-layout approximation of the platform translation facility, covering
    /// the characters tests exercise.
    fn char_to_vk(&self, ch: char) -> Option<u8> {
        match ch {
            'a'..='z' => Some(ch.to_ascii_uppercase() as u8),
            'A'..='Z' => Some(ch as u8),
            '0'..='9' => Some(ch as u8),
            ' ' => Some(0x20),
            _ => None,
        }
    }
}
