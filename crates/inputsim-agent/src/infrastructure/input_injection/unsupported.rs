//! Fallback injector for platforms without an input backend.
//!
//! The agent currently targets Windows hosts.  On other platforms the binary
//! still builds and runs — the session loop, codec, and diagnostics all work,
//! but every injection reports a platform error, which the persistent loop
//! logs and survives like any other per-frame failure.

#![cfg(not(target_os = "windows"))]

use inputsim_core::protocol::events::ButtonKind;

use crate::application::execute_input::{InjectionError, PlatformInputInjector};

/// Stub implementation of [`PlatformInputInjector`] for unsupported hosts.
pub struct UnsupportedInputInjector;

impl UnsupportedInputInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedInputInjector {
    fn default() -> Self {
        Self::new()
    }
}

fn unsupported() -> InjectionError {
    InjectionError::PlatformCall(format!(
        "input injection is not supported on {}",
        std::env::consts::OS
    ))
}

impl PlatformInputInjector for UnsupportedInputInjector {
    fn display_extent(&self) -> Result<(u32, u32), InjectionError> {
        Err(unsupported())
    }

    fn place_cursor(&self, _x: i32, _y: i32) -> Result<(), InjectionError> {
        Err(unsupported())
    }

    fn mouse_button(&self, _button: ButtonKind, _pressed: bool) -> Result<(), InjectionError> {
        Err(unsupported())
    }

    fn mouse_scroll(&self, _delta_x: i32, _delta_y: i32) -> Result<(), InjectionError> {
        Err(unsupported())
    }

    fn key_pulse(&self, _vk: u8) -> Result<(), InjectionError> {
        Err(unsupported())
    }

    fn char_to_vk(&self, _ch: char) -> Option<u8> {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
