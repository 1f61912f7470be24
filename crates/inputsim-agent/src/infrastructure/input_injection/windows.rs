//! Windows input injection via the user32 synthetic-input primitives.
//!
//! Uses the discrete-code primitives (`mouse_event`, `keybd_event`) rather
//! than `SendInput` batching: the agent injects exactly one transition per
//! decoded event, so there is never a batch to build.  `mouse_event` and
//! `keybd_event` report no failure status; only `SetCursorPos` and the
//! display-extent query can surface a platform error.

#![cfg(target_os = "windows")]

use inputsim_core::protocol::events::ButtonKind;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    keybd_event, mouse_event, VkKeyScanW, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP, MOUSEEVENTF_HWHEEL,
    MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
    MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL, MOUSE_EVENT_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SetCursorPos, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::application::execute_input::{InjectionError, PlatformInputInjector};

/// Windows implementation of [`PlatformInputInjector`] over user32.
pub struct WindowsInputInjector;

impl WindowsInputInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInputInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInputInjector for WindowsInputInjector {
    fn display_extent(&self) -> Result<(u32, u32), InjectionError> {
        // SM_CXSCREEN/SM_CYSCREEN are the primary display, not the virtual
        // desktop — normalized coordinates are defined against the primary.
        // SAFETY: GetSystemMetrics is always safe to call.
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        if width <= 0 || height <= 0 {
            return Err(InjectionError::PlatformCall(
                "GetSystemMetrics reported an empty primary display".to_string(),
            ));
        }
        Ok((width as u32, height as u32))
    }

    fn place_cursor(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        // SAFETY: SetCursorPos takes no pointer arguments.
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| InjectionError::PlatformCall(format!("SetCursorPos: {e}")))
    }

    fn mouse_button(&self, button: ButtonKind, pressed: bool) -> Result<(), InjectionError> {
        // Total over ButtonKind × bool: every combination has a MOUSEEVENTF code.
        let flags: MOUSE_EVENT_FLAGS = match (button, pressed) {
            (ButtonKind::Left, true) => MOUSEEVENTF_LEFTDOWN,
            (ButtonKind::Left, false) => MOUSEEVENTF_LEFTUP,
            (ButtonKind::Right, true) => MOUSEEVENTF_RIGHTDOWN,
            (ButtonKind::Right, false) => MOUSEEVENTF_RIGHTUP,
            (ButtonKind::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
            (ButtonKind::Middle, false) => MOUSEEVENTF_MIDDLEUP,
        };
        // SAFETY: without MOVE/ABSOLUTE flags, dx/dy/dwData are ignored.
        unsafe { mouse_event(flags, 0, 0, 0, 0) };
        Ok(())
    }

    fn mouse_scroll(&self, delta_x: i32, delta_y: i32) -> Result<(), InjectionError> {
        // Wheel data is positive away from the user; DOM deltas are positive
        // towards the user, hence the sign flip on the vertical axis.
        if delta_y != 0 {
            // SAFETY: wheel events carry the rotation in dwData only.
            unsafe { mouse_event(MOUSEEVENTF_WHEEL, 0, 0, -delta_y, 0) };
        }
        if delta_x != 0 {
            // SAFETY: as above.
            unsafe { mouse_event(MOUSEEVENTF_HWHEEL, 0, 0, delta_x, 0) };
        }
        Ok(())
    }

    fn key_pulse(&self, vk: u8) -> Result<(), InjectionError> {
        // SAFETY: keybd_event takes no pointer arguments.
        unsafe {
            keybd_event(vk, 0, KEYBD_EVENT_FLAGS(0), 0); // key down
            keybd_event(vk, 0, KEYEVENTF_KEYUP, 0); // key up
        }
        Ok(())
    }

    fn char_to_vk(&self, ch: char) -> Option<u8> {
        // Characters outside the Basic Multilingual Plane have no single
        // UTF-16 code unit and cannot be scanned.
        let code_unit = u16::try_from(u32::from(ch)).ok()?;
        // SAFETY: VkKeyScanW takes no pointer arguments.
        let scan = unsafe { VkKeyScanW(code_unit) };
        if scan == -1 {
            return None;
        }
        // Low byte is the virtual-key code; the high byte carries shift state.
        Some((scan & 0xFF) as u8)
    }
}
