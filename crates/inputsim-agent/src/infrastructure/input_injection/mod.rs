//! Platform-specific input injection implementations.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]` and re-exported as `NativeInputInjector`, so the
//! rest of the codebase never branches on the OS.
//!
//! | Module        | OS          | API used                                        |
//! |---------------|-------------|-------------------------------------------------|
//! | `windows`     | Windows     | `SetCursorPos` / `mouse_event` / `keybd_event`  |
//! | `unsupported` | anything else | none — every call reports a platform error    |
//!
//! A [`mock::MockInputInjector`] is always compiled (not guarded by `#[cfg]`)
//! so tests on any platform can run without a physical display.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Windows injector as `NativeInputInjector` on Windows.
#[cfg(target_os = "windows")]
pub use windows::WindowsInputInjector as NativeInputInjector;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

/// Re-export the stub injector as `NativeInputInjector` elsewhere.
#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedInputInjector as NativeInputInjector;
