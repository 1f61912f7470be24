//! Named-key → Windows Virtual Key (VK) translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).  VK codes identify
//! logical keys independent of keyboard layout: VK_RETURN is 0x0D on every
//! layout, so the fixed named set below can be translated statically.
//!
//! Printable characters are NOT in this table.  Their VK code depends on the
//! active layout (the character 'z' lives on different physical keys on
//! QWERTY and AZERTY), so the platform backend resolves them through the OS
//! translation facility at execution time.

use crate::protocol::events::NamedKey;

/// Translates a named key to its Windows Virtual Key code.
///
/// The match is exhaustive over [`NamedKey`], so the mapping is total by
/// construction — adding a named key without a VK code is a compile error.
pub fn named_to_vk(key: NamedKey) -> u8 {
    match key {
        NamedKey::Enter => 0x0D,      // VK_RETURN
        NamedKey::Backspace => 0x08,  // VK_BACK
        NamedKey::Tab => 0x09,        // VK_TAB
        NamedKey::Escape => 0x1B,     // VK_ESCAPE
        NamedKey::Delete => 0x2E,     // VK_DELETE
        NamedKey::ArrowUp => 0x26,    // VK_UP
        NamedKey::ArrowDown => 0x28,  // VK_DOWN
        NamedKey::ArrowLeft => 0x25,  // VK_LEFT
        NamedKey::ArrowRight => 0x27, // VK_RIGHT
        NamedKey::Space => 0x20,      // VK_SPACE
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
