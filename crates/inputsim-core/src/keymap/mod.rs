//! Key translation tables for keyboard event injection.
//!
//! Named wire keys translate through a fixed table; printable characters are
//! translated at runtime by the platform's character-to-virtual-key facility
//! (`VkKeyScanW` on Windows), which is layout-aware in a way no static table
//! can be.

pub mod windows_vk;

use crate::protocol::events::NamedKey;

/// Unified key mapper providing the static translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates a named key to its Windows Virtual Key code.
    ///
    /// Total over [`NamedKey`]; never fails.
    pub fn named_to_windows_vk(key: NamedKey) -> u8 {
        windows_vk::named_to_vk(key)
    }
}
