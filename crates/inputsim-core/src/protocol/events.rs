//! Typed input event model.
//!
//! One [`InputEvent`] is decoded from one frame, executed exactly once by the
//! agent, and discarded.  The model carries no timestamps, sequence numbers,
//! or session identity — the agent is a stateless transducer from event to OS
//! action.

/// Mouse buttons the agent can press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Left,
    Right,
    Middle,
}

impl ButtonKind {
    /// Parses a wire button name.
    ///
    /// Unrecognized names resolve to [`ButtonKind::Left`].  This fallback is
    /// part of the wire contract, not an error path.
    pub fn from_wire(name: &str) -> Self {
        match name {
            "left" => Self::Left,
            "right" => Self::Right,
            "middle" => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Non-printable keys accepted by name on the wire.
///
/// The set is fixed; key names outside it that are not single characters are
/// carried as [`KeyIdentifier::Unrecognized`] and never reach the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Backspace,
    Tab,
    Escape,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
}

impl NamedKey {
    /// Looks up a wire key name.
    ///
    /// `" "` (a single space, the DOM name for the space bar) maps to
    /// [`NamedKey::Space`].
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            "Tab" => Some(Self::Tab),
            "Escape" => Some(Self::Escape),
            "Delete" => Some(Self::Delete),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            " " => Some(Self::Space),
            _ => None,
        }
    }
}

/// A key as named on the wire, classified for execution.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyIdentifier {
    /// A key from the fixed named set.
    Named(NamedKey),
    /// A single printable character, translated to a virtual-key code by the
    /// platform at execution time.
    Char(char),
    /// Anything else.  Executes as a no-op: zero platform calls, no error.
    Unrecognized(String),
}

impl KeyIdentifier {
    /// Classifies a raw wire key string.
    ///
    /// Named lookup runs first so `" "` becomes [`NamedKey::Space`] rather
    /// than `Char(' ')`.
    pub fn classify(raw: &str) -> Self {
        if let Some(named) = NamedKey::from_wire(raw) {
            return Self::Named(named);
        }
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::Char(ch),
            _ => Self::Unrecognized(raw.to_string()),
        }
    }
}

/// One decoded input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Absolute cursor placement.  `x` and `y` are normalized to the primary
    /// display in `[0.0, 1.0]`; out-of-range values are clamped at execution
    /// time, never rejected.
    MouseMove { x: f64, y: f64 },
    /// A single button state transition.
    MouseButton { button: ButtonKind, pressed: bool },
    /// Press immediately followed by release.
    Click { button: ButtonKind },
    /// Two click pulses in succession.
    DoubleClick { button: ButtonKind },
    /// Wheel rotation.  Deltas are in DOM orientation (positive `delta_y`
    /// scrolls content down).
    Scroll { delta_x: f64, delta_y: f64 },
    /// A complete key tap (down pulse immediately followed by up).  Held keys
    /// and key repeat are not representable.
    KeyEvent { key: KeyIdentifier },
    /// No-op sentinel for unknown or absent event types.  Executes without
    /// any platform call.
    Ignored,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_wire_parses_known_names() {
        assert_eq!(ButtonKind::from_wire("left"), ButtonKind::Left);
        assert_eq!(ButtonKind::from_wire("right"), ButtonKind::Right);
        assert_eq!(ButtonKind::from_wire("middle"), ButtonKind::Middle);
    }

    #[test]
    fn test_button_from_wire_unknown_names_fall_back_to_left() {
        assert_eq!(ButtonKind::from_wire("wheel-tilt"), ButtonKind::Left);
        assert_eq!(ButtonKind::from_wire("LEFT"), ButtonKind::Left);
        assert_eq!(ButtonKind::from_wire(""), ButtonKind::Left);
    }

    #[test]
    fn test_named_key_from_wire_covers_the_full_set() {
        assert_eq!(NamedKey::from_wire("Enter"), Some(NamedKey::Enter));
        assert_eq!(NamedKey::from_wire("Backspace"), Some(NamedKey::Backspace));
        assert_eq!(NamedKey::from_wire("Tab"), Some(NamedKey::Tab));
        assert_eq!(NamedKey::from_wire("Escape"), Some(NamedKey::Escape));
        assert_eq!(NamedKey::from_wire("Delete"), Some(NamedKey::Delete));
        assert_eq!(NamedKey::from_wire("ArrowUp"), Some(NamedKey::ArrowUp));
        assert_eq!(NamedKey::from_wire("ArrowDown"), Some(NamedKey::ArrowDown));
        assert_eq!(NamedKey::from_wire("ArrowLeft"), Some(NamedKey::ArrowLeft));
        assert_eq!(NamedKey::from_wire("ArrowRight"), Some(NamedKey::ArrowRight));
        assert_eq!(NamedKey::from_wire(" "), Some(NamedKey::Space));
    }

    #[test]
    fn test_named_key_from_wire_is_case_sensitive() {
        assert_eq!(NamedKey::from_wire("enter"), None);
        assert_eq!(NamedKey::from_wire("ESCAPE"), None);
    }

    #[test]
    fn test_classify_prefers_named_over_char_for_space() {
        // " " is both a named key and a single character; named wins.
        assert_eq!(KeyIdentifier::classify(" "), KeyIdentifier::Named(NamedKey::Space));
    }

    #[test]
    fn test_classify_single_character() {
        assert_eq!(KeyIdentifier::classify("a"), KeyIdentifier::Char('a'));
        assert_eq!(KeyIdentifier::classify("Z"), KeyIdentifier::Char('Z'));
        assert_eq!(KeyIdentifier::classify("é"), KeyIdentifier::Char('é'));
    }

    #[test]
    fn test_classify_multi_character_unknown_names() {
        assert_eq!(
            KeyIdentifier::classify("F13"),
            KeyIdentifier::Unrecognized("F13".to_string())
        );
        assert_eq!(
            KeyIdentifier::classify("MediaPlayPause"),
            KeyIdentifier::Unrecognized("MediaPlayPause".to_string())
        );
    }

    #[test]
    fn test_classify_empty_string_is_unrecognized() {
        assert_eq!(KeyIdentifier::classify(""), KeyIdentifier::Unrecognized(String::new()));
    }
}
