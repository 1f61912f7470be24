//! Integration tests for the inputsim-core frame codec.
//!
//! Exercises the full decode path through the public API with the literal
//! JSON shapes the upstream sender produces, including the fallback and
//! failure paths of the wire contract.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use inputsim_core::{decode_frame, ButtonKind, DecodeError, InputEvent, KeyIdentifier, NamedKey};

/// Encodes a JSON literal into a wire frame.
fn frame(json: &str) -> String {
    BASE64.encode(json)
}

#[test]
fn test_mousemove_decodes_with_exact_field_values() {
    let event = decode_frame(&frame(r#"{"type":"mousemove","x":0.25,"y":0.75}"#))
        .expect("decode must succeed");

    assert_eq!(event, InputEvent::MouseMove { x: 0.25, y: 0.75 });
}

#[test]
fn test_mousedown_right_decodes_to_pressed_right_button() {
    let event = decode_frame(&frame(r#"{"type":"mousedown","button":"right"}"#))
        .expect("decode must succeed");

    assert_eq!(
        event,
        InputEvent::MouseButton { button: ButtonKind::Right, pressed: true }
    );
}

#[test]
fn test_mouseup_middle_decodes_to_released_middle_button() {
    let event = decode_frame(&frame(r#"{"type":"mouseup","button":"middle"}"#))
        .expect("decode must succeed");

    assert_eq!(
        event,
        InputEvent::MouseButton { button: ButtonKind::Middle, pressed: false }
    );
}

#[test]
fn test_button_field_is_optional_and_defaults_to_left() {
    let down = decode_frame(&frame(r#"{"type":"mousedown"}"#)).expect("decode must succeed");
    let up = decode_frame(&frame(r#"{"type":"mouseup"}"#)).expect("decode must succeed");

    assert_eq!(down, InputEvent::MouseButton { button: ButtonKind::Left, pressed: true });
    assert_eq!(up, InputEvent::MouseButton { button: ButtonKind::Left, pressed: false });
}

#[test]
fn test_every_unmapped_button_name_resolves_to_left() {
    for name in ["back", "forward", "wheel", "button4", "LEFT", ""] {
        let json = format!(r#"{{"type":"mousedown","button":"{name}"}}"#);
        let event = decode_frame(&frame(&json)).expect("decode must succeed");
        assert_eq!(
            event,
            InputEvent::MouseButton { button: ButtonKind::Left, pressed: true },
            "button name {name:?} must fall back to left"
        );
    }
}

#[test]
fn test_click_and_dblclick_decode() {
    let click = decode_frame(&frame(r#"{"type":"click","button":"right"}"#))
        .expect("decode must succeed");
    let dbl = decode_frame(&frame(r#"{"type":"dblclick"}"#)).expect("decode must succeed");

    assert_eq!(click, InputEvent::Click { button: ButtonKind::Right });
    assert_eq!(dbl, InputEvent::DoubleClick { button: ButtonKind::Left });
}

#[test]
fn test_scroll_decodes_with_dom_field_names() {
    let event = decode_frame(&frame(r#"{"type":"scroll","deltaX":-3.0,"deltaY":120}"#))
        .expect("decode must succeed");

    assert_eq!(event, InputEvent::Scroll { delta_x: -3.0, delta_y: 120.0 });
}

#[test]
fn test_keypress_named_and_keydown_char_decode() {
    let named = decode_frame(&frame(r#"{"type":"keypress","key":"ArrowLeft"}"#))
        .expect("decode must succeed");
    let ch = decode_frame(&frame(r#"{"type":"keydown","key":"x"}"#))
        .expect("decode must succeed");

    assert_eq!(named, InputEvent::KeyEvent { key: KeyIdentifier::Named(NamedKey::ArrowLeft) });
    assert_eq!(ch, InputEvent::KeyEvent { key: KeyIdentifier::Char('x') });
}

#[test]
fn test_space_key_name_decodes_as_named_space() {
    let event = decode_frame(&frame(r#"{"type":"keypress","key":" "}"#))
        .expect("decode must succeed");

    assert_eq!(event, InputEvent::KeyEvent { key: KeyIdentifier::Named(NamedKey::Space) });
}

#[test]
fn test_unknown_key_name_decodes_as_unrecognized() {
    let event = decode_frame(&frame(r#"{"type":"keydown","key":"NumLock"}"#))
        .expect("decode must succeed");

    assert_eq!(
        event,
        InputEvent::KeyEvent { key: KeyIdentifier::Unrecognized("NumLock".to_string()) }
    );
}

#[test]
fn test_unknown_event_type_decodes_to_ignored() {
    let event = decode_frame(&frame(r#"{"type":"pinch","scale":2.0}"#))
        .expect("unknown kinds must not be errors");

    assert_eq!(event, InputEvent::Ignored);
}

#[test]
fn test_missing_event_type_decodes_to_ignored() {
    let event = decode_frame(&frame(r#"{"key":"Enter"}"#))
        .expect("missing type must not be an error");

    assert_eq!(event, InputEvent::Ignored);
}

#[test]
fn test_invalid_base64_yields_encoding_error() {
    let result = decode_frame("not-base64!!");

    assert!(matches!(result, Err(DecodeError::Encoding(_))));
}

#[test]
fn test_base64_of_invalid_json_yields_malformed_error() {
    let result = decode_frame(&frame("{not json"));

    assert!(matches!(result, Err(DecodeError::Malformed(_))));
}

#[test]
fn test_missing_required_fields_yield_malformed_errors() {
    for json in [
        r#"{"type":"mousemove"}"#,
        r#"{"type":"mousemove","x":0.5}"#,
        r#"{"type":"scroll"}"#,
        r#"{"type":"keypress"}"#,
    ] {
        let result = decode_frame(&frame(json));
        assert!(
            matches!(result, Err(DecodeError::Malformed(_))),
            "{json} must be a hard decode error"
        );
    }
}
