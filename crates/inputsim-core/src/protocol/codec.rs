//! Frame codec: base64-of-JSON wire frames to typed [`InputEvent`] values.
//!
//! Wire format, one frame:
//! ```text
//! base64( UTF-8 JSON object with a "type" discriminant )
//! ```
//!
//! Decoding is two fallible stages — base64, then JSON — followed by
//! per-type field rules:
//!
//! | `type`                  | required        | optional             |
//! |-------------------------|-----------------|----------------------|
//! | `mousemove`             | `x`, `y`        |                      |
//! | `mousedown` / `mouseup` |                 | `button` (→ `left`)  |
//! | `click` / `dblclick`    |                 | `button` (→ `left`)  |
//! | `scroll`                | `deltaX`, `deltaY` |                   |
//! | `keypress` / `keydown`  | `key`           |                      |
//! | anything else / absent  | decodes to [`InputEvent::Ignored`]     |
//!
//! A missing or wrong-typed required field is a hard [`DecodeError`];
//! an unknown `type` is not — unknown kinds are dropped silently so newer
//! upstream senders stay compatible with older agents.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::protocol::events::{ButtonKind, InputEvent, KeyIdentifier};

/// Errors that can occur while decoding a single frame.
///
/// Both variants are recoverable per-frame; neither terminates a persistent
/// session.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The frame was not valid standard base64.
    #[error("frame is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// The decoded payload was not a JSON event object, or a required field
    /// was absent or wrong-typed for its event type.
    #[error("malformed event payload: {0}")]
    Malformed(String),
}

/// Raw JSON shape of one wire event.
///
/// Every field is optional here so that requiredness is enforced per event
/// type in [`RawEvent::into_event`], not per object by serde.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    button: Option<String>,
    #[serde(rename = "deltaX")]
    delta_x: Option<f64>,
    #[serde(rename = "deltaY")]
    delta_y: Option<f64>,
    key: Option<String>,
}

/// Decodes one wire frame into an [`InputEvent`].
///
/// The caller is expected to have trimmed surrounding whitespace (the session
/// loop trims each line before decoding).
///
/// # Errors
///
/// Returns [`DecodeError::Encoding`] when base64 decoding fails and
/// [`DecodeError::Malformed`] when the payload is not a valid event object.
///
/// # Examples
///
/// ```rust
/// use inputsim_core::{decode_frame, InputEvent};
///
/// // base64 of {"type":"mousemove","x":0.5,"y":0.5}
/// let event = decode_frame("eyJ0eXBlIjoibW91c2Vtb3ZlIiwieCI6MC41LCJ5IjowLjV9").unwrap();
/// assert_eq!(event, InputEvent::MouseMove { x: 0.5, y: 0.5 });
/// ```
pub fn decode_frame(frame: &str) -> Result<InputEvent, DecodeError> {
    let payload = BASE64.decode(frame)?;
    let raw: RawEvent =
        serde_json::from_slice(&payload).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    raw.into_event()
}

impl RawEvent {
    /// Applies the per-type field rules.
    fn into_event(self) -> Result<InputEvent, DecodeError> {
        let kind = match self.kind.as_deref() {
            Some(kind) => kind,
            None => {
                debug!("frame without an event type; ignoring");
                return Ok(InputEvent::Ignored);
            }
        };

        match kind {
            "mousemove" => Ok(InputEvent::MouseMove {
                x: self.x.ok_or_else(|| missing(kind, "x"))?,
                y: self.y.ok_or_else(|| missing(kind, "y"))?,
            }),
            "mousedown" | "mouseup" => Ok(InputEvent::MouseButton {
                button: self.button_or_left(),
                pressed: kind == "mousedown",
            }),
            "click" => Ok(InputEvent::Click { button: self.button_or_left() }),
            "dblclick" => Ok(InputEvent::DoubleClick { button: self.button_or_left() }),
            "scroll" => Ok(InputEvent::Scroll {
                delta_x: self.delta_x.ok_or_else(|| missing(kind, "deltaX"))?,
                delta_y: self.delta_y.ok_or_else(|| missing(kind, "deltaY"))?,
            }),
            "keypress" | "keydown" => {
                let key = self.key.ok_or_else(|| missing(kind, "key"))?;
                Ok(InputEvent::KeyEvent { key: KeyIdentifier::classify(&key) })
            }
            other => {
                debug!(kind = other, "unknown event type; ignoring");
                Ok(InputEvent::Ignored)
            }
        }
    }

    fn button_or_left(&self) -> ButtonKind {
        self.button.as_deref().map_or(ButtonKind::Left, ButtonKind::from_wire)
    }
}

fn missing(kind: &str, field: &'static str) -> DecodeError {
    DecodeError::Malformed(format!("'{kind}' event is missing required field '{field}'"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
