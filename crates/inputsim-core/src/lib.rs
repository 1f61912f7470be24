//! # inputsim-core
//!
//! Shared library for Input-Sim containing the wire protocol (event model and
//! frame codec) and the key translation tables.
//!
//! This crate is the leaf of the workspace: it has no OS API, runtime, or I/O
//! dependencies, so the agent's application layer and its tests can exercise
//! the full decode path without a desktop environment.
//!
//! # What travels over the wire
//!
//! An upstream controller (the remote viewer side of the pipeline) serializes
//! each user input intent as a small JSON object, base64-encodes it, and ships
//! one frame per line.  This crate turns a frame back into a typed
//! [`InputEvent`]:
//!
//! ```text
//! "eyJ0eXBlIjoibW91c2Vtb3ZlIiwieCI6MC41LCJ5IjowLjV9"
//!        │ base64 decode
//!        ▼
//! {"type":"mousemove","x":0.5,"y":0.5}
//!        │ JSON parse + field rules
//!        ▼
//! InputEvent::MouseMove { x: 0.5, y: 0.5 }
//! ```
//!
//! - **`protocol`** – the [`InputEvent`] model and the frame codec with its
//!   typed [`DecodeError`].
//! - **`keymap`** – the fixed named-key → Windows virtual-key table.  Printable
//!   characters are translated at runtime by the platform backend instead.

pub mod keymap;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `inputsim_core::InputEvent` instead of the full module path.
pub use protocol::codec::{decode_frame, DecodeError};
pub use protocol::events::{ButtonKind, InputEvent, KeyIdentifier, NamedKey};
