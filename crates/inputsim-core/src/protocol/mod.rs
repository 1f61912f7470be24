//! Wire protocol for input event frames.
//!
//! A frame is standard base64 of a UTF-8 JSON object with a `"type"` field
//! selecting the event kind.  [`codec`] decodes frames into the typed model
//! defined in [`events`]; there is no encode direction, the agent is the
//! receive-only end of the pipeline.

pub mod codec;
pub mod events;
