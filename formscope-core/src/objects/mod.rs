//! Helpers over the `lopdf` object model: text-string decoding and a
//! human-readable rendering of arbitrary PDF objects.

mod display;
mod text;

pub use display::{describe, kind_name, ObjectDisplay};
pub use text::{decode_name, decode_text};

pub use lopdf::{Dictionary, Object, ObjectId};
