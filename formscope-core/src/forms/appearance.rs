//! Normal appearance entries (`/AP /N`) according to ISO 32000-1 Section 12.5.5

use std::fmt;

use lopdf::Object;

use crate::objects::{decode_name, describe};

/// What a field's normal appearance entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalAppearance {
    /// Sub-dictionary mapping state names (`/On`, `/Off`, ...) to streams
    States(Vec<String>),
    /// A single appearance stream shared by every state
    Stream,
    /// Anything else, rendered as text
    Other(String),
}

impl NormalAppearance {
    pub(crate) fn from_object(object: &Object) -> Self {
        match object {
            Object::Dictionary(states) => {
                NormalAppearance::States(states.iter().map(|(key, _)| decode_name(key)).collect())
            }
            Object::Stream(_) => NormalAppearance::Stream,
            other => NormalAppearance::Other(describe(other).to_string()),
        }
    }

    /// State names, empty unless this is a state sub-dictionary.
    pub fn state_names(&self) -> &[String] {
        match self {
            NormalAppearance::States(names) => names,
            _ => &[],
        }
    }
}

impl fmt::Display for NormalAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalAppearance::States(names) => write!(f, "[{}]", names.join(", ")),
            NormalAppearance::Stream => write!(f, "<appearance stream>"),
            NormalAppearance::Other(text) => write!(f, "{text}"),
        }
    }
}
