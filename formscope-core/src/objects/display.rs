use std::fmt;

use lopdf::Object;

use super::text::{decode_name, decode_text};

/// Display adapter printing an object as a short, readable PDF-like literal.
///
/// References are printed as `N G R` and never followed, so cyclic
/// structures (kids pointing back at their `/Parent`) stay finite.
pub struct ObjectDisplay<'a>(pub &'a Object);

/// Shorthand for `ObjectDisplay(object)`.
pub fn describe(object: &Object) -> ObjectDisplay<'_> {
    ObjectDisplay(object)
}

impl fmt::Display for ObjectDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Object::Null => write!(f, "null"),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::Integer(i) => write!(f, "{i}"),
            Object::Real(r) => write!(f, "{r}"),
            Object::Name(name) => write!(f, "{}", decode_name(name)),
            Object::String(bytes, _) => write!(f, "{}", decode_text(bytes)),
            Object::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", ObjectDisplay(item))?;
                }
                write!(f, "]")
            }
            Object::Dictionary(dict) => {
                write!(f, "{{")?;
                for (i, (key, value)) in dict.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", decode_name(key), ObjectDisplay(value))?;
                }
                write!(f, "}}")
            }
            Object::Stream(stream) => write!(f, "<stream, {} bytes>", stream.content.len()),
            Object::Reference((number, generation)) => write!(f, "{number} {generation} R"),
        }
    }
}

/// Name of the object's variant, used in structure diagnostics.
pub fn kind_name(object: &Object) -> &'static str {
    match object {
        Object::Null => "null",
        Object::Boolean(_) => "boolean",
        Object::Integer(_) => "integer",
        Object::Real(_) => "real",
        Object::Name(_) => "name",
        Object::String(..) => "string",
        Object::Array(_) => "array",
        Object::Dictionary(_) => "dictionary",
        Object::Stream(_) => "stream",
        Object::Reference(_) => "reference",
    }
}
