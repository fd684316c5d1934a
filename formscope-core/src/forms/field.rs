//! Read-only view of one field dictionary

use std::fmt;

use lopdf::{Dictionary, Object, ObjectId};
use tracing::{debug, warn};

use super::appearance::NormalAppearance;
use super::field_type::{FieldFlags, FieldKind};
use crate::document::FormDocument;
use crate::error::{FormError, Result};
use crate::objects::{decode_name, decode_text, describe, kind_name};

/// Placeholder reported for a missing or undecodable name or type.
pub const UNKNOWN: &str = "Unknown";

/// Longest `/Parent` chain searched for inherited entries.
const MAX_INHERITANCE_DEPTH: usize = 32;

/// A field dictionary borrowed from its owning [`FormDocument`].
///
/// Every accessor resolves indirect references before inspecting a value and
/// reports an absent entry as `None`; no lookup fails because a key is
/// missing.
#[derive(Clone, Copy)]
pub struct FieldDict<'a> {
    doc: &'a FormDocument,
    id: Option<ObjectId>,
    dict: &'a Dictionary,
}

impl<'a> FieldDict<'a> {
    /// Resolve `object` (typically a `/Fields` or `/Kids` element) to a field.
    pub fn from_object(doc: &'a FormDocument, object: &'a Object) -> Result<Self> {
        let (id, resolved) = doc.resolve_with_id(object)?;
        match resolved {
            Object::Dictionary(dict) => Ok(Self { doc, id, dict }),
            other => Err(FormError::InvalidStructure(format!(
                "field entry is a {}, expected a dictionary",
                kind_name(other)
            ))),
        }
    }

    /// Object id of the field, `None` for a direct dictionary.
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// Look up `key`, following indirect references.
    ///
    /// A dangling reference is logged and treated as absent.
    pub fn get(&self, key: &[u8]) -> Option<&'a Object> {
        let raw = self.dict.get(key).ok()?;
        match self.doc.resolve(raw) {
            Ok(Object::Null) => None,
            Ok(object) => Some(object),
            Err(err) => {
                warn!("/{}: {err}", String::from_utf8_lossy(key));
                None
            }
        }
    }

    /// Parent field (`/Parent`), if this is a kid.
    pub fn parent(&self) -> Option<FieldDict<'a>> {
        let raw = self.dict.get(b"Parent").ok()?;
        match FieldDict::from_object(self.doc, raw) {
            Ok(parent) => Some(parent),
            Err(err) => {
                warn!("/Parent: {err}");
                None
            }
        }
    }

    /// Look up an inheritable `key` on the field, then on its ancestors.
    pub fn inherited(&self, key: &[u8]) -> Option<&'a Object> {
        let mut current = *self;
        for _ in 0..MAX_INHERITANCE_DEPTH {
            if let Some(found) = current.get(key) {
                return Some(found);
            }
            current = current.parent()?;
        }
        debug!("gave up looking for inherited /{}", String::from_utf8_lossy(key));
        None
    }

    /// Partial field name (`/T`), decoded to text.
    pub fn name(&self) -> Option<String> {
        self.text_entry(b"T")
    }

    pub fn name_or_unknown(&self) -> String {
        self.name().unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Field type (`/FT`) as written in the file, e.g. `/Btn`.
    pub fn field_type(&self) -> Option<String> {
        match self.get(b"FT")? {
            Object::Name(name) => Some(decode_name(name)),
            Object::String(bytes, _) => Some(decode_text(bytes)),
            other => {
                debug!("/FT has unexpected {} value", kind_name(other));
                None
            }
        }
    }

    pub fn field_type_or_unknown(&self) -> String {
        self.field_type().unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Current value (`/V`)
    pub fn value(&self) -> Option<&'a Object> {
        self.get(b"V")
    }

    /// Default value (`/DV`)
    pub fn default_value(&self) -> Option<&'a Object> {
        self.get(b"DV")
    }

    /// Appearance state (`/AS`)
    pub fn appearance_state(&self) -> Option<&'a Object> {
        self.get(b"AS")
    }

    /// Export options (`/Opt`)
    pub fn options(&self) -> Option<&'a Object> {
        self.get(b"Opt")
    }

    /// Default appearance string (`/DA`)
    pub fn default_appearance(&self) -> Option<String> {
        self.text_entry(b"DA")
    }

    /// Whether the widget carries an appearance characteristics dictionary (`/MK`)
    pub fn has_appearance_characteristics(&self) -> bool {
        self.get(b"MK").is_some()
    }

    /// Raw `/Ff` integer
    pub fn raw_flags(&self) -> Option<i64> {
        match self.get(b"Ff")? {
            Object::Integer(raw) => Some(*raw),
            other => {
                debug!("/Ff has unexpected {} value", kind_name(other));
                None
            }
        }
    }

    pub fn flags(&self) -> FieldFlags {
        self.raw_flags()
            .map(FieldFlags::from_raw)
            .unwrap_or_else(FieldFlags::empty)
    }

    /// Kind of the field, classified from the inherited `/FT` and `/Ff`.
    pub fn kind(&self) -> FieldKind {
        let field_type = match self.inherited(b"FT") {
            Some(Object::Name(name)) => Some(name.as_slice()),
            _ => None,
        };
        let flags = match self.inherited(b"Ff") {
            Some(Object::Integer(raw)) => FieldFlags::from_raw(*raw),
            _ => FieldFlags::empty(),
        };
        FieldKind::classify(field_type, flags)
    }

    /// Whether the current value is an on state (a name other than `/Off`).
    pub fn is_checked(&self) -> bool {
        matches!(self.value(), Some(Object::Name(state)) if state.as_slice() != b"Off")
    }

    /// Child fields or widgets (`/Kids`), resolved. Empty when absent.
    pub fn kids(&self) -> Result<Vec<FieldDict<'a>>> {
        match self.get(b"Kids") {
            None => Ok(Vec::new()),
            Some(Object::Array(kids)) => kids
                .iter()
                .map(|kid| FieldDict::from_object(self.doc, kid))
                .collect(),
            Some(other) => Err(FormError::InvalidStructure(format!(
                "/Kids is a {}, expected an array",
                kind_name(other)
            ))),
        }
    }

    /// Appearance dictionary (`/AP`)
    pub fn appearance_dict(&self) -> Option<&'a Dictionary> {
        match self.get(b"AP")? {
            Object::Dictionary(ap) => Some(ap),
            _ => None,
        }
    }

    /// Normal appearance (`/AP /N`)
    pub fn normal_appearance(&self) -> Option<NormalAppearance> {
        let ap = self.appearance_dict()?;
        let normal = ap.get(b"N").ok()?;
        match self.doc.resolve(normal) {
            Ok(resolved) => Some(NormalAppearance::from_object(resolved)),
            Err(err) => {
                warn!("/AP /N: {err}");
                None
            }
        }
    }

    fn text_entry(&self, key: &[u8]) -> Option<String> {
        match self.get(key)? {
            Object::String(bytes, _) => Some(decode_text(bytes)),
            Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
            other => {
                debug!(
                    "/{} has unexpected {} value",
                    String::from_utf8_lossy(key),
                    kind_name(other)
                );
                None
            }
        }
    }
}

impl fmt::Debug for FieldDict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDict")
            .field("id", &self.id)
            .field("dict", &describe(&Object::Dictionary(self.dict.clone())).to_string())
            .finish()
    }
}
