use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use crate::error::{FormError, Result};
use crate::forms::{FieldArray, FormLookup, StructureAbsent};
use crate::objects::kind_name;

/// Longest chain of references followed before a structure is rejected.
const MAX_REFERENCE_DEPTH: usize = 32;

/// An opened PDF whose interactive form is being inspected.
///
/// The document owns every object of the file; field views handed out by
/// [`FormDocument::acro_form`] borrow from it.
///
/// # Example
///
/// ```rust,no_run
/// use formscope::{FormDocument, FormLookup};
///
/// # fn main() -> formscope::Result<()> {
/// let doc = FormDocument::open("character-sheet.pdf")?;
/// if let FormLookup::Fields(fields) = doc.acro_form()? {
///     for field in fields.iter() {
///         println!("{}", field?.name_or_unknown());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct FormDocument {
    inner: Document,
}

impl FormDocument {
    /// Open and parse the PDF at `path`.
    ///
    /// The file handle only lives for the duration of this call.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening {}", path.display());
        let inner = Document::load(path)?;
        Self::from_document(inner)
    }

    /// Parse a PDF held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(bytes)?;
        Self::from_document(inner)
    }

    /// Wrap an already parsed document, checking that it has a catalog.
    pub fn from_document(inner: Document) -> Result<Self> {
        let doc = Self { inner };
        doc.catalog()?;
        debug!(
            "loaded PDF {} with {} objects",
            doc.inner.version,
            doc.inner.objects.len()
        );
        Ok(doc)
    }

    /// The document catalog (`/Root` of the trailer).
    pub fn catalog(&self) -> Result<&Dictionary> {
        let root = self
            .inner
            .trailer
            .get(b"Root")
            .map_err(|_| FormError::MissingCatalog)?;
        self.resolve(root)?
            .as_dict()
            .map_err(|_| FormError::MissingCatalog)
    }

    /// Follow `object` through any indirect references to the concrete object.
    pub fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        self.resolve_with_id(object).map(|(_, resolved)| resolved)
    }

    /// Like [`resolve`](Self::resolve), also returning the id of the last
    /// reference followed (`None` when `object` was direct).
    pub fn resolve_with_id<'a>(
        &'a self,
        object: &'a Object,
    ) -> Result<(Option<ObjectId>, &'a Object)> {
        let mut current = object;
        let mut id = None;

        for _ in 0..MAX_REFERENCE_DEPTH {
            match current {
                Object::Reference(target) => {
                    id = Some(*target);
                    current = self
                        .inner
                        .objects
                        .get(target)
                        .ok_or(FormError::InvalidObjectReference(target.0, target.1))?;
                }
                _ => return Ok((id, current)),
            }
        }

        Err(FormError::InvalidStructure(format!(
            "reference chain longer than {MAX_REFERENCE_DEPTH} links"
        )))
    }

    /// Locate the interactive form and its root field array.
    ///
    /// A missing `/AcroForm` or `/Fields` entry is reported as
    /// [`FormLookup::Absent`] rather than as an error.
    pub fn acro_form(&self) -> Result<FormLookup<'_>> {
        let catalog = self.catalog()?;

        let Ok(acro_form) = catalog.get(b"AcroForm") else {
            return Ok(FormLookup::Absent(StructureAbsent::NoAcroForm));
        };
        let acro_form = match self.resolve(acro_form)? {
            Object::Dictionary(dict) => dict,
            Object::Null => return Ok(FormLookup::Absent(StructureAbsent::NoAcroForm)),
            other => {
                return Err(FormError::InvalidStructure(format!(
                    "/AcroForm is a {}, expected a dictionary",
                    kind_name(other)
                )))
            }
        };

        let Ok(fields) = acro_form.get(b"Fields") else {
            return Ok(FormLookup::Absent(StructureAbsent::NoFields));
        };
        let entries = match self.resolve(fields)? {
            Object::Array(entries) => entries,
            Object::Null => return Ok(FormLookup::Absent(StructureAbsent::NoFields)),
            other => {
                return Err(FormError::InvalidStructure(format!(
                    "/Fields is a {}, expected an array",
                    kind_name(other)
                )))
            }
        };

        debug!("AcroForm has {} root fields", entries.len());
        Ok(FormLookup::Fields(FieldArray::new(self, entries)))
    }
}
