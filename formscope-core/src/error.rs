use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF: {0}")]
    Load(#[from] lopdf::Error),

    #[error("Document has no catalog (/Root missing from trailer)")]
    MissingCatalog,

    #[error("Invalid object reference: {0} {1} R")]
    InvalidObjectReference(u32, u16),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_form_error_display() {
        let error = FormError::InvalidStructure("field 3 is not a dictionary".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid PDF structure: field 3 is not a dictionary"
        );
    }

    #[test]
    fn test_invalid_reference_display() {
        let error = FormError::InvalidObjectReference(999, 0);
        assert_eq!(error.to_string(), "Invalid object reference: 999 0 R");
    }

    #[test]
    fn test_form_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let form_error = FormError::from(io_error);

        match form_error {
            FormError::Io(ref err) => {
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_form_error_from_serde_error() {
        let serde_error = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let form_error = FormError::from(serde_error);
        assert!(matches!(form_error, FormError::Serialization(_)));
        assert!(form_error.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_missing_catalog_debug() {
        let debug_str = format!("{:?}", FormError::MissingCatalog);
        assert!(debug_str.contains("MissingCatalog"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(FormError::InvalidStructure("test".to_string()));
        match result.unwrap_err() {
            FormError::InvalidStructure(msg) => assert_eq!(msg, "test"),
            _ => panic!("Expected InvalidStructure variant"),
        }
    }
}
