//! Validated write request.

use std::ffi::OsString;

use super::DomainError;

/// A template body paired with the model name that seeds it.
///
/// Invariant: both fields are non-empty UTF-8 text. Enforced at construction,
/// so every side effect downstream can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRequest {
    content: String,
    model_name: String,
}

impl TemplateRequest {
    /// Build a request from text arguments.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty `content` (checked first) or an empty
    /// `model_name`.
    pub fn new(
        content: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::missing("content", "missing content"));
        }

        let model_name = model_name.into();
        if model_name.is_empty() {
            return Err(DomainError::missing("model_name", "missing model name"));
        }

        Ok(Self {
            content,
            model_name,
        })
    }

    /// Build a request from raw input (file bytes, command-line arguments).
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// empty content, non-UTF-8 content, empty model name, non-UTF-8 model name.
    pub fn from_raw(content: Vec<u8>, model_name: OsString) -> Result<Self, DomainError> {
        if content.is_empty() {
            return Err(DomainError::missing("content", "missing content"));
        }
        let content = String::from_utf8(content).map_err(|_| DomainError::TypeMismatch {
            argument: "content",
            expected: "UTF-8 text",
        })?;

        if model_name.is_empty() {
            return Err(DomainError::missing("model_name", "missing model name"));
        }
        let model_name = model_name
            .into_string()
            .map_err(|_| DomainError::TypeMismatch {
                argument: "model_name",
                expected: "UTF-8 text",
            })?;

        Ok(Self {
            content,
            model_name,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_content_before_empty_name() {
        let err = TemplateRequest::new("", "").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidArgument {
                argument: "content",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_model_name() {
        let err = TemplateRequest::new("body", "").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidArgument {
                argument: "model_name",
                ..
            }
        ));
    }

    #[test]
    fn whitespace_content_is_accepted() {
        let request = TemplateRequest::new("  \n", "Foo").unwrap();
        assert_eq!(request.content(), "  \n");
        assert_eq!(request.model_name(), "Foo");
    }

    #[test]
    fn raw_non_utf8_content_is_type_mismatch() {
        let err = TemplateRequest::from_raw(vec![0xff, 0xfe], "Foo".into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::TypeMismatch {
                argument: "content",
                expected: "UTF-8 text"
            }
        );
    }

    #[test]
    fn raw_content_type_is_checked_before_name_presence() {
        let err = TemplateRequest::from_raw(vec![0xff], OsString::new()).unwrap_err();
        assert!(matches!(
            err,
            DomainError::TypeMismatch {
                argument: "content",
                ..
            }
        ));
    }

    #[test]
    fn raw_empty_content_is_invalid_argument() {
        let err = TemplateRequest::from_raw(Vec::new(), "Foo".into()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn raw_non_utf8_model_name_is_type_mismatch() {
        use std::os::unix::ffi::OsStringExt;

        let name = OsString::from_vec(vec![b'F', 0x80, b'o']);
        let err = TemplateRequest::from_raw(b"$mod".to_vec(), name).unwrap_err();
        assert!(matches!(
            err,
            DomainError::TypeMismatch {
                argument: "model_name",
                ..
            }
        ));
    }

    #[test]
    fn raw_valid_input_builds_request() {
        let request = TemplateRequest::from_raw(b"X=$mod".to_vec(), "Foo".into()).unwrap();
        assert_eq!(request.content(), "X=$mod");
        assert_eq!(request.model_name(), "Foo");
    }
}
