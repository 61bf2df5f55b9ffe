use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Duplicate path in package layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Use --help for usage information".into(),
            ],
            Self::InvalidPackageName { name, reason } => vec![
                format!("Package name '{}' is invalid: {}", name, reason),
                "Use letters, digits, and underscores".into(),
                "Examples: my_tool, report_builder, tool2".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }
}
