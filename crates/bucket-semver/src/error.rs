use thiserror::Error;

/// Error type for version parsing and comparison
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemVersionError {
    #[error("Invalid version string \"{input}\": {reason}")]
    Format { input: String, reason: String },

    #[error("Version string \"{input}\" must include major, minor and patch in strict mode")]
    Strictness { input: String },

    #[error("No version given to convert")]
    NullInput,

    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),

    #[error("A legacy version has 2 to 4 components, got {0}")]
    LegacyComponents(usize),
}

impl SemVersionError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        SemVersionError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SemVersionError>;
