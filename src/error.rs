use thiserror::Error;

/// Unified error type for ebump operations
#[derive(Error, Debug)]
pub enum EbumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version pattern: {0}")]
    Pattern(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("No pre-release tag found to bump.")]
    NoPreReleaseTag,

    #[error("Unrecognized action: '{0}'")]
    UnrecognizedAction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ebump
pub type Result<T> = std::result::Result<T, EbumpError>;

impl EbumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        EbumpError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        EbumpError::Pattern(msg.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        EbumpError::Parse(msg.into())
    }

    /// Create an unrecognized-action error for an action string
    pub fn unrecognized_action(action: impl Into<String>) -> Self {
        EbumpError::UnrecognizedAction(action.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EbumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EbumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(EbumpError::pattern("test").to_string().contains("pattern"));
        assert!(EbumpError::parse("test").to_string().contains("parsing"));
        assert!(EbumpError::unrecognized_action("frobnicate")
            .to_string()
            .contains("frobnicate"));
    }

    #[test]
    fn test_no_prerelease_tag_message() {
        // This message is user-facing and must match exactly
        assert_eq!(
            EbumpError::NoPreReleaseTag.to_string(),
            "No pre-release tag found to bump."
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (EbumpError::config("x"), "Configuration error"),
            (EbumpError::pattern("x"), "Invalid version pattern"),
            (EbumpError::parse("x"), "Version parsing error"),
            (EbumpError::unrecognized_action("x"), "Unrecognized action"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
