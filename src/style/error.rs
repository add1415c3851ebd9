//! Style lookup errors.

/// Error returned when a style name does not match any supported style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleError {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownStyleError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for UnknownStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown style '{}'", self.name)
    }
}

impl std::error::Error for UnknownStyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_error_display() {
        let err = UnknownStyleError::new("chartreuse");
        let msg = err.to_string();
        assert!(msg.contains("unknown style"));
        assert!(msg.contains("chartreuse"));
    }
}
