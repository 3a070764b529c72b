use thiserror::Error;

/// A single field-level violation found while validating pricing data.
///
/// `path` is a dot-separated path into the offending document
/// (e.g. `"3.input_per_mtok"`), `""` for root-level problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Unified error type for the library.
///
/// Only `Configuration` is fatal, and only at construction time. Pricing
/// validation failures are structured so the caller can render a fallback
/// state instead of crashing; tokenization failures never reach callers of
/// the counting service at all (they degrade to the heuristic path).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid pricing data: {message}")]
    InvalidPricing {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    pub fn invalid_pricing(issues: Vec<ValidationIssue>) -> Self {
        Error::InvalidPricing {
            message: format!(
                "{} issue{} found",
                issues.len(),
                if issues.len() == 1 { "" } else { "s" }
            ),
            issues,
        }
    }

    /// Validation issues attached to this error, if any.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Error::InvalidPricing { issues, .. } => issues,
            _ => &[],
        }
    }
}
