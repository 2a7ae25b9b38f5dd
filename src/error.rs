//! Error types for SVMLight decoding

use crate::record::RecordMetadata;
use thiserror::Error;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, SvmLightError>;

/// Errors raised while configuring a reader or decoding a line
#[derive(Debug, Error)]
pub enum SvmLightError {
    /// Missing or invalid option, raised before any line is read
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Feature index that is not a non-negative integer
    #[error("Feature index must be a non-negative integer (found {token})")]
    MalformedFeatureIndex {
        /// Offending feature token
        token: String,
    },

    /// Feature token without a parseable value
    #[error("Feature value must be a floating point number (found {token})")]
    MalformedFeatureValue {
        /// Offending feature token
        token: String,
    },

    /// Multilabel index that is not a non-negative integer
    #[error("Multilabel index must be a non-negative integer (found {token})")]
    MalformedLabelIndex {
        /// Offending label piece
        token: String,
    },

    /// Label that is neither an integer nor a floating point number
    #[error("Label must be numeric (found {token})")]
    MalformedLabel {
        /// Offending label piece
        token: String,
    },

    /// Index 0 found while reading one-based data
    #[error("Found {kind} with index 0 but not using zero-based indexing")]
    Indexing {
        /// Either "feature" or "label"
        kind: &'static str,
    },

    /// Normalized feature index beyond the configured number of features
    #[error("Found feature index {index}, expected fewer than {num_features} features")]
    FeatureIndexOutOfRange {
        /// Zero-based index
        index: usize,
        /// Configured bound
        num_features: usize,
    },

    /// Normalized label index beyond the configured number of labels
    #[error("Found label index {index}, expected fewer than {num_labels} labels")]
    LabelIndexOutOfRange {
        /// Zero-based index
        index: usize,
        /// Configured bound
        num_labels: usize,
    },

    /// Label piece count disagrees with the established number of labels
    #[error("Found {found} labels in record, expected {expected}")]
    LabelCountMismatch {
        /// Number of labels in the line
        found: usize,
        /// Established number of labels
        expected: usize,
    },

    /// No remaining non-comment lines
    #[error("No next element found")]
    EndOfInput,

    /// Decoding error of a specific line
    #[error("{metadata}: {source}")]
    AtLine {
        /// Line and location that failed to decode
        metadata: RecordMetadata,
        /// Underlying decoding error
        source: Box<SvmLightError>,
    },

    /// IO error from the line source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SvmLightError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        SvmLightError::Configuration {
            message: message.into(),
        }
    }

    /// The decoding error itself, without its line information
    pub fn inner(&self) -> &SvmLightError {
        match self {
            SvmLightError::AtLine { source, .. } => source.inner(),
            other => other,
        }
    }

    /// Line and location of a decoding error, when known
    pub fn metadata(&self) -> Option<&RecordMetadata> {
        match self {
            SvmLightError::AtLine { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    /// Whether this error only marks the end of iteration
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SvmLightError::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_line_errors_display_their_location() {
        let err = SvmLightError::AtLine {
            metadata: RecordMetadata {
                line_number: 2,
                location: Some(PathBuf::from("train.svm")),
            },
            source: Box::new(SvmLightError::FeatureIndexOutOfRange {
                index: 9,
                num_features: 2,
            }),
        };

        assert_eq!(
            err.to_string(),
            "train.svm:2: Found feature index 9, expected fewer than 2 features"
        );
        assert!(matches!(
            err.inner(),
            SvmLightError::FeatureIndexOutOfRange { index: 9, .. }
        ));
        assert_eq!(err.metadata().map(|m| m.line_number), Some(2));
    }
}
