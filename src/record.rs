use std::fmt;
use std::path::PathBuf;

/// A single decoded value, integers kept apart from floating point numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Dense feature vector followed by its labels
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Exactly `num_features` values, zero where the line listed nothing
    pub features: Vec<f64>,
    /// Label values, empty when labels are not appended
    pub labels: Vec<Value>,
}

impl Record {
    /// Flat sequence of features (as floats) followed by labels
    pub fn values(&self) -> Vec<Value> {
        self.features
            .iter()
            .map(|&v| Value::Float(v))
            .chain(self.labels.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.features.len() + self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a record came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMetadata {
    /// 1-based line number within the location
    pub line_number: usize,
    /// File the line was read from, if any
    pub location: Option<PathBuf>,
}

impl fmt::Display for RecordMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(path) => write!(f, "{}:{}", path.display(), self.line_number),
            None => write!(f, "line {}", self.line_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_appends_labels_after_features() {
        let record = Record {
            features: vec![0.5, 0.0],
            labels: vec![Value::Int(1), Value::Float(2.5)],
        };

        assert_eq!(
            record.values(),
            vec![
                Value::Float(0.5),
                Value::Float(0.0),
                Value::Int(1),
                Value::Float(2.5)
            ]
        );
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_metadata_display() {
        let meta = RecordMetadata {
            line_number: 3,
            location: Some(PathBuf::from("train.svm")),
        };
        assert_eq!(meta.to_string(), "train.svm:3");

        let meta = RecordMetadata {
            line_number: 3,
            location: None,
        };
        assert_eq!(meta.to_string(), "line 3");
    }
}
