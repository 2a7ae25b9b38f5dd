use crate::error::{Result, SvmLightError};
use std::collections::HashMap;

/// Number of features in every record (required)
pub const NUM_FEATURES: &str = "svmlight.numFeatures";
/// Deprecated alias of [`NUM_FEATURES`], consulted only when the current key is unset
pub const NUM_ATTRIBUTES: &str = "svmlight.numAttributes";
/// Whether indices in the input start at 0 (default true)
pub const ZERO_BASED_INDEXING: &str = "svmlight.zeroBasedIndexing";
/// Whether labels are appended after the features (default true)
pub const APPEND_LABEL: &str = "svmlight.appendLabel";
/// Whether the label field lists active label indices (default false)
pub const MULTILABEL: &str = "svmlight.multilabel";
/// Number of labels, required for multilabel data
pub const NUM_LABELS: &str = "svmlight.numLabels";

/// Named string options, as handed to a reader before initialization
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    options: HashMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.options.insert(key.into(), value.to_string());
    }

    /// Chaining variant of [`Configuration::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }

    /// Reads an integer option, `None` when the key is absent
    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
                SvmLightError::configuration(format!("{} must be an integer (found {})", key, raw))
            }),
        }
    }

    /// Reads a boolean option, falling back to `default` when the key is absent
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(SvmLightError::configuration(format!(
                    "{} must be true or false (found {})",
                    key, raw
                ))),
            },
        }
    }
}

/// Validated reader settings, fixed once the reader is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvmLightConfig {
    num_features: usize,
    zero_based_indexing: bool,
    append_label: bool,
    multilabel: bool,
    num_labels: Option<usize>,
}

impl SvmLightConfig {
    /// Resolves and validates all options
    ///
    /// # Arguments
    /// * `conf` - Named options
    ///
    /// # Returns
    /// The immutable settings, or `SvmLightError::Configuration` when `numFeatures` is
    /// missing or negative, or when multilabel data has no usable `numLabels`
    pub fn from_configuration(conf: &Configuration) -> Result<Self> {
        let num_features = match conf.get_int(NUM_FEATURES)? {
            Some(n) if n >= 0 => Some(n),
            _ => conf.get_int(NUM_ATTRIBUTES)?.filter(|&n| n >= 0),
        };
        let num_features = match num_features {
            Some(n) => to_usize(n, NUM_FEATURES)?,
            None => {
                return Err(SvmLightError::configuration(
                    "numFeatures must be set in configuration",
                ))
            }
        };

        let zero_based_indexing = conf.get_bool(ZERO_BASED_INDEXING, true)?;
        let append_label = conf.get_bool(APPEND_LABEL, true)?;
        let multilabel = conf.get_bool(MULTILABEL, false)?;

        let num_labels = match conf.get_int(NUM_LABELS)? {
            Some(n) if n >= 0 => Some(to_usize(n, NUM_LABELS)?),
            _ => None,
        };
        if multilabel && num_labels.is_none() {
            return Err(SvmLightError::configuration(
                "numLabels must be set in configuration for multilabel problems",
            ));
        }

        Ok(Self {
            num_features,
            zero_based_indexing,
            append_label,
            multilabel,
            num_labels,
        })
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn zero_based_indexing(&self) -> bool {
        self.zero_based_indexing
    }

    pub fn append_label(&self) -> bool {
        self.append_label
    }

    pub fn multilabel(&self) -> bool {
        self.multilabel
    }

    /// Configured number of labels; always `Some` in multilabel mode
    pub fn num_labels(&self) -> Option<usize> {
        self.num_labels
    }
}

fn to_usize(value: i64, key: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| SvmLightError::configuration(format!("{} is out of range ({})", key, value)))
}
