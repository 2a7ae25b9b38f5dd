use crate::config::SvmLightConfig;
use crate::error::{Result, SvmLightError};
use crate::record::{Record, Value};

pub const COMMENT_CHAR: char = '#';
pub const FEATURE_DELIMITER: char = ':';
pub const LABEL_DELIMITER: char = ',';
pub const QID_PREFIX: &str = "qid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Feature,
    Label,
}

/// Whether a raw line is a pure comment line
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_CHAR)
}

/// Drops any inline comment and splits the rest on runs of spaces and tabs
pub fn tokenize(line: &str) -> Vec<&str> {
    let content = line
        .split_once(COMMENT_CHAR)
        .map_or(line, |(head, _)| head);
    content
        .trim()
        .split(|c: char| c == ' ' || c == '\t')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parses an index token and normalizes it to zero-based
///
/// # Arguments
/// * `raw` - Index text
/// * `token` - Whole token, reported on malformed input
/// * `kind` - Whether a feature or a label index is being parsed
/// * `zero_based` - Whether the input counts from 0
/// * `bound` - Exclusive upper bound of the normalized index
fn parse_index(
    raw: &str,
    token: &str,
    kind: IndexKind,
    zero_based: bool,
    bound: usize,
) -> Result<usize> {
    let mut index = raw.parse::<usize>().map_err(|_| match kind {
        IndexKind::Feature => SvmLightError::MalformedFeatureIndex {
            token: token.to_string(),
        },
        IndexKind::Label => SvmLightError::MalformedLabelIndex {
            token: token.to_string(),
        },
    })?;

    if !zero_based {
        if index == 0 {
            return Err(SvmLightError::Indexing {
                kind: match kind {
                    IndexKind::Feature => "feature",
                    IndexKind::Label => "label",
                },
            });
        }
        index -= 1;
    }

    if index >= bound {
        return Err(match kind {
            IndexKind::Feature => SvmLightError::FeatureIndexOutOfRange {
                index,
                num_features: bound,
            },
            IndexKind::Label => SvmLightError::LabelIndexOutOfRange {
                index,
                num_labels: bound,
            },
        });
    }

    Ok(index)
}

/// Expands `INDEX:VALUE` tokens into a dense feature vector
///
/// Values are placed directly at their index, so the input order of the tokens does not
/// matter; a repeated index keeps the last value. `qid` tokens are skipped.
pub fn parse_features(tokens: &[&str], config: &SvmLightConfig) -> Result<Vec<f64>> {
    let mut features = vec![0.0; config.num_features()];

    for &token in tokens {
        let (index_part, value_part) = match token.split_once(FEATURE_DELIMITER) {
            Some((index, value)) => (index, Some(value)),
            None => (token, None),
        };
        if index_part.starts_with(QID_PREFIX) {
            continue;
        }

        let index = parse_index(
            index_part,
            token,
            IndexKind::Feature,
            config.zero_based_indexing(),
            config.num_features(),
        )?;
        let value = value_part
            .and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| SvmLightError::MalformedFeatureValue {
                token: token.to_string(),
            })?;

        features[index] = value;
    }

    Ok(features)
}

/// Decodes a multilabel field (`2,5,7`) into a 0/1 indicator vector of `num_labels` entries
pub fn parse_multilabel(
    label_field: &str,
    num_labels: usize,
    zero_based: bool,
) -> Result<Vec<Value>> {
    let mut labels = vec![Value::Int(0); num_labels];
    for piece in label_field.split(LABEL_DELIMITER) {
        let index = parse_index(piece, piece, IndexKind::Label, zero_based, num_labels)?;
        labels[index] = Value::Int(1);
    }
    Ok(labels)
}

/// Decodes a single-label or multitask field (`1`, `0.5,3`)
///
/// Each piece becomes an integer when it parses as one, otherwise a float. When
/// `expected` is set the piece count must match it.
pub fn parse_labels(label_field: &str, expected: Option<usize>) -> Result<Vec<Value>> {
    let pieces: Vec<&str> = label_field.split(LABEL_DELIMITER).collect();
    if let Some(expected) = expected {
        if pieces.len() != expected {
            return Err(SvmLightError::LabelCountMismatch {
                found: pieces.len(),
                expected,
            });
        }
    }

    pieces.into_iter().map(parse_label_value).collect()
}

fn parse_label_value(piece: &str) -> Result<Value> {
    if let Ok(v) = piece.parse::<i64>() {
        return Ok(Value::Int(v));
    }
    piece
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| SvmLightError::MalformedLabel {
            token: piece.to_string(),
        })
}

/// Decodes one non-comment line into a record
///
/// # Arguments
/// * `line` - Raw line text
/// * `config` - Reader settings
/// * `label_count` - Established number of single/multitask labels; filled in from this
///   line when still unset and the line decodes successfully
pub fn parse_line(
    line: &str,
    config: &SvmLightConfig,
    label_count: &mut Option<usize>,
) -> Result<Record> {
    let tokens = tokenize(line);
    let (label_field, feature_tokens) = match tokens.split_first() {
        Some((first, rest)) => (*first, rest),
        None => ("", &[][..]),
    };

    let features = parse_features(feature_tokens, config)?;

    if !config.append_label() {
        return Ok(Record {
            features,
            labels: Vec::new(),
        });
    }

    let labels = match config.num_labels().filter(|_| config.multilabel()) {
        Some(num_labels) => {
            parse_multilabel(label_field, num_labels, config.zero_based_indexing())?
        }
        None => {
            let labels = parse_labels(label_field, *label_count)?;
            if label_count.is_none() {
                tracing::debug!(num_labels = labels.len(), "inferred label count");
                *label_count = Some(labels.len());
            }
            labels
        }
    };

    Ok(Record { features, labels })
}
