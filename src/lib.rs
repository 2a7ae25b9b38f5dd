pub mod args;
pub mod config;
pub mod data;
pub mod error;
pub mod lookahead;
pub mod parsing;
pub mod reader;
pub mod record;
pub mod source;
pub mod test_utils;

pub use args::{parse_arguments, Args};
pub use config::{
    Configuration, SvmLightConfig, APPEND_LABEL, MULTILABEL, NUM_ATTRIBUTES, NUM_FEATURES,
    NUM_LABELS, ZERO_BASED_INDEXING,
};
pub use data::{load_batch, read_all, shuffle_records, split_data, Batch};
pub use error::{Result, SvmLightError};
pub use lookahead::Lookahead;
pub use parsing::{is_comment, parse_features, parse_labels, parse_line, parse_multilabel, tokenize};
pub use reader::SvmLightReader;
pub use record::{Record, RecordMetadata, Value};
pub use source::{FileLineSource, LineSource, MemoryLineSource, SourceLine};
