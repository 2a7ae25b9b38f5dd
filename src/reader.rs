use crate::config::{Configuration, SvmLightConfig};
use crate::error::{Result, SvmLightError};
use crate::lookahead::Lookahead;
use crate::parsing::parse_line;
use crate::record::{Record, RecordMetadata};
use crate::source::LineSource;

/// Streaming reader turning SVMLight lines into records
///
/// Comment lines are skipped; every other line either decodes into a [`Record`] or
/// fails with the error for that line, leaving the decision to skip or abort to the
/// caller.
pub struct SvmLightReader<S: LineSource> {
    config: SvmLightConfig,
    source: S,
    lookahead: Lookahead,
    /// Established label count for single/multitask labels
    label_count: Option<usize>,
}

impl<S: LineSource> SvmLightReader<S> {
    pub fn new(config: SvmLightConfig, source: S) -> Self {
        let label_count = config.num_labels();
        Self {
            config,
            source,
            lookahead: Lookahead::Empty,
            label_count,
        }
    }

    /// Validates named options and builds a reader over `source`
    pub fn from_configuration(conf: &Configuration, source: S) -> Result<Self> {
        let config = SvmLightConfig::from_configuration(conf)?;
        Ok(Self::new(config, source))
    }

    pub fn config(&self) -> &SvmLightConfig {
        &self.config
    }

    /// Number of labels per record, once known
    pub fn num_labels(&self) -> Option<usize> {
        self.label_count
    }

    /// Whether another non-comment line is available; repeated calls are idempotent
    pub fn has_next(&mut self) -> Result<bool> {
        self.lookahead.fill(&mut self.source)
    }

    /// Decodes the next non-comment line
    ///
    /// # Returns
    /// The record, `SvmLightError::AtLine` wrapping the decoding error of a malformed
    /// line, or `SvmLightError::EndOfInput` when no line is left
    pub fn next_record(&mut self) -> Result<(Record, RecordMetadata)> {
        let line = self
            .lookahead
            .take(&mut self.source)?
            .ok_or(SvmLightError::EndOfInput)?;

        let metadata = RecordMetadata {
            line_number: line.line_number,
            location: line.location,
        };
        match parse_line(&line.text, &self.config, &mut self.label_count) {
            Ok(record) => Ok((record, metadata)),
            Err(e) => Err(SvmLightError::AtLine {
                metadata,
                source: Box::new(e),
            }),
        }
    }

    /// Decodes the next non-comment line, without metadata
    pub fn read_next(&mut self) -> Result<Record> {
        self.next_record().map(|(record, _)| record)
    }

    /// Rewinds the source and drops any pending line
    pub fn reset(&mut self) -> Result<()> {
        tracing::debug!("resetting reader");
        self.lookahead.clear();
        self.source.reset()
    }

    /// Switches to a new input location; a pending line of the old one is dropped
    pub fn open(&mut self, source: S) {
        self.lookahead.clear();
        self.source = source;
    }

    /// Gives back the underlying source
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: LineSource> Iterator for SvmLightReader<S> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.read_next()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
