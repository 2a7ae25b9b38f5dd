use crate::error::Result;
use crate::parsing::is_comment;
use crate::source::{LineSource, SourceLine};

/// One-line buffer between the line source and the decoder
///
/// | state  | `fill`                                   | `take`                         | `clear` |
/// |--------|------------------------------------------|--------------------------------|---------|
/// | Empty  | pull past comments; Filled or stay Empty | pull past comments; stay Empty | Empty   |
/// | Filled | no-op                                    | hand out the line; Empty       | Empty   |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lookahead {
    #[default]
    Empty,
    Filled(SourceLine),
}

impl Lookahead {
    pub fn is_filled(&self) -> bool {
        matches!(self, Lookahead::Filled(_))
    }

    /// Makes sure a non-comment line is cached if the source still has one
    ///
    /// # Returns
    /// Whether a line is now cached
    pub fn fill<S: LineSource + ?Sized>(&mut self, source: &mut S) -> Result<bool> {
        if let Lookahead::Empty = self {
            if let Some(line) = next_non_comment(source)? {
                *self = Lookahead::Filled(line);
            }
        }
        Ok(self.is_filled())
    }

    /// Hands out the cached line, or the next non-comment line from the source
    pub fn take<S: LineSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<SourceLine>> {
        match std::mem::take(self) {
            Lookahead::Filled(line) => Ok(Some(line)),
            Lookahead::Empty => next_non_comment(source),
        }
    }

    /// Drops any pending line
    pub fn clear(&mut self) {
        *self = Lookahead::Empty;
    }
}

fn next_non_comment<S: LineSource + ?Sized>(source: &mut S) -> Result<Option<SourceLine>> {
    while let Some(line) = source.next_line()? {
        if !is_comment(&line.text) {
            return Ok(Some(line));
        }
        tracing::trace!(line_number = line.line_number, "skipping comment line");
    }
    Ok(None)
}
