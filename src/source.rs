use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// A raw line together with where it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub text: String,
    /// 1-based line number within its location
    pub line_number: usize,
    pub location: Option<PathBuf>,
}

/// Supplies raw text lines on demand and can be rewound to its start
pub trait LineSource {
    /// Next raw line, `None` once the source is exhausted
    fn next_line(&mut self) -> Result<Option<SourceLine>>;

    /// Rewinds to the first line
    fn reset(&mut self) -> Result<()>;
}

/// Lines held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    lines: Vec<String>,
    position: usize,
}

impl MemoryLineSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, position: 0 }
    }

    /// Splits a block of text into lines
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(|l| l.to_string()).collect())
    }
}

impl LineSource for MemoryLineSource {
    fn next_line(&mut self) -> Result<Option<SourceLine>> {
        let line = self.lines.get(self.position).map(|text| SourceLine {
            text: text.clone(),
            line_number: self.position + 1,
            location: None,
        });
        if line.is_some() {
            self.position += 1;
        }
        Ok(line)
    }

    fn reset(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}

struct OpenLocation {
    reader: BufReader<File>,
    path_index: usize,
    line_number: usize,
}

/// Lines of several files, read one after another
///
/// Files are opened lazily, the next one only once the previous one is exhausted.
pub struct FileLineSource {
    paths: Vec<PathBuf>,
    next_path: usize,
    current: Option<OpenLocation>,
}

impl FileLineSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            next_path: 0,
            current: None,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn open_next(&mut self) -> Result<bool> {
        let Some(path) = self.paths.get(self.next_path) else {
            return Ok(false);
        };
        let path_index = self.next_path;
        // A file that fails to open is not retried
        self.next_path += 1;
        tracing::debug!(location = %path.display(), "opening location");
        let file = File::open(path)?;
        self.current = Some(OpenLocation {
            reader: BufReader::new(file),
            path_index,
            line_number: 0,
        });
        Ok(true)
    }
}

impl LineSource for FileLineSource {
    fn next_line(&mut self) -> Result<Option<SourceLine>> {
        loop {
            if self.current.is_none() && !self.open_next()? {
                return Ok(None);
            }
            let Some(location) = self.current.as_mut() else {
                return Ok(None);
            };

            let mut bytes = Vec::new();
            if location.reader.read_until(b'\n', &mut bytes)? == 0 {
                self.current = None;
                continue;
            }
            location.line_number += 1;

            let mut text = String::from_utf8(bytes).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {} is not valid UTF-8: {}", location.line_number, e),
                )
            })?;
            while text.ends_with('\n') || text.ends_with('\r') {
                text.pop();
            }

            return Ok(Some(SourceLine {
                text,
                line_number: location.line_number,
                location: Some(self.paths[location.path_index].clone()),
            }));
        }
    }

    fn reset(&mut self) -> Result<()> {
        tracing::debug!("rewinding file source");
        self.current = None;
        self.next_path = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn collect(source: &mut impl LineSource) -> Vec<SourceLine> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_memory_source_reset() {
        let mut source = MemoryLineSource::from_text("a\nb");

        let first = collect(&mut source);
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].line_number, 2);
        assert!(source.next_line().unwrap().is_none());

        source.reset().unwrap();
        assert_eq!(collect(&mut source), first);
    }

    #[test]
    fn test_file_source_reads_all_locations() {
        let a = write_file("1 0:1.0\r\n2 0:2.0\n");
        let b = write_file("3 0:3.0");
        let mut source = FileLineSource::new(vec![a.path().to_path_buf(), b.path().to_path_buf()]);

        let lines = collect(&mut source);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["1 0:1.0", "2 0:2.0", "3 0:3.0"]);

        assert_eq!(lines[1].line_number, 2);
        assert_eq!(lines[1].location.as_deref(), Some(a.path()));
        assert_eq!(lines[2].line_number, 1);
        assert_eq!(lines[2].location.as_deref(), Some(b.path()));
    }

    #[test]
    fn test_file_source_reset() {
        let a = write_file("1 0:1.0\n2 0:2.0\n");
        let mut source = FileLineSource::new(vec![a.path().to_path_buf()]);

        let first = collect(&mut source);
        source.reset().unwrap();
        assert_eq!(collect(&mut source), first);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let mut source = FileLineSource::new(vec![PathBuf::from("/nonexistent/data.svm")]);
        assert!(matches!(
            source.next_line(),
            Err(crate::error::SvmLightError::Io(_))
        ));
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let b = write_file("3 0:3.0\n");
        let mut source = FileLineSource::new(vec![
            PathBuf::from("/nonexistent/data.svm"),
            b.path().to_path_buf(),
        ]);

        assert!(source.next_line().is_err());
        let line = source.next_line().unwrap().unwrap();
        assert_eq!(line.text, "3 0:3.0");
        assert_eq!(line.location.as_deref(), Some(b.path()));
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_invalid_utf8_line_is_counted() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"1 0:1.0\n\xff\xfe 0:1.0\n3 0:1.0\n").unwrap();
        file.flush().unwrap();
        let mut source = FileLineSource::new(vec![file.path().to_path_buf()]);

        assert_eq!(source.next_line().unwrap().unwrap().line_number, 1);
        assert!(matches!(
            source.next_line(),
            Err(crate::error::SvmLightError::Io(_))
        ));

        let line = source.next_line().unwrap().unwrap();
        assert_eq!(line.text, "3 0:1.0");
        assert_eq!(line.line_number, 3);
    }
}
