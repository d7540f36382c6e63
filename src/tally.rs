//! Opcode frequency tallying over trace logs.
//!
//! A [`Tally`] is built up by a single linear scan over each log and
//! finalized once into a report, sorted so that the hottest opcodes come
//! last.
//!
//! [`Tally`]: struct.Tally.html

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;
use std::path::PathBuf;

use crate::error;
use crate::error::Action;
use crate::trace::Line;

/// An opcode frequency count over one or more trace logs.
#[derive(Clone, Debug, Default)]
pub struct Tally {
  counts: HashMap<String, u64>,
  lines: u64,
  headers: u64,
  truncated: u64,
}

impl Tally {
  /// Creates an empty `Tally`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Tallies the trace log at `path`.
  ///
  /// The file handle is scoped to the scan; it is released whether or not
  /// the scan completes.
  pub fn of_file(path: &Path) -> Result<Tally, TraceError> {
    let file =
      File::open(path).map_err(|e| TraceError::new(path, Action::Opening, e))?;

    let mut tally = Tally::new();
    tally
      .consume(io::BufReader::new(file))
      .map_err(|e| TraceError::new(path, Action::Scanning, e))?;
    Ok(tally)
  }

  /// Tallies every line produced by `reader`.
  ///
  /// This is the linear scan: each record increments the count for its
  /// opcode field, while header rows and truncated lines are skipped but
  /// tracked. I/O errors during the scan are propagated.
  pub fn consume(&mut self, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
      self.add(Line::classify(&line?));
    }
    Ok(())
  }

  /// Records a single classified line.
  pub fn add(&mut self, line: Line) {
    self.lines += 1;
    match line {
      Line::Opcode(field) => *self.counts.entry(field).or_insert(0) += 1,
      Line::Header => self.headers += 1,
      Line::Truncated => self.truncated += 1,
    }
  }

  /// Folds `other` into this tally, key by key.
  pub fn merge(&mut self, other: Tally) {
    for (field, count) in other.counts {
      *self.counts.entry(field).or_insert(0) += count;
    }
    self.lines += other.lines;
    self.headers += other.headers;
    self.truncated += other.truncated;
  }

  /// Returns the count recorded for `opcode`, zero if it never appeared.
  pub fn count(&self, opcode: &str) -> u64 {
    self.counts.get(opcode).copied().unwrap_or(0)
  }

  /// Returns the total number of lines scanned.
  pub fn lines(&self) -> u64 {
    self.lines
  }

  /// Returns the number of header rows skipped.
  pub fn headers(&self) -> u64 {
    self.headers
  }

  /// Returns the number of truncated lines skipped.
  pub fn truncated(&self) -> u64 {
    self.truncated
  }

  /// Finalizes this tally into report rows.
  ///
  /// Rows are sorted ascending by count; equal counts are broken by key,
  /// ascending, so a report is deterministic for a given set of logs.
  pub fn rows(&self) -> Vec<(&str, u64)> {
    let mut rows = self
      .counts
      .iter()
      .map(|(field, &count)| (field.as_str(), count))
      .collect::<Vec<_>>();
    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    rows
  }

  /// Dumps the report to `w`, one `<opcode> : <count>` line per opcode.
  pub fn dump(&self, mut w: impl io::Write) -> io::Result<()> {
    for (opcode, count) in self.rows() {
      writeln!(w, "{} : {}", opcode, count)?;
    }
    Ok(())
  }
}

/// The error produced when a trace log cannot be read.
#[derive(Debug)]
pub struct TraceError {
  path: PathBuf,
  action: Action,
  inner: io::Error,
}

impl TraceError {
  fn new(path: &Path, action: Action, inner: io::Error) -> Self {
    TraceError {
      path: path.to_path_buf(),
      action,
      inner,
    }
  }
}

impl fmt::Display for TraceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.inner)
  }
}

impl error::Error for TraceError {
  fn file(&self) -> &Path {
    &self.path
  }

  fn action(&self) -> Option<Action> {
    Some(self.action)
  }
}
