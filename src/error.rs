//! Error printing facilities.
//!
//! Diagnostics in GBOP are about files: every error a run can hit concerns
//! some trace log it was asked to read. The [`Error`] trait describes how a
//! Rust error type names that file (and the step that failed) so it can be
//! shown to the user uniformly.
//!
//! [`Error`]: trait.Error.html

use std::fmt;
use std::io;
use std::path::Path;

/// An error which can be described as a diagnostic.
///
/// Types that implement `Error` must also implement [`std::fmt::Display`],
/// and that implementation should be a single line for the diagnostic to
/// read well.
///
/// [`std::fmt::Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html
pub trait Error: fmt::Debug + fmt::Display {
  /// Returns the file that resulted in the error.
  fn file(&self) -> &Path;
  /// Returns an action this error is associated with, if any at all.
  fn action(&self) -> Option<Action>;
}

/// A collection of errors built up over the course of a run.
///
/// The type parameter `E` should be a type implementing [`Error`].
///
/// [`Error`]: trait.Error.html
pub struct Errors<E>(Vec<E>);

impl<E> Errors<E> {
  /// Creates an empty `Errors`.
  pub fn new() -> Self {
    Errors(Vec::new())
  }

  /// Returns true if this `Errors` hasn't had any errors added yet.
  pub fn is_ok(&self) -> bool {
    self.0.is_empty()
  }

  /// Adds a new error to this `Errors`.
  pub fn push(&mut self, error: E) {
    self.0.push(error);
  }
}

impl<E: Error> Errors<E> {
  /// Dumps this collection of errors as user-displayable text into `sink`.
  ///
  /// Returns `Ok(true)` if anything was written.
  pub fn dump_to(&self, mut sink: impl io::Write) -> io::Result<bool> {
    if self.0.is_empty() {
      return Ok(false);
    }

    for (i, error) in self.0.iter().enumerate() {
      writeln!(sink, "error: {}", error)?;
      let path = error.file();
      if let Some(action) = error.action() {
        writeln!(sink, "  while {} {}", action.describe(), path.display())?;
      } else {
        writeln!(sink, "  at {}", path.display())?;
      }

      if i != self.0.len() - 1 {
        writeln!(sink, "")?;
      }
    }

    Ok(true)
  }

  /// Calls `dump_to()` on `stderr`, exiting the process with the given
  /// `exit_code` if any errors are present.
  pub fn dump_and_die(self, code: i32) {
    // Writing to stderr is fairly unlikely to fail, so panicking is a fine
    // response here.
    if self.dump_to(io::stderr()).unwrap() {
      eprintln!("");
      eprintln!("error: there were {} errors", self.0.len());
      std::process::exit(code)
    }
  }
}

/// An action that GBOP performs, which an error may be associated with.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
  /// The opening step, getting a handle on a trace log.
  Opening,
  /// The scanning step, walking a trace log line by line.
  Scanning,
}

impl Action {
  fn describe(self) -> &'static str {
    match self {
      Self::Opening => "opening",
      Self::Scanning => "scanning",
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use std::path::PathBuf;

  #[derive(Debug)]
  struct Unreadable {
    path: PathBuf,
    action: Option<Action>,
  }

  impl fmt::Display for Unreadable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
      write!(f, "permission denied")
    }
  }

  impl Error for Unreadable {
    fn file(&self) -> &Path {
      &self.path
    }

    fn action(&self) -> Option<Action> {
      self.action
    }
  }

  fn unreadable(path: &str, action: Option<Action>) -> Unreadable {
    Unreadable {
      path: path.into(),
      action,
    }
  }

  #[test]
  fn empty_dumps_nothing() {
    let errors = Errors::<Unreadable>::new();
    assert!(errors.is_ok());

    let mut out = Vec::new();
    assert!(!errors.dump_to(&mut out).unwrap());
    assert!(out.is_empty());
  }

  #[test]
  fn diagnostics_name_the_action_and_file() {
    let mut errors = Errors::new();
    errors.push(unreadable("a.txt", Some(Action::Opening)));
    errors.push(unreadable("b.txt", None));
    assert!(!errors.is_ok());

    let mut out = Vec::new();
    assert!(errors.dump_to(&mut out).unwrap());
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "error: permission denied\n  while opening a.txt\n\n\
       error: permission denied\n  at b.txt\n"
    );
  }
}
