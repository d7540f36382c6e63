//! GBOP, a Game Boy (LR35902) opcode statistics and reference-table tool.

#![deny(missing_docs)]
#![deny(unused)]
#![deny(warnings)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;
use std::process::exit;

use structopt::StructOpt;

use gbop::error::Errors;
use gbop::table;
use gbop::tally::Tally;

/// The conventional trace-log path the emulator writes to.
const DEFAULT_TRACE: &str = "out.txt";

#[derive(StructOpt)]
#[structopt(name = "gbop", about = "Game Boy opcode statistics and tables.")]
enum Cli {
  /// Tallies opcode frequencies out of execution-trace logs.
  ///
  /// Counts from all given logs are merged into a single report, sorted
  /// ascending by frequency. With no logs given, reads `out.txt`.
  Count {
    /// Trace logs to tally.
    #[structopt(parse(from_os_str))]
    traces: Vec<PathBuf>,
  },

  /// Prints the CB-prefix bit-test mnemonic table.
  Bits,
}

fn main() {
  match Cli::from_args() {
    Cli::Count { traces } => {
      let traces = if traces.is_empty() {
        vec![PathBuf::from(DEFAULT_TRACE)]
      } else {
        traces
      };

      let mut errors = Errors::new();
      let mut total = Tally::new();
      for path in &traces {
        match Tally::of_file(path) {
          Ok(tally) => total.merge(tally),
          Err(e) => errors.push(e),
        }
      }
      if !errors.is_ok() {
        errors.dump_and_die(1);
      }

      if let Err(e) = total.dump(io::stdout()) {
        eprintln!("error: {}", e);
        exit(1);
      }
    }
    Cli::Bits => {
      if let Err(e) = table::dump_bit_tests(io::stdout()) {
        eprintln!("error: {}", e);
        exit(1);
      }
    }
  }
}
