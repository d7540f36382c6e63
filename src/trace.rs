//! The execution-trace record layout.
//!
//! The emulator logs one fixed-width record per executed instruction, plus a
//! periodic header row naming the register columns:
//! ```text
//! ADDR : instruction            B  C  D  E  H  L  A  PW SZ-X-P-C SP
//! 0150 : CB 7C         BIT 7 H  00 13 00 D8 01 4D 01 10100000 FFFE
//! ```
//! A record starts with a four-hex-digit address and `" : "`, so the two
//! characters at columns [`OPCODE_START`]`..+`[`OPCODE_LEN`] are always the
//! first instruction byte, in hex. On the header row those same columns land
//! on the `"in"` of `"instruction"`, which is what [`HEADER_SENTINEL`] keys
//! off of.
//!
//! [`OPCODE_START`]: constant.OPCODE_START.html
//! [`OPCODE_LEN`]: constant.OPCODE_LEN.html
//! [`HEADER_SENTINEL`]: constant.HEADER_SENTINEL.html

/// The column at which the opcode field starts, after NUL stripping.
pub const OPCODE_START: usize = 7;

/// The width of the opcode field, in characters.
pub const OPCODE_LEN: usize = 2;

/// The opcode-field text that marks a header row rather than a record.
pub const HEADER_SENTINEL: &str = "in";

/// The classification of a single trace-log line.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Line {
  /// A record, carrying the two-character opcode field.
  Opcode(String),
  /// The periodic register-name header row.
  Header,
  /// A line too short to carry an opcode field.
  Truncated,
}

impl Line {
  /// Classifies a raw trace-log line.
  ///
  /// NUL bytes are stripped before any columns are measured; interrupted
  /// emulator runs can leave them in the log. A line whose stripped form is
  /// shorter than `OPCODE_START + OPCODE_LEN` characters cannot carry an
  /// opcode and is classified `Truncated` rather than being counted under a
  /// partial key.
  pub fn classify(raw: &str) -> Line {
    let field: String = raw
      .chars()
      .filter(|&c| c != '\0')
      .skip(OPCODE_START)
      .take(OPCODE_LEN)
      .collect();

    if field.chars().count() < OPCODE_LEN {
      Line::Truncated
    } else if field == HEADER_SENTINEL {
      Line::Header
    } else {
      Line::Opcode(field)
    }
  }
}
