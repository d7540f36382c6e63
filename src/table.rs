//! The bit-test mnemonic reference table.

use std::io;
use std::ops::RangeInclusive;

use crate::isa::BitTest;

/// The opcode interval the table covers.
///
/// The published table runs through `0x80` inclusive, 65 rows in all.
pub const TABLE_RANGE: RangeInclusive<u8> = 0x40..=0x80;

/// Dumps the bit-test mnemonic table to `w`.
///
/// One row is written per opcode in [`TABLE_RANGE`], of the form
/// `40 BIT 0 B`: the opcode in uppercase hex, then the decoded mnemonic.
///
/// [`TABLE_RANGE`]: constant.TABLE_RANGE.html
pub fn dump_bit_tests(mut w: impl io::Write) -> io::Result<()> {
  for opcode in TABLE_RANGE {
    let bit = BitTest::decode(opcode);
    writeln!(w, "{:02X} {}", bit.opcode(), bit)?;
  }
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;

  fn table() -> Vec<String> {
    let mut out = Vec::new();
    dump_bit_tests(&mut out).unwrap();
    String::from_utf8(out)
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  #[test]
  fn row_count() {
    assert_eq!(table().len(), 65);
  }

  #[test]
  fn endpoint_rows() {
    let rows = table();
    assert_eq!(rows.first().unwrap(), "40 BIT 0 B");
    assert_eq!(rows.last().unwrap(), "80 BIT 0 B");
  }

  #[test]
  fn spot_checks() {
    let rows = table();
    assert!(rows.contains(&"46 BIT 0 (HL)".to_string()));
    assert!(rows.contains(&"7C BIT 7 H".to_string()));
    assert!(rows.contains(&"7F BIT 7 A".to_string()));
  }
}
