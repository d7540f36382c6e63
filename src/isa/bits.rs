//! Decoding of CB-prefixed bit-test instructions.

use std::fmt;

use crate::isa::Reg8;

/// A decoded `BIT` instruction out of the CB-prefixed opcode space.
///
/// The encoding packs two three-bit fields into the opcode byte: bits 3..6
/// select which bit to test, and bits 0..3 select the operand register.
/// Both fields are therefore always in `[0, 7]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BitTest {
  opcode: u8,
}

impl BitTest {
  /// Decodes `opcode` as a bit-test instruction.
  pub fn decode(opcode: u8) -> Self {
    BitTest { opcode }
  }

  /// Returns the raw opcode byte.
  pub fn opcode(self) -> u8 {
    self.opcode
  }

  /// Returns which of the eight bits this instruction tests.
  pub fn bit(self) -> u8 {
    (self.opcode >> 3) & 0x7
  }

  /// Returns the operand whose bit is tested.
  pub fn register(self) -> Reg8 {
    Reg8::from_field(self.opcode)
  }

  /// Returns the machine-cycle cost of this instruction.
  ///
  /// Testing a bit of `(HL)` costs a memory access on top of the usual
  /// eight cycles.
  pub fn cycles(self) -> u32 {
    match self.register() {
      Reg8::HlDeref => 16,
      _ => 8,
    }
  }
}

impl fmt::Display for BitTest {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "BIT {} {}", self.bit(), self.register())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  macro_rules! assert_decode {
    ($op:literal => $bit:literal, $reg:ident) => {
      let bit = BitTest::decode($op);
      assert_eq!(bit.opcode(), $op);
      assert_eq!(bit.bit(), $bit);
      assert_eq!(bit.register(), Reg8::$reg);
    };
  }

  #[test]
  fn decoding() {
    assert_decode!(0x40 => 0, B);
    assert_decode!(0x46 => 0, HlDeref);
    assert_decode!(0x5b => 3, E);
    assert_decode!(0x7c => 7, H);
    assert_decode!(0x7f => 7, A);
  }

  #[test]
  fn fields_are_always_in_range() {
    for opcode in 0x40..=0x7f {
      let bit = BitTest::decode(opcode);
      assert!(bit.bit() <= 7);
      assert!(bit.register() as u8 <= 7);
    }
  }

  #[test]
  fn hl_deref_costs_double() {
    assert_eq!(BitTest::decode(0x46).cycles(), 16);
    assert_eq!(BitTest::decode(0x47).cycles(), 8);
  }

  #[test]
  fn display() {
    assert_eq!(BitTest::decode(0x40).to_string(), "BIT 0 B");
    assert_eq!(BitTest::decode(0x7c).to_string(), "BIT 7 H");
    assert_eq!(BitTest::decode(0x7e).to_string(), "BIT 7 (HL)");
  }
}
