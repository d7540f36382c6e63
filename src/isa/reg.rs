//! Register operands of the LR35902.

use std::fmt;

/// A macro for generating the `Reg8` enum.
macro_rules! registers {
  ($($(#[$attr:meta])* $name:ident = $index:literal, $text:literal,)*) => {
    /// An eight-bit operand of the LR35902, in encoding order.
    ///
    /// Instruction encodings select an operand with a three-bit register
    /// field; the discriminants below are exactly those field values. Index
    /// 6 is not a register at all, but the byte of memory that `hl` points
    /// at, written `(HL)` in mnemonics.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
    pub enum Reg8 {
      $($(#[$attr])* $name = $index,)*
    }

    impl Reg8 {
      /// Gets the mnemonic text for this operand.
      pub fn name(self) -> &'static str {
        match self {
          $(Self::$name => $text,)*
        }
      }

      /// Decodes a register field into an operand.
      ///
      /// Only the low three bits of `field` participate, so this is total:
      /// every byte decodes to some operand.
      pub fn from_field(field: u8) -> Self {
        match field & 0x7 {
          $($index => Self::$name,)*
          _ => unreachable!(),
        }
      }
    }
  };
}

registers! {
  /// The `b` register.
  B = 0, "B",
  /// The `c` register.
  C = 1, "C",
  /// The `d` register.
  D = 2, "D",
  /// The `e` register.
  E = 3, "E",
  /// The `h` register.
  H = 4, "H",
  /// The `l` register.
  L = 5, "L",
  /// The byte of memory addressed by `hl`.
  HlDeref = 6, "(HL)",
  /// The accumulator.
  A = 7, "A",
}

impl fmt::Display for Reg8 {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn field_decoding() {
    assert_eq!(Reg8::from_field(0), Reg8::B);
    assert_eq!(Reg8::from_field(6), Reg8::HlDeref);
    assert_eq!(Reg8::from_field(7), Reg8::A);

    // High bits are ignored.
    assert_eq!(Reg8::from_field(0x40), Reg8::B);
    assert_eq!(Reg8::from_field(0x7c), Reg8::H);
    assert_eq!(Reg8::from_field(0xff), Reg8::A);
  }

  #[test]
  fn names() {
    assert_eq!(Reg8::B.name(), "B");
    assert_eq!(Reg8::HlDeref.name(), "(HL)");
    assert_eq!(Reg8::A.to_string(), "A");
  }
}
