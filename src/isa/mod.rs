//! The LR35902 instruction set architecture, the ISA that the Game Boy's
//! processor implements.
//!
//! This module provides types for decoding the register and bit fields that
//! the CB-prefixed instruction encodings pack into a single opcode byte.

mod bits;
mod reg;

pub use bits::BitTest;
pub use reg::Reg8;
