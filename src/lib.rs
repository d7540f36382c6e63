//! GBOP, a Game Boy (LR35902) opcode statistics and reference-table tool.
//!
//! GBOP digests the execution-trace logs that the emulator writes, tallying
//! how often each opcode was executed, and generates the mnemonic reference
//! table for the CB-prefixed bit-test instructions.

#![deny(missing_docs)]
#![deny(unused)]
#![deny(warnings)]
#![deny(unsafe_code)]

pub mod error;
pub mod isa;
pub mod table;
pub mod tally;
pub mod trace;
