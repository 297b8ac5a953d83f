/*!
# Rust Language Module

This Rust module turns a BASIC listing into the binary program block
that the ELF II BASIC ROM reads from cassette.

*/

pub type LineNumber = u16;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod program;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use program::{Block, Program};
pub use token::{lookup, Token, Word};

#[cfg(test)]
mod tests;
