//! # ELF II BASIC to cassette
//!
//! Loading a program into the ELF II Full Basic Math ROM means playing
//! it from a cassette. This crate writes that cassette as a WAV file from
//! an ordinary text listing.
//!
//! ```
//! use elf::lang::Program;
//! use elf::tape::{Config, Emitter};
//!
//! let block = Program::new("10 PRINT \"HELLO\"\n20 GOTO 10\n")
//!     .unwrap()
//!     .block()
//!     .unwrap();
//! let emitter = Emitter::new(&Config::default()).unwrap();
//! let samples = emitter.samples(block.as_bytes());
//! assert_eq!(samples.len(), emitter.sample_count(block.as_bytes()));
//! ```
//!
//! The block starts with a checksum and a length, then every numbered
//! line as its line number, length and body. Keywords in the body are
//! stored as single byte codes. Each byte goes to tape as a start bit,
//! eight data bits least significant first and a parity bit, using
//! 800 Hz for a 1 and 2000 Hz for a 0 by default, after an 8 second
//! leader at 2000 Hz.
//!
//! See <http://en.wikipedia.org/wiki/Kansas_City_standard>.

pub mod batch;
pub mod lang;
pub mod tape;
