use super::{Error, Line};
use crate::error;

/// Checksum, length and six zero bytes ahead of the first line.
pub const HEADER_LEN: usize = 10;

/// The numbered lines of one source file, in file order.
#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Lines without a line number are dropped. Errors carry the
    /// text line of the file they came from.
    pub fn new(text: &str) -> Result<Program, Error> {
        let mut program = Program::default();
        for (index, s) in text.lines().enumerate() {
            match Line::new(s) {
                Ok(Some(line)) => program.lines.push(line),
                Ok(None) => {}
                Err(error) => {
                    return Err(error.message(&format!(
                        "IN LINE {} OF THE FILE. (NOT BASIC LINE NUMBER)",
                        index + 1
                    )))
                }
            }
        }
        Ok(program)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn block(&self) -> Result<Block, Error> {
        Block::assemble(&self.lines)
    }
}

/// The program as it goes to tape.
///
/// ```text
/// checksum_hi checksum_lo length_hi length_lo 00 00 00 00 00 00 lines...
/// ```
///
/// The length counts every byte of the block. The checksum is the
/// 16 bit wrapping sum of every byte after it.
#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    bytes: Vec<u8>,
}

impl Block {
    /// Lines are kept in the order given; the ROM sorts nothing.
    pub fn assemble(lines: &[Line]) -> Result<Block, Error> {
        let mut body = vec![];
        for line in lines {
            body.extend(line.encode()?);
        }
        let total_len = body.len() + HEADER_LEN;
        if total_len > u16::max_value() as usize {
            return Err(error!(OutOfMemory; &format!("{} BYTES", total_len)));
        }
        let mut bytes = Vec::with_capacity(total_len);
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(&(total_len as u16).to_be_bytes());
        bytes.extend_from_slice(&[0; 6]);
        bytes.append(&mut body);
        let checksum = sum(&bytes[2..]);
        bytes[..2].copy_from_slice(&checksum.to_be_bytes());
        tracing::trace!(total_len, checksum, "assembled block");
        Ok(Block { bytes })
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes([self.bytes[0], self.bytes[1]])
    }

    pub fn total_len(&self) -> u16 {
        u16::from_be_bytes([self.bytes[2], self.bytes[3]])
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() == HEADER_LEN
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Wrapping 16 bit sum of `bytes`.
pub fn sum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |total, b| total.wrapping_add(u16::from(*b)))
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for b in &self.bytes {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
