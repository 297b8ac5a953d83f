use super::{Config, Pulse};
use crate::lang::Error;
use std::io::Write;

/// Bits of one byte on tape: start bit, the data bits least
/// significant first, then the parity bit.
///
/// The parity bit is set when an odd number of data bits are set,
/// so data plus parity always carries an even count of ones.
pub fn frame_bits(start_bit: bool, byte: u8) -> [bool; 10] {
    let mut bits = [false; 10];
    bits[0] = start_bit;
    let reversed = byte.reverse_bits();
    let mut ones = 0;
    for i in 0..8 {
        let bit = reversed & (0x80 >> i) != 0;
        if bit {
            ones += 1;
        }
        bits[i + 1] = bit;
    }
    bits[9] = ones % 2 == 1;
    bits
}

/// Turns bytes into pulse trains.
#[derive(Debug, Clone)]
pub struct Modulator {
    zero: Pulse,
    one: Pulse,
    start_bit: bool,
}

impl Modulator {
    pub fn new(config: &Config) -> Result<Modulator, Error> {
        config.validate()?;
        Ok(Modulator {
            zero: Pulse::square(config.zero_frequency, config.frame_rate, config.amplitude),
            one: Pulse::square(config.one_frequency, config.frame_rate, config.amplitude),
            start_bit: config.start_bit_value == 1,
        })
    }

    pub fn zero(&self) -> &Pulse {
        &self.zero
    }

    pub fn one(&self) -> &Pulse {
        &self.one
    }

    pub fn pulse(&self, bit: bool) -> &Pulse {
        if bit {
            &self.one
        } else {
            &self.zero
        }
    }

    /// Sample count of the frame for `byte`.
    pub fn frame_len(&self, byte: u8) -> usize {
        frame_bits(self.start_bit, byte)
            .iter()
            .map(|bit| self.pulse(*bit).len())
            .sum()
    }

    pub fn write_frame<W: Write>(&self, byte: u8, w: &mut W) -> std::io::Result<()> {
        for bit in frame_bits(self.start_bit, byte).iter() {
            w.write_all(self.pulse(*bit).samples())?;
        }
        Ok(())
    }

    pub fn frame(&self, byte: u8) -> Vec<u8> {
        let mut samples = Vec::with_capacity(self.frame_len(byte));
        for bit in frame_bits(self.start_bit, byte).iter() {
            samples.extend_from_slice(self.pulse(*bit).samples());
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_bits_are_sent_lsb_first() {
        assert_eq!(frame_bits(T, 0x01), [T, T, F, F, F, F, F, F, F, T]);
        assert_eq!(frame_bits(T, 0x80), [T, F, F, F, F, F, F, F, T, T]);
    }

    #[test]
    fn test_parity_truth_table() {
        // ones in data -> parity
        assert_eq!(frame_bits(T, 0x00)[9], F);
        assert_eq!(frame_bits(T, 0x01)[9], T);
        assert_eq!(frame_bits(T, 0x03)[9], F);
        assert_eq!(frame_bits(T, 0x07)[9], T);
        assert_eq!(frame_bits(T, 0xFF)[9], F);
        assert_eq!(frame_bits(T, 0x94)[9], T);
    }

    #[test]
    fn test_start_bit() {
        assert_eq!(frame_bits(F, 0x0D)[0], F);
        assert_eq!(frame_bits(T, 0x0D)[0], T);
        assert_eq!(frame_bits(F, 0x0D)[1..], frame_bits(T, 0x0D)[1..]);
    }

    #[test]
    fn test_frame_of_zero_byte() {
        let m = Modulator::new(&Config::default()).unwrap();
        let mut expected = m.one().samples().to_vec();
        for _ in 0..9 {
            expected.extend_from_slice(m.zero().samples());
        }
        assert_eq!(m.frame(0x00), expected);
        assert_eq!(m.frame_len(0x00), 26 + 9 * 10);
    }

    #[test]
    fn test_write_frame_matches_frame() {
        let m = Modulator::new(&Config::default()).unwrap();
        let mut out = vec![];
        m.write_frame(0xA5, &mut out).unwrap();
        assert_eq!(out, m.frame(0xA5));
    }
}
