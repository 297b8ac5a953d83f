use super::{Config, Modulator};
use crate::lang::Error;
use std::io::Write;

/// Lays out a whole recording: leader, one frame per byte, trailer.
#[derive(Debug, Clone)]
pub struct Emitter {
    modulator: Modulator,
    leader_pulses: usize,
    trailer_pulses: usize,
}

impl Emitter {
    pub fn new(config: &Config) -> Result<Emitter, Error> {
        let modulator = Modulator::new(config)?;
        let leader_samples = config.leader_seconds as usize * config.frame_rate as usize;
        let leader_pulses = leader_samples / modulator.zero().len();
        Ok(Emitter {
            modulator,
            leader_pulses,
            trailer_pulses: config.trailing_one_count as usize,
        })
    }

    pub fn modulator(&self) -> &Modulator {
        &self.modulator
    }

    /// Number of 0 pulses in the leader.
    pub fn leader_pulses(&self) -> usize {
        self.leader_pulses
    }

    /// Number of 1 pulses in the trailer.
    pub fn trailer_pulses(&self) -> usize {
        self.trailer_pulses
    }

    pub fn leader_len(&self) -> usize {
        self.leader_pulses * self.modulator.zero().len()
    }

    pub fn trailer_len(&self) -> usize {
        self.trailer_pulses * self.modulator.one().len()
    }

    /// Total samples `write` will produce for `bytes`.
    pub fn sample_count(&self, bytes: &[u8]) -> usize {
        let data: usize = bytes.iter().map(|b| self.modulator.frame_len(*b)).sum();
        self.leader_len() + data + self.trailer_len()
    }

    pub fn write<W: Write>(&self, bytes: &[u8], w: &mut W) -> std::io::Result<()> {
        for _ in 0..self.leader_pulses {
            w.write_all(self.modulator.zero().samples())?;
        }
        for byte in bytes {
            self.modulator.write_frame(*byte, w)?;
        }
        for _ in 0..self.trailer_pulses {
            w.write_all(self.modulator.one().samples())?;
        }
        Ok(())
    }

    pub fn samples(&self, bytes: &[u8]) -> Vec<u8> {
        let mut samples = Vec::with_capacity(self.sample_count(bytes));
        for _ in 0..self.leader_pulses {
            samples.extend_from_slice(self.modulator.zero().samples());
        }
        for byte in bytes {
            samples.extend(self.modulator.frame(*byte));
        }
        for _ in 0..self.trailer_pulses {
            samples.extend_from_slice(self.modulator.one().samples());
        }
        samples
    }
}
