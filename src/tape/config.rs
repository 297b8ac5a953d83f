use crate::error;
use crate::lang::Error;

/// Sample value of silence in unsigned 8 bit PCM.
pub const CENTER: u8 = 128;

/// Frequencies offered when prompting, in Hz.
pub const FREQUENCIES: [u32; 10] = [300, 500, 600, 800, 1000, 1200, 2000, 2400, 4800, 9600];

/// Frame rates offered when prompting, in Hz.
pub const FRAME_RATES: [u32; 6] = [4800, 9600, 11025, 22050, 44100, 48000];

pub const MAX_LEADER_SECONDS: u32 = 60;
pub const MAX_TRAILING_ONES: u32 = 300;

/// Modulation parameters. None of them change the program block.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Hz of a 0 bit and of the leader.
    pub zero_frequency: u32,
    /// Hz of a 1 bit and of the trailer.
    pub one_frequency: u32,
    /// Samples per second.
    pub frame_rate: u32,
    /// Peak to peak swing around `CENTER`.
    pub amplitude: u8,
    pub leader_seconds: u32,
    /// Logical value of the start bit, 0 or 1.
    pub start_bit_value: u8,
    /// Number of 1 pulses after the last byte.
    pub trailing_one_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            zero_frequency: 2000,
            one_frequency: 800,
            frame_rate: 22050,
            amplitude: 225,
            leader_seconds: 8,
            start_bit_value: 1,
            trailing_one_count: 25,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.frame_rate == 0 {
            return Err(error!(IllegalFunctionCall; "FRAME RATE IS ZERO"));
        }
        Config::check_frequency(self.zero_frequency, self.frame_rate, "BIT 0 FREQUENCY")?;
        Config::check_frequency(self.one_frequency, self.frame_rate, "BIT 1 FREQUENCY")?;
        if self.leader_seconds > MAX_LEADER_SECONDS {
            return Err(error!(IllegalFunctionCall; "LEADER OVER 60 SECONDS"));
        }
        if self.start_bit_value > 1 {
            return Err(error!(IllegalFunctionCall; "START BIT NOT 0 OR 1"));
        }
        if self.trailing_one_count > MAX_TRAILING_ONES {
            return Err(error!(IllegalFunctionCall; "TRAILER OVER 300 PULSES"));
        }
        Ok(())
    }

    /// A pulse needs at least one sample in each half.
    fn check_frequency(frequency: u32, frame_rate: u32, name: &str) -> Result<(), Error> {
        if frequency == 0 || frame_rate / frequency / 2 == 0 {
            return Err(error!(IllegalFunctionCall;
                &format!("{} {} HZ TOO HIGH FOR {} HZ FRAME RATE", name, frequency, frame_rate)));
        }
        Ok(())
    }
}
