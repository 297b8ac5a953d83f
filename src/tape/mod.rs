/*!
## Rust Tape Module

This Rust module modulates a program block into Kansas City Standard
audio for the ELF II cassette input and wraps it in a WAV file.

*/

mod config;
mod emit;
mod modulate;
mod pulse;
mod wav;

pub use config::{Config, CENTER, FRAME_RATES, FREQUENCIES};
pub use emit::Emitter;
pub use modulate::{frame_bits, Modulator};
pub use pulse::Pulse;
pub use wav::{write_wav, Tags};
