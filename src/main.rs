//! # bas2wav
//!
//! Converts BASIC listings into cassette audio for the ELF II.
//!

mod term;

use clap::Parser;
use elf::tape::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Listings to convert (default: every .bas, .txt and .text file in the source directory)
    files: Vec<PathBuf>,

    /// Directory searched for listings
    #[arg(short, long, default_value = ".")]
    source_dir: PathBuf,

    /// WAV files are written below <TARGET_DIR>/wav
    #[arg(short, long, default_value = ".")]
    target_dir: PathBuf,

    /// Hz of a 0 bit and of the leader
    #[arg(long, default_value_t = 2000)]
    zero_frequency: u32,

    /// Hz of a 1 bit and of the trailer
    #[arg(long, default_value_t = 800)]
    one_frequency: u32,

    /// Samples per second
    #[arg(long, default_value_t = 22050)]
    frame_rate: u32,

    /// Swing of the square wave around 128
    #[arg(long, default_value_t = 225)]
    amplitude: u8,

    /// Seconds of leader tone
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(0..=60))]
    leader_seconds: u32,

    /// Value of the start bit
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    start_bit: u8,

    /// Number of 1 pulses after the data
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=300))]
    trailing_ones: u32,

    /// Write every WAV directly in <TARGET_DIR>/wav instead of per-letter folders
    #[arg(long)]
    flat: bool,

    /// Leave out the artist, album and title tags
    #[arg(long)]
    no_tags: bool,

    /// Ask for every setting
    #[arg(short, long)]
    interactive: bool,

    /// Show the encoded bytes of every file
    #[arg(short, long)]
    debug: bool,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            zero_frequency: self.zero_frequency,
            one_frequency: self.one_frequency,
            frame_rate: self.frame_rate,
            amplitude: self.amplitude,
            leader_seconds: self.leader_seconds,
            start_bit_value: self.start_bit,
            trailing_one_count: self.trailing_ones,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.debug {
        Level::DEBUG.max(args.log_level)
    } else {
        args.log_level
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    term::main(args)
}
