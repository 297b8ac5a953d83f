extern crate linefeed;
use super::Settings;
use ansi_term::Colour;
use elf::lang::Error;
use elf::tape::{FRAME_RATES, FREQUENCIES};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Asks for settings one line at a time. An empty answer keeps the
/// value shown in angle brackets.
pub struct Prompter {
    interface: Interface<DefaultTerminal>,
}

fn aborted() -> io::Error {
    io::Error::new(ErrorKind::Interrupted, "aborted")
}

impl Prompter {
    pub fn new() -> Result<Prompter, Error> {
        let interface = Interface::new("bas2wav")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Prompter { interface })
    }

    /// `None` when the user gave up with Ctrl-C or end of input.
    pub fn settings(&self, settings: Settings) -> Result<Option<Settings>, Error> {
        match self.ask_all(settings) {
            Ok(settings) => Ok(Some(settings)),
            Err(error) if error.kind() == ErrorKind::Interrupted => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    pub fn proceed(&self) -> Result<bool, Error> {
        match self.confirm("Proceed ?", true) {
            Err(error) if error.kind() == ErrorKind::Interrupted => Ok(false),
            result => Ok(result?),
        }
    }

    fn ask_all(&self, mut s: Settings) -> io::Result<Settings> {
        self.heading("File Settings")?;
        s.source_dir = self.path("Basic Text Source Directory", &s.source_dir, true)?;
        s.target_dir = self.path("Target Directory", &s.target_dir, false)?;

        self.heading("Wav File Parameters")?;
        let c = &mut s.config;
        c.zero_frequency =
            self.number("Bit 0 Frequency Hz", c.zero_frequency, |f| FREQUENCIES.contains(&f))?;
        c.one_frequency =
            self.number("Bit 1 Frequency Hz", c.one_frequency, |f| FREQUENCIES.contains(&f))?;
        c.frame_rate = self.number("Framerate Hz", c.frame_rate, |f| FRAME_RATES.contains(&f))?;
        c.amplitude = self.number("Amplitude", c.amplitude, |_| true)?;
        c.leader_seconds = self.number("Leader in seconds", c.leader_seconds, |n| n <= 60)?;
        c.start_bit_value = self.number("Start Bit 0 or 1", c.start_bit_value, |n| n <= 1)?;
        c.trailing_one_count =
            self.number("Terminating bit 1 sequence", c.trailing_one_count, |n| n <= 300)?;

        s.debug = self.confirm("Show debug data ?", s.debug)?;
        s.alphabetize = self.confirm(
            "Do you want to save files in alphabetized directories ?",
            s.alphabetize,
        )?;
        Ok(s)
    }

    fn heading(&self, text: &str) -> io::Result<()> {
        self.interface
            .write_fmt(format_args!("\n{}\n", Colour::Green.bold().paint(text)))
    }

    fn complain(&self, answer: &str) -> io::Result<()> {
        self.interface.write_fmt(format_args!(
            "{}\n",
            Colour::Red.paint(format!("Error: '{}' is not a valid value.", answer))
        ))
    }

    fn line(&self, label: &str, default: &str) -> io::Result<String> {
        self.interface
            .set_prompt(&format!("{} <{}> : ", label, default))?;
        match self.interface.read_line()? {
            ReadResult::Input(input) => {
                let input = input.trim();
                if input.is_empty() {
                    Ok(default.to_string())
                } else {
                    Ok(input.to_string())
                }
            }
            ReadResult::Signal(_) | ReadResult::Eof => Err(aborted()),
        }
    }

    fn number<N, F>(&self, label: &str, default: N, allowed: F) -> io::Result<N>
    where
        N: FromStr + std::fmt::Display + Copy,
        F: Fn(N) -> bool,
    {
        loop {
            let answer = self.line(label, &default.to_string())?;
            match answer.parse::<N>() {
                Ok(n) if allowed(n) => return Ok(n),
                _ => self.complain(&answer)?,
            }
        }
    }

    fn confirm(&self, label: &str, default: bool) -> io::Result<bool> {
        let shown = if default { "Y" } else { "n" };
        loop {
            let answer = self.line(label, shown)?;
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain(&answer)?,
            }
        }
    }

    fn path(&self, label: &str, default: &Path, must_exist: bool) -> io::Result<PathBuf> {
        loop {
            let answer = self.line(label, &default.display().to_string())?;
            let path = PathBuf::from(&answer);
            if !must_exist || path.is_dir() {
                return Ok(path);
            }
            self.complain(&answer)?;
        }
    }
}
