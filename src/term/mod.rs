extern crate ansi_term;
extern crate ctrlc;
use crate::Args;
use ansi_term::{Colour, Style};
use elf::batch::{self, Conversion};
use elf::lang::Error;
use elf::tape::{Config, Emitter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod prompt;

/// Everything a run needs, from the command line or the prompts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub config: Config,
    pub alphabetize: bool,
    pub tag: bool,
    pub debug: bool,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Settings {
            source_dir: args.source_dir.clone(),
            target_dir: args.target_dir.clone(),
            files: args.files.clone(),
            config: args.config(),
            alphabetize: !args.flat,
            tag: !args.no_tags,
            debug: args.debug,
        }
    }
}

pub fn main(args: Args) -> ExitCode {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(&args, interrupted) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            tracing::warn!(failures, "some files were not converted");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of files that failed.
fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<usize, Error> {
    let mut settings = Settings::from(args);
    let prompter = if args.interactive {
        let prompter = prompt::Prompter::new()?;
        match prompter.settings(settings)? {
            Some(s) => settings = s,
            None => {
                println!("{}", Colour::Red.bold().paint("ABORTED."));
                return Ok(0);
            }
        }
        Some(prompter)
    } else {
        None
    };
    let emitter = Emitter::new(&settings.config)?;
    tracing::debug!(config = ?settings.config, "configured");

    let sources = if settings.files.is_empty() {
        batch::find_sources(&settings.source_dir)?
    } else {
        settings.files.clone()
    };
    if sources.is_empty() {
        println!("{}", Colour::Red.bold().paint("No files found."));
        return Ok(0);
    }
    println!("{}", Colour::Green.bold().paint("Files to be converted :"));
    for source in &sources {
        println!("{}", source.display());
    }
    if let Some(prompter) = &prompter {
        if !prompter.proceed()? {
            println!("{}", Colour::Red.bold().paint("ABORTED."));
            return Ok(0);
        }
    }

    let mut failures = 0;
    for source in &sources {
        if interrupted.load(Ordering::SeqCst) {
            println!("{}", Style::new().bold().paint("BREAK"));
            tracing::warn!("interrupted before {}", source.display());
            break;
        }
        match convert(source, &settings, &emitter) {
            Ok(conversion) => report(&conversion, &settings),
            Err(error) => {
                failures += 1;
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
        }
    }
    Ok(failures)
}

fn convert(source: &Path, settings: &Settings, emitter: &Emitter) -> Result<Conversion, Error> {
    let target = batch::target_path(&settings.target_dir, source, settings.alphabetize)?;
    println!(
        "{} {}",
        Colour::Yellow.paint("Creating File"),
        target.display()
    );
    batch::convert_file(source, &target, emitter, &settings.config, settings.tag)
}

fn report(conversion: &Conversion, settings: &Settings) {
    if settings.debug {
        println!("{}", Colour::Blue.paint("Program Block"));
        println!("{}", conversion.block);
    }
    println!(
        "{} bytes, {:.1} seconds",
        conversion.block.len(),
        conversion.seconds(settings.config.frame_rate)
    );
}
