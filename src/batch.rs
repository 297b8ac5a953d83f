/*!
## Rust Batch Module

Finding BASIC listings on disk and turning each one into a WAV file.

*/

use crate::error;
use crate::lang::{Block, Error, Program};
use crate::tape::{write_wav, Config, Emitter, Tags};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extensions taken to be BASIC listings.
pub const EXTENSIONS: [&str; 3] = ["bas", "txt", "text"];

/// What became of one source file.
#[derive(Debug)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
    pub block: Block,
    pub samples: usize,
}

impl Conversion {
    /// Playing time at `frame_rate`.
    pub fn seconds(&self, frame_rate: u32) -> f64 {
        self.samples as f64 / f64::from(frame_rate)
    }
}

pub fn is_source(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => EXTENSIONS.iter().any(|x| x.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Listings directly inside `dir`, sorted by name.
pub fn find_sources(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut found = vec![];
    for entry in fs::read_dir(dir).map_err(|e| Error::from(e).message(&dir.display().to_string()))? {
        let path = entry?.path();
        if path.is_file() && is_source(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn stem(source: &Path) -> Result<&str, Error> {
    match source.file_stem().and_then(|s| s.to_str()) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(error!(BadFileName; &source.display().to_string())),
    }
}

/// `<target_dir>/wav/<stem>.wav`, or with `alphabetize` the file goes
/// in a folder named by the uppercase first letter of the stem.
pub fn target_path(target_dir: &Path, source: &Path, alphabetize: bool) -> Result<PathBuf, Error> {
    let stem = stem(source)?;
    let mut path = target_dir.join("wav");
    if alphabetize {
        if let Some(initial) = stem.chars().next() {
            path.push(initial.to_uppercase().to_string());
        }
    }
    path.push(format!("{}.wav", stem));
    Ok(path)
}

/// Reads `source`, writes `target` and creates its folder if needed.
/// With `tag` the WAV carries the file stem as artist, album and title.
pub fn convert_file(
    source: &Path,
    target: &Path,
    emitter: &Emitter,
    config: &Config,
    tag: bool,
) -> Result<Conversion, Error> {
    let name = source.display().to_string();
    let text = fs::read_to_string(source).map_err(|e| Error::from(e).message(&name))?;
    let program = Program::new(&text).map_err(|e| e.message(&name))?;
    if program.is_empty() {
        tracing::warn!(source = %name, "no numbered lines");
    }
    let block = program.block().map_err(|e| e.message(&name))?;
    tracing::debug!(source = %name, lines = program.lines().len(), bytes = block.len(), "encoded");

    let samples = emitter.samples(block.as_bytes());
    let tags = if tag {
        Some(Tags::new(stem(source)?))
    } else {
        None
    };
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(|e| Error::from(e).message(&dir.display().to_string()))?;
    }
    let target_name = target.display().to_string();
    let file = File::create(target).map_err(|e| Error::from(e).message(&target_name))?;
    let mut w = BufWriter::new(file);
    write_wav(&mut w, config.frame_rate, &samples, tags.as_ref())
        .and_then(|_| w.flush())
        .map_err(|e| Error::from(e).message(&target_name))?;
    tracing::info!(target = %target_name, samples = samples.len(), "written");

    Ok(Conversion {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
        block,
        samples: samples.len(),
    })
}
