//! Command sources
//!
//! Reads G-code line by line from any buffered source and yields parsed
//! commands. Files are read forward only and closed when the reader is
//! dropped, whether or not it was read to the end.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use laserpath_core::{Error, Result};

use crate::command::{CommandParser, MotionCommand};

/// Buffer size for reading large files (256 KB)
const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Streaming command reader
pub struct CommandReader<R> {
    lines: Lines<R>,
    parser: CommandParser,
}

impl<R: BufRead> CommandReader<R> {
    /// Wrap a buffered source
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            parser: CommandParser::new(),
        }
    }

    /// Lines consumed so far
    pub fn line_number(&self) -> u32 {
        self.parser.line_number()
    }
}

impl CommandReader<BufReader<File>> {
    /// Open a G-code file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::info!("Reading commands from {}", path.display());
        Ok(Self::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
    }
}

impl<'a> CommandReader<&'a [u8]> {
    /// Read commands from in-memory text
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<MotionCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            match self.parser.parse(&line) {
                Ok(Some(command)) => return Some(Ok(command)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// A G-code file on disk
///
/// Checks the path up front; each call to [`GcodeFile::commands`] opens a
/// fresh forward-only reader.
#[derive(Debug, Clone)]
pub struct GcodeFile {
    path: PathBuf,
    file_size: u64,
}

impl GcodeFile {
    /// # Errors
    /// Returns error if the path does not exist or is not a regular file
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() {
            return Err(Error::other(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(Self {
            path,
            file_size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get file size in bytes
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Open a command stream over the file
    pub fn commands(&self) -> Result<CommandReader<BufReader<File>>> {
        CommandReader::open(&self.path)
    }
}
