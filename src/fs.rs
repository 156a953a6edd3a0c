//! Filesystem access used by the locators
//!
//! Readers are returned boxed and owned by the caller, so a handle is closed
//! as soon as the scan that opened it returns.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub trait Filesystem {
    /// Entries directly under `dir`, as full paths
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Open a text file for line-oriented reading
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}

pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Lines of `reader` without their terminator
///
/// Bytes that aren't UTF-8 become U+FFFD instead of failing the read;
/// Steam writes names in whatever encoding the store gave it.
pub fn lossy_lines(reader: Box<dyn BufRead>) -> LossyLines {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

pub struct LossyLines {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl Iterator for LossyLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = self.buf.strip_suffix(b"\n").unwrap_or(self.buf.as_slice());
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
