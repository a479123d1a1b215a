//! Byte-for-byte content comparison

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

const CHUNK_SIZE: usize = 8192;

/// Streaming content comparator
pub struct ContentComparator;

impl ContentComparator {
    /// Check whether two files hold exactly the same bytes
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or read.
    pub fn equal(left: &Path, right: &Path) -> Result<bool> {
        let left_len = fs::metadata(left)
            .with_context(|| format!("Failed to read metadata for: {}", left.display()))?
            .len();
        let right_len = fs::metadata(right)
            .with_context(|| format!("Failed to read metadata for: {}", right.display()))?
            .len();

        if left_len != right_len {
            return Ok(false);
        }

        let mut left_reader = Self::open(left)?;
        let mut right_reader = Self::open(right)?;
        let mut left_buf = [0u8; CHUNK_SIZE];
        let mut right_buf = [0u8; CHUNK_SIZE];

        loop {
            let n = Self::fill(&mut left_reader, &mut left_buf, left)?;
            let m = Self::fill(&mut right_reader, &mut right_buf, right)?;

            if n != m || left_buf[..n] != right_buf[..m] {
                return Ok(false);
            }
            if n == 0 {
                return Ok(true);
            }
        }
    }

    fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file for comparison: {}", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Read until `buf` is full or the file ends
    fn fill(reader: &mut impl Read, buf: &mut [u8], path: &Path) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let read = reader
                .read(&mut buf[filled..])
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
}
