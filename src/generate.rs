// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Generators for test input files: random bit sequences
//! and fixed size random byte buffers.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    conditioning,
    error::{Error, Result},
    rngs::RNG,
    strings, utils,
};

pub const DEFAULT_BIT_COUNT: usize = 10000;

/// Generate `count` '0'/'1' symbols using the supplied rng.
pub fn generate_bits(test_rng: &mut impl RNG, count: usize) -> String {
    conditioning::bit_chars(test_rng, count)
}

/// Generate `count` bit symbols and write them to `file_path`.
/// No trailing newline is written.
pub fn write_bits(test_rng: &mut impl RNG, count: usize, file_path: &Path) -> Result<()> {
    let bits = generate_bits(test_rng, count);
    write_file(file_path, bits.as_bytes())?;
    log::info!("wrote {} bits to {}", count, file_path.display());
    Ok(())
}

/// Generate `size` random bytes using the supplied rng.
pub fn generate_bytes(test_rng: &mut impl RNG, size: usize) -> Vec<u8> {
    let mut buf = vec![0u8; size];
    conditioning::fill_bytes(test_rng, &mut buf);
    buf
}

/// Name and size of one random byte buffer file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSpec {
    pub name: String,
    pub size: usize,
}

impl BufferSpec {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        BufferSpec {
            name: name.into(),
            size,
        }
    }

    /// The buffers written when none are requested explicitly.
    pub fn default_plan() -> Vec<BufferSpec> {
        strings::DEFAULT_BUFFERS
            .iter()
            .map(|&(name, size)| BufferSpec::new(name, size))
            .collect()
    }
}

impl FromStr for BufferSpec {
    type Err = Error;

    /// Parse `NAME:SIZE`. The size is split off at the last colon.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidBufferSpec(s.to_owned());
        let (name, size) = s.rsplit_once(':').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        let size = size.trim().parse::<usize>().map_err(|_| invalid())?;
        Ok(BufferSpec::new(name, size))
    }
}

/// Write one file per spec into `dir`, all drawn from the same rng in order.
/// Returns the paths written.
pub fn write_buffers(
    test_rng: &mut impl RNG,
    specs: &[BufferSpec],
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = dir.join(&spec.name);
        let data = generate_bytes(test_rng, spec.size);
        write_file(&path, &data)?;
        log::info!(
            "wrote {} to {}",
            utils::format_byte_count(spec.size),
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}

fn write_file(file_path: &Path, data: &[u8]) -> Result<()> {
    let to_error = |source| Error::Write {
        path: file_path.to_owned(),
        source,
    };
    let file = File::create(file_path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data).map_err(to_error)?;
    writer.flush().map_err(to_error)
}
