// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Error type shared by loading, comparing and generating.

use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Source path is missing or could not be read.
    #[error("cannot read {}: {source}", path.display())]
    NotFound { path: PathBuf, source: io::Error },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("output error: {0}")]
    Output(#[from] io::Error),
    /// Buffer spec not in `NAME:SIZE` form.
    #[error("invalid buffer spec {0:?}, expected NAME:SIZE")]
    InvalidBufferSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
