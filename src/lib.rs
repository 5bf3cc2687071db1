// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Tools for preparing and checking bit stream test inputs.
//! Compares a received bit file against the one that was sent and
//! generates seeded random bit sequences and byte buffers.

pub mod compare;
pub mod conditioning;
pub mod error;
pub mod generate;
pub mod rngs;
pub mod sequence;
pub mod strings;
pub mod utils;

pub use compare::{
    compare, compare_files, compare_loaded, load_pair, CompareSummary, MismatchRecord, Mismatches,
};
pub use error::{Error, Result};
pub use sequence::SymbolSequence;
