// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Positional comparison of two symbol sequences.

use std::{fmt, io::Write, iter::Enumerate, iter::Zip, path::Path, slice};

use crate::{
    error::{Error, Result},
    sequence::SymbolSequence,
    strings,
};

/// A position where the candidate disagrees with the reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MismatchRecord {
    pub index: usize,
    pub expected: char,
    pub actual: char,
}

impl fmt::Display for MismatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error on {}: in={} out={}",
            self.index, self.expected, self.actual
        )
    }
}

/// Lazy, single pass iterator over the mismatches of two sequences.
/// Stops at the end of the shorter sequence.
pub struct Mismatches<'a> {
    pairs: Enumerate<Zip<slice::Iter<'a, char>, slice::Iter<'a, char>>>,
}

impl Iterator for Mismatches<'_> {
    type Item = MismatchRecord;

    fn next(&mut self) -> Option<MismatchRecord> {
        self.pairs.find_map(|(index, (&expected, &actual))| {
            (expected != actual).then_some(MismatchRecord {
                index,
                expected,
                actual,
            })
        })
    }
}

/// Compare `candidate` against `reference` position by position.
/// Only the first min(len(reference), len(candidate)) positions are examined.
pub fn compare<'a>(
    reference: &'a SymbolSequence,
    candidate: &'a SymbolSequence,
) -> Mismatches<'a> {
    Mismatches {
        pairs: reference
            .symbols()
            .iter()
            .zip(candidate.symbols().iter())
            .enumerate(),
    }
}

/// Counts gathered while reporting one comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CompareSummary {
    pub reference_len: usize,
    pub candidate_len: usize,
    pub compared: usize,
    pub mismatches: usize,
}

impl CompareSummary {
    pub fn new(reference: &SymbolSequence, candidate: &SymbolSequence) -> Self {
        CompareSummary {
            reference_len: reference.len(),
            candidate_len: candidate.len(),
            compared: reference.len().min(candidate.len()),
            mismatches: 0,
        }
    }

    /// Fraction of compared positions that differ, 0.0 if nothing was compared.
    pub fn error_rate(&self) -> f64 {
        if self.compared == 0 {
            0.0
        } else {
            self.mismatches as f64 / self.compared as f64
        }
    }

    pub fn truncated(&self) -> bool {
        self.reference_len != self.candidate_len
    }

    /// MATCH only if both sequences are identical, length included.
    pub fn verdict(&self) -> &'static str {
        if self.mismatches == 0 && !self.truncated() {
            strings::MATCH_STR
        } else {
            strings::MISMATCH_STR
        }
    }

    pub fn format(&self) -> String {
        format!(
            "Compared {} symbols ({} / {}): {} mismatches, error rate {:.6}",
            self.compared,
            self.reference_len,
            self.candidate_len,
            self.mismatches,
            self.error_rate()
        )
    }
}

/// Write every mismatch as one line to `out` as soon as it is produced.
/// Returns how many lines were written.
pub fn report(mismatches: Mismatches<'_>, out: &mut impl Write) -> Result<usize> {
    let mut count = 0usize;
    for record in mismatches {
        writeln!(out, "{}", record)?;
        count += 1;
    }
    Ok(count)
}

/// Load the reference then the candidate, each read completely.
pub fn load_pair(
    reference_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
) -> Result<(SymbolSequence, SymbolSequence)> {
    let reference = SymbolSequence::load(reference_path)?;
    let candidate = SymbolSequence::load(candidate_path)?;
    Ok((reference, candidate))
}

/// Compare two loaded sequences and report mismatches to `out`.
pub fn compare_loaded(
    reference: &SymbolSequence,
    candidate: &SymbolSequence,
    out: &mut impl Write,
) -> Result<CompareSummary> {
    let mut summary = CompareSummary::new(reference, candidate);
    if summary.truncated() {
        log::warn!(
            "length mismatch: reference has {} symbols, candidate has {}; comparing the first {}",
            summary.reference_len,
            summary.candidate_len,
            summary.compared
        );
    }
    summary.mismatches = report(compare(reference, candidate), out)?;
    out.flush().map_err(Error::Output)?;
    log::info!("{}", summary.format());
    Ok(summary)
}

/// Load both files, compare them and report mismatches to `out`.
/// Both files are read completely before the first line is written.
pub fn compare_files(
    reference_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
    out: &mut impl Write,
) -> Result<CompareSummary> {
    let (reference, candidate) = load_pair(reference_path, candidate_path)?;
    compare_loaded(&reference, &candidate, out)
}
