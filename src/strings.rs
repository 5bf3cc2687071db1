// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! User interaction strings and default file names are stored here.

pub const DEFAULT_REFERENCE_PATH: &str = "INPUT.txt";
pub const DEFAULT_CANDIDATE_PATH: &str = "OUTPUT.txt";

/// Default byte buffers, (file name, size in bytes).
pub const DEFAULT_BUFFERS: [(&str, usize); 3] = [
    ("INPUT.bin", 6250),
    ("INPUT1to2.bin", 6250),
    ("INPUT2to1.bin", 5000),
];

pub const MATCH_STR: &str = "MATCH";
pub const MISMATCH_STR: &str = "MISMATCH";
