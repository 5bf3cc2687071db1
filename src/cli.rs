// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

use std::path::PathBuf;

use bitcmp::{generate::BufferSpec, generate::DEFAULT_BIT_COUNT, strings};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bitcmp",
    about = "Compare bit files and generate random test inputs",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every position where the candidate differs from the reference
    Compare {
        /// Reference bit file
        #[arg(default_value = strings::DEFAULT_REFERENCE_PATH)]
        reference: PathBuf,

        /// Candidate bit file
        #[arg(default_value = strings::DEFAULT_CANDIDATE_PATH)]
        candidate: PathBuf,

        /// Also append the mismatch lines to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Generate a random '0'/'1' sequence
    GenBits {
        /// Number of bits
        #[arg(short, long, default_value_t = DEFAULT_BIT_COUNT)]
        count: usize,

        #[command(flatten)]
        rng: RngArgs,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate files of random bytes
    GenBytes {
        #[command(flatten)]
        rng: RngArgs,

        /// Directory the files are written to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Buffer as NAME:SIZE, repeatable. Defaults to INPUT.bin, INPUT1to2.bin, INPUT2to1.bin
        #[arg(short, long = "buffer", value_parser = parse_buffer_spec)]
        buffers: Vec<BufferSpec>,
    },
}

#[derive(clap::Args)]
pub struct RngArgs {
    /// Seed, a fresh one is drawn and logged when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Generator to use
    #[arg(long, value_enum, default_value_t = RngKind::Reference)]
    pub rng: RngKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RngKind {
    /// rand's StdRng
    Reference,
    Xorshift,
}

fn parse_buffer_spec(s: &str) -> Result<BufferSpec, String> {
    s.parse().map_err(|e: bitcmp::Error| e.to_string())
}
