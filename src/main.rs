// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Command line entry point: compare bit files, generate test inputs.

use std::{
    io::{self, Write},
    path::Path,
    time::Instant,
};

use bitcmp::{
    compare_files, compare_loaded,
    error::{Error, Result},
    generate::{self, BufferSpec},
    load_pair,
    rngs::{self, xorshift::XORShift128, ReferenceRand, RNG},
    utils,
};
use clap::Parser;

mod cli;
use cli::{Cli, Commands, RngArgs, RngKind};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start = Instant::now();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    log::debug!("finished in {}", utils::format_elapsed_time(start.elapsed()));
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            reference,
            candidate,
            report,
        } => run_compare(&reference, &candidate, report.as_deref()),
        Commands::GenBits { count, rng, output } => {
            let seed = resolve_seed(&rng);
            match rng.rng {
                RngKind::Reference => {
                    gen_bits(&mut ReferenceRand::new(seed), count, output.as_deref())
                }
                RngKind::Xorshift => {
                    gen_bits(&mut XORShift128::new(seed), count, output.as_deref())
                }
            }
        }
        Commands::GenBytes { rng, dir, buffers } => {
            let seed = resolve_seed(&rng);
            let specs = if buffers.is_empty() {
                BufferSpec::default_plan()
            } else {
                buffers
            };
            match rng.rng {
                RngKind::Reference => {
                    generate::write_buffers(&mut ReferenceRand::new(seed), &specs, &dir)?
                }
                RngKind::Xorshift => {
                    generate::write_buffers(&mut XORShift128::new(seed), &specs, &dir)?
                }
            };
            Ok(())
        }
    }
}

fn run_compare(reference: &Path, candidate: &Path, report: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let Some(report_path) = report else {
        compare_files(reference, candidate, &mut stdout.lock())?;
        return Ok(());
    };

    // Nothing reaches the report file unless both inputs load.
    let (reference_seq, candidate_seq) = load_pair(reference, candidate)?;
    let to_error = |source| Error::Write {
        path: report_path.to_owned(),
        source,
    };
    let mut file = utils::open_append(report_path).map_err(to_error)?;
    writeln!(
        file,
        "\n[{}] {} vs {}",
        utils::timestamp(),
        reference.display(),
        candidate.display()
    )
    .map_err(to_error)?;
    let mut tee = utils::Tee::new(stdout.lock(), &mut file);
    let summary = match compare_loaded(&reference_seq, &candidate_seq, &mut tee) {
        Ok(summary) => summary,
        Err(Error::Output(source)) if tee.second_failed() => return Err(to_error(source)),
        Err(e) => return Err(e),
    };
    drop(tee);
    writeln!(file, "{} - {}", summary.format(), summary.verdict()).map_err(to_error)
}

/// Use the given seed or draw and log a fresh one.
fn resolve_seed(args: &RngArgs) -> u64 {
    let seed = args.seed.unwrap_or_else(rngs::fresh_seed);
    log::info!("using {:?} generator with seed {}", args.rng, seed);
    seed
}

fn gen_bits(test_rng: &mut impl RNG, count: usize, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => generate::write_bits(test_rng, count, path),
        None => {
            let bits = generate::generate_bits(test_rng, count);
            let mut out = io::stdout().lock();
            writeln!(out, "{}", bits)?;
            Ok(())
        }
    }
}
