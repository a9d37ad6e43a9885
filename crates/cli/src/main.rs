mod loader;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use records::{ExchangeDataFileRecord, ZipCodeDataFileRecord};
use std::fmt::Display;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use weighted::DataFileRecord;

#[derive(Debug, Parser)]
#[command(
    name = "wdf",
    about = "Inspect and sample weighted data files",
    long_about = "Load a weighted data file (one `weight<TAB>fields...` record per line) and report sizes, draw weighted samples, or dump its records."
)]
struct Cli {
    /// Field delimiter used by the input file.
    #[arg(long, global = true, default_value_t = splitter::DEFAULT_DELIMITER)]
    delimiter: char,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print total weight and unique record count.
    Stats(FileArgs),
    /// Draw records with probability proportional to their weight.
    Sample {
        #[command(flatten)]
        file: FileArgs,
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Seed for repeatable draws; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print records in weighted order, or each unique record once.
    Dump {
        #[command(flatten)]
        file: FileArgs,
        #[arg(long)]
        unique: bool,
    },
}

#[derive(Debug, Args)]
struct FileArgs {
    /// Record layout of the file.
    #[arg(long, value_enum)]
    kind: RecordKind,
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordKind {
    Exchange,
    ZipCode,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let kind = match &cli.command {
        Command::Stats(file) => file.kind,
        Command::Sample { file, .. } | Command::Dump { file, .. } => file.kind,
    };

    match kind {
        RecordKind::Exchange => run::<ExchangeDataFileRecord>(&cli),
        RecordKind::ZipCode => run::<ZipCodeDataFileRecord>(&cli),
    }
}

fn run<T: DataFileRecord + Display>(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Stats(file) => {
            let wdf = loader::load::<T>(&file.path, cli.delimiter)?;
            loader::write_stats(&wdf, &mut out)?;
        }
        Command::Sample { file, count, seed } => {
            let wdf = loader::load::<T>(&file.path, cli.delimiter)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            loader::write_samples(&wdf, *count, &mut rng, &mut out)?;
        }
        Command::Dump { file, unique } => {
            let wdf = loader::load::<T>(&file.path, cli.delimiter)?;
            loader::write_dump(&wdf, *unique, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
