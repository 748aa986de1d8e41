//! A binary to decode the base modification tags of many reads at once.
//!
//! ```shell
//! cargo run --release --bin=mm-decode --features=binaries reads.tsv
//! ```
//!
//! The input is a tab-delimited file (optionally gzipped, detected by a `.gz`
//! extension) with one read per line and the following columns:
//!
//! 1. The read name.
//! 2. The read sequence.
//! 3. The positions (`MM`) tag value (e.g., `C+m?,5,12,0;`).
//! 4. The likelihood (`ML`) tag values as comma-delimited bytes, or `*` if the
//!    read has no likelihood tag.
//! 5. The orientation of the read (`+` or `-`).
//!
//! Every decoded call is written to standard out as a tab-delimited line of
//! read name, position, base, strand, code, likelihood, and label.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use modtags::decoder;
use modtags::decoder::Decoder;
use modtags::scan::Orientation;
use omics::coordinate::Strand;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The delimiter between columns.
const COLUMN_DELIMITER: char = '\t';

/// The delimiter between likelihood values.
const LIKELIHOOD_DELIMITER: char = ',';

/// The placeholder for a missing likelihood tag.
const MISSING: &str = "*";

/// The number of columns expected on each line.
const NUM_COLUMNS: usize = 5;

////////////////////////////////////////////////////////////////////////////////////////
// Reads
////////////////////////////////////////////////////////////////////////////////////////

/// A single read from the input file.
#[derive(Debug, Eq, PartialEq)]
struct Read {
    /// The read name.
    name: String,

    /// The read sequence.
    sequence: Vec<u8>,

    /// The positions tag.
    positions: String,

    /// The likelihood values, if present.
    likelihoods: Option<Vec<u8>>,

    /// The orientation of the read.
    orientation: Orientation,
}

impl Read {
    /// Attempts to parse a read from a line of the input file.
    fn try_from_line(line: &str) -> Result<Self> {
        let parts = line.split(COLUMN_DELIMITER).collect::<Vec<_>>();

        if parts.len() != NUM_COLUMNS {
            bail!(
                "expected {} columns, found {} columns",
                NUM_COLUMNS,
                parts.len()
            );
        }

        let likelihoods = match parts[3] {
            MISSING => None,
            "" => Some(Vec::new()),
            values => Some(
                values
                    .split(LIKELIHOOD_DELIMITER)
                    .map(|value| value.parse::<u8>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .context("parsing the likelihood values")?,
            ),
        };

        let orientation = match parts[4] {
            "+" => Orientation::Forward,
            "-" => Orientation::Reverse,
            value => bail!("invalid orientation: expected `+` or `-`, found `{value}`"),
        };

        Ok(Self {
            name: parts[0].to_string(),
            sequence: parts[1].as_bytes().to_vec(),
            positions: parts[2].to_string(),
            likelihoods,
            orientation,
        })
    }
}

#[cfg(test)]
mod read_tests {
    use super::*;

    #[test]
    fn valid() {
        let read = Read::try_from_line("read0\tCCGTCG\tC+m,1,0;\t10,20\t-").unwrap();

        assert_eq!(read.name, "read0");
        assert_eq!(read.sequence, b"CCGTCG".to_vec());
        assert_eq!(read.positions, "C+m,1,0;");
        assert_eq!(read.likelihoods, Some(vec![10, 20]));
        assert_eq!(read.orientation, Orientation::Reverse);

        let read = Read::try_from_line("read1\tACGT\tC+m,0;\t*\t+").unwrap();
        assert_eq!(read.likelihoods, None);
        assert_eq!(read.orientation, Orientation::Forward);
    }

    #[test]
    fn invalid() {
        let err = Read::try_from_line("read0\tACGT\tC+m,0;\t*").unwrap_err();
        assert_eq!(err.to_string(), "expected 5 columns, found 4 columns");

        let err = Read::try_from_line("read0\tACGT\tC+m,0;\t256\t+").unwrap_err();
        assert_eq!(err.to_string(), "parsing the likelihood values");

        let err = Read::try_from_line("read0\tACGT\tC+m,0;\t*\t.").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid orientation: expected `+` or `-`, found `.`"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Input
////////////////////////////////////////////////////////////////////////////////////////

/// Opens the input file, decompressing it if it ends in `.gz`.
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Ok(Box::new(BufReader::new(GzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Decodes base modification tags from a tab-delimited file of reads.
#[derive(Parser)]
struct Args {
    /// The tab-delimited file of reads (may be gzipped).
    src: PathBuf,

    /// Only report calls with at least this likelihood (0-255).
    #[arg(short, long, default_value_t = 0)]
    min_likelihood: u8,

    /// Treat likelihood values left over after decoding a read as an error.
    #[arg(short, long, default_value_t = false)]
    strict: bool,

    /// Stop at the first malformed read rather than skipping it.
    #[arg(short, long, default_value_t = false)]
    fail_fast: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Gets the symbol for a strand.
fn strand_symbol(strand: Strand) -> char {
    match strand {
        Strand::Positive => '+',
        Strand::Negative => '-',
    }
}

fn run(args: &Args) -> Result<()> {
    let forward = decoder::Builder::default()
        .orientation(Orientation::Forward)
        .strict_likelihoods(args.strict)
        .build();

    let reverse = decoder::Builder::default()
        .orientation(Orientation::Reverse)
        .strict_likelihoods(args.strict)
        .build();

    let reader = open(&args.src)?;
    let mut out = BufWriter::new(std::io::stdout().lock());

    let mut n_reads = 0usize;
    let mut n_calls = 0usize;
    let mut n_skipped = 0usize;

    for (i, result) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = result.with_context(|| format!("reading line {line_no}"))?;

        if line.is_empty() {
            continue;
        }

        let read = match Read::try_from_line(&line) {
            Ok(read) => read,
            Err(err) if !args.fail_fast => {
                error!("line {line_no}: {err:#}");
                n_skipped += 1;
                continue;
            }
            Err(err) => return Err(err.context(format!("parsing line {line_no}"))),
        };

        let decoder: &Decoder = match read.orientation {
            Orientation::Forward => &forward,
            Orientation::Reverse => &reverse,
        };

        let sets = match decoder.decode(
            &read.positions,
            read.likelihoods.as_deref(),
            &read.sequence,
        ) {
            Ok(sets) => sets,
            Err(err) if !args.fail_fast => {
                error!("read `{}`: {err}", read.name);
                n_skipped += 1;
                continue;
            }
            Err(err) => {
                return Err(anyhow::Error::new(err))
                    .with_context(|| format!("decoding read `{}`", read.name));
            }
        };

        debug!("read `{}`: decoded {} set(s)", read.name, sets.len());

        for set in &sets {
            let code = set.code().to_string();

            for (position, likelihood) in set.iter() {
                if likelihood < args.min_likelihood {
                    continue;
                }

                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    read.name,
                    position,
                    set.base(),
                    strand_symbol(set.strand()),
                    code,
                    likelihood,
                    set.label(position).unwrap_or_default()
                )
                .context("writing to standard out")?;

                n_calls += 1;
            }
        }

        n_reads += 1;
    }

    out.flush().context("flushing standard out")?;

    info!("decoded {n_reads} read(s) into {n_calls} call(s)");

    if n_skipped > 0 {
        warn!("skipped {n_skipped} malformed read(s)");
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    run(&args)
}
