//! Decodes a single read's modification tags and prints the calls as a table.
//!
//! ```
//! cargo run --example decode_table <SEQUENCE> <MM> [ML|*] [+|-]
//! ```
//!
//! The likelihood values are given as comma-delimited bytes (e.g.,
//! `200,10,255`). When they are omitted (or given as `*`), every call has a
//! likelihood of 255.
//! If no sequence is given, a small built-in read (with its own likelihood
//! values) is used.

use std::env;

use modtags::decoder::Builder as DecoderBuilder;
use modtags::scan::Orientation;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

/// Parses comma-delimited likelihood bytes.
fn parse_likelihoods(s: &str) -> Vec<u8> {
    s.split(',')
        .map(|value| {
            value
                .parse::<u8>()
                .unwrap_or_else(|_| panic!("could not parse likelihood: {value}"))
        })
        .collect()
}

/// The inputs decoded by this program.
#[derive(Debug, Eq, PartialEq)]
struct Inputs {
    /// The read sequence.
    sequence: String,

    /// The positions tag.
    positions: String,

    /// The likelihood values, if any.
    likelihoods: Option<Vec<u8>>,

    /// The orientation of the read.
    orientation: Orientation,
}

impl Inputs {
    /// Gets the inputs from the command line arguments (without the program
    /// name).
    fn from_args(args: &[String]) -> Self {
        let orientation = match args.get(3).map(String::as_str) {
            Some("-") => Orientation::Reverse,
            _ => Orientation::Forward,
        };

        match args.first() {
            Some(sequence) => Self {
                sequence: sequence.clone(),
                positions: args.get(1).cloned().expect("missing positions tag"),
                likelihoods: args
                    .get(2)
                    .filter(|s| s.as_str() != "*")
                    .map(|s| parse_likelihoods(s)),
                orientation,
            },
            None => Self {
                sequence: String::from("CCGTCGACCG"),
                positions: String::from("C+mh.,1,0;A+a;"),
                likelihoods: Some(vec![230, 12, 180, 40]),
                orientation,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let Inputs {
        sequence,
        positions,
        likelihoods,
        orientation,
    } = Inputs::from_args(&args);

    let decoder = DecoderBuilder::default().orientation(orientation).build();
    let sets = decoder.decode(&positions, likelihoods.as_deref(), sequence.as_bytes())?;

    let mut builder = Builder::default();
    builder.push_record(["Position", "Base", "Code", "Likelihood", "Label"]);

    for set in &sets {
        let code = set.code().to_string();

        for (position, likelihood) in set.iter() {
            builder.push_record([
                position.to_string(),
                set.base().to_string(),
                code.clone(),
                likelihood.to_string(),
                set.label(position).unwrap_or_default(),
            ]);
        }
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    Ok(())
}
