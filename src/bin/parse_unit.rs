/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use std::process;

use fits_units::{parse, ParseOutcome};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// FITS units parser
///
/// Parses FITS/WCS-style units specifications and prints a JSON
/// representation of the result (function tag, scale and exponent
/// vector) for each, one per line.
struct Args {
    /// The unit strings to parse.
    #[clap(required = true)]
    unit: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match args
        .unit
        .iter()
        .map(|s| {
            log::debug!("parsing {s:?}");
            parse(s)
        })
        .collect::<Result<Vec<ParseOutcome>, _>>()
    {
        Ok(outcomes) => {
            for outcome in outcomes {
                println!(
                    "{}",
                    serde_json::to_string(&outcome).expect("serialization failed!?")
                );
            }
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            process::exit(1)
        }
    }
}
