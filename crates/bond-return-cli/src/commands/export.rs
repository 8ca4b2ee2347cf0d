use clap::Args;
use std::fs::File;

use bond_return_core::export::{self, CSV_HEADER};
use bond_return_core::maturity;

use crate::commands::maturity::{resolve_parameters, ParamArgs};

/// Arguments for exporting a calculation
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Write the calculation as a one-row CSV file (default: bond-calculation.csv)
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "bond-calculation.csv"
    )]
    pub csv: Option<String>,
}

/// Run a calculation and export it.
///
/// With `--csv <path>` the inputs and headline outputs are written as a CSV
/// file. Otherwise the compact clipboard JSON payload is printed to stdout,
/// ready to pipe into a clipboard tool (`bnr export | xclip`).
pub fn run_export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let params = resolve_parameters(&args.params)?;
    let result = maturity::compute_maturity(&params)?.result;

    match args.csv {
        Some(ref path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create '{}': {}", path, e))?;
            let mut wtr = csv::Writer::from_writer(file);
            wtr.write_record(CSV_HEADER)?;
            wtr.write_record(export::csv_row(&params, &result))?;
            wtr.flush()?;
            eprintln!("Wrote {}", path);
        }
        None => {
            println!("{}", export::clipboard_text(&params, &result)?);
        }
    }

    Ok(())
}
