mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "feegrid",
    version,
    about = "Convert fee schedule PDFs and spreadsheets to adaCode,price CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a fee schedule (PDF, XLS, XLSX or CSV) to two-column CSV
    Convert {
        /// Path to the input file
        input_file: PathBuf,

        /// Output format: table (default), csv or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the CSV to a file instead of printing
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the reconstructed row grid without interpreting it
    Rows {
        /// Path to the input file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input_file,
            output,
            out,
        } => commands::convert::run(input_file, &output, out),
        Commands::Rows { input_file, output } => commands::rows::run(input_file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
