use clap::{Parser, Subcommand};
use dna_protein_rs::fasta::{read_fasta, translate_sequences};
use dna_protein_rs::{hamming_distance_with_pad, translate_dna, SeqError, DEFAULT_PAD_CHAR};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("{0}")]
    Sequence(#[from] SeqError),
}

#[derive(Parser, Debug)]
#[command(
    name = "seq-cli",
    about = "Translates DNA sequences into protein and compares strings by padded Hamming distance",
    long_about = "Translates DNA into protein with the standard genetic code. Every codon is \
                  translated, stop codons included as '*'. Hamming distance is case-insensitive \
                  and right-pads the shorter string with a pad character.",
    version,
    after_help = "Example usage:\n    \
                  seq-cli translate ATGTAAATG\n    \
                  seq-cli hamming 'Aysenur Akcan' aysenura --pad _\n    \
                  seq-cli translate-fasta genes.fasta out/proteins.csv",
    color = clap::ColorChoice::Always
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a single DNA sequence
    Translate {
        /// DNA sequence, any case; length must be a multiple of 3
        #[arg(value_name = "SEQUENCE")]
        sequence: String,
    },

    /// Padded Hamming distance between two strings
    Hamming {
        #[arg(value_name = "A")]
        a: String,

        #[arg(value_name = "B")]
        b: String,

        /// Character appended to the shorter string
        #[arg(long, default_value_t = DEFAULT_PAD_CHAR)]
        pad: char,
    },

    /// Translate every record of a FASTA file into a CSV table
    TranslateFasta {
        /// Path to input FASTA file
        #[arg(value_name = "FASTA_FILE")]
        fasta_file: String,

        /// Path for output CSV file
        /// Will create output directory if it doesn't exist
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: String,
    },
}

/// Rows translated between progress reports.
const PROGRESS_INTERVAL: usize = 5000;

/// Translates `df` in slices of `batch_size` rows, calling `on_progress` with
/// `(rows done, total rows)` after each slice.
fn translate_in_batches(
    df: &DataFrame,
    batch_size: usize,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<DataFrame, CliError> {
    let total = df.height();
    let mut results_df = translate_sequences(&df.slice(0, batch_size.min(total)))?;
    let mut done = results_df.height();
    on_progress(done, total);

    while done < total {
        let batch = df.slice(done as i64, batch_size);
        results_df.vstack_mut(&translate_sequences(&batch)?)?;
        done += batch.height();
        on_progress(done, total);
    }

    Ok(results_df)
}

fn translate_fasta(fasta_file: &str, output_file: &str) -> Result<(), CliError> {
    let start_time = std::time::Instant::now();

    if let Some(parent) = Path::new(output_file).parent() {
        fs::create_dir_all(parent)?;
    }

    let df = read_fasta(fasta_file)?;
    println!("{} sequences to translate", df.height());

    let mut results_df = translate_in_batches(&df, PROGRESS_INTERVAL, |done, total| {
        println!("\t{} / {} sequences translated", done, total);
    })?;

    // error is null exactly where translation succeeded
    let failed = results_df.height() - results_df.column("error")?.null_count();
    if failed > 0 {
        println!("{} sequences failed to translate", failed);
    }

    let mut file = File::create(output_file)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut results_df)?;

    let elapsed = start_time.elapsed();
    println!(
        "Total execution time: {:.4} minutes",
        elapsed.as_secs_f64() / 60.0
    );

    Ok(())
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    match args.command {
        Command::Translate { sequence } => match translate_dna(&sequence) {
            Ok(protein) => println!("Protein sequence: {}", protein),
            Err(e) => println!("Error: {}", e),
        },
        Command::Hamming { a, b, pad } => {
            println!("Hamming distance: {}", hamming_distance_with_pad(&a, &b, pad));
        }
        Command::TranslateFasta {
            fasta_file,
            output_file,
        } => translate_fasta(&fasta_file, &output_file)?,
    }

    Ok(())
}
