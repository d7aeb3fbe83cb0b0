use crate::error::{Result, SeqError};
use crate::hamming::hamming_distance_with_pad;
use crate::translate::translate_dna;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Borrows a string column, reporting absence as `MissingColumn`.
fn str_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .map_err(|_| SeqError::missing_column(name))?
        .str()
        .map_err(|e| SeqError::DataError(e.to_string()))
}

/// Reads sequences from a FASTA format file and converts them into a Polars DataFrame.
///
/// # Arguments
/// * `filename` - Path to the FASTA file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with two columns:
///   - "label": The sequence identifiers (without '>' prefix)
///   - "sequence": The corresponding DNA sequences in uppercase
///
/// # Errors
/// * Returns `SeqError::InvalidFileFormat` if no sequences are found
/// * Returns `SeqError::DataError` if DataFrame creation fails
/// * Returns `SeqError::Io` for file reading issues
pub fn read_fasta(filename: &str) -> Result<DataFrame> {
    let mut records: Vec<(String, String)> = Vec::new();
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    // None until the first '>' line; an empty label is still a record
    let mut current_header: Option<String> = None;
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            if let Some(label) = current_header.replace(header.to_string()) {
                records.push((label, current_sequence.to_uppercase()));
                current_sequence.clear();
            }
        } else if !line.is_empty() {
            current_sequence.push_str(line);
        }
    }

    if let Some(label) = current_header {
        records.push((label, current_sequence.to_uppercase()));
    }

    if records.is_empty() {
        return Err(SeqError::InvalidFileFormat("No sequences found".into()));
    }

    let (labels, sequences): (Vec<String>, Vec<String>) = records.into_iter().unzip();
    let df = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|_| SeqError::DataError("Failed to create DataFrame".into()))?;

    Ok(df)
}

/// Writes sequences from a Polars DataFrame to a FASTA format file.
///
/// # Arguments
/// * `df` - DataFrame containing sequences with "label" and "sequence" columns
/// * `filename` - Path where the FASTA file should be written
///
/// # Errors
/// * Returns `SeqError::MissingColumn` if required columns are missing
/// * Returns `SeqError::Io` for file writing issues
pub fn write_fasta(df: &DataFrame, filename: &str) -> Result<()> {
    let labels = str_column(df, "label")?;
    let sequences = str_column(df, "sequence")?;

    let mut file = File::create(filename)?;

    for (label, sequence) in labels.into_iter().zip(sequences.into_iter()) {
        writeln!(file, ">{}", label.unwrap_or_default())?;
        writeln!(file, "{}", sequence.unwrap_or_default())?;
    }

    Ok(())
}

/// Translates every sequence in the input DataFrame.
///
/// Rows are translated independently; a failing row does not stop the batch.
///
/// # Arguments
/// * `df` - DataFrame containing sequences with "label" and "sequence" columns
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with:
///   - Original labels
///   - "protein": The translated sequence, null where translation failed
///   - "error": The failure message, null where translation succeeded
///
/// # Errors
/// * Returns `SeqError::MissingColumn` if required columns are missing
/// * Returns `SeqError::DataError` if DataFrame creation fails
pub fn translate_sequences(df: &DataFrame) -> Result<DataFrame> {
    let sequences = str_column(df, "sequence")?;

    let (proteins, errors): (Vec<Option<String>>, Vec<Option<String>>) = sequences
        .into_iter()
        .map(|seq| match seq.map(translate_dna) {
            Some(Ok(protein)) => (Some(protein.into_string()), None),
            Some(Err(e)) => (None, Some(e.to_string())),
            None => (None, Some("missing sequence".to_string())),
        })
        .unzip();

    let labels = df
        .column("label")
        .map_err(|_| SeqError::missing_column("label"))?;

    let new_df = DataFrame::new(vec![
        labels.clone(),
        Column::new("protein".into(), proteins),
        Column::new("error".into(), errors),
    ])
    .map_err(|e| SeqError::DataError(e.to_string()))?;

    Ok(new_df)
}

/// Computes the padded Hamming distance between every unordered pair of sequences.
///
/// # Arguments
/// * `df` - DataFrame containing sequences with "label" and "sequence" columns
/// * `pad` - Character used to right-pad the shorter sequence of each pair
///
/// # Returns
/// * `Result<DataFrame>` - One row per pair `(i, j)` with `i < j`:
///   - "label_a", "label_b": The labels of the pair
///   - "distance": Number of mismatching positions
///
/// # Errors
/// * Returns `SeqError::MissingColumn` if required columns are missing
/// * Returns `SeqError::DataError` if DataFrame creation fails
pub fn pairwise_hamming(df: &DataFrame, pad: char) -> Result<DataFrame> {
    let labels: Vec<&str> = str_column(df, "label")?
        .into_iter()
        .map(|l| l.unwrap_or_default())
        .collect();
    let sequences: Vec<&str> = str_column(df, "sequence")?
        .into_iter()
        .map(|s| s.unwrap_or_default())
        .collect();

    let mut labels_a: Vec<&str> = Vec::new();
    let mut labels_b: Vec<&str> = Vec::new();
    let mut distances: Vec<u64> = Vec::new();

    for i in 0..sequences.len() {
        for j in (i + 1)..sequences.len() {
            labels_a.push(labels[i]);
            labels_b.push(labels[j]);
            distances.push(hamming_distance_with_pad(sequences[i], sequences[j], pad) as u64);
        }
    }

    let new_df = DataFrame::new(vec![
        Column::new("label_a".into(), labels_a),
        Column::new("label_b".into(), labels_b),
        Column::new("distance".into(), distances),
    ])
    .map_err(|e| SeqError::DataError(e.to_string()))?;

    Ok(new_df)
}
