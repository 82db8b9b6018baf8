//! Reading and writing libraries
//!
//! A library on disk is either plain text with one sequence per line or a
//! FASTA/FASTQ file (optionally gzipped). Libraries are always written as
//! plain text.

use anyhow::{Context, Result};
use needletail::parse_fastx_file;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Read sequences from a FASTA/FASTQ file
pub fn read_fastx_library<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("Failed to open sequence file: {}", path.display()))?;

    let mut sequences = Vec::new();
    while let Some(record) = reader.next() {
        let record = record
            .with_context(|| format!("Failed to parse sequence record in {}", path.display()))?;
        let seq = std::str::from_utf8(&record.seq())
            .with_context(|| format!("Non UTF-8 sequence in {}", path.display()))?
            .to_uppercase();
        sequences.push(seq);
    }
    Ok(sequences)
}

/// Read sequences from a plain text file, one per line
///
/// Lines are trimmed and uppercased; blank lines are skipped.
pub fn read_plain_library<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open library file: {}", path.display()))?;

    let mut sequences = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let seq = line.trim().to_uppercase();
        if !seq.is_empty() {
            sequences.push(seq);
        }
    }
    Ok(sequences)
}

/// Read a library, detecting FASTA/FASTQ and falling back to plain text
pub fn read_library<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let sequences = match read_fastx_library(path) {
        Ok(seqs) => seqs,
        Err(err) => {
            debug!("Not FASTA/FASTQ ({:#}), reading as plain text", err);
            read_plain_library(path)?
        }
    };
    info!("Loaded {} sequences from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Write a library to any writer, one sequence per line
pub fn write_library_to<W: Write, S: AsRef<str>>(library: &[S], writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for seq in library {
        writeln!(writer, "{}", seq.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a library to `path`, one sequence per line
pub fn write_library<P: AsRef<Path>, S: AsRef<str>>(library: &[S], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create library file: {}", path.display()))?;
    write_library_to(library, file)?;
    info!("Wrote {} sequences to {}", library.len(), path.display());
    Ok(())
}
