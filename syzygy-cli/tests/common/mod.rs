#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Command handle for the syzygy binary
pub fn syzygy_cmd() -> Command {
    Command::cargo_bin("syzygy").unwrap()
}

/// Create a test file with the given content
pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Identity-style nucleotide scoring table: match +2, mismatch -1
pub fn nucleotide_table() -> &'static str {
    "# match +2, mismatch -1\n\
     A C G T\n\
     A 2 -1 -1 -1\n\
     C -1 2 -1 -1\n\
     G -1 -1 2 -1\n\
     T -1 -1 -1 2\n"
}

/// Read the records of a FASTA file back as (header, sequence) pairs
pub fn read_fasta_records(path: &Path) -> Result<Vec<(String, String)>> {
    let contents = fs::read_to_string(path)?;
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in contents.lines() {
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some((header.to_string(), String::new()));
        } else if let Some((_, seq)) = current.as_mut() {
            seq.push_str(line.trim());
        }
    }
    if let Some(record) = current.take() {
        records.push(record);
    }

    Ok(records)
}
