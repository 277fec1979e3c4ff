pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "syzygy",
    version,
    about = "Pairwise alignment of biological sequences",
    long_about = "Syzygy computes optimal global (Needleman-Wunsch) and local \
                  (Smith-Waterman) alignments between two sequences under a \
                  configurable substitution-scoring table and linear gap penalty."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align the first two sequences of a FASTA file
    Align(commands::align::AlignArgs),
}
