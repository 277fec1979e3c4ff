use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use syzygy_bio::alignment::{AlignmentMode, PairwiseAligner, SubstitutionMatrix};
use syzygy_bio::formats::{parse_fasta, write_fasta};
use syzygy_bio::sequence::Sequence;
use syzygy_core::{load_config, Config, SyzygyError};

#[derive(Args)]
pub struct AlignArgs {
    /// Input FASTA file holding the two sequences to align
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Substitution-scoring table (whitespace-delimited text)
    #[arg(short = 's', long = "scores", value_name = "FILE")]
    pub scores: PathBuf,

    /// Output FASTA file for the aligned sequences
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Alignment mode: global or local (overrides the config default)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Linear gap penalty (overrides the config default)
    #[arg(short, long, value_name = "INT", allow_hyphen_values = true)]
    pub gap: Option<i32>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: AlignArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let mode: AlignmentMode = args
        .mode
        .as_deref()
        .unwrap_or(&config.alignment.mode)
        .parse()?;
    let gap = args.gap.unwrap_or(config.alignment.gap_penalty);

    let records = parse_fasta(&args.input)?;
    if records.len() < 2 {
        return Err(SyzygyError::InvalidInput(format!(
            "expected two sequences in {}, found {}",
            args.input.display(),
            records.len()
        ))
        .into());
    }
    if records.len() > 2 {
        warn!(
            "{} holds {} sequences, aligning the first two only",
            args.input.display(),
            records.len()
        );
    }

    let seq1 = &records[0];
    let seq2 = &records[1];
    info!(
        "aligning {} against {} ({} mode, gap {})",
        seq1.id, seq2.id, mode, gap
    );

    // Symbol pairs outside the table alphabet score as the gap penalty
    let scoring = SubstitutionMatrix::from_path(&args.scores, gap)?;
    let aligner =
        PairwiseAligner::new(scoring, gap).with_min_separation(config.alignment.min_separation);

    let pairs: Vec<(Vec<u8>, Vec<u8>)> = match mode {
        AlignmentMode::Global => {
            let result = aligner.global(&seq1.sequence, &seq2.sequence);
            info!("global alignment score: {}", result.score);
            vec![(result.seq1_aligned, result.seq2_aligned)]
        }
        AlignmentMode::Local => {
            let hits = aligner.local(&seq1.sequence, &seq2.sequence);
            if hits.is_empty() {
                info!("no positive-scoring local alignment, writing empty output");
            }
            hits.into_iter()
                .map(|hit| (hit.seq1_aligned, hit.seq2_aligned))
                .collect()
        }
    };

    let mut aligned = Vec::with_capacity(pairs.len() * 2);
    for (seq1_aligned, seq2_aligned) in pairs {
        aligned.push(Sequence::new(seq1.id.clone(), seq1_aligned));
        aligned.push(Sequence::new(seq2.id.clone(), seq2_aligned));
    }

    write_fasta(&args.output, &aligned, config.output.line_width)?;

    Ok(())
}
