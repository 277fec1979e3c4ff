/// Substitution scoring for sequence alignment
use std::collections::HashMap;
use std::path::Path;

use syzygy_core::SyzygyError;

pub trait ScoringMatrix {
    fn score(&self, a: u8, b: u8) -> i32;
}

/// Substitution matrix parsed from a whitespace-delimited text table.
///
/// The table format is a header line of single-character alphabet symbols
/// followed by one line per row symbol: `<symbol> <int> ... <int>`, one
/// integer per header column. Lines starting with `#` and blank lines are
/// skipped. Symbol pairs absent from the table score as the configured
/// default; callers supply the gap penalty there, so an incomplete alphabet
/// degrades scores instead of failing.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    alphabet: Vec<u8>,
    scores: HashMap<(u8, u8), i32>,
    default: i32,
}

impl SubstitutionMatrix {
    pub fn parse(text: &str, default: i32) -> Result<Self, SyzygyError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        let header = lines
            .first()
            .ok_or_else(|| SyzygyError::Parse("scoring table has no header row".to_string()))?;

        let alphabet = header
            .split_whitespace()
            .map(parse_symbol)
            .collect::<Result<Vec<u8>, SyzygyError>>()?;

        let mut scores = HashMap::new();
        for line in &lines[1..] {
            let mut parts = line.split_whitespace();
            let row = match parts.next() {
                Some(token) => parse_symbol(token)?,
                None => continue,
            };

            let values: Vec<&str> = parts.collect();
            if values.len() != alphabet.len() {
                return Err(SyzygyError::Parse(format!(
                    "scoring row '{}' has {} scores, expected {}",
                    row as char,
                    values.len(),
                    alphabet.len()
                )));
            }

            for (&col, value) in alphabet.iter().zip(values) {
                let score = value.parse::<i32>().map_err(|_| {
                    SyzygyError::Parse(format!("invalid score '{}' in scoring table", value))
                })?;
                scores.insert((row, col), score);
            }
        }

        Ok(Self {
            alphabet,
            scores,
            default,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P, default: i32) -> Result<Self, SyzygyError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, default)
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn default_score(&self) -> i32 {
        self.default
    }
}

fn parse_symbol(token: &str) -> Result<u8, SyzygyError> {
    match token.as_bytes() {
        [symbol] => Ok(*symbol),
        _ => Err(SyzygyError::Parse(format!(
            "scoring table symbol '{}' is not a single character",
            token
        ))),
    }
}

impl ScoringMatrix for SubstitutionMatrix {
    fn score(&self, a: u8, b: u8) -> i32 {
        self.scores.get(&(a, b)).copied().unwrap_or(self.default)
    }
}

/// Uniform match/mismatch scoring over any alphabet
pub struct IdentityMatrix {
    match_score: i32,
    mismatch_score: i32,
}

impl IdentityMatrix {
    pub fn new(match_score: i32, mismatch_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
        }
    }
}

impl ScoringMatrix for IdentityMatrix {
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}
