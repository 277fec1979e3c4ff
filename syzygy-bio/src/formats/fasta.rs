use crate::sequence::Sequence;
use flate2::read::GzDecoder;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending, space1},
    combinator::{map, opt},
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use syzygy_core::SyzygyError;

/// Parse a FASTA header line
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        |s| std::str::from_utf8(s).unwrap_or(""),
    )(input)?;
    let (input, description) = opt(preceded(
        space1,
        map(not_line_ending, |s| std::str::from_utf8(s).unwrap_or("")),
    ))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description)))
}

/// Collect sequence bytes until the next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;

        // Symbols are stored verbatim; only whitespace is dropped
        for &c in line {
            if !c.is_ascii_whitespace() {
                sequence.push(c);
            }
        }

        let mut rest = rest;
        while rest.first().map_or(false, |&c| c == b'\n' || c == b'\r') {
            rest = &rest[1..];
        }
        remaining = rest;
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], Sequence> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;

    let mut seq = Sequence::new(id.to_string(), sequence);
    if let Some(desc) = description {
        seq = seq.with_description(desc.trim_end().to_string());
    }

    Ok((input, seq))
}

/// Parse FASTA records from an in-memory buffer
pub fn parse_fasta_bytes(data: &[u8]) -> Result<Vec<Sequence>, SyzygyError> {
    let mut sequences = Vec::new();

    // Anything before the first header is ignored
    let mut remaining: &[u8] = match data.iter().position(|&c| c == b'>') {
        Some(pos) => &data[pos..],
        None => &[],
    };

    while !remaining.is_empty() {
        match parse_record(remaining) {
            Ok((rest, seq)) => {
                sequences.push(seq);
                remaining = rest;
            }
            Err(e) => {
                return Err(SyzygyError::Parse(format!("malformed FASTA record: {}", e)));
            }
        }
    }

    Ok(sequences)
}

/// Read FASTA records from a plain or gzip-compressed file
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, SyzygyError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut data = Vec::new();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        GzDecoder::new(file).read_to_end(&mut data)?;
    } else {
        let mut file = file;
        file.read_to_end(&mut data)?;
    }

    parse_fasta_bytes(&data)
}

/// Write sequences to a plain or gzip-compressed FASTA file
pub fn write_fasta<P: AsRef<Path>>(
    path: P,
    sequences: &[Sequence],
    line_width: usize,
) -> Result<(), SyzygyError> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    let file = File::create(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let mut writer = BufWriter::new(GzEncoder::new(file, Compression::default()));
        write_fasta_to_writer(&mut writer, sequences, line_width)?;
        writer.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        write_fasta_to_writer(&mut writer, sequences, line_width)?;
        writer.flush()?;
    }

    Ok(())
}

/// Write sequences to any writer, wrapping sequence lines at `line_width`
fn write_fasta_to_writer<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    line_width: usize,
) -> Result<(), SyzygyError> {
    let width = line_width.max(1);

    for seq in sequences {
        writer.write_all(seq.header().as_bytes())?;
        writer.write_all(b"\n")?;
        for chunk in seq.sequence.chunks(width) {
            writer.write_all(chunk)?;
            writer.write_all(b"\n")?;
        }
    }

    Ok(())
}
