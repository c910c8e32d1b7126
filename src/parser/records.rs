//! Whitespace-delimited tree records and labeled output lines

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::tree::TreeRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed labeled node '{token}' on line {line}")]
    MalformedLabel { line: usize, token: String },
}

/// Parse records from text: the first token of each line is the node, the
/// remaining tokens are its children. Blank lines are skipped.
pub fn parse_records(input: &str) -> Vec<TreeRecord> {
    input.lines().filter_map(parse_line).collect()
}

/// Read records line by line from any buffered reader
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TreeRecord>, ParseError> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Read records from a file
pub fn read_records_from_path(path: &Path) -> Result<Vec<TreeRecord>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    read_records(BufReader::new(file))
}

fn parse_line(line: &str) -> Option<TreeRecord> {
    let mut tokens = line.split_whitespace();
    let node = tokens.next()?;
    Some(TreeRecord::new(node, tokens))
}

/// Read labels back out of rendered output (`name(label) child(label) ...`).
///
/// Returns each record's leading node with its label, in line order.
pub fn parse_labeled(input: &str) -> Result<Vec<(String, u32)>, ParseError> {
    let mut labels = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let Some(first) = line.split_whitespace().next() else {
            continue;
        };
        labels.push(parse_labeled_token(first, number + 1)?);
    }
    Ok(labels)
}

fn parse_labeled_token(token: &str, line: usize) -> Result<(String, u32), ParseError> {
    let malformed = || ParseError::MalformedLabel {
        line,
        token: token.to_string(),
    };

    let body = token.strip_suffix(')').ok_or_else(malformed)?;
    let (name, label) = body.rsplit_once('(').ok_or_else(malformed)?;
    if name.is_empty() {
        return Err(malformed());
    }
    let label = label.parse::<u32>().map_err(|_| malformed())?;
    Ok((name.to_string(), label))
}
