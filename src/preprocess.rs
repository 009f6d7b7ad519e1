//! Converts US census name frequency tables into weighted records.
//!
//! The census files (`dist.all.last`, `dist.female.first`, `dist.male.first`)
//! have lines such as `JAMES          3.318  3.318      1`: the name, its
//! frequency as a percentage, the cumulative frequency and the rank. These are
//! turned into `James|3.318` rows that a sampler can read with `|` as the
//! delimiter and column 1 as the weight.
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Names this rare or rarer are left out
pub const DEFAULT_THRESHOLD: f64 = 0.002;

#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CensusEntry {
    pub name: String,
    pub frequency: f64,
    pub cumulative: f64,
    pub rank: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub written: usize,
    pub below_threshold: usize,
    pub unmatched: usize,
}

/// Name spellings keyed by upper case name without apostrophes
pub type Corrections = HashMap<String, String>;

/// `digits.digits`
fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && !fraction.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Parses one census line, or returns None if it isn't shaped like one
///
/// Surrounding whitespace is ignored, so padded lines still parse.
pub fn parse_line(line: &str) -> Option<CensusEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [name, frequency, cumulative, rank] = parts.as_slice() else {
        return None;
    };
    if !is_decimal(frequency) || !is_decimal(cumulative) {
        return None;
    }
    if rank.is_empty() || !rank.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(CensusEntry {
        name: name.to_string(),
        frequency: frequency.parse().ok()?,
        cumulative: cumulative.parse().ok()?,
        rank: rank.parse().ok()?,
    })
}

fn correction_key(name: &str) -> String {
    name.replace('\'', "").to_uppercase()
}

/// Reads a list of correctly punctuated names, one per line (e.g. `O'Brien`)
pub fn load_corrections<R: BufRead>(reader: R) -> Result<Corrections, CensusError> {
    let mut corrections = Corrections::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        corrections.insert(correction_key(name), name.to_string());
    }
    debug!("Loaded {} name corrections", corrections.len());
    Ok(corrections)
}

pub fn load_corrections_from_path<P: AsRef<Path>>(path: P) -> Result<Corrections, CensusError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CensusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_corrections(BufReader::new(file))
}

///
/// Puts a census name (all upper case) into its usual form.
///
/// Names in the corrections list are used as spelled there; anything else
/// keeps its first letter and has the rest lower cased.
///
pub fn normalize_name(name: &str, corrections: &Corrections) -> String {
    if let Some(corrected) = corrections.get(name) {
        return corrected.clone();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

///
/// Converts a census table into `name|frequency` rows.
///
/// Lines that don't look like census entries are logged and skipped, as are
/// entries whose frequency doesn't exceed `threshold`.
///
pub fn convert<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    corrections: &Corrections,
    threshold: f64,
) -> Result<ConvertStats, CensusError> {
    let mut stats = ConvertStats::default();
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(entry) if entry.frequency > threshold => {
                writeln!(
                    output,
                    "{}|{:.3}",
                    normalize_name(&entry.name, corrections),
                    entry.frequency
                )?;
                stats.written += 1;
            }
            Some(_) => stats.below_threshold += 1,
            None => {
                warn!("Match error: [{}]", line);
                stats.unmatched += 1;
            }
        }
    }
    output.flush()?;
    Ok(stats)
}

pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    corrections: &Corrections,
    threshold: f64,
) -> Result<ConvertStats, CensusError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();
    let input = File::open(input_path).map_err(|source| CensusError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| CensusError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    let stats = convert(
        BufReader::new(input),
        BufWriter::new(output),
        corrections,
        threshold,
    )?;
    debug!(
        "{} -> {}: {:?}",
        input_path.display(),
        output_path.display(),
        stats
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrections() -> Corrections {
        load_corrections("O'Brien\nD'Angelo\n\nMcDonald\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("JAMES          3.318  3.318      1"),
            Some(CensusEntry {
                name: "JAMES".to_string(),
                frequency: 3.318,
                cumulative: 3.318,
                rank: 1,
            })
        );
    }

    #[test]
    fn test_parse_line_ignores_padding() {
        let entry = parse_line("  MARY   2.629  2.629      1  \r").unwrap();
        assert_eq!(entry.name, "MARY");
        assert_eq!(entry.rank, 1);
    }

    #[test]
    fn test_parse_line_rejects_bad_shapes() {
        for line in [
            "",
            "JAMES 3.318 3.318",
            "JAMES 3 3.318 1",
            "JAMES 3.318 3.318 1 extra",
            "JAMES 3.318 3.318 1a",
            "JAMES .318 3.318 1",
        ] {
            assert_eq!(parse_line(line), None, "Line {:?} should not parse", line);
        }
    }

    #[test]
    fn test_corrections_keys() {
        let corrections = corrections();
        assert_eq!(corrections.len(), 3);
        assert_eq!(corrections.get("OBRIEN"), Some(&"O'Brien".to_string()));
        assert_eq!(corrections.get("MCDONALD"), Some(&"McDonald".to_string()));
    }

    #[test]
    fn test_normalize_name() {
        let corrections = corrections();
        assert_eq!(normalize_name("JAMES", &corrections), "James");
        assert_eq!(normalize_name("OBRIEN", &corrections), "O'Brien");
        assert_eq!(normalize_name("MCDONALD", &corrections), "McDonald");
        assert_eq!(normalize_name("X", &corrections), "X");
        assert_eq!(normalize_name("", &corrections), "");
    }

    #[test]
    fn test_convert() {
        let input = "SMITH          1.006  1.006      1\n\
                     OBRIEN         0.010  1.016      2\n\
                     RARE           0.002  1.018      3\n\
                     garbage line\n\
                     JONES          0.621  1.639      4\n";
        let mut output = Vec::new();
        let stats = convert(input.as_bytes(), &mut output, &corrections(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(
            stats,
            ConvertStats {
                written: 3,
                below_threshold: 1,
                unmatched: 1,
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Smith|1.006\nO'Brien|0.010\nJones|0.621\n"
        );
    }
}
