use super::error::SamplerError;
use super::sampler::{Record, WeightColumn, WeightedSampler};
use std::io::Read;
use std::path::Path;

fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Every line is a record, and all must have the same number of fields
    builder
        .has_headers(false)
        .flexible(false)
        .delimiter(delimiter);
    builder
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Record>, SamplerError> {
    reader
        .records()
        .map(|row| {
            row.map(|row| row.iter().map(str::to_string).collect::<Record>())
                .map_err(SamplerError::from)
        })
        .collect()
}

/// Reads delimited text, one record per line, into records
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>, SamplerError> {
    collect_records(reader_builder(delimiter).from_reader(reader))
}

/// Reads a delimited file, one record per line, into records
pub fn read_records_from_path<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Vec<Record>, SamplerError> {
    collect_records(reader_builder(delimiter).from_path(path)?)
}

impl WeightedSampler {
    ///
    /// Builds a sampler from delimited text such as `Asia|4,157,300,000`.
    ///
    /// Malformed text (bad quoting, rows of differing width) fails the whole
    /// build. See [`WeightedSampler::build`] for everything else.
    ///
    pub fn from_reader<R: Read>(
        reader: R,
        column: WeightColumn,
        delimiter: u8,
        seed: u64,
    ) -> Result<WeightedSampler, SamplerError> {
        WeightedSampler::build(read_records(reader, delimiter)?, column, seed)
    }

    pub fn from_path<P: AsRef<Path>>(
        path: P,
        column: WeightColumn,
        delimiter: u8,
        seed: u64,
    ) -> Result<WeightedSampler, SamplerError> {
        let path = path.as_ref();
        log::debug!("Loading records from {}", path.display());
        WeightedSampler::build(read_records_from_path(path, delimiter)?, column, seed)
    }
}
