//! Weighted random selection of records.
//!
//! Given records that each carry a relative weight, a [`WeightedSampler`]
//! hands them back one at a time so that, over many draws, each record turns
//! up in proportion to its weight. Handy for making plausible test data, such
//! as names drawn by census frequency or regions drawn by population.
pub mod error;
pub mod ingest;
pub mod sampler;
pub mod weight;

pub use error::SamplerError;
pub use ingest::{read_records, read_records_from_path};
pub use sampler::{Record, WeightColumn, WeightEntry, WeightedSampler};

/// Converts a single character field separator to the byte the reader wants
pub fn delimiter_byte(delimiter: char) -> Result<u8, String> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(format!("delimiter {:?} must be a single ASCII character", delimiter))
    }
}
