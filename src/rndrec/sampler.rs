use super::error::SamplerError;
use super::weight::parse_weight;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A record is an ordered list of string fields
pub type Record = Vec<String>;

/// Which field of each record holds its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightColumn {
    /// Every record has a weight of 1 and needs no weight field
    Uniform,
    /// The weight is the field at this position
    Index(usize),
}

impl From<Option<usize>> for WeightColumn {
    fn from(column: Option<usize>) -> Self {
        match column {
            None => WeightColumn::Uniform,
            Some(index) => WeightColumn::Index(index),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeightEntry {
    /// Weight of this record plus every record before it
    pub cumulative: f64,
    pub record: Record,
}

///
/// Draws records at random, each with a probability proportional to its weight.
///
/// A record with a weight of 40 will be returned, on average, four times as
/// often as a record with a weight of 10. The weights don't have to sum to
/// anything in particular.
///
/// Records handed out are borrows of the sampler's own storage. Drawing mutates
/// the random stream, so a sampler shared between threads needs a lock around
/// it (or one sampler per thread).
///
pub struct WeightedSampler {
    /// Non-decreasing in `cumulative`
    entries: Vec<WeightEntry>,
    total: f64,
    rng: StdRng,
}

impl WeightedSampler {
    ///
    /// Builds a sampler from `records`, reading weights from `column`.
    ///
    /// Fails if there are no records, if the weight column is missing from any
    /// record, if any weight isn't a non-negative number, or if the weights sum
    /// to zero (or to more than an `f64` holds). Nothing is skipped: one bad record fails the lot.
    ///
    /// The same `seed` always produces the same sequence of draws.
    ///
    pub fn build(
        records: Vec<Record>,
        column: WeightColumn,
        seed: u64,
    ) -> Result<WeightedSampler, SamplerError> {
        if records.is_empty() {
            return Err(SamplerError::EmptyInput);
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut total = 0.0;
        let mut zero_weights = 0;
        for (index, record) in records.into_iter().enumerate() {
            let weight = match column {
                WeightColumn::Uniform => 1.0,
                WeightColumn::Index(column) => match record.get(column) {
                    Some(text) => parse_weight(text, index)?,
                    None => {
                        return Err(SamplerError::OutOfRangeColumn {
                            column,
                            record: index,
                            fields: record.len(),
                        })
                    }
                },
            };
            if weight == 0.0 {
                zero_weights += 1;
            }
            total += weight;
            entries.push(WeightEntry {
                cumulative: total,
                record,
            });
        }

        if total <= 0.0 {
            return Err(SamplerError::NonPositiveTotal);
        }
        if !total.is_finite() {
            return Err(SamplerError::TotalOverflow);
        }

        debug!(
            "Built sampler with {} records ({} with zero weight), total weight {}",
            entries.len(),
            zero_weights,
            total
        );

        Ok(WeightedSampler {
            entries,
            total,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    ///
    /// Finds the record whose bucket `[previous cumulative, cumulative)` holds
    /// `target`, i.e. the first entry whose cumulative weight is strictly
    /// greater than it. Zero-weight records have an empty bucket, so they are
    /// always stepped over.
    ///
    /// `target` must lie in `[0, total)`.
    ///
    pub fn bucket_for(&self, target: f64) -> usize {
        self.entries
            .partition_point(|entry| entry.cumulative <= target)
    }

    fn draw<R: Rng + ?Sized>(entries: &[WeightEntry], total: f64, rng: &mut R) -> usize {
        let target = rng.gen_range(0.0..total);
        let index = entries.partition_point(|entry| entry.cumulative <= target);
        trace!("Drew {} -> record {}", target, index);
        index
    }

    /// Picks the index of a record using the supplied random number generator
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        Self::draw(&self.entries, self.total, rng)
    }

    /// Returns a random record based on its relative weight
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &[String] {
        let index = Self::draw(&self.entries, self.total, &mut self.rng);
        &self.entries[index].record
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a sampler can't be built without records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn record(&self, index: usize) -> Option<&[String]> {
        self.entries.get(index).map(|entry| entry.record.as_slice())
    }
}

impl fmt::Display for WeightedSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cumulative weight maximum: {:.2}", self.total)?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(
                f,
                "{:2}: [{:10.2}] {:?}",
                index, entry.cumulative, entry.record
            )?;
        }
        Ok(())
    }
}
