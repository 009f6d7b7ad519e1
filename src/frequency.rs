//! Counts how often each record comes up over many draws
use crate::rndrec::WeightedSampler;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    pub draws: usize,
    /// Occurrences per key, ordered by key
    pub counts: BTreeMap<String, usize>,
}

impl FrequencyReport {
    pub fn frequency(&self, key: &str) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        *self.counts.get(key).unwrap_or(&0) as f64 / self.draws as f64
    }

    pub fn frequencies(&self) -> Vec<(String, f64)> {
        self.counts
            .keys()
            .map(|key| (key.clone(), self.frequency(key)))
            .collect()
    }
}

impl fmt::Display for FrequencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, frequency) in self.frequencies() {
            writeln!(f, "{}: {:.2}", key, frequency)?;
        }
        Ok(())
    }
}

///
/// Draws `draws` records and tallies them by the field at `key_field`.
///
/// Records without that field are tallied under the empty string.
///
pub fn frequency_report(
    sampler: &mut WeightedSampler,
    draws: usize,
    key_field: usize,
) -> FrequencyReport {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for _ in 0..draws {
        let key = sampler
            .next()
            .get(key_field)
            .map(String::as_str)
            .unwrap_or("");
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    log::debug!("Tallied {} draws into {} keys", draws, counts.len());
    FrequencyReport { draws, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rndrec::WeightColumn;

    #[test]
    fn test_report_rendering() {
        let report = FrequencyReport {
            draws: 4,
            counts: BTreeMap::from([("b".to_string(), 3), ("a".to_string(), 1)]),
        };
        assert_eq!(report.to_string(), "a: 0.25\nb: 0.75\n");
        assert_eq!(report.frequency("missing"), 0.0);
    }

    #[test]
    fn test_missing_key_field() {
        let mut sampler = WeightedSampler::build(
            vec![vec!["x".to_string()]],
            WeightColumn::Uniform,
            1,
        )
        .unwrap();
        let report = frequency_report(&mut sampler, 10, 3);
        assert_eq!(report.counts.get(""), Some(&10));
    }
}
