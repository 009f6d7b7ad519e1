/// Everything that can go wrong while building a sampler.
///
/// All of these are raised at construction time. Once a sampler exists,
/// drawing from it cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// The weight column does not exist in one of the records
    #[error("specified weight column ({column}) is out of range for record {record} with {fields} fields")]
    OutOfRangeColumn {
        column: usize,
        record: usize,
        fields: usize,
    },

    /// A weight field that is not a non-negative number once cleaned
    #[error("weight {text:?} in record {record} is not a non-negative number")]
    InvalidWeight { record: usize, text: String },

    #[error("number of records must be greater than zero")]
    EmptyInput,

    #[error("cumulative weight must be greater than zero")]
    NonPositiveTotal,

    /// The weights are each finite but their sum is not
    #[error("cumulative weight overflows a 64-bit float")]
    TotalOverflow,

    /// Malformed delimited text, or a failure reading it
    #[error("failed to read records: {0}")]
    Ingestion(#[from] csv::Error),
}
