use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failures while opening or validating a tabular source.
///
/// Both variants are fatal during startup validation; after startup they are
/// reported to the user and the session continues.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file is missing or unreadable.
    #[error("source '{source_id}' is unavailable: {source}")]
    SourceUnavailable {
        source_id: String,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the source's header row.
    #[error("source '{source_id}' is missing required column '{column}'")]
    SchemaInvalid { source_id: String, column: String },

    /// The source parsed but held no data rows to read from.
    #[error("source '{source_id}' contains no data rows")]
    Empty { source_id: String },
}

/// Recoverable failures inside an analysis request. The current request is
/// aborted, the interactive session keeps running.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Statistics were requested over zero values.
    #[error("cannot summarize an empty population column")]
    EmptyInput,

    /// A growth percentage was requested against a zero baseline.
    #[error("growth baseline '{baseline}' is zero")]
    DivisionByZero { baseline: String },

    /// The linear fit degenerates without at least two distinct years.
    #[error("linear fit needs at least 2 distinct years, got {distinct}")]
    InsufficientData { distinct: usize },
}
