use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Stops the whole file; there is no point analyzing degenerate input.
    #[error("line {line_number} is {length} characters long, the limit is {limit}")]
    LineTooLong {
        line_number: u64,
        length: usize,
        limit: usize,
    },

    #[error("failed to read line {line_number}: {source}")]
    Read {
        line_number: u64,
        #[source]
        source: std::io::Error,
    },
}
