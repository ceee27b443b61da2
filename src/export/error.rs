/// Errors that can occur when exporting spectra as text tables
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Only single spectra and line scans map onto a flat table
    #[error("Tabular export handles a maximum of two axes, got {0}")]
    TooManyDimensions(usize),

    /// I/O error creating the output file
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing delimited records
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}
