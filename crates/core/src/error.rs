use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VerveError {
    #[error(
        "failed to read knowledge table (path: {path}): {source}",
        path = path.display()
    )]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse knowledge table: {0}")]
    TableParse(csv::Error),
    #[error("knowledge table is missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("knowledge table row {line} has an empty nutrient name")]
    BlankNutrient { line: u64 },
    #[error("knowledge table lists nutrient more than once: {0}")]
    DuplicateNutrient(String),

    #[error("at least one symptom must be selected")]
    InsufficientInput,
    #[error("unknown life stage: {0}")]
    UnknownLifeStage(String),
}

impl VerveError {
    /// Whether this error came from loading the knowledge table.
    ///
    /// Load failures are fatal at startup; the other variants are caller errors.
    pub fn is_data_load(&self) -> bool {
        matches!(
            self,
            VerveError::TableRead { .. }
                | VerveError::TableParse(_)
                | VerveError::MissingColumn(_)
                | VerveError::BlankNutrient { .. }
                | VerveError::DuplicateNutrient(_)
        )
    }
}

pub type VerveResult<T> = std::result::Result<T, VerveError>;
