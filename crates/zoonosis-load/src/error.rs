use thiserror::Error;
use zoonosis_ingest::IngestError;
use zoonosis_model::ModelError;
use zoonosis_store::StoreError;

/// Failures that abort a load run.
///
/// Row-level problems never surface here; they are counted in the summaries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("batch size must be at least 1")]
    InvalidBatchSize,
}

impl From<rusqlite::Error> for LoadError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(StoreError::from(err))
    }
}

/// Why a single case row was skipped.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("disease type not found: {0}")]
    UnknownDisease(String),
    #[error("region not found: {0}")]
    UnknownRegion(String),
    #[error("province not found: {province} ({region})")]
    UnknownProvince { region: String, province: String },
    #[error("district not found: {district} ({province}, {region})")]
    UnknownDistrict {
        region: String,
        province: String,
        district: String,
    },
    #[error("missing age, age unit or sex")]
    MissingPatientData,
    #[error("invalid age '{0}'")]
    InvalidAge(String),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for SkipReason {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(StoreError::from(err))
    }
}

impl SkipReason {
    /// Missing patient data is expected in the national export and only
    /// counted; everything else is worth a warning.
    pub fn is_reported(&self) -> bool {
        !matches!(self, SkipReason::MissingPatientData)
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
