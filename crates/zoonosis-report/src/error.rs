use serde::Serialize;
use thiserror::Error;
use zoonosis_store::StoreError;

/// A malformed request. Returned before any query runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{error}")]
pub struct ClientError {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

impl ClientError {
    pub fn missing(params: Vec<&'static str>) -> Self {
        Self {
            error: format!("missing required parameters: {}", params.join(", ")),
            missing: params,
        }
    }

    pub fn invalid(param: &str, value: &str) -> Self {
        Self {
            error: format!("invalid value for {param}: '{value}'"),
            missing: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ReportError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => Self::NotFound { entity, key },
            other => Self::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_are_listed() {
        let err = ClientError::missing(vec!["disease_id", "year_end"]);
        assert_eq!(err.to_string(), "missing required parameters: disease_id, year_end");
        assert_eq!(err.missing, vec!["disease_id", "year_end"]);
    }

    #[test]
    fn store_not_found_keeps_its_entity() {
        let err = ReportError::from(StoreError::not_found("disease type", 4));
        assert_eq!(err.to_string(), "disease type not found: 4");
        assert!(matches!(err, ReportError::NotFound { .. }));
    }
}
