use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid {field} value '{value}'")]
    InvalidEnum { field: &'static str, value: String },
    #[error("invalid administrative code '{0}'")]
    InvalidCode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
