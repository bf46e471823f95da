use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::DiseaseId;

/// A notifiable zoonotic disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseType {
    pub id: DiseaseId,
    pub name: String,
    /// ICD-10 code reported with the first notification of this disease.
    pub diagnostic_code: Option<String>,
    pub description: Option<String>,
    pub causative_agent: Option<String>,
    pub vector: Option<String>,
    pub incubation_period: Option<String>,
}

impl fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
