use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// A project template as listed by the backend (without its template data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    pub object_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "HIPAA", "SOX", "PCI-DSS", "General"
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

/// The template list returned by the backend's template listing action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    pub templates: Vec<ProjectTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<ProjectTemplate>) -> Self {
        Self { templates }
    }

    /// Parses the JSON array the backend returns. `null` is read as an empty list.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let templates: Option<Vec<ProjectTemplate>> = serde_json::from_str(json)?;
        Ok(Self::new(templates.unwrap_or_default()))
    }

    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
