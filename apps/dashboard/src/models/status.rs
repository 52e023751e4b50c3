use serde::{Deserialize, Serialize};

/// Payload of the matching service's `GET /api/data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataStatus {
    #[serde(default)]
    pub employees_count: u64,
    #[serde(default)]
    pub projects_count: u64,
    #[serde(default)]
    pub employees_loaded: bool,
    #[serde(default)]
    pub projects_loaded: bool,
}

impl DataStatus {
    /// Matching needs both datasets.
    pub fn ready_for_matching(&self) -> bool {
        self.employees_loaded && self.projects_loaded
    }
}

/// The `{status, message?, data?}` envelope every JSON endpoint of the
/// matching service answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ServiceEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
