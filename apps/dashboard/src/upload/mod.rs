// CSV upload: validation, five-row preview, forwarding to the matching service.

pub mod csv_preview;
pub mod handlers;

use bytes::Bytes;
use serde::Serialize;

/// Which dataset a multipart field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Employees,
    Projects,
}

impl DatasetKind {
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "employees" => Some(DatasetKind::Employees),
            "projects" => Some(DatasetKind::Projects),
            _ => None,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            DatasetKind::Employees => "employees",
            DatasetKind::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub kind: DatasetKind,
    pub file_name: String,
    pub content: Bytes,
}
