use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::results::{MatchResult, ProjectResult, ResultSet};

const NO_DATA_MESSAGE: &str = "No matching results available. Please perform matching first.";

/// The three filter inputs of the results page. Empty means "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub role: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.project_id.is_empty() && self.role.is_empty()
    }

    fn keeps(&self, project: &ProjectResult, m: &MatchResult, needle: &str) -> bool {
        let matches_text = needle.is_empty()
            || m.employee_name.to_lowercase().contains(needle)
            || m.project_title.to_lowercase().contains(needle);
        let matches_project = self.project_id.is_empty() || project.project_id == self.project_id;
        let matches_role = self.role.is_empty() || m.role.as_str() == self.role;

        matches_text && matches_project && matches_role
    }
}

/// Prunes each project's matches to those passing every filter.
/// Projects are kept even when all of their matches are filtered out.
pub fn filter_results(results: &[ProjectResult], criteria: &FilterCriteria) -> ResultSet {
    let needle = criteria.text.trim().to_lowercase();
    results
        .iter()
        .map(|project| ProjectResult {
            project_id: project.project_id.clone(),
            project_title: project.project_title.clone(),
            project_domain: project.project_domain.clone(),
            project_duration: project.project_duration,
            project_deadline: project.project_deadline.clone(),
            matches: project
                .matches
                .iter()
                .filter(|m| criteria.keeps(project, m, &needle))
                .cloned()
                .collect(),
            curated_team: project.curated_team.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectOption {
    pub project_id: String,
    pub project_title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub projects: Vec<ProjectOption>,
    /// Distinct roles in first-seen order.
    pub roles: Vec<String>,
}

/// Holds the loaded result set and the filtered view derived from it.
/// The loaded set is never mutated; only replaced wholesale on reload.
#[derive(Debug, Default)]
pub struct ResultsStore {
    loaded: Option<Loaded>,
    criteria: FilterCriteria,
}

#[derive(Debug)]
struct Loaded {
    results: ResultSet,
    filtered: ResultSet,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the result set and re-applies the current filters to it.
    pub fn load(&mut self, results: ResultSet) {
        let filtered = filter_results(&results, &self.criteria);
        self.loaded = Some(Loaded { results, filtered });
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full, unfiltered result set.
    pub fn results(&self) -> Result<&ResultSet, AppError> {
        self.loaded
            .as_ref()
            .map(|l| &l.results)
            .ok_or_else(no_data)
    }

    /// The view after the current filters.
    pub fn filtered(&self) -> Result<&ResultSet, AppError> {
        self.loaded
            .as_ref()
            .map(|l| &l.filtered)
            .ok_or_else(no_data)
    }

    /// Recomputes the filtered view. Criteria are remembered even before a
    /// load so they apply to the first result set that arrives.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> Result<&ResultSet, AppError> {
        self.criteria = criteria;
        let loaded = self.loaded.as_mut().ok_or_else(no_data)?;
        loaded.filtered = filter_results(&loaded.results, &self.criteria);
        Ok(&loaded.filtered)
    }

    pub fn filter_options(&self) -> Result<FilterOptions, AppError> {
        let results = self.results()?;

        let projects = results
            .iter()
            .map(|p| ProjectOption {
                project_id: p.project_id.clone(),
                project_title: p.project_title.clone(),
            })
            .collect();

        let mut roles: Vec<String> = Vec::new();
        for m in results.iter().flat_map(|p| &p.matches) {
            if !roles.iter().any(|r| r == m.role.as_str()) {
                roles.push(m.role.to_string());
            }
        }

        Ok(FilterOptions { projects, roles })
    }

    /// Looks up one pairing in the full result set.
    pub fn find_match(&self, project_id: &str, employee_id: &str) -> Result<&MatchResult, AppError> {
        self.results()?
            .iter()
            .find(|p| p.project_id == project_id)
            .and_then(|p| p.matches.iter().find(|m| m.employee_id == employee_id))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No match for employee {employee_id} on project {project_id}"
                ))
            })
    }
}

fn no_data() -> AppError {
    AppError::NoData(NO_DATA_MESSAGE.to_string())
}
