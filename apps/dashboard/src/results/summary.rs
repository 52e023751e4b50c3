use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::results::ProjectResult;

/// Matches at or above this overall score count as high quality.
pub const HIGH_QUALITY_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultsSummary {
    pub total_projects: usize,
    /// Distinct employees across curated teams (assigned headcount),
    /// limited to members still present among the project's matches.
    pub total_employees: usize,
    pub total_matches: usize,
    /// Mean overall score, rounded to the nearest integer; 0 with no matches.
    pub average_score: i64,
    pub high_quality_matches: usize,
    /// Employees placed on more than one curated team, in first-seen order.
    /// Informational only.
    pub duplicate_assignments: Vec<String>,
}

pub fn compute_summary(results: &[ProjectResult]) -> ResultsSummary {
    let all_matches: Vec<_> = results.iter().flat_map(|p| &p.matches).collect();

    let total_matches = all_matches.len();
    let total_score: f64 = all_matches.iter().map(|m| m.overall_score).sum();
    let average_score = if total_matches > 0 {
        (total_score / total_matches as f64).round() as i64
    } else {
        0
    };
    let high_quality_matches = all_matches
        .iter()
        .filter(|m| m.overall_score >= HIGH_QUALITY_THRESHOLD)
        .count();

    let mut team_counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for project in results {
        // Curated members whose match was filtered out are not counted.
        let visible: HashSet<&str> = project
            .matches
            .iter()
            .map(|m| m.employee_id.as_str())
            .collect();
        // An employee listed twice in one team is still one assignment.
        let mut in_team: HashSet<&str> = HashSet::new();
        for m in &project.curated_team {
            let id = m.employee_id.as_str();
            if !visible.contains(id) || !in_team.insert(id) {
                continue;
            }
            let count = team_counts.entry(id).or_insert(0);
            if *count == 0 {
                first_seen.push(id);
            }
            *count += 1;
        }
    }

    let duplicate_assignments = first_seen
        .iter()
        .filter(|id| team_counts.get(*id).copied().unwrap_or(0) > 1)
        .map(|id| id.to_string())
        .collect();

    ResultsSummary {
        total_projects: results.len(),
        total_employees: team_counts.len(),
        total_matches,
        average_score,
        high_quality_matches,
        duplicate_assignments,
    }
}
