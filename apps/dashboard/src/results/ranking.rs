use std::collections::HashMap;

use serde::Serialize;

use crate::models::results::{MatchResult, ProjectResult};

pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

pub fn score_tier(score: f64) -> ScoreTier {
    match score {
        s if s >= 80.0 => ScoreTier::High,
        s if s >= 60.0 => ScoreTier::Medium,
        _ => ScoreTier::Low,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub employee_id: String,
    pub employee_name: String,
    pub project_id: String,
    pub project_title: String,
    pub overall_score: f64,
    pub tier: ScoreTier,
    pub skill_match: f64,
    pub proficiency_match: f64,
    pub availability_match: f64,
    pub capacity_match: f64,
    pub role: String,
}

impl From<&MatchResult> for TableRow {
    fn from(m: &MatchResult) -> Self {
        TableRow {
            employee_id: m.employee_id.clone(),
            employee_name: m.employee_name.clone(),
            project_id: m.project_id.clone(),
            project_title: m.project_title.clone(),
            overall_score: m.overall_score,
            tier: score_tier(m.overall_score),
            skill_match: m.skill_match,
            proficiency_match: m.proficiency_match,
            availability_match: m.availability_match,
            capacity_match: m.capacity_match,
            role: m.role.to_string(),
        }
    }
}

/// One row per (project, match), projects then matches in their given order.
pub fn build_table(results: &[ProjectResult]) -> Vec<TableRow> {
    results
        .iter()
        .flat_map(|p| &p.matches)
        .map(TableRow::from)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based.
    pub position: usize,
    pub employee_id: String,
    pub employee_name: String,
    pub role: String,
    pub proficiency: String,
    pub overall_score: f64,
    /// Project where the best score was achieved.
    pub project_id: String,
}

/// Best match per employee, highest first, capped at `LEADERBOARD_SIZE`.
/// On equal scores the first-encountered match is kept and ordering is stable.
pub fn build_leaderboard(results: &[ProjectResult]) -> Vec<LeaderboardEntry> {
    let mut best: Vec<&MatchResult> = Vec::new();
    let mut index_by_employee: HashMap<&str, usize> = HashMap::new();

    for m in results.iter().flat_map(|p| &p.matches) {
        match index_by_employee.get(m.employee_id.as_str()) {
            Some(&i) => {
                if m.overall_score > best[i].overall_score {
                    best[i] = m;
                }
            }
            None => {
                index_by_employee.insert(m.employee_id.as_str(), best.len());
                best.push(m);
            }
        }
    }

    best.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

    best.into_iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, m)| LeaderboardEntry {
            position: i + 1,
            employee_id: m.employee_id.clone(),
            employee_name: m.employee_name.clone(),
            role: m.role.to_string(),
            proficiency: m.proficiency.to_string(),
            overall_score: m.overall_score,
            project_id: m.project_id.clone(),
        })
        .collect()
}
