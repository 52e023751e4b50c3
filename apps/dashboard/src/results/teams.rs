//! Team composition: splits each curated team into domain experts and
//! complementary members based on the matching service's selection reason.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::results::{MatchResult, ProjectResult};

/// A selection reason mentioning any of these marks a domain expert.
const EXPERT_MARKERS: &[&str] = &["expert", "specialist", "developer"];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamCategory {
    DomainExpert,
    Complementary,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    /// 1-based position in the curated team.
    pub rank: usize,
    pub category: TeamCategory,
    /// The service's reason, or one synthesized from the member's top skills.
    pub selection_reason: String,
    pub member: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamComposition {
    pub project_id: String,
    pub project_title: String,
    pub project_domain: String,
    pub project_duration: f64,
    pub project_deadline: String,
    pub deadline_date: Option<NaiveDate>,
    pub domain_experts: Vec<TeamMember>,
    pub complementary_members: Vec<TeamMember>,
}

pub fn classify_member(member: &MatchResult) -> TeamCategory {
    let is_expert = member.selection_reason.as_deref().is_some_and(|reason| {
        let reason = reason.to_lowercase();
        EXPERT_MARKERS.iter().any(|marker| reason.contains(marker))
    });

    if is_expert {
        TeamCategory::DomainExpert
    } else {
        TeamCategory::Complementary
    }
}

fn fallback_reason(member: &MatchResult) -> String {
    let top_skills: Vec<&str> = member.skills.iter().take(2).map(String::as_str).collect();
    format!(
        "High-performing team member with {} skills",
        top_skills.join(", ")
    )
}

pub fn compose_team(project: &ProjectResult) -> TeamComposition {
    let mut domain_experts = Vec::new();
    let mut complementary_members = Vec::new();

    for (index, member) in project.curated_team.iter().enumerate() {
        let category = classify_member(member);
        let selection_reason = member
            .selection_reason
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback_reason(member));

        let entry = TeamMember {
            rank: index + 1,
            category,
            selection_reason,
            member: member.clone(),
        };

        match category {
            TeamCategory::DomainExpert => domain_experts.push(entry),
            TeamCategory::Complementary => complementary_members.push(entry),
        }
    }

    TeamComposition {
        project_id: project.project_id.clone(),
        project_title: project.project_title.clone(),
        project_domain: project.project_domain.clone(),
        project_duration: project.project_duration,
        project_deadline: project.project_deadline.clone(),
        deadline_date: project.deadline_date(),
        domain_experts,
        complementary_members,
    }
}

pub fn compose_teams(results: &[ProjectResult]) -> Vec<TeamComposition> {
    results.iter().map(compose_team).collect()
}
