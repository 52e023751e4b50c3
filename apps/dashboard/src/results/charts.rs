//! Chart aggregations over the full result set. Each function returns
//! ordered `(label, count)` pairs; drawing them is the front-end's job.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::results::{MatchResult, ProjectResult};

pub const TOP_SKILLS: usize = 8;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub roles: Vec<ChartPoint>,
    pub domains: Vec<ChartPoint>,
    pub scores: Vec<ChartPoint>,
    pub skills: Vec<ChartPoint>,
    pub proficiency: Vec<ChartPoint>,
    pub capacity: Vec<ChartPoint>,
}

const SCORE_BUCKETS: [&str; 5] = ["90-100%", "80-89%", "70-79%", "60-69%", "Below 60%"];
const CAPACITY_BUCKETS: [&str; 4] = ["0-20 hrs", "21-30 hrs", "31-40 hrs", "40+ hrs"];

/// Counts labels, listing them in first-encountered order.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => points[i].count += 1,
            None => {
                index.insert(label, points.len());
                points.push(ChartPoint {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    points
}

fn bucketed(labels: &[&str], counts: &[usize]) -> Vec<ChartPoint> {
    labels
        .iter()
        .zip(counts)
        .map(|(label, &count)| ChartPoint {
            label: label.to_string(),
            count,
        })
        .collect()
}

fn all_matches(results: &[ProjectResult]) -> impl Iterator<Item = &MatchResult> {
    results.iter().flat_map(|p| &p.matches)
}

pub fn role_distribution(results: &[ProjectResult]) -> Vec<ChartPoint> {
    tally(all_matches(results).map(|m| m.role.as_str()))
}

/// Projects per domain.
pub fn domain_distribution(results: &[ProjectResult]) -> Vec<ChartPoint> {
    tally(results.iter().map(|p| p.project_domain.as_str()))
}

pub fn score_distribution(results: &[ProjectResult]) -> Vec<ChartPoint> {
    let mut counts = [0usize; 5];
    for m in all_matches(results) {
        let bucket = match m.overall_score {
            s if s >= 90.0 => 0,
            s if s >= 80.0 => 1,
            s if s >= 70.0 => 2,
            s if s >= 60.0 => 3,
            _ => 4,
        };
        counts[bucket] += 1;
    }
    bucketed(&SCORE_BUCKETS, &counts)
}

/// Most frequent skills, highest count first; equal counts keep
/// first-encountered order.
pub fn skill_frequency(results: &[ProjectResult]) -> Vec<ChartPoint> {
    let mut points = tally(all_matches(results).flat_map(|m| m.skills.iter().map(String::as_str)));
    // sort_by is stable
    points.sort_by(|a, b| b.count.cmp(&a.count));
    points.truncate(TOP_SKILLS);
    points
}

pub fn proficiency_distribution(results: &[ProjectResult]) -> Vec<ChartPoint> {
    tally(all_matches(results).map(|m| m.proficiency.as_str()))
}

pub fn capacity_distribution(results: &[ProjectResult]) -> Vec<ChartPoint> {
    let mut counts = [0usize; 4];
    for m in all_matches(results) {
        let bucket = match m.capacity {
            c if c <= 20.0 => 0,
            c if c <= 30.0 => 1,
            c if c <= 40.0 => 2,
            _ => 3,
        };
        counts[bucket] += 1;
    }
    bucketed(&CAPACITY_BUCKETS, &counts)
}

pub fn build_charts(results: &[ProjectResult]) -> ChartData {
    ChartData {
        roles: role_distribution(results),
        domains: domain_distribution(results),
        scores: score_distribution(results),
        skills: skill_frequency(results),
        proficiency: proficiency_distribution(results),
        capacity: capacity_distribution(results),
    }
}
