use serde::Serialize;
use thiserror::Error;

use crate::model::domain::{Domain, domain_order};
use crate::pipeline::RawPools;

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("{domain}: at least two scores are required, found {present}")]
    TooFewValues { domain: Domain, present: usize },
    #[error("{domain} slot {}: not a number", .slot + 1)]
    NonNumeric { domain: Domain, slot: usize },
    #[error("{domain} slot {}: {value} is negative", .slot + 1)]
    Negative {
        domain: Domain,
        slot: usize,
        value: f64,
    },
    #[error("{domain} slot {}: {value} exceeds the maximum of {max}", .slot + 1)]
    AboveMax {
        domain: Domain,
        slot: usize,
        value: f64,
        max: f64,
    },
}

impl ValidationIssue {
    pub fn domain(&self) -> Domain {
        match self {
            ValidationIssue::TooFewValues { domain, .. }
            | ValidationIssue::NonNumeric { domain, .. }
            | ValidationIssue::Negative { domain, .. }
            | ValidationIssue::AboveMax { domain, .. } => *domain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{} invalid raw score input(s) in {}", .issues.len(), domain_list(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Domains with at least one issue, in reporting order.
    pub fn domains(&self) -> Vec<Domain> {
        domains_of(&self.issues)
    }
}

fn domains_of(issues: &[ValidationIssue]) -> Vec<Domain> {
    let mut out = Vec::new();
    for issue in issues {
        if !out.contains(&issue.domain()) {
            out.push(issue.domain());
        }
    }
    out
}

fn domain_list(issues: &[ValidationIssue]) -> String {
    domains_of(issues)
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every domain and every slot; issues from all domains are reported together.
pub fn run_stage1(pools: &RawPools) -> Result<(), ValidationError> {
    let mut issues = Vec::new();
    for &domain in domain_order() {
        validate_pool(domain, pools.pool(domain), &mut issues);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

fn validate_pool(domain: Domain, pool: &[Option<f64>], issues: &mut Vec<ValidationIssue>) {
    let present = pool.iter().filter(|v| v.is_some()).count();
    if present < 2 {
        issues.push(ValidationIssue::TooFewValues { domain, present });
    }

    let max = domain.max_raw();
    for (slot, value) in pool.iter().enumerate() {
        let Some(value) = *value else {
            continue;
        };
        if !value.is_finite() {
            issues.push(ValidationIssue::NonNumeric { domain, slot });
        } else if value < 0.0 {
            issues.push(ValidationIssue::Negative {
                domain,
                slot,
                value,
            });
        } else if value > max {
            issues.push(ValidationIssue::AboveMax {
                domain,
                slot,
                value,
                max,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
