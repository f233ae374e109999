//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject rules that would build ambiguous or degenerate matchers
//! - Validate value ranges (weights > 0, range start < end)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the routing engine, so the
//!   per-call matching path never sees a malformed rule

use thiserror::Error;

use crate::config::schema::{
    HeaderMatchConfig, RouteActionConfig, RouteTableConfig, RouterConfig, StringMatchConfig,
};

/// A single semantic defect found in a router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route table {table}: interface name is empty")]
    EmptyInterface { table: usize },

    #[error("route table {table}, rule {rule}: action must name a cluster or a weighted cluster list")]
    EmptyAction { table: usize, rule: usize },

    #[error("route table {table}, rule {rule}: weighted cluster list is empty")]
    EmptyWeightedClusters { table: usize, rule: usize },

    #[error("route table {table}, rule {rule}: weighted cluster '{cluster}' has zero weight")]
    ZeroClusterWeight {
        table: usize,
        rule: usize,
        cluster: String,
    },

    #[error("route table {table}, rule {rule}: weighted cluster at position {position} has an empty name")]
    EmptyClusterName {
        table: usize,
        rule: usize,
        position: usize,
    },

    #[error("route table {table}, rule {rule}: method name pattern sets more than one of exact/prefix/suffix")]
    AmbiguousMethodPattern { table: usize, rule: usize },

    #[error("route table {table}, rule {rule}: parameter predicate at index {index} must set exactly one of exact/range")]
    InvalidParamPredicate { table: usize, rule: usize, index: u32 },

    #[error("route table {table}, rule {rule}: parameter range at index {index} is empty (start >= end)")]
    EmptyParamRange { table: usize, rule: usize, index: u32 },

    #[error("route table {table}, rule {rule}: header predicate '{name}' sets more than one of exact/prefix/suffix/present")]
    AmbiguousHeaderPredicate {
        table: usize,
        rule: usize,
        name: String,
    },

    #[error("route table {table}, rule {rule}: header predicate has an empty name")]
    EmptyHeaderName { table: usize, rule: usize },
}

/// Validate a router configuration, collecting every defect found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (t, table) in config.route_tables.iter().enumerate() {
        validate_table(t, table, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_table(t: usize, table: &RouteTableConfig, errors: &mut Vec<ValidationError>) {
    if table.interface.is_empty() {
        errors.push(ValidationError::EmptyInterface { table: t });
    }

    for (r, rule) in table.routes.iter().enumerate() {
        match &rule.action {
            RouteActionConfig::Cluster { cluster } => {
                if cluster.is_empty() {
                    errors.push(ValidationError::EmptyAction { table: t, rule: r });
                }
            }
            RouteActionConfig::WeightedClusters { weighted_clusters } => {
                if weighted_clusters.is_empty() {
                    errors.push(ValidationError::EmptyWeightedClusters { table: t, rule: r });
                }
                for (position, wc) in weighted_clusters.iter().enumerate() {
                    if wc.name.is_empty() {
                        errors.push(ValidationError::EmptyClusterName {
                            table: t,
                            rule: r,
                            position,
                        });
                    }
                    if wc.weight == 0 {
                        errors.push(ValidationError::ZeroClusterWeight {
                            table: t,
                            rule: r,
                            cluster: wc.name.clone(),
                        });
                    }
                }
            }
        }

        if count_set(&rule.predicate.method.name) > 1 {
            errors.push(ValidationError::AmbiguousMethodPattern { table: t, rule: r });
        }

        for param in &rule.predicate.method.params {
            match (param.exact.is_some(), param.range) {
                (true, None) => {}
                (false, Some(range)) => {
                    if range.start >= range.end {
                        errors.push(ValidationError::EmptyParamRange {
                            table: t,
                            rule: r,
                            index: param.index,
                        });
                    }
                }
                _ => errors.push(ValidationError::InvalidParamPredicate {
                    table: t,
                    rule: r,
                    index: param.index,
                }),
            }
        }

        for header in &rule.predicate.headers {
            if header.name.is_empty() {
                errors.push(ValidationError::EmptyHeaderName { table: t, rule: r });
            }
            if count_header_set(header) > 1 {
                errors.push(ValidationError::AmbiguousHeaderPredicate {
                    table: t,
                    rule: r,
                    name: header.name.clone(),
                });
            }
        }
    }
}

fn count_set(pattern: &StringMatchConfig) -> usize {
    [
        pattern.exact.is_some(),
        pattern.prefix.is_some(),
        pattern.suffix.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count()
}

fn count_header_set(header: &HeaderMatchConfig) -> usize {
    [
        header.exact.is_some(),
        header.prefix.is_some(),
        header.suffix.is_some(),
        header.present.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count()
}
