//! Route entries: match predicates bound to a cluster action.
//!
//! # Responsibilities
//! - Hold the cluster action of one route rule (single or weighted)
//! - Select a cluster deterministically from a caller-supplied random value
//! - Evaluate method-level and parameter-level predicates
//!
//! # Design Decisions
//! - Weighted selection walks a cumulative-weight table precomputed at
//!   construction; `offset = random % total`, first cumulative > offset.
//!   Iterating random over 0..total hits each cluster exactly `weight` times
//! - A parameter sub-route never surfaces its own action; cluster selection
//!   always uses the owning method route's entry
//! - All state is immutable after construction; matching is lock-free

use std::collections::HashMap;

use crate::config::schema::{RouteActionConfig, RouteRuleConfig};
use crate::routing::headers::{match_headers, HeaderMatcher};
use crate::routing::matcher::{MethodNameMatcher, ParameterMatcher};
use crate::routing::metadata::RpcMetadata;

/// One target of a weighted split, with its precomputed cumulative weight.
#[derive(Debug, Clone)]
pub struct WeightedClusterEntry {
    cluster_name: String,
    weight: u64,
    cumulative_weight: u64,
}

impl WeightedClusterEntry {
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// Common route behavior: header predicates plus the cluster action.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    cluster_name: String,
    header_predicates: Vec<HeaderMatcher>,
    weighted_clusters: Vec<WeightedClusterEntry>,
    total_weight: u64,
}

impl RouteEntry {
    /// Build from a validated rule config.
    pub fn new(rule: &RouteRuleConfig) -> Self {
        let header_predicates = rule.predicate.headers.iter().map(HeaderMatcher::new).collect();

        match &rule.action {
            RouteActionConfig::Cluster { cluster } => Self {
                cluster_name: cluster.clone(),
                header_predicates,
                weighted_clusters: Vec::new(),
                total_weight: 0,
            },
            RouteActionConfig::WeightedClusters { weighted_clusters } => {
                let mut total_weight = 0u64;
                let entries = weighted_clusters
                    .iter()
                    .map(|wc| {
                        total_weight += u64::from(wc.weight);
                        WeightedClusterEntry {
                            cluster_name: wc.name.clone(),
                            weight: u64::from(wc.weight),
                            cumulative_weight: total_weight,
                        }
                    })
                    .collect::<Vec<_>>();
                tracing::debug!(clusters = entries.len(), total_weight, "built weighted cluster table");
                Self {
                    cluster_name: String::new(),
                    header_predicates,
                    weighted_clusters: entries,
                    total_weight,
                }
            }
        }
    }

    /// The single target cluster. Meaningless when weighted clusters are
    /// configured; routing decisions go through [`select_cluster`].
    ///
    /// [`select_cluster`]: RouteEntry::select_cluster
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn weighted_clusters(&self) -> &[WeightedClusterEntry] {
        &self.weighted_clusters
    }

    /// Returns true if the header map satisfies every configured
    /// predicate. Vacuously true when no predicates are configured.
    pub fn headers_match(&self, headers: &HashMap<String, String>) -> bool {
        match_headers(headers, &self.header_predicates)
    }

    /// Select the target cluster for this route.
    ///
    /// Single-cluster routes ignore `random_value`. Weighted routes pick
    /// the first entry whose cumulative weight exceeds
    /// `random_value % total_weight`, reproducing configured split
    /// ratios exactly over a uniform random input. Deterministic for a
    /// fixed input.
    pub fn select_cluster(&self, random_value: u64) -> &str {
        if self.weighted_clusters.is_empty() {
            return &self.cluster_name;
        }

        let offset = random_value % self.total_weight;
        for entry in &self.weighted_clusters {
            if entry.cumulative_weight > offset {
                return &entry.cluster_name;
            }
        }
        // Unreachable: the last cumulative weight equals total_weight,
        // which is strictly greater than any offset.
        &self.weighted_clusters[self.weighted_clusters.len() - 1].cluster_name
    }
}

/// Positional-parameter predicates of a route rule. Owned by a
/// [`MethodRoute`], never a top-level route on its own.
#[derive(Debug, Clone)]
pub struct ParameterRoute {
    matchers: Vec<ParameterMatcher>,
}

impl ParameterRoute {
    pub fn new(matchers: Vec<ParameterMatcher>) -> Self {
        Self { matchers }
    }

    /// Returns true if the call satisfies every parameter predicate.
    ///
    /// A call with no parameter section at all never matches, even with
    /// an empty matcher list untried. An empty matcher list against a
    /// call that does carry parameters is vacuously true.
    pub fn matches(&self, metadata: &RpcMetadata) -> bool {
        if !metadata.has_parameters() {
            return false;
        }

        for matcher in &self.matchers {
            let value = metadata.parameter_value(matcher.index);
            if value.is_empty() {
                tracing::debug!(index = matcher.index, "parameter missing from request");
                return false;
            }
            if !matcher.matches(value) {
                tracing::debug!(index = matcher.index, value, "parameter predicate failed");
                return false;
            }
        }

        true
    }
}

/// Top-level route rule: method name pattern, header predicates,
/// optional parameter predicates, and the cluster action.
#[derive(Debug, Clone)]
pub struct MethodRoute {
    /// Rule identifier for logging; may be empty.
    name: String,
    entry: RouteEntry,
    method_name: MethodNameMatcher,
    parameter_route: Option<ParameterRoute>,
}

impl MethodRoute {
    /// Build from a validated rule config.
    pub fn new(rule: &RouteRuleConfig) -> Self {
        let params = &rule.predicate.method.params;
        let parameter_route = if params.is_empty() {
            None
        } else {
            Some(ParameterRoute::new(
                params.iter().map(ParameterMatcher::new).collect(),
            ))
        };

        Self {
            name: rule.name.clone(),
            entry: RouteEntry::new(rule),
            method_name: MethodNameMatcher::new(&rule.predicate.method.name),
            parameter_route,
        }
    }

    pub fn entry(&self) -> &RouteEntry {
        &self.entry
    }

    /// Evaluate this route against a call; on match, return the selected
    /// cluster name.
    ///
    /// Header predicates are only evaluated when the call carries a
    /// header section; a call without one skips the check entirely and
    /// can match a header-predicated route. Predicate failures
    /// short-circuit with no side effects.
    pub fn matches(&self, metadata: &RpcMetadata, random_value: u64) -> Option<&str> {
        if let Some(headers) = &metadata.headers {
            if !self.entry.headers_match(headers) {
                tracing::debug!("header predicates failed");
                return None;
            }
        }

        let method_name = metadata.method_name.as_deref()?;

        if !self.method_name.matches(method_name) {
            tracing::debug!(method = method_name, "method name pattern failed");
            return None;
        }

        if let Some(parameter_route) = &self.parameter_route {
            if !parameter_route.matches(metadata) {
                return None;
            }
        }

        let cluster = self.entry.select_cluster(random_value);
        tracing::debug!(rule = %self.name, cluster, "route matched");
        Some(cluster)
    }
}
