//! Configuration schema definitions.
//!
//! This module defines the route configuration consumed by the routing
//! engine. All types derive Serde traits for deserialization from config
//! files; they are plain data and carry no matching logic themselves.

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route tables, one per interface identity. Order determines
    /// precedence when several tables could match the same call.
    pub route_tables: Vec<RouteTableConfig>,
}

/// One route table, scoped to a single interface identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteTableConfig {
    /// Fully qualified service interface name (e.g. "org.foo.Greeter").
    pub interface: String,

    /// Optional service group filter. Absent = any group.
    pub group: Option<String>,

    /// Optional service version filter. Absent = any version.
    pub version: Option<String>,

    /// Ordered route rules. First match wins.
    #[serde(default)]
    pub routes: Vec<RouteRuleConfig>,
}

/// One route rule: a match predicate plus the action taken on match.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRuleConfig {
    /// Rule identifier for logging. Optional.
    #[serde(default)]
    pub name: String,

    /// What the call must look like for this rule to apply.
    #[serde(default)]
    pub predicate: RouteMatchConfig,

    /// Where a matching call is sent.
    pub action: RouteActionConfig,
}

/// Match predicate of a route rule.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteMatchConfig {
    /// Method-level predicate (name pattern, positional parameters).
    pub method: MethodMatchConfig,

    /// Header predicates, combined with AND semantics.
    /// Empty list matches any call.
    pub headers: Vec<HeaderMatchConfig>,
}

/// Method-level predicate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MethodMatchConfig {
    /// Method name pattern. Empty matcher = any method name.
    pub name: StringMatchConfig,

    /// Positional parameter predicates, combined with AND semantics.
    pub params: Vec<ParamMatchConfig>,
}

/// String pattern: at most one of `exact`, `prefix`, `suffix`.
/// All absent = wildcard (matches any string).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StringMatchConfig {
    pub exact: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Predicate over one positional parameter of the call.
/// Exactly one of `exact` / `range` must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParamMatchConfig {
    /// 0-based index into the call's ordered parameter list.
    pub index: u32,

    /// Exact string value. Empty string matches any present value.
    pub exact: Option<String>,

    /// Numeric half-open range [start, end) over a base-10 integer value.
    pub range: Option<RangeMatchConfig>,
}

/// Half-open integer range [start, end).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RangeMatchConfig {
    pub start: i64,
    pub end: i64,
}

/// Predicate over one header-like attribute of the call.
/// At most one of `exact` / `prefix` / `suffix` / `present` may be set;
/// all absent means "header must be present".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderMatchConfig {
    /// Attribute key.
    pub name: String,

    pub exact: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub present: Option<bool>,

    /// Invert the predicate result.
    #[serde(default)]
    pub invert: bool,
}

/// Route action: a single target cluster or a weighted split.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RouteActionConfig {
    /// All matching traffic goes to one cluster.
    Cluster { cluster: String },

    /// Matching traffic is split across clusters by weight.
    WeightedClusters {
        weighted_clusters: Vec<WeightedClusterConfig>,
    },
}

/// One target of a weighted split.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeightedClusterConfig {
    /// Cluster name resolved by the load balancer.
    pub name: String,

    /// Relative traffic share. Must be positive.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}
