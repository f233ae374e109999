//! Route tables and the ordered table set.
//!
//! # Responsibilities
//! - Gate a table on interface identity (service name, group, version)
//! - Scan method routes in configured order, first match wins
//! - Compose independent tables with cross-table precedence by order
//!
//! # Design Decisions
//! - A failed identity gate skips the whole table; none of its routes
//!   are evaluated
//! - No reordering by specificity; precedence is configuration order
//! - Tables are immutable after construction and shareable without locks

use crate::config::schema::{RouteTableConfig, RouterConfig};
use crate::routing::metadata::RpcMetadata;
use crate::routing::route::MethodRoute;

/// Method-level routes scoped to one interface identity.
#[derive(Debug, Clone)]
pub struct RouteTable {
    interface: String,
    group: Option<String>,
    version: Option<String>,
    routes: Vec<MethodRoute>,
}

impl RouteTable {
    /// Build from a validated table config.
    pub fn new(config: &RouteTableConfig) -> Self {
        let routes = config.routes.iter().map(MethodRoute::new).collect::<Vec<_>>();
        tracing::debug!(
            interface = %config.interface,
            routes = routes.len(),
            "built route table"
        );
        Self {
            interface: config.interface.clone(),
            group: config.group.clone(),
            version: config.version.clone(),
            routes,
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Route one call; returns the selected cluster name, or `None` when
    /// the identity gate fails or no route entry matches.
    pub fn route(&self, metadata: &RpcMetadata, random_value: u64) -> Option<&str> {
        if !self.identity_matches(metadata) {
            tracing::debug!(
                interface = %self.interface,
                service = %metadata.service_name,
                "interface identity gate failed"
            );
            return None;
        }

        self.routes
            .iter()
            .find_map(|route| route.matches(metadata, random_value))
    }

    fn identity_matches(&self, metadata: &RpcMetadata) -> bool {
        if self.interface != metadata.service_name {
            return false;
        }
        if let Some(group) = &self.group {
            if metadata.group.as_ref() != Some(group) {
                return false;
            }
        }
        if let Some(version) = &self.version {
            if metadata.version.as_ref() != Some(version) {
                return false;
            }
        }
        true
    }
}

/// Ordered collection of route tables. The first table producing a
/// match wins, allowing independent route configurations to be composed
/// without cross-interference.
#[derive(Debug, Clone, Default)]
pub struct RouteTableSet {
    tables: Vec<RouteTable>,
}

impl RouteTableSet {
    /// Build every table of a validated router config, preserving order.
    pub fn new(config: &RouterConfig) -> Self {
        let tables = config.route_tables.iter().map(RouteTable::new).collect::<Vec<_>>();
        tracing::info!(tables = tables.len(), "built route table set");
        Self { tables }
    }

    pub fn tables(&self) -> &[RouteTable] {
        &self.tables
    }

    /// Route one call across all tables in configured order.
    pub fn route(&self, metadata: &RpcMetadata, random_value: u64) -> Option<&str> {
        self.tables
            .iter()
            .find_map(|table| table.route(metadata, random_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::*;

    fn rule_for_method(method: &str, cluster: &str) -> RouteRuleConfig {
        let mut rule = RouteRuleConfig {
            name: String::new(),
            predicate: RouteMatchConfig::default(),
            action: RouteActionConfig::Cluster {
                cluster: cluster.to_string(),
            },
        };
        if !method.is_empty() {
            rule.predicate.method.name.exact = Some(method.to_string());
        }
        rule
    }

    fn table_config(interface: &str, rules: Vec<RouteRuleConfig>) -> RouteTableConfig {
        RouteTableConfig {
            interface: interface.to_string(),
            group: None,
            version: None,
            routes: rules,
        }
    }

    #[test]
    fn test_interface_gate() {
        let table = RouteTable::new(&table_config(
            "org.foo.Greeter",
            vec![rule_for_method("", "cluster-a")],
        ));

        let right = RpcMetadata::new("org.foo.Greeter").with_method("hello");
        assert_eq!(table.route(&right, 0), Some("cluster-a"));

        // Catch-all route is never tried when the service differs.
        let wrong = RpcMetadata::new("org.bar.Other").with_method("hello");
        assert_eq!(table.route(&wrong, 0), None);
    }

    #[test]
    fn test_group_and_version_gate() {
        let mut config = table_config("org.foo.Greeter", vec![rule_for_method("", "cluster-a")]);
        config.group = Some("g1".to_string());
        config.version = Some("1.0.0".to_string());
        let table = RouteTable::new(&config);

        let full = RpcMetadata::new("org.foo.Greeter")
            .with_group("g1")
            .with_version("1.0.0")
            .with_method("hello");
        assert_eq!(table.route(&full, 0), Some("cluster-a"));

        let wrong_group = RpcMetadata::new("org.foo.Greeter")
            .with_group("g2")
            .with_version("1.0.0")
            .with_method("hello");
        assert_eq!(table.route(&wrong_group, 0), None);

        // Filter set but call carries no group at all: gate fails.
        let no_group = RpcMetadata::new("org.foo.Greeter")
            .with_version("1.0.0")
            .with_method("hello");
        assert_eq!(table.route(&no_group, 0), None);
    }

    #[test]
    fn test_first_rule_wins() {
        let table = RouteTable::new(&table_config(
            "svc",
            vec![
                rule_for_method("hello", "first"),
                rule_for_method("hello", "second"),
            ],
        ));
        let call = RpcMetadata::new("svc").with_method("hello");
        assert_eq!(table.route(&call, 0), Some("first"));
    }

    #[test]
    fn test_first_table_wins_across_set() {
        let mut first = table_config("svc", vec![rule_for_method("", "from-first")]);
        first.group = Some("g1".to_string());
        let second = table_config("svc", vec![rule_for_method("", "from-second")]);

        let set = RouteTableSet::new(&RouterConfig {
            route_tables: vec![first, second],
        });

        let g1_call = RpcMetadata::new("svc").with_group("g1").with_method("m");
        assert_eq!(set.route(&g1_call, 0), Some("from-first"));

        // Wrong group for table 1 falls through to the catch-all table.
        let g2_call = RpcMetadata::new("svc").with_group("g2").with_method("m");
        assert_eq!(set.route(&g2_call, 0), Some("from-second"));
    }

    #[test]
    fn test_no_match_across_all_tables() {
        let set = RouteTableSet::new(&RouterConfig {
            route_tables: vec![table_config("svc", vec![rule_for_method("hello", "a")])],
        });
        let call = RpcMetadata::new("svc").with_method("goodbye");
        assert_eq!(set.route(&call, 0), None);
    }
}
