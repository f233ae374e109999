//! Swappable routing snapshot.
//!
//! # Responsibilities
//! - Hold the active RouteTableSet for concurrent readers
//! - Rebuild and atomically swap the snapshot on config reload
//!
//! # Design Decisions
//! - arc-swap, not a lock: lookups never block and never observe a
//!   partially built table set
//! - A reload that fails validation leaves the previous snapshot active
//! - Callers that need a stable view across several lookups pin a
//!   snapshot with `snapshot()`

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader::ConfigError;
use crate::config::schema::RouterConfig;
use crate::config::validation::validate_config;
use crate::routing::metadata::RpcMetadata;
use crate::routing::table::RouteTableSet;

/// The active routing tables, shared read-only across request handlers.
#[derive(Debug)]
pub struct RouterEngine {
    active: ArcSwap<RouteTableSet>,
}

impl RouterEngine {
    /// Validate a config and build the initial table set.
    pub fn new(config: &RouterConfig) -> Result<Self, ConfigError> {
        let tables = build(config)?;
        Ok(Self {
            active: ArcSwap::from_pointee(tables),
        })
    }

    /// Route one call against the current snapshot.
    ///
    /// `random_value` drives weighted cluster selection and is supplied
    /// by the caller; the engine generates no randomness itself.
    pub fn route(&self, metadata: &RpcMetadata, random_value: u64) -> Option<String> {
        self.active
            .load()
            .route(metadata, random_value)
            .map(str::to_string)
    }

    /// Pin the current table-set generation.
    pub fn snapshot(&self) -> Arc<RouteTableSet> {
        self.active.load_full()
    }

    /// Validate a new config, build a complete table set, and swap it in.
    /// On error the previous snapshot stays active.
    pub fn reload(&self, config: &RouterConfig) -> Result<(), ConfigError> {
        let tables = build(config)?;
        self.active.store(Arc::new(tables));
        tracing::info!("route tables reloaded");
        Ok(())
    }
}

fn build(config: &RouterConfig) -> Result<RouteTableSet, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)?;
    Ok(RouteTableSet::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::*;

    fn config_for(interface: &str, cluster: &str) -> RouterConfig {
        RouterConfig {
            route_tables: vec![RouteTableConfig {
                interface: interface.to_string(),
                group: None,
                version: None,
                routes: vec![RouteRuleConfig {
                    name: String::new(),
                    predicate: RouteMatchConfig::default(),
                    action: RouteActionConfig::Cluster {
                        cluster: cluster.to_string(),
                    },
                }],
            }],
        }
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let engine = RouterEngine::new(&config_for("svc", "old")).unwrap();
        let call = RpcMetadata::new("svc").with_method("m");
        assert_eq!(engine.route(&call, 0), Some("old".to_string()));

        engine.reload(&config_for("svc", "new")).unwrap();
        assert_eq!(engine.route(&call, 0), Some("new".to_string()));
    }

    #[test]
    fn test_failed_reload_keeps_previous_snapshot() {
        let engine = RouterEngine::new(&config_for("svc", "old")).unwrap();

        let mut bad = config_for("svc", "new");
        bad.route_tables[0].interface.clear();
        assert!(engine.reload(&bad).is_err());

        let call = RpcMetadata::new("svc").with_method("m");
        assert_eq!(engine.route(&call, 0), Some("old".to_string()));
    }

    #[test]
    fn test_pinned_snapshot_survives_reload() {
        let engine = RouterEngine::new(&config_for("svc", "old")).unwrap();
        let pinned = engine.snapshot();

        engine.reload(&config_for("svc", "new")).unwrap();

        let call = RpcMetadata::new("svc").with_method("m");
        assert_eq!(pinned.route(&call, 0), Some("old"));
        assert_eq!(engine.route(&call, 0), Some("new".to_string()));
    }

    #[test]
    fn test_rejects_invalid_initial_config() {
        let mut bad = config_for("svc", "c");
        bad.route_tables[0].interface.clear();
        assert!(RouterEngine::new(&bad).is_err());
    }
}
