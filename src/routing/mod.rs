//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Decoded call (service, group, version, method, headers, params)
//!     → engine.rs (active snapshot)
//!     → table.rs (interface identity gate, ordered table scan)
//!     → route.rs (method route: headers → method name → params)
//!     → matcher.rs / headers.rs (leaf predicates)
//!     → route.rs (weighted cluster selection)
//!     → Return: cluster name or NoMatch
//!
//! Table Compilation (at config load):
//!     RouterConfig
//!     → validate (config::validation)
//!     → compile matchers and cumulative weight tables
//!     → Freeze as immutable RouteTableSet
//! ```
//!
//! # Design Decisions
//! - Tables compiled at config load, immutable at runtime
//! - Deterministic: same metadata and random value always yield the
//!   same cluster
//! - First match wins, ordered by configuration, across rules and tables
//! - No-match is an expected outcome, returned as None, never an error

pub mod engine;
pub mod headers;
pub mod matcher;
pub mod metadata;
pub mod route;
pub mod table;

pub use engine::RouterEngine;
pub use metadata::RpcMetadata;
pub use route::{MethodRoute, ParameterRoute, RouteEntry, WeightedClusterEntry};
pub use table::{RouteTable, RouteTableSet};
