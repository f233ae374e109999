//! Route matching and backend cluster selection for an RPC reverse proxy.
//!
//! Sits between protocol decoding and load-balancer cluster selection:
//! given decoded call metadata and a caller-supplied random value, pick
//! the matching route and — when the route splits traffic across
//! weighted clusters — pick one cluster deterministically.
//!
//! # Architecture Overview
//!
//! ```text
//!   Decoded call metadata          ┌───────────────────────────────┐
//!   (service, group, version,  ───▶│        RouterEngine           │
//!    method, headers, params)      │   (arc-swap'd snapshot)       │
//!                                  └──────────────┬────────────────┘
//!                                                 │
//!                                                 ▼
//!                                  ┌───────────────────────────────┐
//!                                  │  RouteTableSet (ordered)      │
//!                                  │   └─ RouteTable: identity gate│
//!                                  │       └─ MethodRoute (ordered)│
//!                                  │           headers → method →  │
//!                                  │           params → weighted   │
//!                                  │           cluster selection   │
//!                                  └──────────────┬────────────────┘
//!                                                 │
//!                         cluster name (or no match) ▼  → load balancer
//! ```
//!
//! The engine performs no I/O, holds no locks on the lookup path, and
//! generates no randomness; the output is a cluster *name*, never an
//! endpoint.

pub mod config;
pub mod routing;

pub use config::{load_config, parse_config, ConfigError, RouterConfig};
pub use routing::{RouterEngine, RpcMetadata, RouteTableSet};
