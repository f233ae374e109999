//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → routing::engine builds matching tables from it
//!
//! On reload:
//!     new RouterConfig loaded & validated
//!     → new RouteTableSet built
//!     → atomic swap of the active snapshot
//!     → in-flight lookups keep their generation
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - Validation separates syntactic (serde) from semantic checks
//! - A config that fails validation never reaches the matching path

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::RouterConfig;
pub use schema::{RouteActionConfig, RouteRuleConfig, RouteTableConfig};
pub use validation::{validate_config, ValidationError};
