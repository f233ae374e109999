//! Header predicate evaluation.
//!
//! # Responsibilities
//! - Match one header-like attachment against a configured predicate
//! - Combine a predicate list with AND semantics
//!
//! # Design Decisions
//! - Empty predicate list = always matches (wildcard)
//! - An absent header fails any predicate; `invert` flips the result,
//!   so `present = true, invert = true` expresses "must be absent"
//! - Keys are matched case-sensitively; RPC attachments are not HTTP
//!   headers and carry no case-folding convention

use std::collections::HashMap;

use crate::config::schema::HeaderMatchConfig;

/// Compiled predicate over one header-like attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatcher {
    name: String,
    kind: HeaderMatchKind,
    invert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HeaderMatchKind {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Present,
}

impl HeaderMatcher {
    /// Build from a validated predicate config (at most one kind set;
    /// all absent means presence check).
    pub fn new(config: &HeaderMatchConfig) -> Self {
        let kind = if let Some(exact) = &config.exact {
            HeaderMatchKind::Exact(exact.clone())
        } else if let Some(prefix) = &config.prefix {
            HeaderMatchKind::Prefix(prefix.clone())
        } else if let Some(suffix) = &config.suffix {
            HeaderMatchKind::Suffix(suffix.clone())
        } else {
            HeaderMatchKind::Present
        };
        Self {
            name: config.name.clone(),
            kind,
            invert: config.invert,
        }
    }

    /// Returns true if the header map satisfies this predicate.
    pub fn matches(&self, headers: &HashMap<String, String>) -> bool {
        let result = match headers.get(&self.name) {
            None => false,
            Some(value) => match &self.kind {
                HeaderMatchKind::Exact(expected) => value == expected,
                HeaderMatchKind::Prefix(prefix) => value.starts_with(prefix),
                HeaderMatchKind::Suffix(suffix) => value.ends_with(suffix),
                HeaderMatchKind::Present => true,
            },
        };
        result != self.invert
    }
}

/// Returns true if every predicate matches (AND semantics).
/// Vacuously true for an empty predicate list.
pub fn match_headers(headers: &HashMap<String, String>, predicates: &[HeaderMatcher]) -> bool {
    predicates.iter().all(|p| p.matches(headers))
}
